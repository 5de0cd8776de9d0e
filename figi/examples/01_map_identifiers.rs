mod common;
use common::get_client;
use figi::{IdType, MappingJob};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the client (mock when FIGI_EXAMPLES_USE_MOCK is set; the key
    //    comes from OPENFIGI_API_KEY when present).
    let client = get_client()?;

    // 2. Describe the lookups.
    let jobs = [
        MappingJob::new(IdType::IdWertpapier, "851399").with_exch_code("US"),
        MappingJob::isin("US0378331005"),
        MappingJob::new(IdType::IdSedol, "0000000"),
    ];

    // 3. One request, one job result per job.
    let resp = client.map(&jobs).await?;

    // 4. Print them side by side.
    for (job, result) in jobs.iter().zip(resp.iter()) {
        println!("{job}");
        if let Some(warning) = &result.warning {
            println!("  (no match: {warning})");
        }
        for r in &result.results {
            println!("{r}");
        }
    }

    resp.release();
    Ok(())
}
