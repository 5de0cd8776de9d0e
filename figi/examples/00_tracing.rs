mod common;
use common::get_client;
use figi::{IdType, MappingJob};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,figi=trace,figi_core=debug,figi_http=debug
    // and build with `--features tracing`.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let client = get_client()?;

    let jobs = [
        MappingJob::new(IdType::IdWertpapier, "851399").with_exch_code("US"),
        MappingJob::new(IdType::Ticker, "MSFT"),
    ];
    let _ = client.map(&jobs).await?;

    // An error reply is logged too.
    let _ = client.map(&[MappingJob::isin("RATE_LIMIT")]).await;

    Ok(())
}
