use figi_core::{FigiResult, IdType, MappingJob};

pub fn by_job(job: &MappingJob) -> Option<Vec<FigiResult>> {
    let all = match (job.id_type, job.id_value.as_str()) {
        (IdType::IdWertpapier, "851399")
        | (IdType::IdIsin, "US4592001014")
        | (IdType::IdBbGlobal, "BBG000BLNNH6")
        | (IdType::Ticker, "IBM") => vec![ibm()],
        (IdType::IdIsin, "US0378331005") | (IdType::IdCusip, "037833100") => {
            vec![apple("BBG000B9XRY4", "US"), apple("BBG000B9Y5X2", "UW")]
        }
        (IdType::Ticker, "MSFT") => vec![r(
            "BBG000BPH459",
            "MICROSOFT CORP",
            "MSFT",
            "US",
            "Common Stock",
        )],
        _ => return None,
    };
    let filtered: Vec<FigiResult> = all
        .into_iter()
        .filter(|r| match job.exch_code.as_deref() {
            Some(code) => r.exch_code.as_deref() == Some(code),
            None => true,
        })
        .collect();
    (!filtered.is_empty()).then_some(filtered)
}

fn ibm() -> FigiResult {
    r(
        "BBG000BLNNH6",
        "INTL BUSINESS MACHINES CORP",
        "IBM",
        "US",
        "Common Stock",
    )
}

fn apple(figi: &str, exch: &str) -> FigiResult {
    FigiResult {
        composite_figi: Some("BBG000B9XRY4".to_string()),
        share_class: Some("BBG001S5N8V8".to_string()),
        ..r(figi, "APPLE INC", "AAPL", exch, "Common Stock")
    }
}

fn r(figi: &str, name: &str, ticker: &str, exch: &str, security_type: &str) -> FigiResult {
    FigiResult {
        figi: Some(figi.to_string()),
        security_type: Some(security_type.to_string()),
        market_sector: Some("Equity".to_string()),
        ticker: Some(ticker.to_string()),
        name: Some(name.to_string()),
        unique_id: Some(format!("EQ{}", &figi[figi.len() - 10..])),
        exch_code: Some(exch.to_string()),
        security_type2: Some("Common Stock".to_string()),
        security_description: Some(ticker.to_string()),
        ..FigiResult::default()
    }
}
