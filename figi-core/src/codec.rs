//! JSON encoding of mapping requests and decoding of mapping replies.

use figi_types::{FigiError, FigiResult, JobResult, MappingJob, MappingResponse, json_text};
use serde_json::Value;

/// Encode one job as a JSON object.
///
/// The object always carries `idType` and `idValue`; each modifier key is
/// present only when the modifier is set.
///
/// # Errors
/// Returns `Encode` if serialization fails, which the closed vocabulary
/// should make impossible.
pub fn encode_job(job: &MappingJob) -> Result<Value, FigiError> {
    serde_json::to_value(job).map_err(|e| FigiError::Encode(e.to_string()))
}

/// Encode jobs as a JSON array, preserving order. No jobs encode to `[]`.
///
/// # Errors
/// Propagates [`encode_job`] failures.
pub fn encode_request(jobs: &[MappingJob]) -> Result<Value, FigiError> {
    jobs.iter()
        .map(encode_job)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Encode jobs straight to the compact request body text.
///
/// # Errors
/// Returns `Encode` if serialization fails.
pub fn request_body(jobs: &[MappingJob]) -> Result<String, FigiError> {
    let body = serde_json::to_string(jobs).map_err(|e| FigiError::Encode(e.to_string()))?;
    #[cfg(feature = "tracing")]
    tracing::debug!(jobs = jobs.len(), bytes = body.len(), "encoded mapping request");
    Ok(body)
}

/// Decode a mapping reply body.
///
/// The body must be a JSON array with one entry per submitted job. An entry
/// without a `data` key decodes to an empty [`JobResult`]; that includes
/// `data: null` and entries that are not objects at all (`null`, numbers,
/// strings, booleans). Per-job `error` and `warning` texts are kept.
///
/// # Errors
/// Returns `Parse` if the body is not valid JSON, is not an array at the top
/// level, or has a `data` member or result record of the wrong shape. No
/// partially decoded response is ever returned.
pub fn decode_response(body: &str) -> Result<MappingResponse, FigiError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| FigiError::parse(format!("invalid JSON: {e}")))?;
    let entries = match root {
        Value::Array(entries) => entries,
        other => {
            return Err(FigiError::parse(format!(
                "expected a top-level array, found {}",
                kind(&other)
            )));
        }
    };

    let jobs = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| decode_job(i, entry))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        jobs = jobs.len(),
        results = jobs.iter().map(JobResult::len).sum::<usize>(),
        "decoded mapping response"
    );

    Ok(MappingResponse::new(jobs))
}

fn decode_job(index: usize, entry: Value) -> Result<JobResult, FigiError> {
    let mut obj = match entry {
        Value::Object(obj) => obj,
        _other => {
            #[cfg(feature = "tracing")]
            tracing::debug!(job = index, found = kind(&_other), "job entry without data");
            return Ok(JobResult::default());
        }
    };

    let results = match obj.remove("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(pos, item)| decode_result(index, pos, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(FigiError::parse(format!(
                "job {index}: `data` must be an array, found {}",
                kind(&other)
            )));
        }
    };

    Ok(JobResult {
        results,
        error: obj.remove("error").and_then(json_text),
        warning: obj.remove("warning").and_then(json_text),
    })
}

fn decode_result(job: usize, pos: usize, item: Value) -> Result<FigiResult, FigiError> {
    if !item.is_object() {
        return Err(FigiError::parse(format!(
            "job {job} result {pos}: expected an object, found {}",
            kind(&item)
        )));
    }
    let result: FigiResult = serde_json::from_value(item)
        .map_err(|e| FigiError::parse(format!("job {job} result {pos}: {e}")))?;

    #[cfg(feature = "tracing")]
    for (field, len, bound) in result.oversized_fields() {
        tracing::debug!(job, pos, field, len, bound, "field exceeds advisory length");
    }

    Ok(result)
}

const fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figi_types::IdType;

    #[test]
    fn reference_request_encodes_exactly() {
        let job = MappingJob::new(IdType::IdWertpapier, "851399").with_exch_code("US");
        let body = request_body(std::slice::from_ref(&job)).unwrap();
        assert_eq!(
            body,
            r#"[{"idType":"ID_WERTPAPIER","idValue":"851399","exchCode":"US"}]"#
        );
        assert_eq!(encode_request(&[job]).unwrap().to_string(), body);
    }

    #[test]
    fn modifiers_follow_fixed_order() {
        let job = MappingJob::new(IdType::IdSedol, "2046251")
            .with_market_sec_des("Equity")
            .with_currency("USD")
            .with_mic_code("EDGX")
            .with_exch_code("US");
        let v = encode_job(&job).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["idType", "idValue", "exchCode", "micCode", "currency", "marketSecDes"]
        );
    }

    #[test]
    fn bare_null_entry_is_no_match() {
        let resp = decode_response("[null]").unwrap();
        assert_eq!(resp.len(), 1);
        assert!(!resp.jobs[0].is_match());
    }

    #[test]
    fn non_array_data_is_rejected() {
        let err = decode_response(r#"[{"data":{"figi":"x"}}]"#).unwrap_err();
        assert!(matches!(err, FigiError::Parse(_)));
    }

    #[test]
    fn scalar_inside_data_is_rejected() {
        let err = decode_response(r#"[{"data":["BBG000BLNNH6"]}]"#).unwrap_err();
        assert!(matches!(err, FigiError::Parse(_)));
    }

    #[test]
    fn scalar_entries_are_no_match() {
        let resp = decode_response(r#"[{"data":[{"figi":"A"}]}, 3, "x", true]"#).unwrap();
        assert_eq!(resp.len(), 4);
        assert_eq!(resp.jobs[0].results[0].figi.as_deref(), Some("A"));
        assert!(resp.jobs[1..].iter().all(|j| *j == JobResult::default()));
    }

    #[test]
    fn non_string_error_and_warning_keep_json_text() {
        let resp = decode_response(r#"[{"error":404}, {"warning":null}]"#).unwrap();
        assert_eq!(resp.jobs[0].error.as_deref(), Some("404"));
        assert_eq!(resp.jobs[1].warning, None);
    }
}
