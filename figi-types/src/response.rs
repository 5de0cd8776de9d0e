//! Decoded mapping output.
//!
//! A [`MappingResponse`] owns everything beneath it. Dropping it (or calling
//! [`MappingResponse::release`]) frees every [`JobResult`] and every
//! [`FigiResult`] field in one step; there is no partial teardown.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::vocabulary::{EXCH_CODE_LEN, FIGI_LEN, MAX_FIELD_LEN};

/// One instrument matched by a mapping job.
///
/// Every field is optional; a field the service omitted or sent as `null`
/// is `None`, which is distinct from `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigiResult {
    /// Financial instrument global identifier.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,
    /// Security type.
    #[serde(
        rename = "securityType",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_type: Option<String>,
    /// Market sector.
    #[serde(
        rename = "marketSector",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub market_sector: Option<String>,
    /// Ticker.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Instrument name.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unique Bloomberg identifier.
    #[serde(
        rename = "uniqueID",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_id: Option<String>,
    /// Exchange code.
    #[serde(
        rename = "exchCode",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub exch_code: Option<String>,
    /// Share-class-level FIGI.
    #[serde(
        rename = "shareClass",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub share_class: Option<String>,
    /// Composite FIGI.
    #[serde(
        rename = "compositeFIGI",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub composite_figi: Option<String>,
    /// Secondary security type.
    #[serde(
        rename = "securityType2",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_type2: Option<String>,
    /// Security description.
    #[serde(
        rename = "securityDescription",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_description: Option<String>,
    /// Unique identifier for futures and options.
    #[serde(
        rename = "uniqueIDFutOpt",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_id_fut_opt: Option<String>,
}

/// Text of a JSON value as the decoder keeps it: `null` is absent, strings
/// are taken verbatim, and anything else is kept as its JSON text.
#[must_use]
pub fn json_text(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(d)?.and_then(json_text))
}

impl FigiResult {
    /// Wire names of all result fields with their advisory length bounds, in
    /// display order.
    pub const FIELDS: [(&'static str, usize); 12] = [
        ("figi", FIGI_LEN),
        ("securityType", MAX_FIELD_LEN),
        ("marketSector", MAX_FIELD_LEN),
        ("ticker", MAX_FIELD_LEN),
        ("name", MAX_FIELD_LEN),
        ("uniqueID", MAX_FIELD_LEN),
        ("exchCode", EXCH_CODE_LEN),
        ("shareClass", FIGI_LEN),
        ("compositeFIGI", FIGI_LEN),
        ("securityType2", MAX_FIELD_LEN),
        ("securityDescription", MAX_FIELD_LEN),
        ("uniqueIDFutOpt", MAX_FIELD_LEN),
    ];

    /// Look up a field by its wire name. Unknown names yield `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let v = match name {
            "figi" => &self.figi,
            "securityType" => &self.security_type,
            "marketSector" => &self.market_sector,
            "ticker" => &self.ticker,
            "name" => &self.name,
            "uniqueID" => &self.unique_id,
            "exchCode" => &self.exch_code,
            "shareClass" => &self.share_class,
            "compositeFIGI" => &self.composite_figi,
            "securityType2" => &self.security_type2,
            "securityDescription" => &self.security_description,
            "uniqueIDFutOpt" => &self.unique_id_fut_opt,
            _ => return None,
        };
        v.as_deref()
    }

    /// Present fields whose length exceeds the advisory bound, as
    /// `(name, len, bound)`.
    pub fn oversized_fields(&self) -> impl Iterator<Item = (&'static str, usize, usize)> + '_ {
        Self::FIELDS.into_iter().filter_map(|(name, bound)| {
            let len = self.get(name)?.chars().count();
            (len > bound).then_some((name, len, bound))
        })
    }

    /// True when every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Self::FIELDS.iter().all(|(name, _)| self.get(name).is_none())
    }
}

impl fmt::Display for FigiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, _) in Self::FIELDS {
            writeln!(f, "{name}: {}", self.get(name).unwrap_or(""))?;
        }
        Ok(())
    }
}

/// Output of one submitted job, positionally aligned with the request.
///
/// Serializes to the service's wire shape. Decoding goes through
/// `figi_core::decode_response` only, which knows the no-match rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobResult {
    /// Matched instruments; empty means no match.
    #[serde(rename = "data", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<FigiResult>,
    /// Per-job error reported by the service, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-job warning reported by the service (typically "No identifier found.").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl JobResult {
    /// Wrap a list of matches.
    #[must_use]
    pub const fn matched(results: Vec<FigiResult>) -> Self {
        Self {
            results,
            error: None,
            warning: None,
        }
    }

    /// True when at least one instrument matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        !self.results.is_empty()
    }

    /// Number of matched instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Decoded reply to a mapping request: one [`JobResult`] per submitted job,
/// in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MappingResponse {
    /// Per-job results.
    pub jobs: Vec<JobResult>,
}

impl MappingResponse {
    /// Wrap decoded job results.
    #[must_use]
    pub const fn new(jobs: Vec<JobResult>) -> Self {
        Self { jobs }
    }

    /// Number of job results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the response holds no job results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Result for the job submitted at `index`.
    #[must_use]
    pub fn job(&self, index: usize) -> Option<&JobResult> {
        self.jobs.get(index)
    }

    /// Iterate job results in submission order.
    pub fn iter(&self) -> core::slice::Iter<'_, JobResult> {
        self.jobs.iter()
    }

    /// Total number of matched instruments across all jobs.
    #[must_use]
    pub fn total_results(&self) -> usize {
        self.jobs.iter().map(JobResult::len).sum()
    }

    /// Release the response and everything it owns.
    ///
    /// Taking `self` by value makes a second release impossible.
    pub fn release(self) {
        drop(self);
    }
}

impl IntoIterator for MappingResponse {
    type Item = JobResult;
    type IntoIter = std::vec::IntoIter<JobResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.into_iter()
    }
}

impl<'a> IntoIterator for &'a MappingResponse {
    type Item = &'a JobResult;
    type IntoIter = core::slice::Iter<'a, JobResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_are_absent() {
        let r: FigiResult =
            serde_json::from_str(r#"{"figi":"BBG000BLNNH6","ticker":null,"extra":1}"#).unwrap();
        assert_eq!(r.figi.as_deref(), Some("BBG000BLNNH6"));
        assert!(r.ticker.is_none());
        assert!(r.name.is_none());
    }

    #[test]
    fn non_string_values_keep_their_json_text() {
        let r: FigiResult =
            serde_json::from_str(r#"{"name":42,"ticker":true,"uniqueID":[1,2]}"#).unwrap();
        assert_eq!(r.name.as_deref(), Some("42"));
        assert_eq!(r.ticker.as_deref(), Some("true"));
        assert_eq!(r.unique_id.as_deref(), Some("[1,2]"));
    }

    #[test]
    fn json_text_matches_field_decoding() {
        assert_eq!(json_text(Value::Null), None);
        assert_eq!(json_text(Value::from("x")).as_deref(), Some("x"));
        assert_eq!(json_text(Value::from(7)).as_deref(), Some("7"));
    }

    #[test]
    fn empty_string_stays_present() {
        let r: FigiResult = serde_json::from_str(r#"{"shareClass":""}"#).unwrap();
        assert_eq!(r.share_class.as_deref(), Some(""));
        assert!(!r.is_empty());
    }

    #[test]
    fn field_table_matches_accessor() {
        let r = FigiResult {
            exch_code: Some("US".into()),
            ..Default::default()
        };
        for (name, _) in FigiResult::FIELDS {
            assert_eq!(r.get(name).is_some(), name == "exchCode");
        }
        assert!(r.get("bogus").is_none());
    }

    #[test]
    fn oversized_fields_are_reported() {
        let r = FigiResult {
            exch_code: Some("TOOLONG".into()),
            figi: Some("BBG000BLNNH6".into()),
            ..Default::default()
        };
        let over: Vec<_> = r.oversized_fields().collect();
        assert_eq!(over, vec![("exchCode", 7, EXCH_CODE_LEN)]);
    }

    #[test]
    fn display_prints_every_field_line() {
        let r = FigiResult {
            figi: Some("BBG000BLNNH6".into()),
            ..Default::default()
        };
        let text = r.to_string();
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("figi: BBG000BLNNH6\nsecurityType: \n"));
    }

    #[test]
    fn no_match_serializes_to_empty_object() {
        let json = serde_json::to_string(&JobResult::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
