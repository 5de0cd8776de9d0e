//! A single mapping query.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary::{IdType, JobModifier};

/// One identifier to map, plus optional modifiers narrowing the match.
///
/// The job owns all of its text. Absent modifiers are `None` and are never
/// written to a request, not even as `null` or `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingJob {
    /// Identifier type tag.
    pub id_type: IdType,
    /// Identifier value, e.g. an ISIN.
    pub id_value: String,
    /// Exchange code filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exch_code: Option<String>,
    /// Market identifier code filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mic_code: Option<String>,
    /// Currency filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Market sector description filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_sec_des: Option<String>,
}

impl MappingJob {
    /// Create a job with every modifier absent.
    pub fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
        Self {
            id_type,
            id_value: id_value.into(),
            exch_code: None,
            mic_code: None,
            currency: None,
            market_sec_des: None,
        }
    }

    /// Shorthand for an ISIN job.
    pub fn isin(value: impl Into<String>) -> Self {
        Self::new(IdType::IdIsin, value)
    }

    /// Set the exchange code.
    #[must_use]
    pub fn with_exch_code(mut self, v: impl Into<String>) -> Self {
        self.exch_code = Some(v.into());
        self
    }

    /// Set the market identifier code.
    #[must_use]
    pub fn with_mic_code(mut self, v: impl Into<String>) -> Self {
        self.mic_code = Some(v.into());
        self
    }

    /// Set the currency.
    #[must_use]
    pub fn with_currency(mut self, v: impl Into<String>) -> Self {
        self.currency = Some(v.into());
        self
    }

    /// Set the market sector description.
    #[must_use]
    pub fn with_market_sec_des(mut self, v: impl Into<String>) -> Self {
        self.market_sec_des = Some(v.into());
        self
    }

    /// Read a modifier by tag.
    #[must_use]
    pub fn get(&self, modifier: JobModifier) -> Option<&str> {
        self.slot(modifier).as_deref()
    }

    /// Set or clear a modifier by tag.
    pub fn set(&mut self, modifier: JobModifier, value: Option<String>) {
        *self.slot_mut(modifier) = value;
    }

    /// Modifiers that are present, in request order.
    pub fn modifiers(&self) -> impl Iterator<Item = (JobModifier, &str)> {
        JobModifier::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|v| (m, v)))
    }

    fn slot(&self, modifier: JobModifier) -> &Option<String> {
        match modifier {
            JobModifier::ExchCode => &self.exch_code,
            JobModifier::MicCode => &self.mic_code,
            JobModifier::Currency => &self.currency,
            JobModifier::MarketSecDes => &self.market_sec_des,
        }
    }

    fn slot_mut(&mut self, modifier: JobModifier) -> &mut Option<String> {
        match modifier {
            JobModifier::ExchCode => &mut self.exch_code,
            JobModifier::MicCode => &mut self.mic_code,
            JobModifier::Currency => &mut self.currency,
            JobModifier::MarketSecDes => &mut self.market_sec_des,
        }
    }
}

impl fmt::Display for MappingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id {} = {}", self.id_type, self.id_value)?;
        for (m, v) in self.modifiers() {
            write!(f, ", {m} = {v}")?;
        }
        Ok(())
    }
}
