//! Closed vocabularies understood by the mapping service.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FigiError;

/// Advisory upper bound for free-text result fields.
pub const MAX_FIELD_LEN: usize = 45;
/// Advisory upper bound for FIGI-like result fields.
pub const FIGI_LEN: usize = 13;
/// Advisory upper bound for exchange codes.
pub const EXCH_CODE_LEN: usize = 4;

/// Identifier type tag of a mapping job (`idType` on the wire).
///
/// The wire spelling returned by [`IdType::as_str`] is the only accepted
/// textual form; parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum IdType {
    /// International Securities Identification Number.
    IdIsin,
    /// Unique Bloomberg identifier.
    IdBbUnique,
    /// Stock Exchange Daily Official List number.
    IdSedol,
    /// Common Code (Euroclear/Clearstream).
    IdCommon,
    /// Wertpapierkennnummer.
    IdWertpapier,
    /// Committee on Uniform Securities Identification Procedures number.
    IdCusip,
    /// CUSIP International Numbering System number.
    IdCins,
    /// Legacy Bloomberg identifier.
    IdBb,
    /// Italian identifier number.
    IdItaly,
    /// Local exchange symbol.
    IdExchSymbol,
    /// Full exchange symbol.
    IdFullExchangeSymbol,
    /// Composite financial instrument global identifier.
    CompositeIdBbGlobal,
    /// Share-class-level financial instrument global identifier.
    IdBbGlobalShareClassLevel,
    /// Financial instrument global identifier (FIGI).
    IdBbGlobal,
    /// Bloomberg security number descriptor.
    IdBbSecNumDes,
    /// Ticker.
    Ticker,
    /// Eight-character CUSIP.
    IdCusip8Chr,
    /// OCC option symbol.
    OccSymbol,
    /// Unique identifier for futures and options.
    UniqueIdFutOpt,
    /// OPRA option symbol.
    OpraSymbol,
    /// Trading system identifier.
    TradingSystemIdentifier,
}

impl IdType {
    /// Every identifier type, in vocabulary order.
    pub const ALL: [Self; 21] = [
        Self::IdIsin,
        Self::IdBbUnique,
        Self::IdSedol,
        Self::IdCommon,
        Self::IdWertpapier,
        Self::IdCusip,
        Self::IdCins,
        Self::IdBb,
        Self::IdItaly,
        Self::IdExchSymbol,
        Self::IdFullExchangeSymbol,
        Self::CompositeIdBbGlobal,
        Self::IdBbGlobalShareClassLevel,
        Self::IdBbGlobal,
        Self::IdBbSecNumDes,
        Self::Ticker,
        Self::IdCusip8Chr,
        Self::OccSymbol,
        Self::UniqueIdFutOpt,
        Self::OpraSymbol,
        Self::TradingSystemIdentifier,
    ];

    /// Exact wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdIsin => "ID_ISIN",
            Self::IdBbUnique => "ID_BB_UNIQUE",
            Self::IdSedol => "ID_SEDOL",
            Self::IdCommon => "ID_COMMON",
            Self::IdWertpapier => "ID_WERTPAPIER",
            Self::IdCusip => "ID_CUSIP",
            Self::IdCins => "ID_CINS",
            Self::IdBb => "ID_BB",
            Self::IdItaly => "ID_ITALY",
            Self::IdExchSymbol => "ID_EXCH_SYMBOL",
            Self::IdFullExchangeSymbol => "ID_FULL_EXCHANGE_SYMBOL",
            Self::CompositeIdBbGlobal => "COMPOSITE_ID_BB_GLOBAL",
            Self::IdBbGlobalShareClassLevel => "ID_BB_GLOBAL_SHARE_CLASS_LEVEL",
            Self::IdBbGlobal => "ID_BB_GLOBAL",
            Self::IdBbSecNumDes => "ID_BB_SEC_NUM_DES",
            Self::Ticker => "TICKER",
            Self::IdCusip8Chr => "ID_CUSIP_8_CHR",
            Self::OccSymbol => "OCC_SYMBOL",
            Self::UniqueIdFutOpt => "UNIQUE_ID_FUT_OPT",
            Self::OpraSymbol => "OPRA_SYMBOL",
            Self::TradingSystemIdentifier => "TRADING_SYSTEM_IDENTIFIER",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = FigiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FigiError::InvalidArg(format!("unknown idType: {s}")))
    }
}

impl TryFrom<String> for IdType {
    type Error = FigiError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IdType> for &'static str {
    fn from(t: IdType) -> Self {
        t.as_str()
    }
}

/// Optional request modifiers a mapping job may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobModifier {
    /// Exchange code (`exchCode`).
    ExchCode,
    /// Market identifier code (`micCode`).
    MicCode,
    /// Currency (`currency`).
    Currency,
    /// Market sector description (`marketSecDes`).
    MarketSecDes,
}

impl JobModifier {
    /// Modifiers in the order they are written to a request.
    pub const ALL: [Self; 4] = [
        Self::ExchCode,
        Self::MicCode,
        Self::Currency,
        Self::MarketSecDes,
    ];

    /// Request key for this modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExchCode => "exchCode",
            Self::MicCode => "micCode",
            Self::Currency => "currency",
            Self::MarketSecDes => "marketSecDes",
        }
    }
}

impl fmt::Display for JobModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
