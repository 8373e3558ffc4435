/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    #[default]
    Neo,
    Eth,
    Qtum,
}

impl Blockchain {
    /// Query parameter value, e.g. `neo`
    pub const fn as_str(self) -> &'static str {
        match self {
            Blockchain::Neo => "neo",
            Blockchain::Eth => "eth",
            Blockchain::Qtum => "qtum",
        }
    }

    /// Key of this chain in the `/contracts` response, e.g. `NEO`
    pub const fn contract_key(self) -> &'static str {
        match self {
            Blockchain::Neo => "NEO",
            Blockchain::Eth => "ETH",
            Blockchain::Qtum => "QTUM",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candlestick width in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CandleInterval {
    OneMinute,
    FiveMinutes,
    ThirtyMinutes,
    OneHour,
    SixHours,
    OneDay,
}

impl CandleInterval {
    pub const fn minutes(self) -> u32 {
        match self {
            CandleInterval::OneMinute => 1,
            CandleInterval::FiveMinutes => 5,
            CandleInterval::ThirtyMinutes => 30,
            CandleInterval::OneHour => 60,
            CandleInterval::SixHours => 360,
            CandleInterval::OneDay => 1440,
        }
    }
}

/// Minute count with no matching candle width
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported candle interval {0}, expected one of 1, 5, 30, 60, 360, 1440")]
pub struct UnsupportedCandleInterval(pub u32);

impl TryFrom<u32> for CandleInterval {
    type Error = UnsupportedCandleInterval;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            1 => Ok(CandleInterval::OneMinute),
            5 => Ok(CandleInterval::FiveMinutes),
            30 => Ok(CandleInterval::ThirtyMinutes),
            60 => Ok(CandleInterval::OneHour),
            360 => Ok(CandleInterval::SixHours),
            1440 => Ok(CandleInterval::OneDay),
            other => Err(UnsupportedCandleInterval(other)),
        }
    }
}

impl From<CandleInterval> for u32 {
    fn from(interval: CandleInterval) -> Self {
        interval.minutes()
    }
}

/// Base assets accepted by the `/pairs` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PairBase {
    Neo,
    Gas,
    Swth,
    Usd,
}

impl PairBase {
    pub const fn as_str(self) -> &'static str {
        match self {
            PairBase::Neo => "NEO",
            PairBase::Gas => "GAS",
            PairBase::Swth => "SWTH",
            PairBase::Usd => "USD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockchain_serde() {
        assert_eq!(serde_json::to_string(&Blockchain::Neo).unwrap(), r#""neo""#);
        let chain: Blockchain = serde_json::from_str(r#""qtum""#).unwrap();
        assert_eq!(chain, Blockchain::Qtum);
        assert_eq!(chain.contract_key(), "QTUM");
    }

    #[test]
    fn test_candle_interval_from_minutes() {
        assert_eq!(CandleInterval::try_from(360u32), Ok(CandleInterval::SixHours));
        assert_eq!(
            CandleInterval::try_from(15u32),
            Err(UnsupportedCandleInterval(15))
        );
        let err = serde_json::from_str::<CandleInterval>("7").unwrap_err();
        assert!(err.to_string().contains("unsupported candle interval 7"));
        assert_eq!(serde_json::to_string(&CandleInterval::OneDay).unwrap(), "1440");
    }

    #[test]
    fn test_pair_base_serde() {
        assert_eq!(serde_json::to_string(&PairBase::Swth).unwrap(), r#""SWTH""#);
        assert_eq!(PairBase::Usd.as_str(), "USD");
    }
}
