/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for public market data responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeStatus {
    pub status: String,
}

impl ExchangeStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Exchange clock, epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeTime {
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    pub hash: String,
    pub decimals: u32,
}

/// Token symbol -> details
pub type TokenList = BTreeMap<String, TokenDetails>;

/// Blockchain key (`NEO`) -> contract version (`V2`) -> contract hash
pub type Contracts = BTreeMap<String, BTreeMap<String, String>>;

/// Base symbol -> quote symbol -> last traded price
pub type LastPrices = BTreeMap<String, BTreeMap<String, Decimal>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    /// Candle open time, epoch seconds
    #[serde(with = "serde_helpers::u64_str")]
    pub time: u64,
    #[serde(with = "serde_helpers::decimal")]
    pub open: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub close: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub high: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub low: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub volume: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub quote_volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker24h {
    pub pair: String,
    #[serde(with = "serde_helpers::decimal")]
    pub open: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub close: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub high: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub low: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub volume: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub quote_volume: Decimal,
}

/// Open offer on the order book; amounts are in base units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub offer_asset: String,
    pub want_asset: String,
    #[serde(with = "serde_helpers::decimal")]
    pub available_amount: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub offer_amount: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub want_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledTrade {
    pub id: String,
    #[serde(with = "serde_helpers::decimal")]
    pub fill_amount: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub take_amount: Decimal,
    pub event_time: DateTime<Utc>,
    pub is_buy: bool,
}

mod serde_helpers {
    // The API mixes quoted and bare numbers for the same fields.

    pub mod decimal {
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;
        use std::str::FromStr;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            if value.is_null() {
                return Ok(Decimal::ZERO);
            }

            if let Some(raw) = value.as_str() {
                if raw.trim().is_empty() {
                    return Ok(Decimal::ZERO);
                }
                return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
            }

            if value.is_number() {
                let raw = value.to_string();
                return Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map_err(serde::de::Error::custom);
            }

            Err(serde::de::Error::custom("invalid decimal value"))
        }

        pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub mod u64_str {
        use serde::{Deserialize, Deserializer, Serializer};
        use serde_json::Value;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Value::deserialize(deserializer)? {
                Value::String(raw) => raw.trim().parse().map_err(serde::de::Error::custom),
                Value::Number(number) => number
                    .as_u64()
                    .ok_or_else(|| serde::de::Error::custom("expected unsigned integer")),
                _ => Err(serde::de::Error::custom("invalid integer value")),
            }
        }

        pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn candlestick_accepts_quoted_values() {
        let value = json!({
            "time": "1533168000",
            "open": "0.00046835",
            "close": "0.00046835",
            "high": "0.00046835",
            "low": "0.00046835",
            "volume": "240315335.0",
            "quote_volume": "513110569018.0"
        });

        let candle: Candlestick = serde_json::from_value(value).expect("candlestick");
        assert_eq!(candle.time, 1_533_168_000);
        assert_eq!(candle.open, "0.00046835".parse::<Decimal>().unwrap());
        assert_eq!(candle.volume, Decimal::from(240_315_335));
    }

    #[test]
    fn ticker_accepts_bare_numbers() {
        let value = json!({
            "pair": "SWTH_NEO",
            "open": "0.000407",
            "close": 0.00040911,
            "high": "0.00041492",
            "low": "0.00036",
            "volume": "34572662197.0",
            "quote_volume": "86879788270667.0"
        });

        let ticker: Ticker24h = serde_json::from_value(value).expect("ticker");
        assert_eq!(ticker.close, "0.00040911".parse::<Decimal>().unwrap());
    }

    #[test]
    fn filled_trade_parses_event_time() {
        let value = json!({
            "id": "15bb16e2-7a80-4de1-bb59-bcaff877dee0",
            "fill_amount": 100000000,
            "take_amount": 100000000,
            "event_time": "2018-08-04T15:00:12.634Z",
            "is_buy": true
        });

        let trade: FilledTrade = serde_json::from_value(value).expect("trade");
        assert_eq!(trade.fill_amount, Decimal::from(100_000_000));
        assert_eq!(
            trade.event_time,
            Utc.with_ymd_and_hms(2018, 8, 4, 15, 0, 12).unwrap()
                + chrono::Duration::milliseconds(634)
        );
        assert!(trade.is_buy);
    }

    #[test]
    fn offer_treats_empty_amount_as_zero() {
        let value = json!({
            "id": "2716c0ca-59bb-4c86-8ee4-6b9528d0e5d2",
            "offer_asset": "GAS",
            "want_asset": "NEO",
            "available_amount": "",
            "offer_amount": 30000000,
            "want_amount": "300000000"
        });

        let offer: Offer = serde_json::from_value(value).expect("offer");
        assert_eq!(offer.available_amount, Decimal::ZERO);
        assert_eq!(offer.want_amount, Decimal::from(300_000_000));
    }

    #[test]
    fn exchange_status_is_ok() {
        let status: ExchangeStatus = serde_json::from_value(json!({ "status": "ok" })).unwrap();
        assert!(status.is_ok());
    }
}
