/*
[INPUT]:  Serializable messages and the system clock
[OUTPUT]: Canonical JSON strings and epoch timestamps
[POS]:    Utilities - shared helpers for payload assembly
[UPDATE]: When message canonicalization rules change
*/

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

/// Current time in epoch milliseconds
pub fn epoch_milliseconds() -> i64 {
    Utc::now().timestamp_millis()
}

/// Compact JSON with object keys sorted at every depth.
///
/// Two messages with the same content always stringify identically,
/// whatever order their fields were built in.
pub fn stringify_message<T: Serialize + ?Sized>(message: &T) -> serde_json::Result<String> {
    let value = serde_json::to_value(message)?;
    serde_json::to_string(&sort_keys(value))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            // Map is only ordered while serde_json's preserve_order feature stays off
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_sorts_nested_keys() {
        let message = json!({
            "pair": "SWTH_NEO",
            "blockchain": "neo",
            "order": { "side": "buy", "price": "0.001", "amounts": [{ "b": 1, "a": 2 }] }
        });

        assert_eq!(
            stringify_message(&message).expect("stringify"),
            r#"{"blockchain":"neo","order":{"amounts":[{"a":2,"b":1}],"price":"0.001","side":"buy"},"pair":"SWTH_NEO"}"#
        );
    }

    #[test]
    fn test_stringify_struct() {
        #[derive(Serialize)]
        struct Deposit {
            timestamp: i64,
            amount: String,
            asset_id: String,
        }

        let deposit = Deposit {
            timestamp: 1_533_362_081_336,
            amount: "100".to_string(),
            asset_id: "SWTH".to_string(),
        };
        assert_eq!(
            stringify_message(&deposit).expect("stringify"),
            r#"{"amount":"100","asset_id":"SWTH","timestamp":1533362081336}"#
        );
    }

    #[test]
    fn test_epoch_milliseconds_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(epoch_milliseconds() > 1_577_836_800_000);
    }
}
