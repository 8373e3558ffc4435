/*
[INPUT]:  Malformed amounts, hex fields and transaction attributes
[OUTPUT]: Structured encoding errors
[POS]:    Encoding layer - error types for hex, Fixed8 and transaction serialization
[UPDATE]: When adding new validation rules
*/

use thiserror::Error;

/// Errors raised while building wire payloads
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// A field expected to hold hex bytes did not
    #[error("Invalid hex in {field}: {source}")]
    InvalidHex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// Attribute data exceeds the transaction attribute limit
    #[error("Transaction attribute data too large: {len} chars (max {max})")]
    AttributeTooLarge { len: usize, max: usize },

    /// Attribute data does not fit its usage
    #[error("Invalid attribute (usage {usage:#04x}): {reason}")]
    InvalidAttribute { usage: u8, reason: String },

    /// Unknown transaction type byte
    #[error("Unknown transaction type: {0:#04x}")]
    UnknownTransactionType(u8),

    /// Invocation transaction without a script
    #[error("Invocation transaction is missing its script")]
    MissingScript,

    /// Amount outside the Fixed8 range
    #[error("Amount {0} does not fit in Fixed8")]
    Fixed8Overflow(String),

    /// Amount with more than 8 fractional digits
    #[error("Amount {0} has more than 8 decimal places")]
    Fixed8Precision(String),

    /// Amount that is not a decimal number
    #[error("Invalid decimal amount: {0}")]
    InvalidDecimal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EncodingError::AttributeTooLarge {
            len: 70_000,
            max: 65_535,
        };
        assert_eq!(
            err.to_string(),
            "Transaction attribute data too large: 70000 chars (max 65535)"
        );

        let err = EncodingError::UnknownTransactionType(0x40);
        assert_eq!(err.to_string(), "Unknown transaction type: 0x40");
    }
}
