/*
[INPUT]:  Decimal amounts (asset values, gas)
[OUTPUT]: Fixed8 values and their 8-byte hex forms
[POS]:    Encoding layer - fixed point amounts for transaction payloads
[UPDATE]: When changing Fixed8 precision or hex layout
*/

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::error::EncodingError;
use super::hexstring::number_to_hex_string;

/// Number of decimal places carried by a [`Fixed8`]
pub const FIXED8_DECIMALS: u32 = 8;

const FIXED8_SCALE: i64 = 100_000_000;

/// Amount stored as an integer count of 10^-8 units.
///
/// Serializes as a decimal string; the wire form used in transactions is
/// [`Fixed8::to_reverse_hex`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Fixed8(i64);

impl Fixed8 {
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wrap a raw value already scaled by 10^8
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw value scaled by 10^8
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Scale a decimal amount into Fixed8.
    ///
    /// Fails when the amount has more than 8 fractional digits or does not
    /// fit in an `i64` once scaled.
    pub fn from_decimal(value: Decimal) -> Result<Self, EncodingError> {
        let normalized = value.normalize();
        if normalized.scale() > FIXED8_DECIMALS {
            return Err(EncodingError::Fixed8Precision(value.to_string()));
        }

        normalized
            .checked_mul(Decimal::from(FIXED8_SCALE))
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or_else(|| EncodingError::Fixed8Overflow(value.to_string()))
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, FIXED8_DECIMALS)
    }

    /// Big endian hex of the two's complement raw value (16 chars)
    pub fn to_hex(self) -> String {
        number_to_hex_string(self.0 as u64, 8, false)
    }

    /// Little endian hex, as serialized in transaction outputs
    pub fn to_reverse_hex(self) -> String {
        number_to_hex_string(self.0 as u64, 8, true)
    }
}

impl TryFrom<Decimal> for Fixed8 {
    type Error = EncodingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Fixed8> for Decimal {
    fn from(value: Fixed8) -> Self {
        value.to_decimal()
    }
}

impl FromStr for Fixed8 {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s.trim()).map_err(|_| EncodingError::InvalidDecimal(s.to_string()))?;
        Self::from_decimal(value)
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}
