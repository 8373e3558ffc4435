/*
[INPUT]:  Integers, amounts and hex strings
[OUTPUT]: Wire-compatible lowercase hex fragments
[POS]:    Encoding layer - building blocks for transaction payloads
[UPDATE]: When adding new encoders
*/

pub mod error;
pub mod fixed8;
pub mod hexstring;
pub mod varint;

pub use error::EncodingError;
pub use fixed8::{FIXED8_DECIMALS, Fixed8};
pub use hexstring::{number_to_hex_string, reverse_hex_byte_pairs};
pub use varint::{encode_hex_length, encode_var_int};
