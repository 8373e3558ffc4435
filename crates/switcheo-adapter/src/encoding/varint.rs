/*
[INPUT]:  Unsigned counts and lengths
[OUTPUT]: Variable-length integer hex strings (prefix byte + little endian value)
[POS]:    Encoding layer - length headers for serialized arrays and scripts
[UPDATE]: When changing VarInt width thresholds
*/

use super::hexstring::number_to_hex_string;

const UINT16_PREFIX: &str = "fd";
const UINT32_PREFIX: &str = "fe";
const UINT64_PREFIX: &str = "ff";

/// Encode `num` as a variable-length integer hex string.
///
/// | range                     | output                     |
/// |---------------------------|----------------------------|
/// | `< 0xfd`                  | 1 byte                     |
/// | `0xfd ..= 0xffff`         | `fd` + 2 bytes, little end |
/// | `0x1_0000 ..= 0xffff_ffff`| `fe` + 4 bytes, little end |
/// | `> 0xffff_ffff`           | `ff` + 8 bytes, little end |
pub fn encode_var_int(num: u64) -> String {
    if num < 0xfd {
        number_to_hex_string(num, 1, false)
    } else if num <= 0xffff {
        format!("{UINT16_PREFIX}{}", number_to_hex_string(num, 2, true))
    } else if num <= 0xffff_ffff {
        format!("{UINT32_PREFIX}{}", number_to_hex_string(num, 4, true))
    } else {
        format!("{UINT64_PREFIX}{}", number_to_hex_string(num, 8, true))
    }
}

/// VarInt header for a hex payload: its length in bytes.
pub fn encode_hex_length(hex: &str) -> String {
    encode_var_int((hex.len() / 2) as u64)
}
