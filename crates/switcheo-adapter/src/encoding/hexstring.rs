/*
[INPUT]:  Unsigned integers, byte widths and hex strings
[OUTPUT]: Zero-padded lowercase hex strings, optionally little endian
[POS]:    Encoding layer - primitive number to hex conversion
[UPDATE]: When changing padding or byte order rules
*/

/// Convert `number` to a lowercase hex string at least `size` bytes wide.
///
/// Values shorter than `size * 2` characters are left-padded with `'0'`.
/// Values that already fill the width are returned at their natural length,
/// so an oversized number produces more than `size * 2` characters. The
/// result always holds whole bytes: an odd natural length gains one leading
/// `'0'`.
///
/// With `little_endian` set the padded string is reversed byte pair by byte
/// pair (see [`reverse_hex_byte_pairs`]).
///
/// ```text
/// number_to_hex_string(256, 2, false) == "0100"
/// number_to_hex_string(256, 2, true)  == "0001"
/// ```
pub fn number_to_hex_string(number: u64, size: usize, little_endian: bool) -> String {
    let digits = format!("{number:x}");
    let width = hex_width(size).max(digits.len());
    let mut hex = String::with_capacity(width.saturating_add(1));
    if width % 2 != 0 {
        hex.push('0');
    }
    hex.extend(std::iter::repeat_n('0', width - digits.len()));
    hex.push_str(&digits);

    if little_endian {
        reverse_hex_byte_pairs(&hex)
    } else {
        hex
    }
}

/// Hex characters needed for `size` bytes
fn hex_width(size: usize) -> usize {
    size.saturating_mul(2)
}

/// Reverse the order of the 2-character groups in `hex`.
///
/// Characters inside a pair keep their order. On odd-length input the final
/// single character is treated as its own group and moved to the front.
pub fn reverse_hex_byte_pairs(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    chars.chunks(2).rev().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, false, "00")]
    #[case(255, 1, false, "ff")]
    #[case(256, 2, false, "0100")]
    #[case(256, 2, true, "0001")]
    #[case(0xfd, 2, true, "fd00")]
    #[case(0x10000, 4, true, "00000100")]
    #[case(1, 8, false, "0000000000000001")]
    fn test_number_to_hex_string(
        #[case] number: u64,
        #[case] size: usize,
        #[case] little_endian: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(number_to_hex_string(number, size, little_endian), expected);
    }

    #[test]
    fn test_padded_length_matches_size() {
        for size in 1..=8usize {
            let max = if size == 8 {
                u64::MAX
            } else {
                (1u64 << (size * 8)) - 1
            };
            for number in [0, 1, max / 2, max] {
                assert_eq!(number_to_hex_string(number, size, false).len(), size * 2);
                assert_eq!(number_to_hex_string(number, size, true).len(), size * 2);
            }
        }
    }

    #[test]
    fn test_oversized_number_is_not_truncated() {
        assert_eq!(number_to_hex_string(0x1234, 1, false), "1234");
        assert_eq!(number_to_hex_string(0x123, 1, false), "0123");
        assert_eq!(number_to_hex_string(0x123, 1, true), "2301");
    }

    #[test]
    fn test_zero_size_keeps_whole_bytes() {
        assert_eq!(number_to_hex_string(0, 0, false), "00");
        assert_eq!(number_to_hex_string(0xabc, 0, false), "0abc");
    }

    #[test]
    fn test_hex_width_saturates() {
        assert_eq!(hex_width(4), 8);
        assert_eq!(hex_width(usize::MAX / 2 + 1), usize::MAX);
        assert_eq!(hex_width(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_wide_padding() {
        let hex = number_to_hex_string(0xab, 40_000, true);
        assert_eq!(hex.len(), 80_000);
        assert!(hex.starts_with("ab"));
        assert!(hex[2..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_reverse_hex_byte_pairs() {
        assert_eq!(reverse_hex_byte_pairs("aabbcc"), "ccbbaa");
        assert_eq!(reverse_hex_byte_pairs("0100"), "0001");
        assert_eq!(reverse_hex_byte_pairs(""), "");
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        for hex in ["aabbcc", "00", "0123456789abcdef", ""] {
            assert_eq!(reverse_hex_byte_pairs(&reverse_hex_byte_pairs(hex)), hex);
        }
    }

    #[test]
    fn test_reverse_odd_length_passes_through_tail() {
        assert_eq!(reverse_hex_byte_pairs("abc"), "cab");
    }
}
