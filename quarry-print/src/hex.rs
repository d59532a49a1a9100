//! This module provides the hexadecimal encoders used to dump byte sequences.

use macros::traced;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn high_digit(byte: u8) -> char {
    char::from(DIGITS[usize::from(byte >> 4)])
}

fn low_digit(byte: u8) -> char {
    char::from(DIGITS[usize::from(byte & 0x0f)])
}

/// Encode `bytes` as lowercase hexadecimal text, two digits per byte.
#[traced("quarry_print::hex")]
pub fn encode(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(2 * bytes.len());
    for &byte in bytes {
        result.push(high_digit(byte));
        result.push(low_digit(byte));
    }
    result
}

/// Encode `bytes` as lowercase hexadecimal text, using one digit for bytes below `0x10`.
#[traced("quarry_print::hex")]
pub fn encode_unpadded(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(2 * bytes.len());
    for &byte in bytes {
        if byte > 0x0f {
            result.push(high_digit(byte));
        }
        result.push(low_digit(byte));
    }
    result
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::{encode, encode_unpadded};

    #[test]
    fn padded() {
        assert_eq!(encode(&[0x00, 0x05, 0x10, 0xff]), "000510ff");
    }

    #[test]
    fn unpadded() {
        assert_eq!(encode_unpadded(&[0x00, 0x05, 0x10, 0xff]), "0510ff");
        assert_eq!(encode_unpadded(&[0x0a, 0xff, 0x00]), "aff0");
    }

    #[test]
    fn same_output_for_large_bytes() {
        let bytes = [0x10, 0xab, 0xcd, 0xef];
        assert_eq!(encode(&bytes), encode_unpadded(&bytes));
    }
}
