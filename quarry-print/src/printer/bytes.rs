//! This module provides rules for byte sequences.
//!
//! Bytes render as lowercase hexadecimal digits without separators or prefix.
//! Each byte always takes two digits, so that the output can be decoded again
//! unambiguously. [UnpaddedHex] produces the shorter variant in which each byte
//! takes as few digits as possible.

use super::field_printer::FieldPrinter;
use crate::hex;

impl FieldPrinter for [u8] {
    fn print_field(&self) -> String {
        hex::encode(self)
    }
}

impl FieldPrinter for Vec<u8> {
    fn print_field(&self) -> String {
        self.as_slice().print_field()
    }
}

impl<const N: usize> FieldPrinter for [u8; N] {
    fn print_field(&self) -> String {
        self.as_slice().print_field()
    }
}

/// Renders a byte sequence with the minimal number of hexadecimal digits per byte,
/// e.g. byte `5` becomes `5` instead of `05`.
///
/// The result is not decodable in general, since byte boundaries are lost.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpaddedHex<'a>(pub &'a [u8]);

impl FieldPrinter for UnpaddedHex<'_> {
    fn print_field(&self) -> String {
        hex::encode_unpadded(self.0)
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;
    use std::rc::Rc;

    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::UnpaddedHex;
    use crate::printer::print;

    #[test]
    fn bytes_render_as_padded_hex() {
        assert_eq!(print(&vec![10u8, 255, 0]), "0aff00");
        assert_eq!(print(&[0xdeu8, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(print(&b"AZ"[..]), "415a");
        assert_eq!(print(&Vec::<u8>::new()), "");
    }

    #[test]
    fn bytes_render_as_unpadded_hex() {
        assert_eq!(print(&UnpaddedHex(&[10, 255, 0])), "aff0");
        assert_eq!(print(&UnpaddedHex(&[5, 16])), "510");
        assert_eq!(print(&UnpaddedHex(&[])), "");
    }

    #[test]
    fn wrapped_bytes() {
        let blob: Box<[u8]> = vec![1, 2].into_boxed_slice();
        assert_eq!(print(&blob), "0102");
        assert_eq!(print(&Rc::new(vec![0xabu8])), "ab");
        assert_eq!(print(&Cow::Borrowed(&[0x7fu8][..])), "7f");
        assert_eq!(print(&Some(vec![0u8])), "00");
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn hex_is_dense_and_lowercase(bytes: Vec<u8>) -> bool {
        let text = print(&bytes);

        text.len() == 2 * bytes.len()
            && text
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn hex_is_lossless(bytes: Vec<u8>) -> bool {
        let text = print(&bytes);
        let decoded = (0..text.len())
            .step_by(2)
            .map(|index| u8::from_str_radix(&text[index..index + 2], 16))
            .collect::<Result<Vec<u8>, _>>();

        decoded == Ok(bytes)
    }
}
