//! This module provides rules for numbers, booleans and characters.
//!
//! Most scalars use the [Display] based default rule. The one-byte integers and
//! [char] are promoted to a wider integer first, so that they always render as
//! decimal numbers.
//!
//! [Display]: std::fmt::Display

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};

use super::field_printer::{print_display, FieldPrinter};

crate::impl_field_printer_via_display!(
    i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64, bool,
);

crate::impl_field_printer_via_display!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

crate::impl_field_printer_via_display!(IpAddr, Ipv4Addr, Ipv6Addr);

impl FieldPrinter for u8 {
    fn print_field(&self) -> String {
        print_display(&u16::from(*self))
    }
}

impl FieldPrinter for i8 {
    fn print_field(&self) -> String {
        print_display(&i16::from(*self))
    }
}

/// Characters render as the decimal number of their Unicode scalar value, not as a glyph.
impl FieldPrinter for char {
    fn print_field(&self) -> String {
        print_display(&u32::from(*self))
    }
}
