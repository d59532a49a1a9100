//! This crate defines how single field values are rendered as text when
//! records are dumped for diagnostics. Every supported Rust type has exactly
//! one [FieldPrinter] rule, resolved statically: asking for the rule of an
//! unsupported type is a compile error, never a runtime fallback.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod hex;
pub mod printer;
pub mod value;

pub use printer::{
    print, print_display, print_present, Displayed, FieldPrinter, Null, UnpaddedHex, NULL_TOKEN,
};
pub use value::Value;
