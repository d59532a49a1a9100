//! This module provides the [FieldPrinter] trait together with the rendering rules
//! for the types that are supported out of the box.
//!
//! Rules fall into three groups:
//! * scalars that render their natural decimal or textual form,
//! * byte sequences that render as lowercase hexadecimal digits,
//! * wrappers (options, owning and shared pointers, references) that delegate
//!   to the rule of the wrapped type or render [NULL_TOKEN] if nothing is wrapped.

/// Module to define the general [FieldPrinter] trait and the default rule.
pub mod field_printer;
pub use field_printer::print;
pub use field_printer::print_display;
pub use field_printer::print_present;
pub use field_printer::Displayed;
pub use field_printer::FieldPrinter;
pub use field_printer::Null;
pub use field_printer::NULL_TOKEN;
/// Module to define rules for numbers, booleans and characters.
pub mod scalars;
/// Module to define rules for text.
pub mod text;
/// Module to define rules for byte sequences.
pub mod bytes;
pub use bytes::UnpaddedHex;
/// Module to define rules for types that wrap at most one other value.
pub mod wrappers;
