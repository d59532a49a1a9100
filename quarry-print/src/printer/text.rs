//! This module provides rules for text. Text is returned unchanged,
//! without quoting or escaping.

use super::field_printer::FieldPrinter;

impl FieldPrinter for str {
    fn print_field(&self) -> String {
        self.to_owned()
    }
}

impl FieldPrinter for String {
    fn print_field(&self) -> String {
        self.clone()
    }
}
