//! This module provides rules for types that hold at most one other value.
//!
//! Wrappers are transparent: a present value renders exactly like the wrapped
//! value itself, an absent one renders as [NULL_TOKEN](super::NULL_TOKEN).
//! Nullable pointers are spelled `Option<Box<T>>`, `Option<Rc<T>>` and so on,
//! or a [rc::Weak] pointer whose value was dropped.

use std::borrow::Cow;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use super::field_printer::{print_present, FieldPrinter};

impl<T: FieldPrinter> FieldPrinter for Option<T> {
    fn print_field(&self) -> String {
        print_present(self.as_ref())
    }
}

impl<T: FieldPrinter + ?Sized> FieldPrinter for Box<T> {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}

impl<T: FieldPrinter + ?Sized> FieldPrinter for Rc<T> {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}

impl<T: FieldPrinter + ?Sized> FieldPrinter for Arc<T> {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}

/// [rc::Weak]: renders the pointee while it is alive.
impl<T: FieldPrinter + ?Sized> FieldPrinter for rc::Weak<T> {
    fn print_field(&self) -> String {
        print_present(self.upgrade().as_deref())
    }
}

/// [sync::Weak]: renders the pointee while it is alive.
impl<T: FieldPrinter + ?Sized> FieldPrinter for sync::Weak<T> {
    fn print_field(&self) -> String {
        print_present(self.upgrade().as_deref())
    }
}

impl<B: FieldPrinter + ToOwned + ?Sized> FieldPrinter for Cow<'_, B> {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}

impl<T: FieldPrinter + ?Sized> FieldPrinter for &T {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}

impl<T: FieldPrinter + ?Sized> FieldPrinter for &mut T {
    fn print_field(&self) -> String {
        (**self).print_field()
    }
}
