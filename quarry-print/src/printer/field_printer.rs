//! This module defines the [FieldPrinter] trait, the absence token and the
//! default rule based on [Display].

use std::fmt::{Display, Write};

/// Text that is produced for every value that is structurally absent,
/// e.g. an empty [Option] or the [Null] singleton.
pub const NULL_TOKEN: &str = "null";

/// Trait for types that can be rendered as a human readable field value.
///
/// Each type has exactly one rule. Types that implement [Display] can opt into
/// the default rule with [impl_field_printer_via_display](crate::impl_field_printer_via_display)
/// or be wrapped in [Displayed] on the spot.
///
/// A type without a rule cannot be printed; this is rejected at compile time:
///
/// ```compile_fail,E0277
/// use quarry_print::print;
///
/// struct Opaque;
///
/// print(&Opaque);
/// ```
///
/// The same holds for wrappers around such a type:
///
/// ```compile_fail,E0277
/// use quarry_print::print;
///
/// struct Opaque;
///
/// print(&Some(Box::new(Opaque)));
/// ```
pub trait FieldPrinter {
    /// Return the textual representation of this value.
    fn print_field(&self) -> String;
}

/// Render a value using its [FieldPrinter] rule.
pub fn print<T: FieldPrinter + ?Sized>(value: &T) -> String {
    value.print_field()
}

/// The default rule: write the value into a fresh accumulator using its [Display]
/// implementation and return the accumulated text.
pub fn print_display<T: Display + ?Sized>(value: &T) -> String {
    let mut result = String::new();
    if write!(result, "{value}").is_err() {
        log::warn!("Display implementation returned an error, output is truncated: {result:?}");
    }
    result
}

/// Render the wrapped value if there is one, [NULL_TOKEN] otherwise.
///
/// This is the one rule shared by all single-slot containers.
pub fn print_present<T: FieldPrinter + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.print_field(),
        None => Null.print_field(),
    }
}

/// The null singleton. Always rendered as [NULL_TOKEN].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Null;

impl FieldPrinter for Null {
    fn print_field(&self) -> String {
        NULL_TOKEN.to_owned()
    }
}

impl FieldPrinter for () {
    fn print_field(&self) -> String {
        Null.print_field()
    }
}

/// Wrapper that renders any [Display] type through the default rule
/// without registering it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displayed<T>(pub T);

impl<T: Display> FieldPrinter for Displayed<T> {
    fn print_field(&self) -> String {
        print_display(&self.0)
    }
}

/// Register the [Display] based default rule for the given types.
///
/// ```
/// use std::fmt;
/// use quarry_print::{impl_field_printer_via_display, print};
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// impl_field_printer_via_display!(Celsius);
///
/// assert_eq!(print(&Celsius(21.5)), "21.5°C");
/// ```
#[macro_export]
macro_rules! impl_field_printer_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FieldPrinter for $ty {
                fn print_field(&self) -> ::std::string::String {
                    $crate::print_display(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod test {
    use std::fmt;

    use test_log::test;

    use super::{print, print_display, print_present, Displayed, FieldPrinter, Null, NULL_TOKEN};

    struct Point {
        x: i32,
        y: i32,
    }

    impl fmt::Display for Point {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.x, self.y)
        }
    }

    crate::impl_field_printer_via_display!(Point);

    #[test]
    fn null_renders_token() {
        assert_eq!(NULL_TOKEN, "null");
        assert_eq!(Null.print_field(), "null");
        assert_eq!(print(&()), "null");
    }

    #[test]
    fn registered_display_type() {
        let point = Point { x: 1, y: -2 };
        assert_eq!(print(&point), "(1, -2)");
        assert_eq!(print(&point), print_display(&point));
    }

    #[test]
    fn displayed_wrapper() {
        assert_eq!(print(&Displayed('x')), "x");
        assert_eq!(print(&Displayed(std::path::Path::new("a/b").display())), "a/b");
    }

    #[test]
    fn present_and_absent() {
        assert_eq!(print_present(Some(&42i32)), "42");
        assert_eq!(print_present::<i32>(None), "null");
        assert_eq!(print_present(Some("text")), "text");
    }
}
