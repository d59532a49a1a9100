//! This module defines the [Record] trait for types that know their own [Table].

use crate::table::Table;

/// Trait for types that are mapped to a table.
///
/// Usually derived with `#[derive(Record)]`, which maps every named field to a
/// column of the same name. The derive understands `#[record(table = "...")]` on
/// the struct as well as `#[record(rename = "...")]` and `#[record(skip)]` on fields.
///
/// Only structs with named fields can be derived. Tuple structs are rejected:
///
/// ```compile_fail
/// use quarry::Record;
///
/// #[derive(Record)]
/// struct Pair(i32, i32);
/// ```
///
/// and so are enums:
///
/// ```compile_fail
/// use quarry::Record;
///
/// #[derive(Record)]
/// enum State {
///     Open,
///     Closed,
/// }
/// ```
///
/// Every dumped field needs a [FieldPrinter](quarry_print::FieldPrinter) rule:
///
/// ```compile_fail,E0277
/// use quarry::Record;
///
/// struct Opaque;
///
/// #[derive(Record)]
/// struct Holder {
///     value: Opaque,
/// }
/// ```
///
/// unless it is skipped:
///
/// ```
/// use quarry::Record;
///
/// struct Opaque;
///
/// #[derive(Record)]
/// struct Holder {
///     id: u32,
///     #[record(skip)]
///     value: Opaque,
/// }
///
/// let holder = Holder { id: 1, value: Opaque };
/// assert_eq!(Holder::table().dump(&holder), "{ id : '1' }");
/// ```
pub trait Record: Sized {
    /// Return the table that describes how records of this type are dumped.
    fn table() -> Table<Self>;
}
