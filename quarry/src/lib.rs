//! Record dumps for object-relational mappings.
//!
//! A [Table] maps a Rust type to a named list of columns. A [Storage] holds the
//! tables of all mapped types and renders any mapped record as a human readable
//! line, using the [FieldPrinter] rule of each column's type:
//!
//! ```
//! use quarry::{Record, Storage};
//!
//! #[derive(Record)]
//! struct User {
//!     id: i64,
//!     name: String,
//!     avatar: Option<Vec<u8>>,
//! }
//!
//! let storage = Storage::builder().record::<User>().build()?;
//! let user = User { id: 1, name: "Ada".to_owned(), avatar: None };
//!
//! assert_eq!(storage.dump(&user)?, "{ id : '1', name : 'Ada', avatar : 'null' }");
//! # Ok::<(), quarry::error::Error>(())
//! ```

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
    variant_size_differences
)]

/// The crate that defines how single field values are rendered.
pub extern crate quarry_print;

pub mod error;
pub mod format;
pub mod record;
pub mod storage;
pub mod table;

pub use format::DumpFormat;
pub use macros::Record;
pub use record::Record;
pub use storage::{Storage, StorageBuilder};
pub use table::{Column, Table};

// field printing is part of our API, so re-export it here.
pub use quarry_print::{
    impl_field_printer_via_display, print, Displayed, FieldPrinter, Null, UnpaddedHex, Value,
    NULL_TOKEN,
};
