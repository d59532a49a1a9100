//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record was dumped whose type has no table in the storage
    #[error("type `{type_name}` is not mapped to the storage")]
    TypeNotMapped {
        /// Name of the record type
        type_name: &'static str,
    },
    /// A table was registered twice, either for the same type or under the same name
    #[error("table `{table}` for type `{type_name}` is already registered")]
    DuplicateTable {
        /// Name of the table
        table: String,
        /// Name of the record type
        type_name: &'static str,
    },
}
