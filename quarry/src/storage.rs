//! This module defines [Storage], the collection of all mapped tables,
//! and its [StorageBuilder].

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    fmt,
};

use crate::{error::Error, format::DumpFormat, record::Record, table::Table};

/// Table of some record type, together with the information needed to look it up.
struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    table_name: String,
    table: Box<dyn Any + Send + Sync>,
}

impl Entry {
    fn new<O: 'static>(table: Table<O>) -> Self {
        Self {
            type_id: TypeId::of::<O>(),
            type_name: type_name::<O>(),
            table_name: table.name().to_owned(),
            table: Box::new(table),
        }
    }
}

/// Builder for a [Storage].
#[derive(Default)]
pub struct StorageBuilder {
    entries: Vec<Entry>,
    format: DumpFormat,
}

impl StorageBuilder {
    /// Register the table of records of type `O`.
    pub fn table<O: 'static>(mut self, table: Table<O>) -> Self {
        self.entries.push(Entry::new(table));
        self
    }

    /// Register the table that the [Record] type `O` describes itself.
    pub fn record<O: Record + 'static>(self) -> Self {
        self.table(O::table())
    }

    /// Set the layout used by [Storage::dump].
    pub fn format(mut self, format: DumpFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the storage.
    ///
    /// # Errors
    /// Returns [Error::DuplicateTable] if two tables were registered for the
    /// same type or under the same name.
    pub fn build(self) -> Result<Storage, Error> {
        let mut tables = HashMap::with_capacity(self.entries.len());
        let mut names = HashMap::with_capacity(self.entries.len());

        for entry in self.entries {
            if tables.contains_key(&entry.type_id) || names.contains_key(&entry.table_name) {
                return Err(Error::DuplicateTable {
                    table: entry.table_name,
                    type_name: entry.type_name,
                });
            }

            log::debug!(
                "registered table `{}` for type `{}`",
                entry.table_name,
                entry.type_name
            );

            names.insert(entry.table_name.clone(), entry.type_id);
            tables.insert(entry.type_id, entry);
        }

        Ok(Storage {
            tables,
            format: self.format,
        })
    }
}

impl fmt::Debug for StorageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageBuilder")
            .field(
                "tables",
                &self
                    .entries
                    .iter()
                    .map(|entry| &entry.table_name)
                    .collect::<Vec<_>>(),
            )
            .field("format", &self.format)
            .finish()
    }
}

/// Collection of the tables of all mapped record types.
///
/// A storage does not change after it was built and can be shared between threads.
pub struct Storage {
    tables: HashMap<TypeId, Entry>,
    format: DumpFormat,
}

impl Storage {
    /// Start building a storage.
    pub fn builder() -> StorageBuilder {
        StorageBuilder::default()
    }

    /// Return the table of records of type `O`, if one is registered.
    pub fn table<O: 'static>(&self) -> Option<&Table<O>> {
        self.tables
            .get(&TypeId::of::<O>())
            .and_then(|entry| entry.table.downcast_ref::<Table<O>>())
    }

    /// Return the name of the table of records of type `O`, if one is registered.
    pub fn table_name<O: 'static>(&self) -> Option<&str> {
        self.table::<O>().map(Table::name)
    }

    /// Return the number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Return `true` if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Return the layout used by [Storage::dump].
    pub fn format(&self) -> &DumpFormat {
        &self.format
    }

    /// Render `record` as a human readable line,
    /// e.g. `{ id : '1', name : 'Ada' }` with the default [DumpFormat].
    ///
    /// # Errors
    /// Returns [Error::TypeNotMapped] if no table is registered for `O`.
    pub fn dump<O: 'static>(&self, record: &O) -> Result<String, Error> {
        let table = self.table::<O>().ok_or(Error::TypeNotMapped {
            type_name: type_name::<O>(),
        })?;

        Ok(table.dump_with(record, &self.format))
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field(
                "tables",
                &self
                    .tables
                    .values()
                    .map(|entry| (&entry.table_name, entry.type_name))
                    .collect::<Vec<_>>(),
            )
            .field("format", &self.format)
            .finish()
    }
}
