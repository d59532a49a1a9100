//! This module defines [Column] and [Table], the mapping of a record type to
//! named fields.

use std::fmt;

use itertools::Itertools;
use quarry_print::FieldPrinter;

use crate::format::DumpFormat;

type Printer<O> = Box<dyn Fn(&O) -> String + Send + Sync>;

/// A named field of records of type `O`.
pub struct Column<O> {
    name: String,
    printer: Printer<O>,
}

impl<O> Column<O> {
    /// Create a column that renders the field returned by `accessor`
    /// with the [FieldPrinter] rule of its type.
    pub fn new<F, A>(name: impl Into<String>, accessor: A) -> Self
    where
        F: FieldPrinter + ?Sized,
        A: for<'a> Fn(&'a O) -> &'a F + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            printer: Box::new(move |record| accessor(record).print_field()),
        }
    }

    /// Create a column whose text is computed by `printer`,
    /// e.g. from a getter that returns an owned value.
    pub fn with_printer<P>(name: impl Into<String>, printer: P) -> Self
    where
        P: Fn(&O) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            printer: Box::new(printer),
        }
    }

    /// Return the name of the column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the field of `record` that belongs to this column.
    pub fn render(&self, record: &O) -> String {
        (self.printer)(record)
    }
}

impl<O> fmt::Debug for Column<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("name", &self.name).finish()
    }
}

/// Mapping of records of type `O` to a named table with ordered columns.
pub struct Table<O> {
    name: String,
    columns: Vec<Column<O>>,
}

impl<O> Table<O> {
    /// Create a table without columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column.
    pub fn column(mut self, column: Column<O>) -> Self {
        self.columns.push(column);
        self
    }

    /// Return the name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the columns in the order in which they are dumped.
    pub fn columns(&self) -> &[Column<O>] {
        &self.columns
    }

    /// Dump `record` using the default [DumpFormat].
    pub fn dump(&self, record: &O) -> String {
        self.dump_with(record, &DumpFormat::default())
    }

    /// Dump `record` using the given `format`.
    pub fn dump_with(&self, record: &O, format: &DumpFormat) -> String {
        if self.columns.is_empty() {
            return format.empty();
        }

        let fields = self
            .columns
            .iter()
            .map(|column| format.field(column.name(), &column.render(record)))
            .join(&format.field_separator);

        format!("{}{}{}", format.open, fields, format.close)
    }
}

impl<O> fmt::Debug for Table<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("columns", &self.columns)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::{Column, Table};
    use crate::format::DumpFormat;

    struct Account {
        id: u32,
        owner: String,
        flags: u8,
        secret: Option<Vec<u8>>,
    }

    impl Account {
        fn label(&self) -> String {
            format!("{}#{}", self.owner, self.id)
        }
    }

    fn table() -> Table<Account> {
        Table::new("accounts")
            .column(Column::new("id", |account: &Account| &account.id))
            .column(Column::new("owner", |account: &Account| account.owner.as_str()))
            .column(Column::new("flags", |account: &Account| &account.flags))
            .column(Column::new("secret", |account: &Account| &account.secret))
    }

    fn account() -> Account {
        Account {
            id: 3,
            owner: "Grace".to_owned(),
            flags: 65,
            secret: Some(vec![0x0a, 0xff]),
        }
    }

    #[test]
    fn dump_default_format() {
        assert_eq!(
            table().dump(&account()),
            "{ id : '3', owner : 'Grace', flags : '65', secret : '0aff' }"
        );
    }

    #[test]
    fn dump_absent_field() {
        let account = Account {
            secret: None,
            ..account()
        };

        assert_eq!(
            table().dump(&account),
            "{ id : '3', owner : 'Grace', flags : '65', secret : 'null' }"
        );
    }

    #[test]
    fn dump_custom_format() {
        let format = DumpFormat::default()
            .with_open("[")
            .with_close("]")
            .with_key_value_separator("=")
            .with_field_separator(";")
            .with_quote(None);

        assert_eq!(
            table().dump_with(&account(), &format),
            "[id=3;owner=Grace;flags=65;secret=0aff]"
        );
    }

    #[test]
    fn dump_without_columns() {
        assert_eq!(Table::<Account>::new("empty").dump(&account()), "{ }");
    }

    #[test]
    fn computed_column() {
        let table = Table::new("labels")
            .column(Column::with_printer("label", Account::label))
            .column(Column::with_printer("shared", |account: &Account| {
                quarry_print::print(&Rc::new(account.id))
            }));

        assert_eq!(table.dump(&account()), "{ label : 'Grace#3', shared : '3' }");
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.columns()[0].name(), "label");
        assert_eq!(table.name(), "labels");
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn dump_lists_every_field(id: u32, owner: String, flags: u8) -> bool {
        log::debug!("used values: id: {id}, owner: {owner:?}, flags: {flags}");

        let account = Account {
            id,
            owner: owner.clone(),
            flags,
            secret: None,
        };

        table().dump(&account)
            == format!("{{ id : '{id}', owner : '{owner}', flags : '{flags}', secret : 'null' }}")
    }
}
