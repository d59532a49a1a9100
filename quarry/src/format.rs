//! This module defines [DumpFormat], the layout of a dumped record.

use serde::{Deserialize, Serialize};

/// Layout of a dumped record.
///
/// The default layout renders a record as `{ id : '1', name : 'Ada' }`.
/// Missing fields fall back to their default when deserialized, so a
/// configuration may override only the parts it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpFormat {
    /// Text in front of the first field
    pub open: String,
    /// Text after the last field
    pub close: String,
    /// Text between a column name and its value
    pub key_value_separator: String,
    /// Text between two fields
    pub field_separator: String,
    /// Character surrounding each value
    pub quote: Option<char>,
}

impl Default for DumpFormat {
    fn default() -> Self {
        Self {
            open: "{ ".to_owned(),
            close: " }".to_owned(),
            key_value_separator: " : ".to_owned(),
            field_separator: ", ".to_owned(),
            quote: Some('\''),
        }
    }
}

impl DumpFormat {
    /// Set the text in front of the first field.
    pub fn with_open(mut self, open: impl Into<String>) -> Self {
        self.open = open.into();
        self
    }

    /// Set the text after the last field.
    pub fn with_close(mut self, close: impl Into<String>) -> Self {
        self.close = close.into();
        self
    }

    /// Set the text between a column name and its value.
    pub fn with_key_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_value_separator = separator.into();
        self
    }

    /// Set the text between two fields.
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// Set the character surrounding each value, or `None` to leave values unquoted.
    pub fn with_quote(mut self, quote: Option<char>) -> Self {
        self.quote = quote;
        self
    }

    /// Render a single `name`/`value` pair.
    pub(crate) fn field(&self, name: &str, value: &str) -> String {
        let mut result = String::with_capacity(
            name.len() + self.key_value_separator.len() + value.len() + 2,
        );
        result.push_str(name);
        result.push_str(&self.key_value_separator);
        result.extend(self.quote);
        result.push_str(value);
        result.extend(self.quote);
        result
    }

    /// Render a record without fields.
    pub(crate) fn empty(&self) -> String {
        format!("{} {}", self.open.trim_end(), self.close.trim_start())
    }
}
