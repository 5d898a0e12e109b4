//! Column definitions for the reference table.
//!
//! Each column knows how to read its cell from a [`Record`], which filter
//! options it offers and how two records compare when the column is sorted.

use crate::dataset::Record;
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Identifier of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    Name,
    Age,
    Address,
}

impl ColumnKey {
    /// All columns in display order
    pub const ALL: [ColumnKey; 3] = [ColumnKey::Name, ColumnKey::Age, ColumnKey::Address];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Name => "name",
            ColumnKey::Age => "age",
            ColumnKey::Address => "address",
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            ColumnKey::Name => "Name",
            ColumnKey::Age => "Age",
            ColumnKey::Address => "Address",
        }
    }

    /// Predefined filter choices shown in the column's filter dropdown.
    /// Columns without choices cannot be filtered.
    #[must_use]
    pub fn filter_options(&self) -> &'static [FilterOption] {
        match self {
            ColumnKey::Name => &NAME_FILTERS,
            ColumnKey::Age => &[],
            ColumnKey::Address => &ADDRESS_FILTERS,
        }
    }

    #[must_use]
    pub fn is_filterable(&self) -> bool {
        !self.filter_options().is_empty()
    }

    /// String value of the cell, used for filtering and display.
    #[must_use]
    pub fn cell_text(&self, record: &Record) -> String {
        match self {
            ColumnKey::Name => record.name.clone(),
            ColumnKey::Age => record.age.to_string(),
            ColumnKey::Address => record.address.clone(),
        }
    }

    /// Ascending comparator for the column.
    ///
    /// Text columns compare by character count, not lexicographically.
    #[must_use]
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            ColumnKey::Name => a.name.chars().count().cmp(&b.name.chars().count()),
            ColumnKey::Age => a.age.cmp(&b.age),
            ColumnKey::Address => a.address.chars().count().cmp(&b.address.chars().count()),
        }
    }

    /// Whether the record passes a filter on this column with the given tokens.
    ///
    /// Any token contained in the cell (case-sensitive) is enough.
    #[must_use]
    pub fn accepts(&self, record: &Record, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let text = self.cell_text(record);
        tokens.iter().any(|token| text.contains(token.as_str()))
    }

    #[must_use]
    pub fn next(&self) -> ColumnKey {
        match self {
            ColumnKey::Name => ColumnKey::Age,
            ColumnKey::Age => ColumnKey::Address,
            ColumnKey::Address => ColumnKey::Name,
        }
    }

    #[must_use]
    pub fn previous(&self) -> ColumnKey {
        match self {
            ColumnKey::Name => ColumnKey::Address,
            ColumnKey::Age => ColumnKey::Name,
            ColumnKey::Address => ColumnKey::Age,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ColumnKey::Name),
            "age" => Ok(ColumnKey::Age),
            "address" => Ok(ColumnKey::Address),
            other => Err(TableError::UnknownColumn(other.to_string())),
        }
    }
}

/// A selectable filter choice: display text and the token it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub text: &'static str,
    pub value: &'static str,
}

const NAME_FILTERS: [FilterOption; 2] = [
    FilterOption { text: "Joe", value: "Joe" },
    FilterOption { text: "Jim", value: "Jim" },
];

const ADDRESS_FILTERS: [FilterOption; 2] = [
    FilterOption {
        text: "London",
        value: "London",
    },
    FilterOption {
        text: "New York",
        value: "New York",
    },
];
