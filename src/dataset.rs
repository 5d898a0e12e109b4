//! The static reference dataset shown in the table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub name: String,
    pub age: u32,
    pub address: String,
}

impl Record {
    pub fn new(key: &str, name: &str, age: u32, address: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            age,
            address: address.to_string(),
        }
    }
}

static SAMPLE_RECORDS: Lazy<Vec<Record>> = Lazy::new(|| {
    vec![
        Record::new("1", "John Brown", 32, "New York No. 1 Lake Park"),
        Record::new("2", "Jim Green", 42, "London No. 1 Lake Park"),
        Record::new("3", "Joe Black", 32, "Sydney No. 1 Lake Park"),
        Record::new("4", "Jim Red", 32, "London No. 2 Lake Park"),
    ]
});

/// The fixed, ordered dataset. It is never mutated; views only reorder or hide rows.
#[must_use]
pub fn sample_records() -> &'static [Record] {
    &SAMPLE_RECORDS
}
