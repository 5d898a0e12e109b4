//! Filter, sort and pagination state exchanged between the table view and
//! its controller.

use crate::error::TableError;
use crate::table::column::ColumnKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Active column filters: accepted tokens per column.
///
/// A missing column, or one mapped to no tokens, is unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    columns: BTreeMap<ColumnKey, Vec<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter state with a single column filtered by the given tokens
    pub fn with(mut self, column: ColumnKey, tokens: &[&str]) -> Self {
        self.set(column, tokens.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Replace the tokens for one column. Empty tokens unfilter the column.
    pub fn set(&mut self, column: ColumnKey, tokens: Vec<String>) {
        if tokens.is_empty() {
            self.columns.remove(&column);
        } else {
            self.columns.insert(column, tokens);
        }
    }

    pub fn remove(&mut self, column: ColumnKey) {
        self.columns.remove(&column);
    }

    #[must_use]
    pub fn get(&self, column: ColumnKey) -> Option<&[String]> {
        self.columns.get(&column).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_filtered(&self, column: ColumnKey) -> bool {
        self.get(column).is_some_and(|tokens| !tokens.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColumnKey, &[String])> {
        self.columns.iter().map(|(key, tokens)| (*key, tokens.as_slice()))
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(key, tokens)| format!("{}={}", key, tokens.join("|")))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascend,
    Descend,
}

impl SortOrder {
    /// Next direction when a column header is activated repeatedly:
    /// none -> ascend -> descend -> none.
    #[must_use]
    pub fn cycle(current: Option<SortOrder>) -> Option<SortOrder> {
        match current {
            None => Some(SortOrder::Ascend),
            Some(SortOrder::Ascend) => Some(SortOrder::Descend),
            Some(SortOrder::Descend) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascend => "ascend",
            SortOrder::Descend => "descend",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascend" => Ok(SortOrder::Ascend),
            "descend" => Ok(SortOrder::Descend),
            other => Err(TableError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// The single active sort descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_key: Option<ColumnKey>,
    pub order: Option<SortOrder>,
}

impl SortState {
    pub fn new(column_key: ColumnKey, order: SortOrder) -> Self {
        Self {
            column_key: Some(column_key),
            order: Some(order),
        }
    }

    /// Sort applies only when both a column and a direction are present
    #[must_use]
    pub fn active(&self) -> Option<(ColumnKey, SortOrder)> {
        match (self.column_key, self.order) {
            (Some(column), Some(order)) => Some((column, order)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().is_none()
    }

    /// Direction shown on a column header.
    #[must_use]
    pub fn order_for(&self, column: ColumnKey) -> Option<SortOrder> {
        match self.active() {
            Some((key, order)) if key == column => Some(order),
            _ => None,
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active() {
            Some((column, order)) => write!(f, "{} {}", column, order.as_str()),
            None => f.write_str("none"),
        }
    }
}

/// Sorter payload as delivered by the table: one descriptor, or several when
/// the table runs in multi-sort mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SorterInput {
    Single(SortState),
    Multiple(Vec<SortState>),
}

impl SorterInput {
    /// Collapse to one descriptor: the first active one, or none.
    #[must_use]
    pub fn collapse(self) -> SortState {
        match self {
            SorterInput::Single(state) => state,
            SorterInput::Multiple(states) => states
                .into_iter()
                .find(|state| !state.is_empty())
                .unwrap_or_default(),
        }
    }
}

impl From<SortState> for SorterInput {
    fn from(state: SortState) -> Self {
        SorterInput::Single(state)
    }
}

/// Current page and page size of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number
    pub current: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: crate::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(current: usize, page_size: usize) -> Self {
        Self {
            current: current.max(1),
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Clamp the current page into the range available for `total_rows`.
    #[must_use]
    pub fn clamped(&self, total_rows: usize) -> Pagination {
        Pagination {
            current: self.current.clamp(1, self.page_count(total_rows)),
            page_size: self.page_size,
        }
    }

    /// Half-open row range of the current page.
    #[must_use]
    pub fn range(&self, total_rows: usize) -> std::ops::Range<usize> {
        let page = self.clamped(total_rows);
        let start = ((page.current - 1) * page.page_size).min(total_rows);
        let end = (start + page.page_size).min(total_rows);
        start..end
    }
}

/// Sorter payload with untyped keys, as a less trusted producer would send it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSorter {
    pub column_key: Option<String>,
    pub order: Option<String>,
}

/// A complete table interaction: the new pagination, filters and sorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewChange {
    pub pagination: Pagination,
    pub filters: FilterState,
    pub sorter: SorterInput,
}

impl ViewChange {
    pub fn new(pagination: Pagination, filters: FilterState, sorter: impl Into<SorterInput>) -> Self {
        Self {
            pagination,
            filters,
            sorter: sorter.into(),
        }
    }

    /// Interpret a string-keyed payload.
    ///
    /// Filters on unknown or unfilterable columns are dropped, `None` token
    /// lists mean "unfiltered", and a sorter that does not name a known
    /// column with a known direction degrades to no sort.
    pub fn from_raw(
        pagination: Pagination,
        raw_filters: &BTreeMap<String, Option<Vec<String>>>,
        raw_sorter: Option<&RawSorter>,
    ) -> Self {
        let mut filters = FilterState::new();
        for (key, tokens) in raw_filters {
            match parse_filter_column(key) {
                Ok(column) => {
                    if let Some(tokens) = tokens {
                        filters.set(column, tokens.clone());
                    }
                }
                Err(e) => log::warn!("Dropping filter: {}", e),
            }
        }

        let sort = match raw_sorter {
            Some(raw) => parse_sorter(raw).unwrap_or_else(|e| {
                log::warn!("Dropping sorter: {}", e);
                SortState::default()
            }),
            None => SortState::default(),
        };

        Self::new(pagination, filters, sort)
    }
}

fn parse_filter_column(key: &str) -> Result<ColumnKey, TableError> {
    let column: ColumnKey = key.parse()?;
    if !column.is_filterable() {
        return Err(TableError::NotFilterable(key.to_string()));
    }
    Ok(column)
}

fn parse_sorter(raw: &RawSorter) -> Result<SortState, TableError> {
    let (Some(key), Some(order)) = (raw.column_key.as_deref(), raw.order.as_deref()) else {
        return Ok(SortState::default());
    };
    let column: ColumnKey = key.parse()?;
    Ok(SortState::new(column, order.parse()?))
}
