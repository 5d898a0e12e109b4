//! Owner of the table's filter and sort state.
//!
//! The controller never drives the table. The table component reports every
//! user interaction through [`TableViewController::on_view_change`] with the
//! complete new state, and toolbar buttons call the remaining actions.

use crate::dataset::Record;
use crate::logger::Logger;
use crate::table::column::ColumnKey;
use crate::table::state::{FilterState, Pagination, SortOrder, SortState, SorterInput, ViewChange};
use crate::table::view;

#[derive(Debug, Default)]
pub struct TableViewController {
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
    logger: Option<Logger>,
}

impl TableViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror diagnostic records into the in-app log buffer
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pagination = Pagination::new(1, page_size);
        self
    }

    /// Replace filters and sort with what the table reports. No merging.
    pub fn on_view_change(&mut self, pagination: Pagination, filters: FilterState, sorter: SorterInput) {
        let message = format!(
            "Various parameters: pagination={:?} filters={:?} sorter={:?}",
            pagination, filters, sorter
        );
        match &self.logger {
            Some(logger) => logger.log(message),
            None => log::debug!("{}", message),
        }

        self.pagination = pagination;
        self.filters = filters;
        self.sort = sorter.collapse();
    }

    /// Convenience wrapper for a bundled [`ViewChange`]
    pub fn apply(&mut self, change: ViewChange) {
        self.on_view_change(change.pagination, change.filters, change.sorter);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    pub fn clear_all(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortState::default();
    }

    pub fn set_age_sort(&mut self) {
        self.sort = SortState::new(ColumnKey::Age, SortOrder::Descend);
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Visible rows of `records` under the current filters and sort.
    #[must_use]
    pub fn visible_rows<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        view::project(records, &self.filters, &self.sort)
    }
}
