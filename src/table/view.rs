//! Row projection: which records are visible and in what order.

use crate::dataset::Record;
use crate::table::column::ColumnKey;
use crate::table::state::{FilterState, SortOrder, SortState};

/// Whether a record passes every active column filter.
#[must_use]
pub fn matches_filters(record: &Record, filters: &FilterState) -> bool {
    filters.iter().all(|(column, tokens)| column.accepts(record, tokens))
}

/// Filter then sort the records. The sort is stable, so ties keep dataset order.
#[must_use]
pub fn project<'a>(records: &'a [Record], filters: &FilterState, sort: &SortState) -> Vec<&'a Record> {
    let mut rows: Vec<&Record> = records.iter().filter(|r| matches_filters(r, filters)).collect();

    if let Some((column, order)) = sort.active() {
        sort_rows(&mut rows, column, order);
    }

    rows
}

fn sort_rows(rows: &mut [&Record], column: ColumnKey, order: SortOrder) {
    // slice::sort_by is stable
    match order {
        SortOrder::Ascend => rows.sort_by(|a, b| column.compare(a, b)),
        SortOrder::Descend => rows.sort_by(|a, b| column.compare(b, a)),
    }
}
