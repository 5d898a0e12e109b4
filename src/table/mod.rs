//! Table view core: column definitions, view state, row projection and the
//! controller that owns filter and sort state.

pub mod column;
pub mod controller;
pub mod state;
pub mod view;

pub use column::{ColumnKey, FilterOption};
pub use controller::TableViewController;
pub use state::{FilterState, Pagination, RawSorter, SortOrder, SortState, SorterInput, ViewChange};
