use refdesk::table::{ColumnKey, Pagination, RawSorter, SortOrder, SortState, TableViewController, ViewChange};
use std::collections::BTreeMap;

fn raw_filters(entries: &[(&str, Option<&[&str]>)]) -> BTreeMap<String, Option<Vec<String>>> {
    entries
        .iter()
        .map(|(key, tokens)| {
            (
                key.to_string(),
                tokens.map(|t| t.iter().map(|s| s.to_string()).collect()),
            )
        })
        .collect()
}

#[test]
fn test_unknown_and_unfilterable_columns_are_dropped() {
    let filters = raw_filters(&[
        ("address", Some(&["London"][..])),
        ("age", Some(&["32"][..])),
        ("email", Some(&["x"][..])),
        ("name", None),
    ]);
    let change = ViewChange::from_raw(Pagination::default(), &filters, None);

    assert!(change.filters.is_filtered(ColumnKey::Address));
    assert!(!change.filters.is_filtered(ColumnKey::Age));
    assert!(!change.filters.is_filtered(ColumnKey::Name));
    assert!(change.sorter.collapse().is_empty());
}

#[test]
fn test_raw_sorter_is_parsed() {
    let sorter = RawSorter {
        column_key: Some("age".to_string()),
        order: Some("descend".to_string()),
    };
    let change = ViewChange::from_raw(Pagination::default(), &BTreeMap::new(), Some(&sorter));
    assert_eq!(change.sorter.collapse(), SortState::new(ColumnKey::Age, SortOrder::Descend));
}

#[test]
fn test_bad_raw_sorter_degrades_to_no_sort() {
    for (column, order) in [("email", "ascend"), ("name", "sideways")] {
        let sorter = RawSorter {
            column_key: Some(column.to_string()),
            order: Some(order.to_string()),
        };
        let change = ViewChange::from_raw(Pagination::default(), &BTreeMap::new(), Some(&sorter));
        assert!(change.sorter.collapse().is_empty());
    }
}

#[test]
fn test_raw_sorter_json_shape() {
    let sorter: RawSorter = serde_json::from_str(r#"{ "columnKey": "name", "order": "ascend" }"#).unwrap();
    assert_eq!(sorter.column_key.as_deref(), Some("name"));

    let mut controller = TableViewController::new();
    controller.apply(ViewChange::from_raw(Pagination::default(), &BTreeMap::new(), Some(&sorter)));
    assert_eq!(*controller.sort(), SortState::new(ColumnKey::Name, SortOrder::Ascend));
}
