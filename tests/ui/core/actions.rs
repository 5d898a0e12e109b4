use refdesk::table::{FilterState, Pagination, SortState, ViewChange};
use refdesk::ui::core::actions::{Action, DialogType, TabKey};

#[test]
fn test_tab_order() {
    assert_eq!(TabKey::default(), TabKey::List);
    assert_eq!(TabKey::List.index(), 0);
    assert_eq!(TabKey::Parallel.index(), 1);
    assert_eq!(TabKey::List.next(), TabKey::Parallel);
    assert_eq!(TabKey::Parallel.next(), TabKey::List);
}

#[test]
fn test_table_change_compares_by_payload() {
    let change = ViewChange::new(Pagination::default(), FilterState::new(), SortState::default());
    assert_eq!(Action::TableChange(change.clone()), Action::TableChange(change));
    assert_ne!(
        Action::ShowDialog(DialogType::Info("a".to_string())),
        Action::ShowDialog(DialogType::Error("a".to_string()))
    );
}
