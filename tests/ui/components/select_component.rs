use refdesk::ui::components::select_component::{SelectControl, DEFAULT_SELECT_VALUE, LUCY_ONLY, PICKER_OPTIONS};

#[test]
fn test_default_value_label() {
    let select = SelectControl::new(&PICKER_OPTIONS, DEFAULT_SELECT_VALUE);
    assert_eq!(select.value(), Some("lucy"));
    assert_eq!(select.label(), Some("Lucy"));
    assert!(!select.is_open());
}

#[test]
fn test_value_and_label_differ() {
    let mut select = SelectControl::new(&PICKER_OPTIONS, DEFAULT_SELECT_VALUE);
    assert_eq!(select.pick(2), Some("Yiminghe"));
    assert_eq!(select.label(), Some("yiminghe"));
}

#[test]
fn test_disabled_option_cannot_be_picked() {
    let mut select = SelectControl::new(&PICKER_OPTIONS, DEFAULT_SELECT_VALUE);
    assert_eq!(select.pick(3), None);
    assert_eq!(select.value(), Some("lucy"));
}

#[test]
fn test_disabled_select_stays_closed() {
    let mut select = SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).disabled();
    assert!(!select.open());
    assert!(!select.is_open());
}

#[test]
fn test_clear_requires_allow_clear() {
    let mut plain = SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).loading();
    assert!(plain.loading);
    assert!(!plain.clear());
    assert_eq!(plain.value(), Some("lucy"));

    let mut clearable = SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).allow_clear();
    assert!(clearable.clear());
    assert_eq!(clearable.value(), None);
    assert_eq!(clearable.label(), None);
    assert!(!clearable.clear());
}
