use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use refdesk::dataset::sample_records;
use refdesk::table::{ColumnKey, FilterState, Pagination, SortOrder, SortState, ViewChange};
use refdesk::ui::components::TableComponent;
use refdesk::ui::core::{
    actions::{Action, DialogType},
    Component,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded(filters: FilterState, sort: SortState, pagination: Pagination) -> TableComponent {
    let mut table = TableComponent::new();
    table.set_data(sample_records().to_vec(), filters, sort, pagination);
    table
}

fn expect_change(action: Action) -> ViewChange {
    match action {
        Action::TableChange(change) => change,
        other => panic!("expected a table change, got {:?}", other),
    }
}

fn screen(table: &mut TableComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_sort_key_cycles_focused_column() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    assert_eq!(table.focused_column(), ColumnKey::Name);

    let change = expect_change(table.handle_key_events(key(KeyCode::Char('s'))));
    assert_eq!(change.sorter.collapse(), SortState::new(ColumnKey::Name, SortOrder::Ascend));

    table.set_data(
        sample_records().to_vec(),
        FilterState::new(),
        SortState::new(ColumnKey::Name, SortOrder::Ascend),
        Pagination::default(),
    );
    let change = expect_change(table.handle_key_events(key(KeyCode::Char('s'))));
    assert_eq!(change.sorter.collapse(), SortState::new(ColumnKey::Name, SortOrder::Descend));

    table.set_data(
        sample_records().to_vec(),
        FilterState::new(),
        SortState::new(ColumnKey::Name, SortOrder::Descend),
        Pagination::default(),
    );
    let change = expect_change(table.handle_key_events(key(KeyCode::Char('s'))));
    let sort = change.sorter.collapse();
    assert_eq!(sort.column_key, Some(ColumnKey::Name));
    assert_eq!(sort.order, None);
}

#[test]
fn test_other_column_starts_at_ascend() {
    let mut table = loaded(
        FilterState::new().with(ColumnKey::Name, &["Jim"]),
        SortState::new(ColumnKey::Name, SortOrder::Descend),
        Pagination::new(2, 2),
    );
    let change = expect_change(table.cycle_sort(ColumnKey::Age));
    assert_eq!(change.sorter.collapse(), SortState::new(ColumnKey::Age, SortOrder::Ascend));
    // The change carries the current filters and goes back to the first page
    assert!(change.filters.is_filtered(ColumnKey::Name));
    assert_eq!(change.pagination.current, 1);
}

#[test]
fn test_filter_dropdown_confirms_checked_options() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    table.handle_key_events(key(KeyCode::Char('l')));
    table.handle_key_events(key(KeyCode::Char('l')));
    assert_eq!(table.focused_column(), ColumnKey::Address);

    assert_eq!(table.handle_key_events(key(KeyCode::Char('f'))), Action::None);
    assert!(table.is_dropdown_open());

    table.handle_key_events(key(KeyCode::Char(' ')));
    table.handle_key_events(key(KeyCode::Char('j')));
    table.handle_key_events(key(KeyCode::Char(' ')));
    let change = expect_change(table.handle_key_events(key(KeyCode::Enter)));

    assert!(!table.is_dropdown_open());
    assert_eq!(
        change.filters.get(ColumnKey::Address),
        Some(&["London".to_string(), "New York".to_string()][..])
    );
}

#[test]
fn test_dropdown_starts_from_current_filter() {
    let mut table = loaded(
        FilterState::new().with(ColumnKey::Name, &["Jim"]),
        SortState::default(),
        Pagination::default(),
    );
    table.open_filter(ColumnKey::Name);
    assert_eq!(table.dropdown().map(|d| d.checked.clone()), Some(vec!["Jim".to_string()]));
}

#[test]
fn test_reset_drops_column_filter_and_keeps_sort() {
    let sort = SortState::new(ColumnKey::Age, SortOrder::Ascend);
    let mut table = loaded(
        FilterState::new()
            .with(ColumnKey::Name, &["Jim"])
            .with(ColumnKey::Address, &["London"]),
        sort,
        Pagination::default(),
    );
    table.open_filter(ColumnKey::Address);
    let change = expect_change(table.handle_key_events(key(KeyCode::Char('r'))));

    assert!(!change.filters.is_filtered(ColumnKey::Address));
    assert!(change.filters.is_filtered(ColumnKey::Name));
    assert_eq!(change.sorter.collapse(), sort);
}

#[test]
fn test_escape_closes_without_change() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    table.open_filter(ColumnKey::Name);
    table.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(table.handle_key_events(key(KeyCode::Esc)), Action::None);
    assert!(!table.is_dropdown_open());
}

#[test]
fn test_age_filter_reports_info() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    match table.open_filter(ColumnKey::Age) {
        Action::ShowDialog(DialogType::Info(message)) => assert!(message.starts_with("Age")),
        other => panic!("expected an info dialog, got {:?}", other),
    }
    assert!(!table.is_dropdown_open());
}

#[test]
fn test_page_keys_report_pagination() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::new(1, 3));
    assert_eq!(table.page_rows().len(), 3);

    assert_eq!(table.handle_key_events(key(KeyCode::PageUp)), Action::None);
    let change = expect_change(table.handle_key_events(key(KeyCode::PageDown)));
    assert_eq!(change.pagination, Pagination::new(2, 3));

    table.set_data(
        sample_records().to_vec(),
        FilterState::new(),
        SortState::default(),
        change.pagination,
    );
    assert_eq!(table.page_rows().len(), 1);
    assert_eq!(table.handle_key_events(key(KeyCode::PageDown)), Action::None);
}

#[test]
fn test_row_selection_stays_on_page() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    for _ in 0..10 {
        table.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(table.selected_row(), 3);
    table.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(table.selected_row(), 2);
}

#[test]
fn test_render_rows_and_footer() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    let text = screen(&mut table, 90, 12);
    assert!(text.contains("John Brown"));
    assert!(text.contains("Sydney No. 1 Lake Park"));
    assert!(text.contains("4 rows  ‹ 1 / 1 ›"));
}

#[test]
fn test_render_empty_state() {
    let mut table = TableComponent::new();
    table.set_data(
        Vec::new(),
        FilterState::new().with(ColumnKey::Address, &["Paris"]),
        SortState::default(),
        Pagination::default(),
    );
    let text = screen(&mut table, 90, 12);
    assert!(text.contains("No data"));
    assert!(text.contains("0 rows"));
}

#[test]
fn test_click_on_scrolled_body_selects_visible_row() {
    let mut table = loaded(FilterState::new(), SortState::default(), Pagination::default());
    for _ in 0..3 {
        table.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(table.selected_row(), 3);

    // Two body lines fit, so the view scrolls to rows 2 and 3
    let lines: Vec<String> = screen(&mut table, 80, 7).lines().map(str::to_string).collect();
    assert!(lines[3].contains("Joe Black"));

    table.handle_mouse_events(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 5,
        row: 3,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(table.selected_row(), 2);
    assert_eq!(table.page_rows()[table.selected_row()].name, "Joe Black");
}
