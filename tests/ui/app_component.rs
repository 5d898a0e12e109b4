use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use refdesk::config::Config;
use refdesk::icons::IconTheme;
use refdesk::logger::Logger;
use refdesk::table::{ColumnKey, SortOrder, SortState};
use refdesk::theme::Theme;
use refdesk::ui::app_component::{AppComponent, AppState};
use refdesk::ui::core::{actions::DialogType, Component, EventType, TabKey};

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new(), Theme::default())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    let modifiers = match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers))).unwrap();
}

fn visible_keys(app: &AppComponent) -> Vec<String> {
    app.table().page_rows().iter().map(|r| r.key.clone()).collect()
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(170, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.active_tab, TabKey::List);
    assert!(state.selected_key.is_empty());
}

#[test]
fn test_initial_view() {
    let app = app();
    assert!(!app.should_quit());
    assert_eq!(app.state().selected_key, "7");
    assert!(app.controller().filters().is_empty());
    assert!(app.controller().sort().is_empty());
    assert_eq!(visible_keys(&app), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_header_sort_flows_through_controller() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(*app.controller().sort(), SortState::new(ColumnKey::Name, SortOrder::Ascend));
    assert_eq!(visible_keys(&app), vec!["4", "2", "3", "1"]);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(*app.controller().sort(), SortState::new(ColumnKey::Name, SortOrder::Descend));

    press(&mut app, KeyCode::Char('s'));
    assert!(app.controller().sort().is_empty());
    assert_eq!(visible_keys(&app), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_filter_then_toolbar_clears() {
    let mut app = app();

    // Address column, check "London", apply
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert!(app.controller().filters().is_filtered(ColumnKey::Address));
    assert_eq!(visible_keys(&app), vec!["2", "4"]);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(*app.controller().sort(), SortState::new(ColumnKey::Age, SortOrder::Descend));
    assert_eq!(visible_keys(&app), vec!["2", "4"]);

    // Clear filters keeps the age sort
    press(&mut app, KeyCode::Char('c'));
    assert!(app.controller().filters().is_empty());
    assert_eq!(visible_keys(&app), vec!["2", "1", "3", "4"]);

    press(&mut app, KeyCode::Char('C'));
    assert!(app.controller().sort().is_empty());
    assert_eq!(visible_keys(&app), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_picker_change_resets_view_state() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert!(!app.controller().sort().is_empty());

    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.toolbar().picker().value(), Some("Yiminghe"));
    assert!(app.controller().sort().is_empty());
    assert!(app.controller().filters().is_empty());
}

#[test]
fn test_age_filter_shows_info_dialog() {
    let mut app = app();
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('f'));
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Info(_))));

    // Any key dismisses the notice without reaching the table
    press(&mut app, KeyCode::Char('s'));
    assert!(!app.dialog().is_visible());
    assert!(app.controller().sort().is_empty());
}

#[test]
fn test_escape_closes_dropdown_before_quitting() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    assert!(app.table().is_dropdown_open());

    press(&mut app, KeyCode::Esc);
    assert!(!app.table().is_dropdown_open());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_sidebar_navigation_updates_selection() {
    let mut app = app();
    press(&mut app, KeyCode::Char('J'));
    assert_eq!(app.state().selected_key, "8");
    assert_eq!(app.sidebar().selected_key, "8");

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.sidebar().collapsed);
}

#[test]
fn test_parallel_tab_hides_table() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, TabKey::Parallel);

    let text = screen(&mut app);
    assert!(text.contains("Content of Tab Pane 2"));
    assert!(!text.contains("John Brown"));

    // Table keys do nothing off the list tab
    press(&mut app, KeyCode::Char('s'));
    assert!(app.controller().sort().is_empty());

    press(&mut app, KeyCode::Char('1'));
    assert!(screen(&mut app).contains("John Brown"));
}

#[test]
fn test_render_shell() {
    let mut app = app();
    let text = screen(&mut app);
    assert!(text.contains("REFDESK"));
    assert!(text.contains("Справочники"));
    assert!(text.contains("Sort age"));
    assert!(text.contains("Jim Green"));
}

#[test]
fn test_icon_theme_cycles() {
    let mut app = app();
    assert_eq!(app.icons().theme(), IconTheme::Unicode);
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.icons().theme(), IconTheme::Emoji);
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));
    press(&mut app, KeyCode::Char('?'));
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    assert!(screen(&mut app).contains("Various parameters"));

    // 'q' closes the logs instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_broken_theme_file_opens_error_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let tokens = dir.path().join("tokens.json");
    std::fs::write(&tokens, "{ not json").unwrap();

    let mut config = Config::default();
    config.theme.tokens_file = Some(tokens);
    let mut app = AppComponent::from_config(&config, Logger::new());

    match &app.dialog().dialog_type {
        Some(DialogType::Error(message)) => assert!(message.contains("tokens.json")),
        other => panic!("expected error dialog, got {:?}", other),
    }
    assert!(screen(&mut app).contains("Error"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_valid_config_has_no_startup_dialog() {
    let app = AppComponent::from_config(&Config::default(), Logger::new());
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_shift_down_onto_folded_submenu_stays_in_sidebar() {
    let mut config = Config::default();
    config.ui.default_menu_key = "4".to_string();
    let mut app = AppComponent::new(&config, Logger::new(), Theme::default());
    assert_eq!(app.table().selected_row(), 0);

    // The next stop after "4" is the folded submenu header
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT)))
        .unwrap();
    assert_eq!(app.table().selected_row(), 0);
    assert_eq!(app.state().selected_key, "4");

    press(&mut app, KeyCode::Down);
    assert_eq!(app.table().selected_row(), 1);
}
