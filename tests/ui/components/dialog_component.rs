use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use refdesk::logger::Logger;
use refdesk::ui::components::DialogComponent;
use refdesk::ui::core::{
    actions::{Action, DialogType},
    Component,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_help_scrolls_and_closes() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(dialog.is_visible());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Down)), Action::None);
    assert_eq!(dialog.scroll_offset(), 2);

    // Unrelated keys neither close nor scroll the help
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);

    let action = dialog.handle_key_events(key(KeyCode::Char('?')));
    assert_eq!(action, Action::HideDialog);
    dialog.update(action);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.scroll_offset(), 0);
}

#[test]
fn test_info_closes_on_any_other_key() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Info("Age: no filters".to_string())));

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('k'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog);
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None);
}

#[test]
fn test_logs_dialog_shows_buffer() {
    let logger = Logger::new();
    logger.log("hello from the buffer".to_string());

    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("hello from the buffer"));
}
