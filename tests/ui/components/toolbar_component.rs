use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use refdesk::ui::components::toolbar_component::{ToolbarButton, ToolbarSlot};
use refdesk::ui::components::ToolbarComponent;
use refdesk::ui::core::{actions::Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_hotkeys_map_to_controller_actions() {
    let mut toolbar = ToolbarComponent::new();
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Char('a'))), Action::SortByAge);
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Char('c'))), Action::ClearFilters);
    assert_eq!(
        toolbar.handle_key_events(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
        Action::ClearAll
    );
    assert!(!toolbar.is_focused());
}

#[test]
fn test_focused_button_activates_on_enter() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.handle_key_events(key(KeyCode::Tab));
    toolbar.handle_key_events(key(KeyCode::Tab));
    assert_eq!(toolbar.focused_slot(), Some(ToolbarSlot::Button(ToolbarButton::ClearFilters)));
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Enter)), Action::ClearFilters);

    toolbar.handle_key_events(key(KeyCode::Esc));
    assert!(!toolbar.is_focused());
}

#[test]
fn test_back_tab_reaches_clearable_select() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(toolbar.focused_slot(), Some(ToolbarSlot::Select(3)));

    toolbar.handle_key_events(key(KeyCode::Delete));
    assert_eq!(toolbar.select(3).and_then(|s| s.value()), None);
}

#[test]
fn test_escape_closes_popup_before_blurring() {
    let mut toolbar = ToolbarComponent::new();
    for _ in 0..4 {
        toolbar.handle_key_events(key(KeyCode::Tab));
    }
    toolbar.handle_key_events(key(KeyCode::Enter));
    assert!(toolbar.picker().is_open());

    toolbar.handle_key_events(key(KeyCode::Esc));
    assert!(!toolbar.picker().is_open());
    assert!(toolbar.is_focused());
}

#[test]
fn test_click_on_button() {
    let mut toolbar = ToolbarComponent::new();
    let mut terminal = Terminal::new(TestBackend::new(140, 3)).unwrap();
    terminal.draw(|f| toolbar.render(f, f.area())).unwrap();

    assert_eq!(toolbar.handle_mouse_events(click(2, 1)), Action::SortByAge);
    assert_eq!(toolbar.focused_slot(), Some(ToolbarSlot::Button(ToolbarButton::SortAge)));

    // A click outside every slot drops focus
    assert_eq!(toolbar.handle_mouse_events(click(139, 1)), Action::None);
    assert!(!toolbar.is_focused());
}
