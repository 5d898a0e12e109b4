use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use refdesk::constants::SIDEBAR_COLLAPSED_WIDTH;
use refdesk::ui::components::sidebar_item_component::SidebarItem;
use refdesk::ui::components::SidebarComponent;
use refdesk::ui::core::{actions::Action, Component};

fn shift(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

fn visible_keys(sidebar: &SidebarComponent) -> Vec<String> {
    sidebar
        .items()
        .iter()
        .filter_map(|item| item.key().map(str::to_string))
        .collect()
}

#[test]
fn test_default_selection() {
    let sidebar = SidebarComponent::default();
    assert_eq!(sidebar.selected_key, "7");
    assert_eq!(visible_keys(&sidebar), vec!["1", "2", "3", "4", "sub1", "7", "8"]);
}

#[test]
fn test_enter_unfolds_submenu_under_cursor() {
    let mut sidebar = SidebarComponent::default();

    // From "7" the previous stop is the folded submenu header
    assert_eq!(sidebar.handle_key_events(shift('K')), Action::None);
    assert!(sidebar.cursor_on_submenu());

    sidebar.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(visible_keys(&sidebar).contains(&"5".to_string()));

    assert_eq!(sidebar.handle_key_events(shift('J')), Action::NavigateToMenu("5".to_string()));
}

#[test]
fn test_fold_from_child_returns_to_header() {
    let mut sidebar = SidebarComponent::default();
    sidebar.update(Action::NavigateToMenu("6".to_string()));
    assert!(visible_keys(&sidebar).contains(&"6".to_string()));

    sidebar.handle_key_events(shift('H'));
    assert!(!visible_keys(&sidebar).contains(&"6".to_string()));
    assert!(sidebar.cursor_on_submenu());
}

#[test]
fn test_collapse_hides_children_and_shrinks() {
    let mut sidebar = SidebarComponent::default();
    sidebar.select("5");
    let expanded_width = sidebar.width();

    let toggle = sidebar.handle_key_events(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL));
    assert_eq!(toggle, Action::ToggleSidebar);
    sidebar.update(toggle);

    assert!(sidebar.collapsed);
    assert_eq!(sidebar.width(), SIDEBAR_COLLAPSED_WIDTH);
    assert!(sidebar.width() < expanded_width);
    assert!(!visible_keys(&sidebar).contains(&"5".to_string()));

    sidebar.update(Action::ToggleSidebar);
    assert!(visible_keys(&sidebar).contains(&"5".to_string()));
}

#[test]
fn test_render_shows_logo_and_labels() {
    let mut sidebar = SidebarComponent::default();
    let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
    terminal.draw(|f| sidebar.render(f, f.area())).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("REFDESK"));
    assert!(text.contains("Справочники"));
}
