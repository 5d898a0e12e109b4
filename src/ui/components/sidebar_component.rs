//! Sidebar navigation component.
//!
//! Renders the navigation menu as a flat list, with submenus that fold and
//! a collapsed mode that only shows icons. Selecting an entry emits
//! [`Action::NavigateToMenu`].

use crate::constants::{LOGO_FULL, LOGO_ICON, SIDEBAR_COLLAPSED_WIDTH};
use crate::icons::IconService;
use crate::navigation::{self, MenuEntry};
use crate::theme::Theme;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::sidebar_item_component::{SidebarItem, SidebarItemType, SidebarRenderContext};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::collections::HashMap;

pub struct SidebarComponent {
    pub selected_key: String,
    pub collapsed: bool,
    pub icons: IconService,
    pub theme: Theme,
    menu: Vec<MenuEntry>,
    expanded_width: u16,
    items: Vec<SidebarItemType>,
    folder_states: HashMap<String, bool>,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    last_area: Rect,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new(navigation::default_menu(), crate::constants::SIDEBAR_DEFAULT_WIDTH)
    }
}

impl SidebarComponent {
    pub fn new(menu: Vec<MenuEntry>, expanded_width: u16) -> Self {
        let mut sidebar = Self {
            selected_key: navigation::DEFAULT_SELECTED_KEY.to_string(),
            collapsed: false,
            icons: IconService::default(),
            theme: Theme::default(),
            menu,
            expanded_width,
            items: Vec::new(),
            folder_states: HashMap::new(),
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            last_area: Rect::default(),
        };
        sidebar.build_item_list();
        sidebar.update_list_state();
        sidebar
    }

    /// Width the sidebar occupies in its current mode
    #[must_use]
    pub fn width(&self) -> u16 {
        if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            self.expanded_width
        }
    }

    pub fn items(&self) -> &[SidebarItemType] {
        &self.items
    }

    pub fn select(&mut self, key: &str) {
        self.selected_key = key.to_string();
        // Open the submenu holding the selection so it stays visible
        if let Some(parent) = navigation::parent_key(&self.menu, key) {
            self.folder_states.insert(parent.to_string(), true);
        }
        self.build_item_list();
        self.update_list_state();
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        self.build_item_list();
        self.update_list_state();
    }

    pub fn set_style(&mut self, icons: IconService, theme: Theme) {
        self.icons = icons;
        self.theme = theme;
        self.scrollbar_helper.set_color(theme.sider_text);
    }

    /// Flatten the menu tree, respecting submenu fold states.
    ///
    /// Collapsed mode hides submenu children the same way a folded submenu does.
    fn build_item_list(&mut self) {
        let mut items = Vec::new();
        for entry in &self.menu {
            self.push_entry(&mut items, entry, 0);
        }
        self.items = items;
    }

    fn push_entry(&self, items: &mut Vec<SidebarItemType>, entry: &MenuEntry, depth: usize) {
        match entry {
            MenuEntry::Divider => items.push(SidebarItemType::Divider),
            MenuEntry::Item {
                key,
                label,
                icon,
                children,
            } if children.is_empty() => items.push(SidebarItemType::Entry {
                key: key.to_string(),
                label: label.to_string(),
                icon: *icon,
                depth,
            }),
            MenuEntry::Item {
                key,
                label,
                icon,
                children,
            } => {
                let is_expanded = !self.collapsed && self.is_expanded(key);
                let contains_selection = navigation::find_label(children, &self.selected_key).is_some();
                items.push(SidebarItemType::SubMenu {
                    key: key.to_string(),
                    label: label.to_string(),
                    icon: *icon,
                    is_expanded,
                    contains_selection,
                });
                if is_expanded {
                    for child in children {
                        self.push_entry(items, child, depth + 1);
                    }
                }
            }
        }
    }

    /// Submenus start folded unless opened or holding the selection
    fn is_expanded(&self, key: &str) -> bool {
        self.folder_states.get(key).copied().unwrap_or(false)
    }

    /// Toggle the expanded/collapsed state of a submenu
    pub fn toggle_folder(&mut self, key: &str) {
        let expanded = self.is_expanded(key);
        self.folder_states.insert(key.to_string(), !expanded);
        self.build_item_list();
    }

    fn set_folder(&mut self, key: &str, expanded: bool) {
        self.folder_states.insert(key.to_string(), expanded);
        self.build_item_list();
    }

    fn folder_at(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .filter(|item| item.is_foldable())
            .and_then(|item| item.key().map(str::to_string))
    }

    fn selection_to_index(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.get_selection().as_deref() == Some(key))
    }

    fn update_list_state(&mut self) {
        // A folded submenu hides the selection; keep the cursor on its header
        let index = self.selection_to_index(&self.selected_key).or_else(|| {
            navigation::parent_key(&self.menu, &self.selected_key)
                .and_then(|parent| self.items.iter().position(|item| item.key() == Some(parent)))
        });
        self.list_state.select(index.or(Some(0)));
        self.scrollbar_helper
            .update_state(self.items.len(), index.unwrap_or(0), None);
    }

    /// Move the cursor to the next row in `forward` direction.
    ///
    /// Dividers and expanded submenu headers are skipped. A folded submenu
    /// header is a stop, otherwise its children would be unreachable.
    fn move_cursor(&mut self, forward: bool) -> Action {
        if self.items.is_empty() {
            return Action::None;
        }
        let len = self.items.len();
        let current = self.list_state.selected().unwrap_or(0);

        for offset in 1..=len {
            let index = if forward {
                (current + offset) % len
            } else {
                (current + len - (offset % len)) % len
            };
            match self.items.get(index) {
                Some(item) if item.is_selectable() => {
                    self.list_state.select(Some(index));
                    return item
                        .get_selection()
                        .map(Action::NavigateToMenu)
                        .unwrap_or(Action::None);
                }
                Some(SidebarItemType::SubMenu { is_expanded: false, .. }) => {
                    self.list_state.select(Some(index));
                    return Action::None;
                }
                _ => {}
            }
        }
        Action::None
    }

    /// Fold the submenu under the cursor, or the one holding the cursor row
    fn fold_at_cursor(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let folder = self.folder_at(index).or_else(|| {
            self.items
                .get(index)
                .and_then(|item| item.key())
                .and_then(|key| navigation::parent_key(&self.menu, key))
                .map(str::to_string)
        });
        if let Some(key) = folder {
            self.set_folder(&key, false);
            let header = self.items.iter().position(|item| item.key() == Some(key.as_str()));
            self.list_state.select(header);
        }
    }

    /// Unfold the submenu under the cursor and step onto its first child
    fn unfold_at_cursor(&mut self) -> Action {
        let Some(index) = self.list_state.selected() else {
            return Action::None;
        };
        match self.folder_at(index) {
            Some(key) if !self.collapsed => {
                self.set_folder(&key, true);
                self.move_cursor(true)
            }
            Some(_) => Action::ToggleSidebar,
            None => Action::None,
        }
    }

    /// Activate the row at `index`: select an entry or toggle a submenu
    fn activate(&mut self, index: usize) -> Action {
        if let Some(key) = self.folder_at(index) {
            if self.collapsed {
                // Expand the sidebar so the submenu children become reachable
                return Action::ToggleSidebar;
            }
            self.toggle_folder(&key);
            self.list_state.select(Some(index));
            return Action::None;
        }
        match self.items.get(index).and_then(|item| item.get_selection()) {
            Some(key) => {
                self.list_state.select(Some(index));
                Action::NavigateToMenu(key)
            }
            None => Action::None,
        }
    }

    /// The cursor rests on a submenu header
    #[must_use]
    pub fn cursor_on_submenu(&self) -> bool {
        self.list_state
            .selected()
            .and_then(|index| self.items.get(index))
            .is_some_and(|item| item.is_foldable())
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleSidebar,
            KeyCode::Char('H') => {
                self.fold_at_cursor();
                Action::None
            }
            KeyCode::Char('L') => self.unfold_at_cursor(),
            KeyCode::Char('J') => self.move_cursor(true),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => self.move_cursor(true),
            KeyCode::Char('K') => self.move_cursor(false),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => self.move_cursor(false),
            KeyCode::Enter if self.cursor_on_submenu() => {
                let index = self.list_state.selected().unwrap_or(0);
                self.activate(index)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let area = self.last_area;
        let inside_rows = mouse.row > area.y && mouse.row < area.bottom().saturating_sub(1);
        let inside_cols = mouse.column >= area.x && mouse.column < area.right();
        if !inside_cols {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside_rows => {
                let local_index = (mouse.row - area.y - 1) as usize;
                let clicked_index = self.list_state.offset() + local_index;
                if clicked_index >= self.items.len() {
                    return Action::None;
                }
                self.activate(clicked_index)
            }
            MouseEventKind::ScrollUp => self.move_cursor(false),
            MouseEventKind::ScrollDown => self.move_cursor(true),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NavigateToMenu(ref key) => {
                self.select(key);
                action
            }
            Action::ToggleSidebar => {
                self.set_collapsed(!self.collapsed);
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;

        let ctx = SidebarRenderContext {
            icons: &self.icons,
            theme: &self.theme,
            selected_key: &self.selected_key,
            collapsed: self.collapsed,
            width: rect.width,
        };
        let all_items: Vec<ListItem> = self.items.iter().map(|item| item.render(&ctx)).collect();

        let total_items = all_items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        let available_height = rect.height.saturating_sub(2) as usize;
        let current_position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items, current_position, Some(available_height));

        let logo = if self.collapsed { LOGO_ICON } else { LOGO_FULL };
        let list = List::new(all_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(logo)
                    .title_alignment(Alignment::Center)
                    .title_style(
                        Style::default()
                            .fg(self.theme.bg_container)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(self.theme.sider_bg)),
            )
            .style(Style::default().fg(self.theme.sider_text).bg(self.theme.sider_bg));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
