//! Page header: menu toggle, page title, user and logout icons.

use crate::icons::{IconKind, IconService};
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct HeaderComponent {
    pub title: String,
    pub icons: IconService,
    pub theme: Theme,
    toggle_area: Rect,
    logout_area: Rect,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            icons: IconService::default(),
            theme: Theme::default(),
            toggle_area: Rect::default(),
            logout_area: Rect::default(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_style(&mut self, icons: IconService, theme: Theme) {
        self.icons = icons;
        self.theme = theme;
    }

    fn icon_width(&self, kind: IconKind) -> u16 {
        self.icons.glyph(kind).chars().count() as u16 + 2
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        if LayoutManager::contains(self.toggle_area, mouse.column, mouse.row) {
            Action::ToggleSidebar
        } else if LayoutManager::contains(self.logout_area, mouse.column, mouse.row) {
            Action::Quit
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.bg_container));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let toggle_width = self.icon_width(IconKind::Menu);
        let user_width = self.icon_width(IconKind::User);
        let logout_width = self.icon_width(IconKind::Logout);
        let [toggle, title, user, logout] = Layout::horizontal([
            Constraint::Length(toggle_width),
            Constraint::Min(0),
            Constraint::Length(user_width),
            Constraint::Length(logout_width),
        ])
        .areas(inner);
        self.toggle_area = toggle;
        self.logout_area = logout;

        let icon_style = Style::default().fg(self.theme.text);
        let icon = |kind: IconKind| Paragraph::new(format!(" {} ", self.icons.glyph(kind))).style(icon_style);

        f.render_widget(icon(IconKind::Menu), toggle);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", self.title),
                Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
            ))),
            title,
        );
        f.render_widget(icon(IconKind::User), user);
        f.render_widget(icon(IconKind::Logout), logout);
    }
}
