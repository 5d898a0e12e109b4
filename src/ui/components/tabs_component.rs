//! Content tab bar ("Список" / "Параллельный просмотр").

use crate::constants::{TAB_LIST, TAB_PARALLEL};
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component, TabKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub struct TabsComponent {
    pub active: TabKey,
    pub theme: Theme,
    /// Column ranges of each title from the last render, for mouse hits
    title_spans: Vec<(u16, u16)>,
    last_area: Rect,
}

impl Default for TabsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TabsComponent {
    pub fn new() -> Self {
        Self {
            active: TabKey::default(),
            theme: Theme::default(),
            title_spans: Vec::new(),
            last_area: Rect::default(),
        }
    }

    pub fn title(tab: TabKey) -> &'static str {
        match tab {
            TabKey::List => TAB_LIST,
            TabKey::Parallel => TAB_PARALLEL,
        }
    }
}

impl Component for TabsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::SelectTab(TabKey::List),
            KeyCode::Char('2') => Action::SelectTab(TabKey::Parallel),
            KeyCode::Left | KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::SelectTab(self.active.next())
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) || mouse.row != self.last_area.y {
            return Action::None;
        }
        self.title_spans
            .iter()
            .position(|&(start, end)| mouse.column >= start && mouse.column < end)
            .and_then(|index| TabKey::ALL.get(index).copied())
            .map(Action::SelectTab)
            .unwrap_or(Action::None)
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SelectTab(tab) = action {
            self.active = tab;
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.last_area = rect;

        // Tabs draws " title " separated by "|"
        let mut x = rect.x;
        self.title_spans = TabKey::ALL
            .iter()
            .map(|tab| {
                let width = Self::title(*tab).chars().count() as u16 + 2;
                let span = (x, x + width);
                x += width + 1;
                span
            })
            .collect();

        let titles: Vec<Line> = TabKey::ALL.iter().map(|tab| Line::from(Self::title(*tab))).collect();
        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.border)),
            )
            .style(Style::default().fg(self.theme.text))
            .highlight_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, rect);
    }
}
