//! Status bar component

use crate::table::{FilterState, SortState};
use crate::theme::Theme;
use crate::ui::core::TabKey;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows, gathered by the app each frame
pub struct StatusInfo<'a> {
    pub filters: &'a FilterState,
    pub sort: &'a SortState,
    pub tab: TabKey,
    pub toolbar_focused: bool,
    pub dropdown_open: bool,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hint for the current input mode
    #[must_use]
    pub fn shortcuts(info: &StatusInfo<'_>) -> &'static str {
        if info.dropdown_open {
            "Space: toggle • Enter: apply • r: reset • Esc: close"
        } else if info.toolbar_focused {
            "Tab: next • Enter: press/open • Del: clear • Esc: leave toolbar"
        } else if info.tab == TabKey::List {
            "←→: column • s: sort • f: filter • a/c/C: toolbar • ?: help • q: quit"
        } else {
            "1/2: tabs • J/K: menu • ?: help • q: quit"
        }
    }

    /// Summary of active filters and sort, e.g. `filters: address=London • sort: age descend`
    #[must_use]
    pub fn summary(info: &StatusInfo<'_>) -> String {
        format!("filters: {} • sort: {}", info.filters, info.sort)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo<'_>, theme: &Theme) {
        let summary = Self::summary(info);
        let summary_width = summary.chars().count() as u16 + 1;
        let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(summary_width)]).areas(area);

        let active = !info.filters.is_empty() || !info.sort.is_empty();
        let summary_color = if active { theme.primary } else { theme.text_secondary };

        f.render_widget(
            Paragraph::new(Self::shortcuts(info))
                .alignment(Alignment::Left)
                .style(Style::default().fg(theme.text_secondary)),
            left,
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(summary, Style::default().fg(summary_color))))
                .alignment(Alignment::Right),
            right,
        );
    }
}
