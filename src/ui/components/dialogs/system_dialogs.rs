use super::scroll_behavior::DialogScroll;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
REFDESK - Reference data admin shell
====================================

TABLE
-----
←/→ h/l     Focus previous/next column
s           Cycle sort on focused column (ascend, descend, off)
f           Open filter for focused column
↑/↓ j/k     Select row
PgUp/PgDn   Previous/next page

FILTER DROPDOWN
---------------
Space       Toggle option
Enter       Apply filter
r           Reset column filter
Esc         Close without applying

TOOLBAR
-------
a           Sort age (descending)
c           Clear filters
C           Clear filters and sorters
Tab         Focus toolbar controls
Enter       Press button / open select
Del         Clear a clearable select

NAVIGATION
----------
J/K         Next/previous menu entry
H/L         Fold/unfold submenu
Enter       Toggle submenu under cursor
Ctrl+B      Collapse/expand sidebar
1/2         Switch tab

GENERAL
-------
?           Toggle this help
G           Show logs
i           Change icon theme
q, Ctrl+C   Quit
Esc         Close dialog or quit

Press 'Esc' or '?' to close this help panel
";

fn render_scrolled(
    f: &mut Frame,
    area: Rect,
    title: String,
    content: &str,
    scroll: &mut DialogScroll,
    theme: &Theme,
) {
    f.render_widget(Clear, area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        area.x + margin_x,
        area.y + margin_y,
        area.width.saturating_sub(margin_x * 2),
        area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let first = scroll.clamp(total_lines, visible_height);

    let visible: Vec<&str> = lines.iter().skip(first).take(visible_height).copied().collect();

    let paragraph = Paragraph::new(visible.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(theme.primary)),
        )
        .style(Style::default().fg(theme.text).bg(theme.bg_container))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(theme.text_secondary))
            .thumb_style(Style::default().fg(theme.text));
        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, icons: &IconService, scroll: &mut DialogScroll, theme: &Theme) {
    let help_area = LayoutManager::centered_rect(80, 90, area);
    let title = format!("{} Help - Press 'Esc' or '?' to close", icons.info());
    render_scrolled(f, help_area, title, HELP_TEXT, scroll, theme);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll, theme: &Theme) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);

    let content = match logger {
        Some(logger) => {
            let logs = logger.get_logs();
            if logs.is_empty() {
                "No logs yet".to_string()
            } else {
                logs.join("\n")
            }
        }
        None => "Logging is disabled".to_string(),
    };
    let title = match logger.and_then(Logger::log_file) {
        Some(path) => format!("{} ({})", crate::constants::DIALOG_TITLE_LOGS, path.display()),
        None => crate::constants::DIALOG_TITLE_LOGS.to_string(),
    };
    render_scrolled(f, logs_area, title, &content, scroll, theme);
}

/// Small message box used for info and error notices
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    message: &str,
    color: Color,
    scroll: &mut DialogScroll,
    theme: &Theme,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.bg_container));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let body = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let footer = Rect {
        y: inner.bottom().saturating_sub(1),
        height: 1.min(inner.height),
        ..inner
    };

    let lines: Vec<&str> = message.lines().collect();
    let first = scroll.clamp(lines.len(), body.height as usize);
    let visible: Vec<&str> = lines.iter().skip(first).copied().collect();

    f.render_widget(
        Paragraph::new(visible.join("\n"))
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true }),
        body,
    );
    f.render_widget(
        Paragraph::new("Press any key to continue • j/k to scroll if needed")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_secondary)),
        footer,
    );
}
