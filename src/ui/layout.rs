//! Layout management and calculations

use crate::constants::{HEADER_HEIGHT, MAIN_AREA_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the application shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellAreas {
    pub sidebar: Rect,
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Areas inside the list tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentAreas {
    pub tabs: Rect,
    pub toolbar: Rect,
    pub body: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into sidebar | (header / content) with a status line at the bottom.
    ///
    /// The sidebar never squeezes the main area below its minimum width.
    #[must_use]
    pub fn shell_layout(area: Rect, sidebar_width: u16) -> ShellAreas {
        let [top, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let max_sidebar = top.width.saturating_sub(MAIN_AREA_MIN_WIDTH);
        let sidebar_width = sidebar_width.min(max_sidebar);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(top);

        let [header, content] = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(main);

        ShellAreas {
            sidebar,
            header,
            content,
            status,
        }
    }

    /// Split the content area into the tab bar, toolbar and tab body
    #[must_use]
    pub fn content_layout(area: Rect, toolbar_height: u16) -> ContentAreas {
        let [tabs, toolbar, body] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(toolbar_height),
            Constraint::Min(0),
        ])
        .areas(area);
        ContentAreas { tabs, toolbar, body }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// A popup anchored below `anchor`, clipped to `bounds`
    #[must_use]
    pub fn dropdown_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
        let x = anchor.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
        let y = anchor.bottom().min(bounds.bottom().saturating_sub(1));
        Rect::new(x, y, width, height).intersection(bounds)
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
    }
}
