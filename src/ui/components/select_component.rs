//! Dropdown select control used by the toolbar.
//!
//! A select shows its current label in a one-line box. When open, a popup
//! lists the options below it; disabled options are shown dimmed and are
//! skipped by the highlight.

use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub disabled: bool,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: false,
        }
    }

    pub const fn disabled(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            disabled: true,
        }
    }
}

/// Options of the interactive picker
pub const PICKER_OPTIONS: [SelectOption; 4] = [
    SelectOption::new("jack", "Jack"),
    SelectOption::new("lucy", "Lucy"),
    SelectOption::new("Yiminghe", "yiminghe"),
    SelectOption::disabled("disabled", "Disabled"),
];

/// Single option shared by the disabled, loading and clearable selects
pub const LUCY_ONLY: [SelectOption; 1] = [SelectOption::new("lucy", "Lucy")];

pub const DEFAULT_SELECT_VALUE: &str = "lucy";

/// Fixed width of a select box, border included
pub const SELECT_WIDTH: u16 = 16;

#[derive(Debug, Clone)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    value: Option<&'static str>,
    pub disabled: bool,
    pub loading: bool,
    pub allow_clear: bool,
    open: bool,
    highlighted: usize,
}

impl SelectControl {
    pub fn new(options: &[SelectOption], default_value: &str) -> Self {
        let value = options.iter().find(|o| o.value == default_value).map(|o| o.value);
        let mut select = Self {
            options: options.to_vec(),
            value,
            disabled: false,
            loading: false,
            allow_clear: false,
            open: false,
            highlighted: 0,
        };
        select.highlight_current();
        select
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn allow_clear(mut self) -> Self {
        self.allow_clear = true;
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<&'static str> {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.value
            .and_then(|v| self.options.iter().find(|o| o.value == v))
            .map(|o| o.label)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&SelectOption> {
        self.options.get(self.highlighted)
    }

    fn highlight_current(&mut self) {
        self.highlighted = self
            .value
            .and_then(|v| self.options.iter().position(|o| o.value == v))
            .or_else(|| self.options.iter().position(|o| !o.disabled))
            .unwrap_or(0);
    }

    /// Open the popup. A disabled select stays closed.
    pub fn open(&mut self) -> bool {
        if self.disabled || self.options.is_empty() {
            return false;
        }
        self.open = true;
        self.highlight_current();
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move the highlight to the next enabled option, wrapping around
    pub fn move_highlight(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        for step in 1..=len {
            let index = if forward {
                (self.highlighted + step) % len
            } else {
                (self.highlighted + len - step) % len
            };
            if self.options.get(index).is_some_and(|o| !o.disabled) {
                self.highlighted = index;
                return;
            }
        }
    }

    /// Pick the highlighted option and close. Returns the new value when it changed.
    pub fn confirm(&mut self) -> Option<&'static str> {
        let picked = self.highlighted().filter(|o| !o.disabled).map(|o| o.value);
        self.open = false;
        match picked {
            Some(value) if self.value != Some(value) => {
                self.value = Some(value);
                Some(value)
            }
            _ => None,
        }
    }

    /// Pick the option at `index` directly (mouse)
    pub fn pick(&mut self, index: usize) -> Option<&'static str> {
        if self.options.get(index).is_some_and(|o| !o.disabled) {
            self.highlighted = index;
            self.confirm()
        } else {
            None
        }
    }

    /// Clear the value of a clearable select. Returns whether anything was cleared.
    pub fn clear(&mut self) -> bool {
        if !self.allow_clear || self.disabled || self.value.is_none() {
            return false;
        }
        self.value = None;
        self.open = false;
        true
    }

    /// Area the popup occupies when anchored below `anchor`
    #[must_use]
    pub fn popup_rect(&self, anchor: Rect, bounds: Rect) -> Rect {
        LayoutManager::dropdown_rect(anchor, SELECT_WIDTH, self.options.len() as u16 + 2, bounds)
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, focused: bool, icons: &IconService, theme: &Theme) {
        let text_style = if self.disabled {
            Style::default().fg(theme.text_secondary).bg(theme.bg_layout)
        } else {
            Style::default().fg(theme.text).bg(theme.bg_container)
        };
        let border_color = if focused { theme.primary } else { theme.border };

        let suffix = if self.loading {
            icons.loading()
        } else if self.allow_clear && focused && self.value.is_some() {
            "×"
        } else {
            icons.fold_arrow(self.open)
        };

        let label = self.label().unwrap_or("");
        let inner_width = rect.width.saturating_sub(2) as usize;
        let padding = inner_width.saturating_sub(label.chars().count() + suffix.chars().count() + 2);
        let line = Line::from(vec![
            Span::styled(format!(" {}", label), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(format!("{} ", suffix), text_style.fg(theme.text_secondary)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        f.render_widget(Paragraph::new(line).block(block).style(text_style), rect);
    }

    /// Draw the option popup over whatever is below the select
    pub fn render_popup(&self, f: &mut Frame, popup: Rect, theme: &Theme) {
        if !self.open {
            return;
        }
        f.render_widget(Clear, popup);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let style = if option.disabled {
                    Style::default().fg(theme.text_secondary).add_modifier(Modifier::DIM)
                } else if Some(option.value) == self.value {
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Span::styled(format!(" {}", option.label), style))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.highlighted));
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().bg(theme.bg_container))
            .highlight_style(Style::default().bg(theme.bg_layout));
        f.render_stateful_widget(list, popup, &mut state);
    }
}
