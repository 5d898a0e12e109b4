//! Modal dialog component.
//!
//! Hosts the help, logs, info and error dialogs. While a dialog is visible
//! it receives every key first; scrolling keys move its body and the close
//! keys emit [`Action::HideDialog`].

use crate::icons::IconService;
use crate::logger::Logger;
use crate::theme::Theme;
use crate::ui::components::dialogs::{scroll_behavior::PAGE_LINES, system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub theme: Theme,
    pub logger: Option<Logger>,
    scroll: DialogScroll,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            theme: Theme::default(),
            logger: None,
            scroll: DialogScroll::default(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn set_style(&mut self, icons: IconService, theme: Theme) {
        self.icons = icons;
        self.theme = theme;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    /// Scrolling keys shared by every dialog. Returns `true` when consumed.
    fn handle_scroll_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(1),
            KeyCode::PageUp => self.scroll.up(PAGE_LINES),
            KeyCode::PageDown => self.scroll.down(PAGE_LINES),
            KeyCode::Home => self.scroll.top(),
            KeyCode::End => self.scroll.bottom(),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        let closes = match dialog_type {
            DialogType::Help => matches!(key.code, KeyCode::Esc | KeyCode::Char('?')),
            DialogType::Logs => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
            // Any non-scrolling key dismisses a notice
            DialogType::Info(_) | DialogType::Error(_) => !matches!(
                key.code,
                KeyCode::Up
                    | KeyCode::Down
                    | KeyCode::Char('k')
                    | KeyCode::Char('j')
                    | KeyCode::PageUp
                    | KeyCode::PageDown
                    | KeyCode::Home
                    | KeyCode::End
            ),
        };
        if closes {
            return Action::HideDialog;
        }

        self.handle_scroll_key(key.code);
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll.up(1),
            MouseEventKind::ScrollDown => self.scroll.down(1),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(ref dialog_type) => {
                self.dialog_type = Some(dialog_type.clone());
                self.scroll.reset();
                action
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll.reset();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &self.icons, &mut self.scroll, &self.theme),
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll, &self.theme)
            }
            DialogType::Info(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                format!("{} Info", self.icons.info()),
                &message,
                self.theme.primary,
                &mut self.scroll,
                &self.theme,
            ),
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                format!("{} Error", self.icons.error()),
                &message,
                self.theme.warning,
                &mut self.scroll,
                &self.theme,
            ),
        }
    }
}
