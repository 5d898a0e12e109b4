//! Toolbar above the table: sort/clear buttons and the select controls.
//!
//! The buttons map directly onto the table controller operations. The
//! interactive picker reports its changes with [`Action::PickerChanged`];
//! the other selects only demonstrate their disabled, loading and clearable
//! states.

use crate::constants::{BUTTON_CLEAR_ALL, BUTTON_CLEAR_FILTERS, BUTTON_SORT_AGE};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::select_component::{
    SelectControl, DEFAULT_SELECT_VALUE, LUCY_ONLY, PICKER_OPTIONS, SELECT_WIDTH,
};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Height of the toolbar row (bordered controls)
pub const TOOLBAR_HEIGHT: u16 = 3;

const BUTTONS: [(&str, ToolbarButton); 3] = [
    (BUTTON_SORT_AGE, ToolbarButton::SortAge),
    (BUTTON_CLEAR_FILTERS, ToolbarButton::ClearFilters),
    (BUTTON_CLEAR_ALL, ToolbarButton::ClearAll),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    SortAge,
    ClearFilters,
    ClearAll,
}

impl ToolbarButton {
    fn action(self) -> Action {
        match self {
            ToolbarButton::SortAge => Action::SortByAge,
            ToolbarButton::ClearFilters => Action::ClearFilters,
            ToolbarButton::ClearAll => Action::ClearAll,
        }
    }
}

/// A focusable slot of the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarSlot {
    Button(ToolbarButton),
    Select(usize),
}

pub struct ToolbarComponent {
    pub icons: IconService,
    pub theme: Theme,
    /// picker, disabled, loading, clearable
    selects: [SelectControl; 4],
    focus: Option<usize>,
    slot_areas: Vec<Rect>,
    bounds: Rect,
}

impl Default for ToolbarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolbarComponent {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            theme: Theme::default(),
            selects: [
                SelectControl::new(&PICKER_OPTIONS, DEFAULT_SELECT_VALUE),
                SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).disabled(),
                SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).loading(),
                SelectControl::new(&LUCY_ONLY, DEFAULT_SELECT_VALUE).allow_clear(),
            ],
            focus: None,
            slot_areas: Vec::new(),
            bounds: Rect::default(),
        }
    }

    pub fn set_style(&mut self, icons: IconService, theme: Theme) {
        self.icons = icons;
        self.theme = theme;
    }

    /// Slots in display order
    pub fn slots() -> Vec<ToolbarSlot> {
        BUTTONS
            .iter()
            .map(|(_, button)| ToolbarSlot::Button(*button))
            .chain((0..4).map(ToolbarSlot::Select))
            .collect()
    }

    #[must_use]
    pub fn picker(&self) -> &SelectControl {
        &self.selects[0]
    }

    #[must_use]
    pub fn select(&self, index: usize) -> Option<&SelectControl> {
        self.selects.get(index)
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    #[must_use]
    pub fn focused_slot(&self) -> Option<ToolbarSlot> {
        self.focus.and_then(|i| Self::slots().get(i).copied())
    }

    pub fn blur(&mut self) {
        self.focus = None;
        self.close_popups();
    }

    fn close_popups(&mut self) {
        for select in &mut self.selects {
            select.close();
        }
    }

    fn open_select(&self) -> Option<usize> {
        self.selects.iter().position(SelectControl::is_open)
    }

    fn is_focusable(&self, slot: ToolbarSlot) -> bool {
        match slot {
            ToolbarSlot::Button(_) => true,
            ToolbarSlot::Select(i) => self.selects.get(i).is_some_and(|s| !s.disabled),
        }
    }

    /// Move focus to the next focusable slot; leaving either end drops focus
    fn cycle_focus(&mut self, forward: bool) {
        self.close_popups();
        let slots = Self::slots();
        let mut index = self.focus;
        loop {
            index = match (index, forward) {
                (None, true) => Some(0),
                (None, false) => Some(slots.len() - 1),
                (Some(i), true) if i + 1 < slots.len() => Some(i + 1),
                (Some(i), false) if i > 0 => Some(i - 1),
                _ => None,
            };
            match index {
                Some(i) if !slots.get(i).is_some_and(|s| self.is_focusable(*s)) => continue,
                _ => break,
            }
        }
        self.focus = index;
    }

    fn activate(&mut self, slot: ToolbarSlot) -> Action {
        match slot {
            ToolbarSlot::Button(button) => button.action(),
            ToolbarSlot::Select(i) => {
                if let Some(select) = self.selects.get_mut(i) {
                    if select.is_open() {
                        return Self::confirm_select(i, select);
                    }
                    select.open();
                }
                Action::None
            }
        }
    }

    fn confirm_select(index: usize, select: &mut SelectControl) -> Action {
        match select.confirm() {
            Some(value) if index == 0 => Action::PickerChanged(value.to_string()),
            Some(value) => {
                log::debug!("select {} changed to {}", index, value);
                Action::None
            }
            None => Action::None,
        }
    }

    fn handle_open_select(&mut self, index: usize, key: KeyEvent) -> Action {
        let Some(select) = self.selects.get_mut(index) else {
            return Action::None;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                select.move_highlight(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                select.move_highlight(true);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Self::confirm_select(index, select),
            KeyCode::Esc => {
                select.close();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for ToolbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(index) = self.open_select() {
            return self.handle_open_select(index, key);
        }

        match key.code {
            KeyCode::Char('a') => Action::SortByAge,
            KeyCode::Char('c') => Action::ClearFilters,
            KeyCode::Char('C') => Action::ClearAll,
            KeyCode::Tab => {
                self.cycle_focus(true);
                Action::None
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                Action::None
            }
            KeyCode::Esc if self.focus.is_some() => {
                self.blur();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_slot() {
                Some(slot) => self.activate(slot),
                None => Action::None,
            },
            KeyCode::Delete | KeyCode::Backspace => {
                if let Some(ToolbarSlot::Select(i)) = self.focused_slot() {
                    if self.selects.get_mut(i).is_some_and(SelectControl::clear) {
                        log::debug!("select {} cleared", i);
                    }
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }

        // Clicks inside an open popup pick an option
        if let Some(index) = self.open_select() {
            let anchor = self.slot_areas.get(BUTTONS.len() + index).copied().unwrap_or_default();
            if let Some(select) = self.selects.get_mut(index) {
                let popup = select.popup_rect(anchor, self.bounds);
                if LayoutManager::contains(popup, mouse.column, mouse.row) {
                    if mouse.row <= popup.y || mouse.row + 1 >= popup.bottom() {
                        return Action::None;
                    }
                    let option = (mouse.row - popup.y - 1) as usize;
                    return match select.pick(option) {
                        Some(value) if index == 0 => Action::PickerChanged(value.to_string()),
                        _ => Action::None,
                    };
                }
            }
        }

        let hit = self
            .slot_areas
            .iter()
            .position(|area| LayoutManager::contains(*area, mouse.column, mouse.row));
        let slots = Self::slots();
        match hit.and_then(|i| slots.get(i).map(|slot| (i, *slot))) {
            Some((i, slot)) if self.is_focusable(slot) => {
                let was_open = matches!(slot, ToolbarSlot::Select(s) if self.selects[s].is_open());
                self.close_popups();
                self.focus = Some(i);
                match slot {
                    ToolbarSlot::Select(s) if !was_open => {
                        self.selects[s].open();
                        Action::None
                    }
                    ToolbarSlot::Select(_) => Action::None,
                    ToolbarSlot::Button(button) => button.action(),
                }
            }
            _ => {
                self.blur();
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut constraints: Vec<Constraint> = BUTTONS
            .iter()
            .map(|(label, _)| Constraint::Length(label.chars().count() as u16 + 4))
            .collect();
        constraints.extend(std::iter::repeat(Constraint::Length(SELECT_WIDTH)).take(self.selects.len()));

        let areas = Layout::horizontal(constraints)
            .flex(Flex::Start)
            .spacing(1)
            .split(rect);
        self.slot_areas = areas.to_vec();

        let focused = self.focus;
        for (i, (label, _)) in BUTTONS.iter().enumerate() {
            let Some(area) = areas.get(i) else { continue };
            let is_focused = focused == Some(i);
            let border = if is_focused { self.theme.primary } else { self.theme.border };
            let text_style = if is_focused {
                Style::default().fg(self.theme.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text)
            };
            let button = Paragraph::new(format!(" {} ", label)).style(text_style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border)),
            );
            f.render_widget(button, *area);
        }

        for (i, select) in self.selects.iter().enumerate() {
            if let Some(area) = areas.get(BUTTONS.len() + i) {
                select.render(f, *area, focused == Some(BUTTONS.len() + i), &self.icons, &self.theme);
            }
        }
    }
}

impl ToolbarComponent {
    /// Draw the open select popup on top of the content below the toolbar
    pub fn render_overlay(&mut self, f: &mut Frame, bounds: Rect) {
        self.bounds = bounds;
        if let Some(index) = self.open_select() {
            let anchor = self.slot_areas.get(BUTTONS.len() + index).copied().unwrap_or_default();
            let select = &self.selects[index];
            let popup = select.popup_rect(anchor, bounds);
            select.render_popup(f, popup, &self.theme);
        }
    }
}
