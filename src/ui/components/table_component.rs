//! Reference table with sortable headers and filter dropdowns.
//!
//! The component never changes the table state itself. Every interaction
//! (sort header, filter dropdown, page change) is reported as a complete
//! [`ViewChange`] through [`Action::TableChange`]; the application applies it
//! to the controller and pushes the resulting rows back with
//! [`TableComponent::set_data`].

use crate::constants::{EMPTY_TABLE, INFO_NO_FILTER_FOR_COLUMN};
use crate::dataset::Record;
use crate::icons::IconService;
use crate::table::{ColumnKey, FilterState, Pagination, SortOrder, SortState, ViewChange};
use crate::theme::Theme;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::BorderType, Block, Borders, Cell, Clear, HighlightSpacing, List, ListItem, ListState, Paragraph, Row,
        Table, TableState,
    },
    Frame,
};

/// Shorten `text` to `width` columns, ending with an ellipsis when cut
#[must_use]
pub fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Pending selection of an open filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDropdown {
    pub column: ColumnKey,
    /// Selected option values, applied only on confirm
    pub checked: Vec<String>,
    pub highlighted: usize,
}

impl FilterDropdown {
    fn new(column: ColumnKey, current: Option<&[String]>) -> Self {
        Self {
            column,
            checked: current.map(<[String]>::to_vec).unwrap_or_default(),
            highlighted: 0,
        }
    }

    fn toggle(&mut self, index: usize) {
        let Some(option) = self.column.filter_options().get(index) else {
            return;
        };
        if let Some(pos) = self.checked.iter().position(|v| v == option.value) {
            self.checked.remove(pos);
        } else {
            self.checked.push(option.value.to_string());
        }
    }

    fn is_checked(&self, value: &str) -> bool {
        self.checked.iter().any(|v| v == value)
    }

    fn height(&self) -> u16 {
        // options + separator + instructions + borders
        self.column.filter_options().len() as u16 + 4
    }
}

pub struct TableComponent {
    pub icons: IconService,
    pub theme: Theme,
    rows: Vec<Record>,
    filters: FilterState,
    sort: SortState,
    pagination: Pagination,
    focused_column: ColumnKey,
    selected_row: usize,
    table_state: TableState,
    dropdown: Option<FilterDropdown>,
    header_cells: Vec<Rect>,
    body_area: Rect,
    dropdown_area: Rect,
    bounds: Rect,
}

impl Default for TableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TableComponent {
    pub fn new() -> Self {
        Self {
            icons: IconService::default(),
            theme: Theme::default(),
            rows: Vec::new(),
            filters: FilterState::default(),
            sort: SortState::default(),
            pagination: Pagination::default(),
            focused_column: ColumnKey::Name,
            selected_row: 0,
            table_state: TableState::default(),
            dropdown: None,
            header_cells: Vec::new(),
            body_area: Rect::default(),
            dropdown_area: Rect::default(),
            bounds: Rect::default(),
        }
    }

    pub fn set_style(&mut self, icons: IconService, theme: Theme) {
        self.icons = icons;
        self.theme = theme;
    }

    /// Replace the visible rows and the state they were produced from
    pub fn set_data(&mut self, rows: Vec<Record>, filters: FilterState, sort: SortState, pagination: Pagination) {
        self.rows = rows;
        self.filters = filters;
        self.sort = sort;
        self.pagination = pagination.clamped(self.rows.len());
        self.selected_row = self.selected_row.min(self.page_rows().len().saturating_sub(1));
    }

    #[must_use]
    pub fn focused_column(&self) -> ColumnKey {
        self.focused_column
    }

    #[must_use]
    pub fn dropdown(&self) -> Option<&FilterDropdown> {
        self.dropdown.as_ref()
    }

    #[must_use]
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_some()
    }

    #[must_use]
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Rows on the current page
    #[must_use]
    pub fn page_rows(&self) -> &[Record] {
        let range = self.pagination.range(self.rows.len());
        &self.rows[range]
    }

    fn change(&self, pagination: Pagination, filters: FilterState, sort: SortState) -> Action {
        Action::TableChange(ViewChange::new(pagination, filters, sort))
    }

    fn first_page(&self) -> Pagination {
        Pagination::new(1, self.pagination.page_size)
    }

    /// Advance the sort of `column`: ascend, descend, then none.
    /// A column that is not the sorted one starts again at ascend.
    pub fn cycle_sort(&mut self, column: ColumnKey) -> Action {
        self.focused_column = column;
        let next = SortOrder::cycle(self.sort.order_for(column));
        let sort = SortState {
            column_key: Some(column),
            order: next,
        };
        self.change(self.first_page(), self.filters.clone(), sort)
    }

    pub fn open_filter(&mut self, column: ColumnKey) -> Action {
        self.focused_column = column;
        if !column.is_filterable() {
            return Action::ShowDialog(DialogType::Info(format!("{}: {}", column.title(), INFO_NO_FILTER_FOR_COLUMN)));
        }
        self.dropdown = Some(FilterDropdown::new(column, self.filters.get(column)));
        Action::None
    }

    pub fn close_filter(&mut self) {
        self.dropdown = None;
    }

    /// Apply the dropdown selection as the column's filter
    pub fn confirm_filter(&mut self) -> Action {
        let Some(dropdown) = self.dropdown.take() else {
            return Action::None;
        };
        let mut filters = self.filters.clone();
        filters.set(dropdown.column, dropdown.checked);
        self.change(self.first_page(), filters, self.sort)
    }

    /// Drop the column's filter and close the dropdown
    pub fn reset_filter(&mut self) -> Action {
        let Some(dropdown) = self.dropdown.take() else {
            return Action::None;
        };
        let mut filters = self.filters.clone();
        filters.remove(dropdown.column);
        self.change(self.first_page(), filters, self.sort)
    }

    fn change_page(&mut self, forward: bool) -> Action {
        let count = self.pagination.page_count(self.rows.len());
        let current = self.pagination.current;
        let target = if forward {
            (current + 1).min(count)
        } else {
            current.saturating_sub(1).max(1)
        };
        if target == current {
            return Action::None;
        }
        self.selected_row = 0;
        *self.table_state.offset_mut() = 0;
        let pagination = Pagination::new(target, self.pagination.page_size);
        self.change(pagination, self.filters.clone(), self.sort)
    }

    fn move_row(&mut self, forward: bool) {
        let len = self.page_rows().len();
        if len == 0 {
            return;
        }
        self.selected_row = if forward {
            (self.selected_row + 1).min(len - 1)
        } else {
            self.selected_row.saturating_sub(1)
        };
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> Action {
        let Some(dropdown) = self.dropdown.as_mut() else {
            return Action::None;
        };
        let option_count = dropdown.column.filter_options().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                dropdown.highlighted = dropdown.highlighted.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                dropdown.highlighted = (dropdown.highlighted + 1).min(option_count.saturating_sub(1));
                Action::None
            }
            KeyCode::Char(' ') => {
                let index = dropdown.highlighted;
                dropdown.toggle(index);
                Action::None
            }
            KeyCode::Enter => self.confirm_filter(),
            KeyCode::Char('r') => self.reset_filter(),
            KeyCode::Esc | KeyCode::Char('f') => {
                self.close_filter();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn header_line(&self, column: ColumnKey, width: usize) -> Line<'static> {
        let focused = column == self.focused_column;
        let mut title_style = Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD);
        if focused {
            title_style = title_style.fg(self.theme.primary).add_modifier(Modifier::UNDERLINED);
        }

        let sort_glyph = match self.sort.order_for(column) {
            Some(SortOrder::Ascend) => self.icons.sort_ascend(),
            Some(SortOrder::Descend) => self.icons.sort_descend(),
            None => self.icons.sortable(),
        };
        let sort_style = if self.sort.order_for(column).is_some() {
            Style::default().fg(self.theme.primary)
        } else {
            Style::default().fg(self.theme.text_secondary)
        };

        let mut indicators = vec![Span::styled(format!(" {}", sort_glyph), sort_style)];
        if column.is_filterable() {
            let active = self.filters.is_filtered(column);
            let filter_style = if active {
                Style::default().fg(self.theme.primary)
            } else {
                Style::default().fg(self.theme.text_secondary)
            };
            indicators.push(Span::styled(format!(" {}", self.icons.filter(active)), filter_style));
        }

        let indicator_width: usize = indicators.iter().map(|s| s.content.chars().count()).sum();
        let title = ellipsize(column.title(), width.saturating_sub(indicator_width));
        let mut spans = vec![Span::styled(title, title_style)];
        spans.extend(indicators);
        Line::from(spans)
    }

    fn column_constraints() -> [Constraint; 3] {
        [Constraint::Percentage(30), Constraint::Length(9), Constraint::Fill(1)]
    }

    fn render_dropdown(&mut self, f: &mut Frame) {
        let Some(dropdown) = self.dropdown.as_ref() else {
            return;
        };
        let column_index = ColumnKey::ALL.iter().position(|c| *c == dropdown.column).unwrap_or(0);
        let anchor = self.header_cells.get(column_index).copied().unwrap_or_default();
        let area = LayoutManager::dropdown_rect(anchor, 26, dropdown.height(), self.bounds);
        self.dropdown_area = area;
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary))
            .style(Style::default().bg(self.theme.bg_container));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [options_area, separator, instructions] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let items: Vec<ListItem> = dropdown
            .column
            .filter_options()
            .iter()
            .map(|option| {
                let checked = dropdown.is_checked(option.value);
                let style = if checked {
                    Style::default().fg(self.theme.primary)
                } else {
                    Style::default().fg(self.theme.text)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", self.icons.checkbox(checked)), style),
                    Span::styled(option.text, style),
                ]))
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(dropdown.highlighted));
        let list = List::new(items).highlight_style(Style::default().bg(self.theme.bg_layout));
        f.render_stateful_widget(list, options_area, &mut state);

        f.render_widget(
            Paragraph::new("─".repeat(separator.width as usize)).style(Style::default().fg(self.theme.border)),
            separator,
        );
        f.render_widget(
            Paragraph::new("r Reset · ⏎ OK")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.text_secondary)),
            instructions,
        );
    }
}

impl Component for TableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dropdown.is_some() {
            return self.handle_dropdown_key(key);
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focused_column = self.focused_column.previous();
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focused_column = self.focused_column.next();
                Action::None
            }
            KeyCode::Char('s') => self.cycle_sort(self.focused_column),
            KeyCode::Char('f') => self.open_filter(self.focused_column),
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_row(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_row(true);
                Action::None
            }
            KeyCode::PageUp => self.change_page(false),
            KeyCode::PageDown => self.change_page(true),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp => {
                self.move_row(false);
                return Action::None;
            }
            MouseEventKind::ScrollDown => {
                self.move_row(true);
                return Action::None;
            }
            _ => return Action::None,
        }

        if let Some(option_count) = self.dropdown.as_ref().map(|d| d.column.filter_options().len()) {
            let area = self.dropdown_area;
            if !LayoutManager::contains(area, mouse.column, mouse.row) {
                self.close_filter();
                return Action::None;
            }
            let row = mouse.row.saturating_sub(area.y + 1) as usize;
            if mouse.row > area.y && row < option_count {
                if let Some(dropdown) = self.dropdown.as_mut() {
                    dropdown.highlighted = row;
                    dropdown.toggle(row);
                }
            } else if mouse.row + 2 == area.bottom() {
                // Instructions line: left half resets, right half confirms
                let midpoint = area.x + area.width / 2;
                return if mouse.column < midpoint {
                    self.reset_filter()
                } else {
                    self.confirm_filter()
                };
            }
            return Action::None;
        }

        let header_hit = self
            .header_cells
            .iter()
            .position(|cell| LayoutManager::contains(*cell, mouse.column, mouse.row));
        if let Some(index) = header_hit {
            let Some(column) = ColumnKey::ALL.get(index).copied() else {
                return Action::None;
            };
            let cell = self.header_cells[index];
            // The trailing filter glyph opens the dropdown
            let text_end = cell.x + self.header_width(column).min(cell.width);
            if column.is_filterable() && mouse.column + 2 >= text_end {
                return self.open_filter(column);
            }
            return self.cycle_sort(column);
        }

        if LayoutManager::contains(self.body_area, mouse.column, mouse.row) {
            // Rows scrolled off the top still count toward the page index
            let row = self.table_state.offset() + (mouse.row - self.body_area.y) as usize;
            if row < self.page_rows().len() {
                self.selected_row = row;
            }
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.bounds = rect;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.bg_container));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [table_area, footer_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let constraints = Self::column_constraints();
        let cells = Layout::horizontal(constraints)
            .flex(Flex::Legacy)
            .spacing(1)
            .split(table_area);
        self.header_cells = cells
            .iter()
            .map(|c| Rect {
                height: 1.min(table_area.height),
                ..*c
            })
            .collect();
        self.body_area = Rect {
            y: table_area.y + 2,
            height: table_area.height.saturating_sub(2),
            ..table_area
        };

        let header = Row::new(
            ColumnKey::ALL
                .iter()
                .zip(cells.iter())
                .map(|(column, cell)| Cell::from(self.header_line(*column, cell.width as usize))),
        )
        .bottom_margin(1)
        .style(Style::default().bg(self.theme.bg_layout));

        let page = self.page_rows();
        let rows: Vec<Row> = page
            .iter()
            .map(|record| {
                Row::new(ColumnKey::ALL.iter().zip(cells.iter()).map(|(column, cell)| {
                    Cell::from(ellipsize(&column.cell_text(record), cell.width as usize))
                }))
                .style(Style::default().fg(self.theme.text))
            })
            .collect();
        let has_rows = !rows.is_empty();

        let table = Table::new(rows, constraints)
            .header(header)
            .column_spacing(1)
            .flex(Flex::Legacy)
            .highlight_spacing(HighlightSpacing::Never)
            .row_highlight_style(Style::default().bg(self.theme.bg_layout).add_modifier(Modifier::BOLD));
        self.table_state.select(has_rows.then_some(self.selected_row));
        f.render_stateful_widget(table, table_area, &mut self.table_state);

        if !has_rows && self.body_area.height > 0 {
            f.render_widget(
                Paragraph::new(EMPTY_TABLE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(self.theme.text_secondary)),
                Rect {
                    height: 1,
                    ..self.body_area
                },
            );
        }

        let total = self.rows.len();
        let footer = format!(
            "{} rows  ‹ {} / {} ›",
            total,
            self.pagination.current,
            self.pagination.page_count(total)
        );
        f.render_widget(
            Paragraph::new(footer)
                .alignment(Alignment::Right)
                .style(Style::default().fg(self.theme.text_secondary)),
            footer_area,
        );

        self.render_dropdown(f);
    }
}

impl TableComponent {
    /// Rendered width of a header's title plus indicators
    fn header_width(&self, column: ColumnKey) -> u16 {
        let cell = ColumnKey::ALL
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.header_cells.get(i))
            .map_or(0, |c| c.width);
        self.header_line(column, cell as usize).width() as u16
    }
}
