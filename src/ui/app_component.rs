use crate::config::Config;
use crate::constants::TAB_PARALLEL_CONTENT;
use crate::dataset::{self, Record};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::navigation::{self, MenuEntry};
use crate::table::{FilterState, SortState, SorterInput, TableViewController};
use crate::theme::Theme;
use crate::ui::components::{
    status_bar::{StatusBar, StatusInfo},
    toolbar_component::TOOLBAR_HEIGHT,
    DialogComponent, HeaderComponent, SidebarComponent, TableComponent, TabsComponent, ToolbarComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, TabKey},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::{LayoutManager, ShellAreas};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_tab: TabKey,
    pub selected_key: String,
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    header: HeaderComponent,
    tabs: TabsComponent,
    toolbar: ToolbarComponent,
    table: TableComponent,
    dialog: DialogComponent,

    // Table state owner and its data
    controller: TableViewController,
    records: &'static [Record],
    menu: Vec<MenuEntry>,

    // Application state
    state: AppState,
    icons: IconService,
    theme: Theme,
    logger: Logger,

    should_quit: bool,
    areas: ShellAreas,
    tab_area: Rect,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger, theme: Theme) -> Self {
        let menu = navigation::default_menu();
        let mut sidebar = SidebarComponent::new(menu.clone(), config.ui.sidebar_width);
        sidebar.set_collapsed(config.ui.sidebar_collapsed);
        sidebar.select(&config.ui.default_menu_key);

        let controller = TableViewController::new()
            .with_page_size(config.table.page_size)
            .with_logger(logger.clone());

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            sidebar,
            header: HeaderComponent::new(),
            tabs: TabsComponent::new(),
            toolbar: ToolbarComponent::new(),
            table: TableComponent::new(),
            dialog,
            controller,
            records: dataset::sample_records(),
            menu,
            state: AppState {
                active_tab: TabKey::List,
                selected_key: config.ui.default_menu_key.clone(),
            },
            icons: IconService::new(config.ui.icon_theme),
            theme,
            logger,
            should_quit: false,
            areas: ShellAreas::default(),
            tab_area: Rect::default(),
        };
        app.apply_style();
        app.sync_component_data();
        app
    }

    /// Build the shell with the configured theme. A theme that fails to load
    /// falls back to its built-in palette and is reported in an error dialog.
    pub fn from_config(config: &Config, logger: Logger) -> Self {
        match config.theme.resolve() {
            Ok(theme) => Self::new(config, logger, theme),
            Err(e) => {
                let mut app = Self::new(config, logger, Theme::named(config.theme.name));
                app.show_error(format!("{:#}", e));
                app
            }
        }
    }

    /// Open the error dialog with `message`
    pub fn show_error(&mut self, message: String) {
        log::error!("{}", message);
        self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &TableViewController {
        &self.controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn table(&self) -> &TableComponent {
        &self.table
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    pub fn toolbar(&self) -> &ToolbarComponent {
        &self.toolbar
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    /// Push icon theme and colors to every component
    fn apply_style(&mut self) {
        self.sidebar.set_style(self.icons.clone(), self.theme);
        self.header.set_style(self.icons.clone(), self.theme);
        self.tabs.theme = self.theme;
        self.toolbar.set_style(self.icons.clone(), self.theme);
        self.table.set_style(self.icons.clone(), self.theme);
        self.dialog.set_style(self.icons.clone(), self.theme);
    }

    /// Refresh component data from the controller after any change
    fn sync_component_data(&mut self) {
        let rows: Vec<Record> = self
            .controller
            .visible_rows(self.records)
            .into_iter()
            .cloned()
            .collect();
        self.table.set_data(
            rows,
            self.controller.filters().clone(),
            *self.controller.sort(),
            self.controller.pagination(),
        );

        let title = navigation::find_label(&self.menu, &self.state.selected_key).unwrap_or_default();
        self.header.set_title(title);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Route a key through the components in priority order
    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, even with a modal open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_global_key(key);
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let on_list = self.state.active_tab == TabKey::List;
        if on_list && self.table.is_dropdown_open() {
            return self.table.handle_key_events(key);
        }
        if on_list && self.toolbar.is_focused() {
            return self.toolbar.handle_key_events(key);
        }

        let action = self.sidebar.handle_key_events(key);
        if action != Action::None || self.sidebar_consumed(key) {
            return action;
        }

        let action = self.tabs.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        if on_list {
            let action = self.toolbar.handle_key_events(key);
            if action != Action::None || self.toolbar.is_focused() {
                return action;
            }
            let action = self.table.handle_key_events(key);
            if action != Action::None || Self::table_consumed(key) {
                return action;
            }
        }

        self.handle_global_key(key)
    }

    /// Sidebar keys that change local state without emitting an action
    fn sidebar_consumed(&self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('H') | KeyCode::Char('L') | KeyCode::Char('J') | KeyCode::Char('K') => true,
            KeyCode::Up | KeyCode::Down => key.modifiers.contains(KeyModifiers::SHIFT),
            _ => false,
        }
    }

    /// Table keys that change local state without emitting an action
    fn table_consumed(key: KeyEvent) -> bool {
        matches!(
            key.code,
            KeyCode::Left
                | KeyCode::Right
                | KeyCode::Up
                | KeyCode::Down
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Char('h')
                | KeyCode::Char('l')
                | KeyCode::Char('j')
                | KeyCode::Char('k')
                | KeyCode::Char('f')
        )
    }

    /// Route a mouse event to the component under the pointer
    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_mouse_events(mouse);
        }

        let on_list = self.state.active_tab == TabKey::List;
        if on_list && self.table.is_dropdown_open() {
            return self.table.handle_mouse_events(mouse);
        }
        if on_list && self.toolbar.is_focused() {
            // Open popups overlap the table; the toolbar decides what the click hits
            let action = self.toolbar.handle_mouse_events(mouse);
            if action != Action::None || self.toolbar.is_focused() {
                return action;
            }
        }

        let (column, row) = (mouse.column, mouse.row);
        let areas = self.areas;
        if LayoutManager::contains(areas.sidebar, column, row) {
            self.sidebar.handle_mouse_events(mouse)
        } else if LayoutManager::contains(areas.header, column, row) {
            self.header.handle_mouse_events(mouse)
        } else if LayoutManager::contains(self.tab_area, column, row) {
            self.tabs.handle_mouse_events(mouse)
        } else if on_list && LayoutManager::contains(areas.content, column, row) {
            let action = self.toolbar.handle_mouse_events(mouse);
            if action != Action::None || self.toolbar.is_focused() {
                action
            } else {
                self.table.handle_mouse_events(mouse)
            }
        } else {
            Action::None
        }
    }

    /// Apply an action that reached the application level
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match &action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::TableChange(change) => {
                self.controller.apply(change.clone());
            }
            Action::SortByAge => {
                self.logger.log("Toolbar: sort age".to_string());
                self.controller.set_age_sort();
            }
            Action::ClearFilters => {
                self.logger.log("Toolbar: clear filters".to_string());
                self.controller.clear_filters();
            }
            Action::ClearAll => {
                self.logger.log("Toolbar: clear filters and sorters".to_string());
                self.controller.clear_all();
            }
            Action::PickerChanged(value) => {
                // Routed to the table change handler with no filter or sort payload
                self.logger.log(format!("Picker changed to '{}'", value));
                let pagination = self.controller.pagination();
                self.controller
                    .on_view_change(pagination, FilterState::new(), SorterInput::Single(SortState::default()));
            }
            Action::NavigateToMenu(key) => {
                self.logger.log(format!("Navigate to menu entry '{}'", key));
                self.state.selected_key = key.clone();
            }
            Action::ToggleSidebar => {
                self.logger.log(format!(
                    "Sidebar {}",
                    if self.sidebar.collapsed { "collapsed" } else { "expanded" }
                ));
            }
            Action::SelectTab(tab) => {
                if *tab != TabKey::List {
                    self.toolbar.blur();
                    self.table.close_filter();
                }
                self.state.active_tab = *tab;
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icon theme: {:?}", self.icons.theme()));
                self.apply_style();
            }
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
        action
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        let action = self.tabs.update(action);
        let action = self.header.update(action);
        let action = self.toolbar.update(action);
        self.table.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Block::default().style(Style::default().bg(self.theme.bg_layout)), rect);

        let areas = LayoutManager::shell_layout(rect, self.sidebar.width());
        self.areas = areas;

        self.sidebar.render(f, areas.sidebar);
        self.header.render(f, areas.header);

        let content = LayoutManager::content_layout(areas.content, TOOLBAR_HEIGHT);
        self.tab_area = content.tabs;
        self.tabs.render(f, content.tabs);

        match self.state.active_tab {
            TabKey::List => {
                self.toolbar.render(f, content.toolbar);
                self.table.render(f, content.body);
                self.toolbar.render_overlay(f, areas.content);
            }
            TabKey::Parallel => {
                let pane = Rect {
                    height: content.toolbar.height + content.body.height,
                    ..content.toolbar
                };
                f.render_widget(
                    Paragraph::new(TAB_PARALLEL_CONTENT)
                        .alignment(Alignment::Left)
                        .style(Style::default().fg(self.theme.text).bg(self.theme.bg_container)),
                    pane,
                );
            }
        }

        let info = StatusInfo {
            filters: self.controller.filters(),
            sort: self.controller.sort(),
            tab: self.state.active_tab,
            toolbar_focused: self.toolbar.is_focused(),
            dropdown_open: self.table.is_dropdown_open(),
        };
        StatusBar::render(f, areas.status, &info, &self.theme);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
