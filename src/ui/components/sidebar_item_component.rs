//! Sidebar item abstraction for the navigation menu.
//!
//! The menu tree is flattened into a list of [`SidebarItemType`] rows; the
//! [`SidebarItem`] trait tells the sidebar how each row renders and whether
//! it can be selected or folded.

use crate::icons::{IconKind, IconService};
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Rows that can appear in the sidebar
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarItemType {
    /// Selectable menu entry
    Entry {
        key: String,
        label: String,
        icon: Option<IconKind>,
        depth: usize,
    },
    /// Foldable submenu header
    SubMenu {
        key: String,
        label: String,
        icon: Option<IconKind>,
        is_expanded: bool,
        /// The selected entry lives inside this submenu
        contains_selection: bool,
    },
    /// Visual separator
    Divider,
}

/// Rendering context shared by all rows
pub struct SidebarRenderContext<'a> {
    pub icons: &'a IconService,
    pub theme: &'a Theme,
    pub selected_key: &'a str,
    pub collapsed: bool,
    pub width: u16,
}

pub trait SidebarItem {
    fn render(&self, ctx: &SidebarRenderContext<'_>) -> ListItem<'static>;

    /// Whether this item can be selected (navigated to)
    fn is_selectable(&self) -> bool;

    /// Whether this item can be folded/unfolded
    fn is_foldable(&self) -> bool;

    /// Menu key selected when this row is activated
    fn get_selection(&self) -> Option<String>;

    /// Menu key of the row (selectable or not)
    fn key(&self) -> Option<&str>;
}

impl SidebarItemType {
    fn icon_text(icon: Option<IconKind>, icons: &IconService) -> String {
        icon.map(|kind| format!("{} ", icons.glyph(kind))).unwrap_or_default()
    }
}

impl SidebarItem for SidebarItemType {
    fn render(&self, ctx: &SidebarRenderContext<'_>) -> ListItem<'static> {
        let normal = Style::default().fg(ctx.theme.sider_text);
        let selected = Style::default()
            .fg(ctx.theme.bg_container)
            .bg(ctx.theme.sider_selected_bg)
            .add_modifier(Modifier::BOLD);

        match self {
            SidebarItemType::Entry {
                key,
                label,
                icon,
                depth,
            } => {
                let style = if key == ctx.selected_key { selected } else { normal };
                let icon = Self::icon_text(*icon, ctx.icons);

                if ctx.collapsed {
                    return ListItem::new(Line::from(Span::styled(format!(" {}", icon), style))).style(style);
                }

                let indent = "  ".repeat(*depth);
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {}", indent), style),
                    Span::styled(icon, style),
                    Span::styled(label.clone(), style),
                ]))
                .style(style)
            }

            SidebarItemType::SubMenu {
                label,
                icon,
                is_expanded,
                contains_selection,
                ..
            } => {
                let style = if *contains_selection {
                    normal.fg(ctx.theme.bg_container).add_modifier(Modifier::BOLD)
                } else {
                    normal
                };
                let icon = Self::icon_text(*icon, ctx.icons);

                if ctx.collapsed {
                    return ListItem::new(Line::from(Span::styled(format!(" {}", icon), style)));
                }

                let arrow = ctx.icons.fold_arrow(*is_expanded);
                let text_width = ctx.width.saturating_sub(4) as usize;
                let used = icon.chars().count() + label.chars().count() + 1;
                let padding = " ".repeat(text_width.saturating_sub(used + arrow.chars().count()));

                ListItem::new(Line::from(vec![
                    Span::styled(" ", style),
                    Span::styled(icon, style),
                    Span::styled(label.clone(), style),
                    Span::styled(padding, style),
                    Span::styled(arrow, style),
                ]))
            }

            SidebarItemType::Divider => {
                let width = ctx.width.saturating_sub(2) as usize;
                ListItem::new(Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(ctx.theme.text_secondary),
                )))
            }
        }
    }

    fn is_selectable(&self) -> bool {
        matches!(self, SidebarItemType::Entry { .. })
    }

    fn is_foldable(&self) -> bool {
        matches!(self, SidebarItemType::SubMenu { .. })
    }

    fn get_selection(&self) -> Option<String> {
        match self {
            SidebarItemType::Entry { key, .. } => Some(key.clone()),
            _ => None,
        }
    }

    fn key(&self) -> Option<&str> {
        match self {
            SidebarItemType::Entry { key, .. } | SidebarItemType::SubMenu { key, .. } => Some(key),
            SidebarItemType::Divider => None,
        }
    }
}
