//! Static description of the sidebar navigation menu.

use crate::icons::IconKind;

/// Key of the entry selected at startup
pub const DEFAULT_SELECTED_KEY: &str = "7";

/// A node in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Selectable entry, or a submenu when it has children
    Item {
        key: &'static str,
        label: &'static str,
        icon: Option<IconKind>,
        children: Vec<MenuEntry>,
    },
    /// Horizontal separator
    Divider,
}

impl MenuEntry {
    fn leaf(key: &'static str, label: &'static str, icon: Option<IconKind>) -> Self {
        MenuEntry::Item {
            key,
            label,
            icon,
            children: Vec::new(),
        }
    }

    fn submenu(key: &'static str, label: &'static str, icon: IconKind, children: Vec<MenuEntry>) -> Self {
        MenuEntry::Item {
            key,
            label,
            icon: Some(icon),
            children,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Item { key, .. } => Some(key),
            MenuEntry::Divider => None,
        }
    }

    #[must_use]
    pub fn is_submenu(&self) -> bool {
        matches!(self, MenuEntry::Item { children, .. } if !children.is_empty())
    }
}

/// The menu shown in the sidebar.
#[must_use]
pub fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("1", "Все продукты", Some(IconKind::Apps)),
        MenuEntry::leaf("2", "Поиск", Some(IconKind::Search)),
        MenuEntry::Divider,
        MenuEntry::leaf("3", "Новая заявка", Some(IconKind::Plus)),
        MenuEntry::leaf("4", "Конструктор отчётов", Some(IconKind::Tool)),
        MenuEntry::submenu(
            "sub1",
            "Репроцессинг",
            IconKind::ProgressCheck,
            vec![
                MenuEntry::leaf("5", "Обработка ошибок", None),
                MenuEntry::leaf("6", "Планирование задач", None),
            ],
        ),
        MenuEntry::leaf("7", "Справочники", Some(IconKind::Files)),
        MenuEntry::leaf("8", "Продуктовый каталог", Some(IconKind::License)),
    ]
}

/// Find the label of the entry with `key`, searching submenus too.
#[must_use]
pub fn find_label(menu: &[MenuEntry], key: &str) -> Option<&'static str> {
    menu.iter().find_map(|entry| match entry {
        MenuEntry::Item {
            key: k,
            label,
            children,
            ..
        } => {
            if *k == key {
                Some(*label)
            } else {
                find_label(children, key)
            }
        }
        MenuEntry::Divider => None,
    })
}

/// Key of the submenu that contains `key`, if any.
#[must_use]
pub fn parent_key(menu: &[MenuEntry], key: &str) -> Option<&'static str> {
    menu.iter().find_map(|entry| match entry {
        MenuEntry::Item {
            key: k, children, ..
        } if !children.is_empty() => {
            if children.iter().any(|child| child.key() == Some(key)) {
                Some(*k)
            } else {
                parent_key(children, key)
            }
        }
        _ => None,
    })
}

/// Whether `key` names an entry that can be selected (not a submenu or divider).
#[must_use]
pub fn is_selectable_key(menu: &[MenuEntry], key: &str) -> bool {
    menu.iter().any(|entry| match entry {
        MenuEntry::Item {
            key: k, children, ..
        } => (*k == key && children.is_empty()) || is_selectable_key(children, key),
        MenuEntry::Divider => false,
    })
}
