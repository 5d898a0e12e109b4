//! Visual theme tokens.
//!
//! A theme is a flat set of resolved terminal colors. It is built from one of
//! the built-in palettes or from a JSON token file shaped like
//!
//! ```json
//! {
//!   "token": { "colorPrimary": "#1677ff", "colorBgContainer": "#ffffff" },
//!   "components": {
//!     "Layout": { "siderBg": "#001529" },
//!     "Menu": { "darkItemColor": "#a6adb4", "darkItemSelectedBg": "#1677ff" }
//!   }
//! }
//! ```
//!
//! Tokens missing from a file fall back to the light palette.

use crate::error::ThemeError;
use crate::utils::color::parse_color;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

/// Resolved colors used by the components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub bg_container: Color,
    pub bg_layout: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub sider_bg: Color,
    pub sider_text: Color,
    pub sider_selected_bg: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(22, 119, 255),
            bg_container: Color::Rgb(255, 255, 255),
            bg_layout: Color::Rgb(245, 245, 245),
            text: Color::Rgb(31, 31, 31),
            text_secondary: Color::Rgb(140, 140, 140),
            border: Color::Rgb(217, 217, 217),
            sider_bg: Color::Rgb(0, 21, 41),
            sider_text: Color::Rgb(166, 173, 180),
            sider_selected_bg: Color::Rgb(22, 119, 255),
            warning: Color::Rgb(250, 173, 20),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(22, 104, 220),
            bg_container: Color::Rgb(20, 20, 20),
            bg_layout: Color::Rgb(0, 0, 0),
            text: Color::Rgb(230, 230, 230),
            text_secondary: Color::Rgb(140, 140, 140),
            border: Color::Rgb(66, 66, 66),
            sider_bg: Color::Rgb(20, 20, 20),
            sider_text: Color::Rgb(166, 173, 180),
            sider_selected_bg: Color::Rgb(22, 104, 220),
            warning: Color::Rgb(216, 150, 20),
        }
    }

    #[must_use]
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Parse a JSON token document on top of the light palette.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json)?;
        file.resolve(Self::light())
    }

    /// Read and parse a JSON token file.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeFile {
    token: GlobalTokens,
    components: ComponentTokens,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GlobalTokens {
    color_primary: Option<String>,
    color_bg_container: Option<String>,
    color_bg_layout: Option<String>,
    color_text: Option<String>,
    color_text_secondary: Option<String>,
    color_border: Option<String>,
    color_warning: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ComponentTokens {
    layout: LayoutTokens,
    menu: MenuTokens,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LayoutTokens {
    sider_bg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MenuTokens {
    dark_item_bg: Option<String>,
    dark_item_color: Option<String>,
    dark_item_selected_bg: Option<String>,
}

impl ThemeFile {
    fn resolve(self, base: Theme) -> Result<Theme, ThemeError> {
        let token = &self.token;
        let layout = &self.components.layout;
        let menu = &self.components.menu;

        Ok(Theme {
            primary: pick("colorPrimary", &token.color_primary, base.primary)?,
            bg_container: pick("colorBgContainer", &token.color_bg_container, base.bg_container)?,
            bg_layout: pick("colorBgLayout", &token.color_bg_layout, base.bg_layout)?,
            text: pick("colorText", &token.color_text, base.text)?,
            text_secondary: pick("colorTextSecondary", &token.color_text_secondary, base.text_secondary)?,
            border: pick("colorBorder", &token.color_border, base.border)?,
            // Menu item background wins over the layout sider background
            sider_bg: pick(
                "darkItemBg",
                &menu.dark_item_bg,
                pick("siderBg", &layout.sider_bg, base.sider_bg)?,
            )?,
            sider_text: pick("darkItemColor", &menu.dark_item_color, base.sider_text)?,
            sider_selected_bg: pick("darkItemSelectedBg", &menu.dark_item_selected_bg, base.sider_selected_bg)?,
            warning: pick("colorWarning", &token.color_warning, base.warning)?,
        })
    }
}

fn pick(token: &str, value: &Option<String>, fallback: Color) -> Result<Color, ThemeError> {
    match value {
        Some(v) => parse_color(v).ok_or_else(|| ThemeError::InvalidColor {
            token: token.to_string(),
            value: v.clone(),
        }),
        None => Ok(fallback),
    }
}
