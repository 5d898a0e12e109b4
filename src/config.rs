//! Configuration management for refdesk
//!
//! Settings come from a TOML file; every section is optional and falls back
//! to its defaults.

use crate::constants::{
    APP_NAME, CONFIG_GENERATED, MAX_PAGE_SIZE, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use crate::icons::IconTheme;
use crate::navigation;
use crate::theme::{Theme, ThemeName};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level settings, one field per TOML section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub table: TableConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

/// `[ui]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar width in columns when expanded
    pub sidebar_width: u16,
    /// Start with the sidebar collapsed to icons
    pub sidebar_collapsed: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Menu entry selected on startup
    pub default_menu_key: String,
    /// Icon theme: "unicode", "emoji" or "ascii"
    pub icon_theme: IconTheme,
}

/// `[table]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
}

/// `[theme]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Built-in palette: "light" or "dark"
    pub name: ThemeName,
    /// Optional JSON token file applied on top of the light palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_file: Option<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            sidebar_collapsed: false,
            mouse_enabled: true,
            default_menu_key: navigation::DEFAULT_SELECTED_KEY.to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: crate::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ThemeConfig {
    /// Resolve the configured theme
    pub fn resolve(&self) -> Result<Theme> {
        match &self.tokens_file {
            Some(path) => Theme::load_file(path)
                .with_context(|| format!("Failed to load theme tokens: {}", path.display())),
            None => Ok(Theme::named(self.name)),
        }
    }
}

impl Config {
    /// First existing file from [`Config::candidate_paths`], or defaults when none exists
    pub fn load() -> Result<Self> {
        match Self::candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate one TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let shown = path.as_ref().display().to_string();
        let raw = std::fs::read_to_string(&path).with_context(|| format!("Cannot read {}", shown))?;
        let config: Config = toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", shown))?;
        config.validate()?;
        Ok(config)
    }

    /// `./refdesk.toml` wins over `$XDG_CONFIG_HOME/refdesk/config.toml`
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(format!("{}.toml", APP_NAME))];
        if let Ok(path) = Self::get_default_config_path() {
            paths.push(path);
        }
        paths
    }

    /// Reject values the shell cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        let menu = navigation::default_menu();
        if !navigation::is_selectable_key(&menu, &self.ui.default_menu_key) {
            anyhow::bail!("default_menu_key '{}' is not a selectable menu entry", self.ui.default_menu_key);
        }

        if self.table.page_size == 0 || self.table.page_size > MAX_PAGE_SIZE {
            anyhow::bail!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                self.table.page_size
            );
        }

        if let Some(path) = &self.theme.tokens_file {
            if !path.exists() {
                anyhow::bail!("theme tokens_file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Write the defaults as commented TOML, creating parent directories
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# refdesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Per-user config file location
    pub fn get_default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("No per-user config directory on this platform")?;
        Ok(base.join(APP_NAME).join("config.toml"))
    }
}
