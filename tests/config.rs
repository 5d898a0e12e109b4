use refdesk::config::Config;
use refdesk::icons::IconTheme;
use refdesk::theme::ThemeName;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.sidebar_width, 30);
    assert!(!config.ui.sidebar_collapsed);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.default_menu_key, "7");
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.table.page_size, 10);
    assert_eq!(config.theme.name, ThemeName::Light);
    assert!(config.theme.tokens_file.is_none());
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Submenu keys cannot be the startup selection
    config.ui.sidebar_width = 35;
    config.ui.default_menu_key = "sub1".to_string();
    assert!(config.validate().is_err());

    config.ui.default_menu_key = "5".to_string();
    assert!(config.validate().is_ok());

    config.table.page_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_tokens_file_is_rejected() {
    let mut config = Config::default();
    config.theme.tokens_file = Some(std::env::temp_dir().join("refdesk_no_such_tokens.json"));
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_menu_key = \"7\""));
    assert!(toml_str.contains("page_size = 10"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
    assert!(!toml_str.contains("tokens_file"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35
icon_theme = "ascii"

[theme]
name = "dark"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.sidebar_width, 35);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.theme.name, ThemeName::Dark);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.default_menu_key, "7");
    assert_eq!(config.table.page_size, 10);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.ui.default_menu_key, default_config.ui.default_menu_key);
    assert_eq!(config.table.page_size, default_config.table.page_size);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_resolve_builtin_theme() {
    let config: Config = toml::from_str("[theme]\nname = \"dark\"\n").unwrap();
    let theme = config.theme.resolve().unwrap();
    assert_eq!(theme, refdesk::theme::Theme::dark());
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("refdesk_test_invalid_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("config.toml");
    fs::write(&path, "[table]\npage_size = 500\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("refdesk_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# refdesk Configuration File"));
    assert!(content.contains("default_menu_key = \"7\""));

    // The generated file loads back cleanly
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.table.page_size, 10);

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_candidate_paths_prefer_local_file() {
    let paths = Config::candidate_paths();
    assert_eq!(paths[0], std::path::PathBuf::from("refdesk.toml"));
    if let Ok(user_path) = Config::get_default_config_path() {
        assert_eq!(paths.last(), Some(&user_path));
    }
}
