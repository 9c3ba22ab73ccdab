//! Tests for global configuration management

use std::fs;
use std::path::PathBuf;

use acro::config::GlobalConfig;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert!(config.store.path.is_none());
    assert!(!config.lookup.exact);
    assert_eq!(config.net.city, "St. Louis");
    assert_eq!(config.net.astros_url, "http://api.open-notify.org/astros.json");
    assert!(config.net.weather_key.is_none());
}

#[test]
fn test_load_missing_file_gives_default() {
    let temp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&temp.path().join("config.toml"));
    assert!(config.store.path.is_none());
}

#[test]
fn test_load_malformed_file_gives_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(!config.lookup.exact);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[lookup]\nexact = true\n\n[net]\ncity = \"Chicago\"\n").unwrap();

    let config = GlobalConfig::load_from(&path);
    assert!(config.lookup.exact);
    assert_eq!(config.net.city, "Chicago");
    assert_eq!(config.net.state, "MO");
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = GlobalConfig::default();
    config.store.path = Some(PathBuf::from("/srv/glossary.txt"));
    config.net.weather_key = Some("secret".to_string());
    config.save_to(&path).unwrap();

    let loaded = GlobalConfig::load_from(&path);
    assert_eq!(loaded.store.path, Some(PathBuf::from("/srv/glossary.txt")));
    assert_eq!(loaded.net.resolved_weather_key().as_deref(), Some("secret"));
}

#[test]
fn test_blank_weather_key_is_ignored() {
    let mut config = GlobalConfig::default();
    config.net.weather_key = Some("   ".to_string());
    // A blank configured key wins over the environment and is then dropped
    assert!(config.net.resolved_weather_key().is_none());
}

// =============================================================================
// SET TESTS
// =============================================================================

#[test]
fn test_set_known_keys() {
    let mut config = GlobalConfig::default();
    config.set("store.path", "/srv/glossary.txt").unwrap();
    config.set("lookup.exact", "true").unwrap();
    config.set("net.city", "Denver").unwrap();
    config.set("net.weather_key", "abc").unwrap();

    assert_eq!(config.store.path, Some(PathBuf::from("/srv/glossary.txt")));
    assert!(config.lookup.exact);
    assert_eq!(config.net.city, "Denver");
    assert_eq!(config.net.weather_key.as_deref(), Some("abc"));
}

#[test]
fn test_set_empty_clears_optional_keys() {
    let mut config = GlobalConfig::default();
    config.set("store.path", "glossary.txt").unwrap();
    config.set("store.path", "").unwrap();
    assert!(config.store.path.is_none());
}

#[test]
fn test_set_rejects_bad_input() {
    let mut config = GlobalConfig::default();
    assert!(config.set("lookup.exact", "maybe").unwrap_err().contains("lookup.exact"));
    assert!(config.set("ui.theme", "dark").unwrap_err().contains("Unknown config key"));
}
