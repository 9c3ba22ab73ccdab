//! Centralized path definitions for acro
//!
//! ## Storage Layout
//!
//! ```text
//! ./acronyms.txt              # Default glossary (per working directory)
//!
//! ~/.acro/
//! └── config.toml             # User preferences
//! ```
//!
//! The glossary location is resolved in this order: `--file` (or the
//! `ACRO_FILE` environment variable, handled by the CLI), `store.path` in
//! the global config, then `acronyms.txt` in the working directory.

use std::path::{Path, PathBuf};

use crate::config::GlobalConfig;

/// Default glossary filename
pub const ACRONYMS_FILE: &str = "acronyms.txt";

/// Global config directory name
const GLOBAL_DIR: &str = ".acro";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the global config file location
pub const CONFIG_ENV: &str = "ACRO_CONFIG";

/// Get the global acro directory.
///
/// Returns `~/.acro/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$ACRO_CONFIG` when set, otherwise `~/.acro/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}

/// Resolve the glossary file.
///
/// An explicit path wins; otherwise the configured path; otherwise
/// `acronyms.txt` relative to the working directory.
#[must_use]
pub fn acronyms_file(explicit: Option<&Path>, config: &GlobalConfig) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(|| PathBuf::from(ACRONYMS_FILE))
}
