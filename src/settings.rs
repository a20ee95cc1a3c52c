//! User settings read from `settings.toml` in the app root.
//!
//! The file is optional and read once at launch; nothing in the app writes
//! it back.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app_dirs;

/// Settings file name inside the app root directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Could not resolve the app root directory.
    #[error(transparent)]
    Dirs(#[from] app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse the settings file.
    #[error("Invalid settings at {path}: {source}")]
    Parse {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
}

/// Optional launch-time knobs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to a classifier artifact that replaces the installed one.
    pub model_path: Option<PathBuf>,
}

/// Resolve the settings file path inside the app root.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    Ok(app_dirs::app_root_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load settings from the app root, falling back to defaults when the file
/// does not exist.
pub fn load_or_default() -> Result<Settings, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from an explicit path; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
