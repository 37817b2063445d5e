//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, or in the current
//! directory when no such directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures are logged and fall back to default settings
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::core::error::{CoreError, CoreResult};
use crate::core::resources::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess_rules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn try_load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Where the settings in use came from
#[derive(Debug)]
pub enum SettingsSource {
    /// Parsed from this file
    File(PathBuf),
    /// No file at this path; defaults in use
    Missing(PathBuf),
    /// The file could not be read or parsed; defaults in use
    Invalid { path: PathBuf, error: CoreError },
}

impl SettingsSource {
    /// Whether defaults replaced a file that exists but is unusable
    pub fn is_invalid(&self) -> bool {
        matches!(self, SettingsSource::Invalid { .. })
    }

    /// Report the load result through `tracing`
    pub fn log(&self) {
        match self {
            SettingsSource::File(path) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
            }
            SettingsSource::Missing(path) => {
                info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            }
            SettingsSource::Invalid { path, error } => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, error
                );
            }
        }
    }
}

/// Load settings without logging, falling back to defaults on any problem
///
/// `None` means the default location from [`settings_path`]. Callers that set
/// up logging from the settings themselves log the returned source afterwards.
pub fn resolve_settings(path: Option<&Path>) -> (GameSettings, SettingsSource) {
    let file = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

    if !file.exists() {
        return (GameSettings::default(), SettingsSource::Missing(file));
    }

    match try_load_settings(&file) {
        Ok(settings) => (settings, SettingsSource::File(file)),
        Err(error) => (
            GameSettings::default(),
            SettingsSource::Invalid { path: file, error },
        ),
    }
}

/// Load settings and log where they came from
pub fn load_settings(path: Option<&Path>) -> GameSettings {
    let (settings, source) = resolve_settings(path);
    source.log();
    settings
}

/// Write settings as pretty JSON, creating the parent directory if needed
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
