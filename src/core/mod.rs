//! Core module - application infrastructure around the rules engine
//!
//! - [`GameSettings`] - User preferences for the terminal front end
//! - `settings_persistence` - JSON load/save with graceful fallback
//! - [`CoreError`] - Settings I/O and parse failures

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{GameSettings, GlyphStyle};
pub use settings_persistence::{
    load_settings, resolve_settings, save_settings, settings_path, try_load_settings,
    SettingsSource,
};
