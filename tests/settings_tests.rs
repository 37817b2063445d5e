//! Settings persistence tests
//!
//! Each test works in its own directory under the system temp dir.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use chess_rules::core::{
    load_settings, resolve_settings, save_settings, try_load_settings, CoreError, GameSettings,
    GlyphStyle, SettingsSource,
};

/// Shared byte sink used as a `tracing` writer
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chess_rules_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_settings_round_trip() {
    let dir = scratch_dir("round_trip");
    let path = dir.join("nested").join("settings.json");
    let settings = GameSettings {
        glyph_style: GlyphStyle::Ascii,
        show_hints: false,
        show_captured: true,
        log_filter: "chess_rules=debug".to_string(),
    };

    save_settings(&settings, &path).unwrap();
    assert_eq!(try_load_settings(&path).unwrap(), settings);
    assert_eq!(load_settings(Some(&path)), settings);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = scratch_dir("missing");
    let path = dir.join("settings.json");

    assert_eq!(load_settings(Some(&path)), GameSettings::default());
    assert!(matches!(try_load_settings(&path), Err(CoreError::SettingsIo(_))));
}

#[test]
fn test_corrupt_file_uses_defaults() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_settings(Some(&path)), GameSettings::default());
    assert!(matches!(
        try_load_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = scratch_dir("partial");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, r#"{ "glyph_style": "ascii" }"#).unwrap();

    let settings = load_settings(Some(&path));
    assert_eq!(settings.glyph_style, GlyphStyle::Ascii);
    assert!(settings.show_hints);
    assert_eq!(settings.log_filter, GameSettings::default().log_filter);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_resolve_reports_source() {
    let dir = scratch_dir("resolve");
    fs::create_dir_all(&dir).unwrap();
    let missing = dir.join("absent.json");
    let corrupt = dir.join("corrupt.json");
    let valid = dir.join("valid.json");
    fs::write(&corrupt, "{ bad").unwrap();
    save_settings(&GameSettings::default(), &valid).unwrap();

    let (settings, source) = resolve_settings(Some(&missing));
    assert_eq!(settings, GameSettings::default());
    assert!(matches!(source, SettingsSource::Missing(ref path) if *path == missing));

    let (settings, source) = resolve_settings(Some(&corrupt));
    assert_eq!(settings, GameSettings::default());
    assert!(source.is_invalid());
    assert!(matches!(
        source,
        SettingsSource::Invalid { error: CoreError::SettingsSerialization(_), .. }
    ));

    let (_, source) = resolve_settings(Some(&valid));
    assert!(matches!(source, SettingsSource::File(ref path) if *path == valid));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_file_warning_is_logged_once_subscriber_exists() {
    //! Settings are resolved before any subscriber is installed, so the
    //! warning must still come out when the source is logged afterwards.
    let dir = scratch_dir("warning");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, "{ bad").unwrap();

    let (_, source) = resolve_settings(Some(&path));

    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, || source.log());

    let logged = buffer.contents();
    assert!(logged.contains("WARN"), "expected a warning, got {logged:?}");
    assert!(logged.contains("Failed to load settings file"));
    assert!(logged.contains("Using defaults"));

    let _ = fs::remove_dir_all(&dir);
}
