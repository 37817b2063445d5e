//! User preferences for the terminal front end

use serde::{Deserialize, Serialize};

/// Settings that can be changed in `settings.json`
///
/// Missing fields take their default value, so older files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// How pieces are drawn
    pub glyph_style: GlyphStyle,

    /// Whether to mark candidate squares of the selected piece
    pub show_hints: bool,

    /// Whether to print both captured-piece lists under the board
    pub show_captured: bool,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            glyph_style: GlyphStyle::Unicode,
            show_hints: true,
            show_captured: true,
            log_filter: "warn".to_string(),
        }
    }
}

/// Piece glyph sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GlyphStyle {
    /// Chess symbols such as ♔ and ♟
    #[default]
    Unicode,
    /// Letters, uppercase for White and lowercase for Black
    Ascii,
}
