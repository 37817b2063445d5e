//! UI module - terminal presentation of a [`GameState`](crate::game::GameState)
//!
//! The renderer only reads engine state; it never decides anything about the
//! rules.

pub mod renderer;

pub use renderer::{glyph, BoardRenderer};
