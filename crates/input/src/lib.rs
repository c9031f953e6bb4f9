//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`] plus a
//! host-level quit request. The game has one control, so there is no repeat
//! handling: every press is one interaction.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit, HostInput};
