//! Terminal host for the game.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`surface`]: [`BoardSurface`], the engine's render surface over a framebuffer
//! - [`renderer`]: [`TerminalRenderer`], diff-flushes framebuffers via crossterm
//! - [`audio`]: [`TerminalBell`], the engine's audio device for terminals
//!
//! Everything except `renderer` is pure and unit-tested without a TTY.

pub mod audio;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_flappy_core as core;
pub use tui_flappy_engine as engine;
pub use tui_flappy_types as types;

pub use audio::TerminalBell;
pub use fb::{Cell, CellRect, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use surface::{BoardLayout, BoardSurface, Viewport};
