//! TUI Flappy (workspace facade crate).
//!
//! Re-exports the member crates as `tui_flappy::{core,engine,input,term,types}`
//! and adds the host-side pieces shared by both binaries: environment config,
//! file logging, JSON observations, the autopilot and the headless runner.

pub use tui_flappy_core as core;
pub use tui_flappy_engine as engine;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;

pub mod autopilot;
pub mod config;
pub mod headless;
pub mod logging;
pub mod observe;
