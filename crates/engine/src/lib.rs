//! Engine module - drives the core from a host.
//!
//! The core exposes two tick functions and an interaction; this crate is the
//! glue every host needs around them:
//!
//! - [`clock`]: fixed-cadence scheduler for frame and spawn ticks
//! - [`host`]: `RenderSurface` / `AudioDevice` seams and helpers that replay
//!   core output onto them
//! - [`game_loop`]: `GameLoop`, which owns a `GameState` and wires the above
//!   together
//!
//! Everything here is single-threaded. Hosts call `update` and `render` from
//! the same thread that delivers input.

pub mod clock;
pub mod game_loop;
pub mod host;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use clock::{Clock, ClockEvent, MAX_STEP_MS};
pub use game_loop::{GameLoop, LoopStats, UpdateSummary};
pub use host::{play_cues, replay, AudioDevice, NullAudio, RenderSurface};
