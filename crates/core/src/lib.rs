//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: bird physics, the pipe queue,
//! collision, scoring and the phase state machine. It has **zero
//! dependencies** on terminals, audio devices, or clocks, making it:
//!
//! - **Deterministic**: Same seed produces identical pipe layouts
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Runs behind a terminal, a headless driver, or a bench
//! - **Fast**: Frame ticks do not allocate in steady state
//!
//! # Module Structure
//!
//! - [`bird`]: gravity, flap impulse, top-boundary clamp
//! - [`pipes`]: spawn, scroll, pass detection, front-only retirement
//! - [`game_state`]: phases, interaction, frame tick, spawn tick
//! - [`draw`]: host-agnostic description of a frame
//! - [`snapshot`]: copyable view of the state for observers
//! - [`rng`]: seeded LCG for gap placement
//! - [`config`]: gameplay constants bundled per game
//!
//! # Game Rules
//!
//! - **Gravity**: velocity grows by 0.4 per frame, then moves the bird
//! - **Flap**: sets velocity to -5 (never stacks)
//! - **Pipes**: a pair every 1.5s, scrolling 2 units per frame
//! - **Score**: half a point per pipe cleared, one per pair
//! - **Death**: touching a pipe or dropping below the board
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::Phase;
//!
//! let mut game = GameState::with_seed(12345);
//! assert_eq!(game.phase(), Phase::NotStarted);
//!
//! // First interaction starts the game and flaps.
//! game.interact();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.spawn_pipes();
//! let report = game.advance_frame();
//! assert!(report.advanced);
//! assert_eq!(game.pipes().len(), 2);
//! ```
//!
//! # Timing
//!
//! The core has no notion of time. A host scheduler calls
//! [`GameState::advance_frame`] once per display frame and
//! [`GameState::spawn_pipes`] once per spawn interval.

pub mod bird;
pub mod config;
pub mod draw;
pub mod game_state;
pub mod pipes;
pub mod rng;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use config::GameConfig;
pub use draw::{DrawCommand, DrawList, Label};
pub use game_state::{AudioCues, FrameReport, GameState, InteractReport};
pub use pipes::{Pipe, PipeKind, Pipes};
pub use rng::SimpleRng;
pub use snapshot::{BirdSnapshot, GameSnapshot, PipeSnapshot, MAX_SNAPSHOT_PIPES};
