//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless simulation).
//!
//! # Board Geometry
//!
//! The board is measured in logical units, not terminal cells:
//!
//! - **Width**: 360 units
//! - **Height**: 640 units
//! - **Bird spawn**: (45, 320), i.e. one eighth across and halfway down
//!
//! The y axis grows downwards; y = 0 is the top boundary.
//!
//! # Physics Constants
//!
//! All velocities are expressed in units per frame tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.4 | Added to the bird's vertical velocity every tick |
//! | `JUMP_VELOCITY` | -5.0 | Vertical velocity set by a flap |
//! | `SCROLL_VELOCITY_X` | -2.0 | Horizontal pipe velocity |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame tick interval (~60 FPS) |
//! | `SPAWN_INTERVAL_MS` | 1500 | Wall-clock cadence of pipe spawns |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Phase, Rect, BOARD_HEIGHT, BOARD_WIDTH, OPENING_SPACE};
//!
//! assert_eq!(BOARD_WIDTH, 360.0);
//! assert_eq!(OPENING_SPACE, BOARD_HEIGHT / 3.0);
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(5.0, 5.0, 10.0, 10.0);
//! assert!(a.overlaps(&b));
//!
//! assert_eq!(Phase::from_str("game_over"), Some(Phase::GameOver));
//! ```

/// Board width in logical units
pub const BOARD_WIDTH: f32 = 360.0;

/// Board height in logical units
pub const BOARD_HEIGHT: f32 = 640.0;

/// Bird sprite width
pub const BIRD_WIDTH: f32 = 34.0;

/// Bird sprite height
pub const BIRD_HEIGHT: f32 = 34.0;

/// Bird x position (fixed for the whole game)
pub const BIRD_START_X: f32 = BOARD_WIDTH / 8.0;

/// Bird y position at game start and after every reset
pub const BIRD_START_Y: f32 = BOARD_HEIGHT / 2.0;

/// Pipe width
pub const PIPE_WIDTH: f32 = 64.0;

/// Pipe height
pub const PIPE_HEIGHT: f32 = 512.0;

/// Pipes spawn just beyond the right edge of the board
pub const PIPE_SPAWN_X: f32 = BOARD_WIDTH;

/// Vertical gap between the top and bottom pipe of a pair
pub const OPENING_SPACE: f32 = BOARD_HEIGHT / 3.0;

/// Acceleration added to the bird's vertical velocity per tick
pub const GRAVITY: f32 = 0.4;

/// Vertical velocity set by a flap (negative = upwards)
pub const JUMP_VELOCITY: f32 = -5.0;

/// Horizontal velocity shared by every pipe (negative = leftwards)
pub const SCROLL_VELOCITY_X: f32 = -2.0;

/// Frame tick interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Pipe spawn cadence in milliseconds
pub const SPAWN_INTERVAL_MS: u32 = 1500;

/// Score text anchor (top-left of the board)
pub const SCORE_TEXT_X: f32 = 5.0;
pub const SCORE_TEXT_Y: f32 = 45.0;

/// "GAME OVER" banner anchor, one text line below the score
pub const GAME_OVER_TEXT_Y: f32 = 90.0;

/// Background music volume hint for hosts that support it
pub const MUSIC_VOLUME: f32 = 0.4;

/// Game-over sound volume hint for hosts that support it
pub const GAME_OVER_VOLUME: f32 = 0.6;


/// Axis-aligned rectangle in board units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on both axes.
    ///
    /// Rectangles that only share an edge do not overlap. The predicate is
    /// symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Coarse game phase
///
/// - **NotStarted**: waiting for the first interaction
/// - **Running**: a life is in progress
/// - **GameOver**: the bird hit a pipe or fell off the board
///
/// The cycle goes: NotStarted → Running → GameOver → Running → ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl Phase {
    /// Parse phase from its snake_case name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "not_started" => Some(Phase::NotStarted),
            "running" => Some(Phase::Running),
            "game_over" => Some(Phase::GameOver),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Running => "running",
            Phase::GameOver => "game_over",
        }
    }
}

/// Whether the simulation runs before the first interaction.
///
/// - **OnFirstInput**: physics and spawning wait in `NotStarted` until the
///   player flaps for the first time.
/// - **Immediate**: physics and spawning run from initialization; the first
///   interaction only moves the phase to `Running` (and starts the music).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StartMode {
    #[default]
    OnFirstInput,
    Immediate,
}

impl StartMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "input" | "on-first-input" | "on_first_input" => Some(StartMode::OnFirstInput),
            "immediate" => Some(StartMode::Immediate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StartMode::OnFirstInput => "input",
            StartMode::Immediate => "immediate",
        }
    }
}

/// Player-facing game actions
///
/// The game has a single control: every key press, click or touch is an
/// interaction whose meaning depends on the current [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start, flap, or restart depending on phase
    Interact,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Interact => "interact",
        }
    }
}

/// Images the core asks the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Bird,
    TopPipe,
    BottomPipe,
}

/// Audio tracks the core asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Looping background music
    Music,
    /// One-shot sound played when a life ends
    GameOver,
}

impl Track {
    /// Playback volume in `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        match self {
            Track::Music => MUSIC_VOLUME,
            Track::GameOver => GAME_OVER_VOLUME,
        }
    }
}

/// Fire-and-forget audio request emitted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Rewind a track to its beginning
    Rewind(Track),
    PlayLoop(Track),
    Pause(Track),
    PlayOnce(Track),
}
