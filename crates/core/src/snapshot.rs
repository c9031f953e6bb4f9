use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::pipes::{Pipe, PipeKind};
use crate::types::Phase;

/// Pipes carried by a snapshot. A reference board never holds more than a
/// handful of pairs at once; anything beyond this is counted but not copied.
pub const MAX_SNAPSHOT_PIPES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BirdSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
}

impl From<Bird> for BirdSnapshot {
    fn from(value: Bird) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
            velocity_y: value.velocity_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub kind: PipeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub passed: bool,
}

impl From<Pipe> for PipeSnapshot {
    fn from(value: Pipe) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
            passed: value.passed,
        }
    }
}

/// Read-only copy of the game state for observers.
///
/// `episode_id`, `frame`, `spawned_pairs` and `seed` do not affect play.
/// They exist for observation records and the state hash, so two runs can be
/// told apart even when the board looks the same.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub bird: BirdSnapshot,
    pub pipes: ArrayVec<PipeSnapshot, MAX_SNAPSHOT_PIPES>,
    /// Total pipes alive, including any not copied into `pipes`.
    pub pipe_count: usize,
    pub score_halves: u32,
    pub board_width: f32,
    pub board_height: f32,
    pub opening_space: f32,
    /// Restarts so far; 0 during the first life.
    pub episode_id: u32,
    pub frame: u64,
    /// Pipe pairs spawned during the current life.
    pub spawned_pairs: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn score(&self) -> f64 {
        self.score_halves as f64 / 2.0
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Next top pipe the bird has not yet cleared, if any.
    pub fn next_top_pipe(&self) -> Option<&PipeSnapshot> {
        let bird_x = self.bird.x;
        self.pipes
            .iter()
            .find(|p| p.kind == PipeKind::Top && p.x + p.width >= bird_x)
    }
}
