//! Gameplay configuration.
//!
//! Every value is fixed for the lifetime of a [`GameState`](crate::GameState);
//! there is no runtime tuning. `Default` yields the reference 360x640 game.

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_width: f32,
    pub board_height: f32,
    pub bird_x: f32,
    pub bird_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub scroll_velocity_x: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_spawn_x: f32,
    pub opening_space: f32,
    pub start_mode: StartMode,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_x: BIRD_START_X,
            bird_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            scroll_velocity_x: SCROLL_VELOCITY_X,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_spawn_x: PIPE_SPAWN_X,
            opening_space: OPENING_SPACE,
            start_mode: StartMode::OnFirstInput,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start_mode(mut self, start_mode: StartMode) -> Self {
        self.start_mode = start_mode;
        self
    }

    /// The play area, used for the per-frame clear.
    pub fn board_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.board_width, self.board_height)
    }

    /// Range of the top pipe's y coordinate: `[min, max)`.
    ///
    /// The top pipe always hangs between a quarter and three quarters of its
    /// height above the board.
    pub fn anchor_range(&self) -> (f32, f32) {
        let max = -self.pipe_height / 4.0;
        let min = max - self.pipe_height / 2.0;
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let c = GameConfig::default();
        assert_eq!(c.board_rect(), Rect::new(0.0, 0.0, 360.0, 640.0));
        assert_eq!(c.bird_x, 45.0);
        assert_eq!(c.bird_y, 320.0);
        assert_eq!(c.start_mode, StartMode::OnFirstInput);
    }

    #[test]
    fn anchor_range_spans_half_a_pipe() {
        let (min, max) = GameConfig::default().anchor_range();
        assert_eq!(max, -128.0);
        assert_eq!(min, -384.0);
    }

    #[test]
    fn builders_override_fields() {
        let c = GameConfig::default()
            .with_seed(9)
            .with_start_mode(StartMode::Immediate);
        assert_eq!(c.seed, 9);
        assert_eq!(c.start_mode, StartMode::Immediate);
    }
}
