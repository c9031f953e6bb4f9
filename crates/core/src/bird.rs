//! Bird physics.

use crate::config::GameConfig;
use crate::types::Rect;

/// The player-controlled bird.
///
/// `x`, `width` and `height` never change after construction; only `y` and
/// `velocity_y` are simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.bird_y,
            width: config.bird_width,
            height: config.bird_height,
            velocity_y: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Apply one tick of gravity.
    ///
    /// Velocity accumulates before the position update, and the bird cannot
    /// rise above the top boundary.
    pub fn fall(&mut self, gravity: f32) {
        self.velocity_y += gravity;
        self.y = (self.y + self.velocity_y).max(0.0);
    }

    /// Replace the current vertical velocity with the jump impulse.
    pub fn flap(&mut self, jump_velocity: f32) {
        self.velocity_y = jump_velocity;
    }

    /// Restore the start position and zero velocity.
    pub fn reset(&mut self, config: &GameConfig) {
        self.y = config.bird_y;
        self.velocity_y = 0.0;
    }

    /// True once the bird's top edge has dropped below the board.
    pub fn is_below(&self, board_height: f32) -> bool {
        self.y > board_height
    }
}
