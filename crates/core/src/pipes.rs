//! Obstacle manager - spawns, scrolls, scores and retires pipes.
//!
//! Pipes live in a single queue in spawn order. Every pipe moves at the same
//! speed, so spawn order is also left-to-right order and retirement only ever
//! needs to look at the front of the queue.

use std::collections::VecDeque;

use crate::bird::Bird;
use crate::config::GameConfig;
use crate::types::{Rect, Sprite};

/// Which member of a pair a pipe is. Only affects drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeKind {
    Top,
    Bottom,
}

impl PipeKind {
    pub fn sprite(&self) -> Sprite {
        match self {
            PipeKind::Top => Sprite::TopPipe,
            PipeKind::Bottom => Sprite::BottomPipe,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub kind: PipeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once the bird has fully cleared this pipe; gates the half point.
    pub passed: bool,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// What happened to the pipes during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipeStep {
    /// Pipes whose passed flag flipped this frame (half points earned).
    pub newly_passed: u32,
    /// At least one pipe overlaps the bird after moving.
    pub collided: bool,
}

/// Ordered pipe queue.
#[derive(Debug, Clone, Default)]
pub struct Pipes {
    queue: VecDeque<Pipe>,
}

impl Pipes {
    pub fn new() -> Self {
        // Room for a few pairs on screen so steady-state play never grows it.
        Self {
            queue: VecDeque::with_capacity(16),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> + '_ {
        self.queue.iter()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Top pipe y coordinate for a jitter value `unit` in `[0, 1)`.
    pub fn anchor_for(config: &GameConfig, unit: f32) -> f32 {
        let (_, max) = config.anchor_range();
        max - unit * (config.pipe_height / 2.0)
    }

    /// Append a top/bottom pair at the spawn column.
    ///
    /// The bottom pipe is placed exactly `pipe_height + opening_space` below
    /// the top pipe, so the passable gap never depends on the jitter.
    pub fn spawn_pair(&mut self, config: &GameConfig, anchor_y: f32) {
        let top = Pipe {
            kind: PipeKind::Top,
            x: config.pipe_spawn_x,
            y: anchor_y,
            width: config.pipe_width,
            height: config.pipe_height,
            passed: false,
        };
        let bottom = Pipe {
            kind: PipeKind::Bottom,
            y: anchor_y + config.pipe_height + config.opening_space,
            ..top
        };
        self.queue.push_back(top);
        self.queue.push_back(bottom);
    }

    /// Scroll every pipe by `dx`, then run the pass and collision checks.
    pub fn advance(&mut self, dx: f32, bird: &Bird) -> PipeStep {
        let mut step = PipeStep::default();
        let bird_rect = bird.rect();

        for pipe in self.queue.iter_mut() {
            pipe.x += dx;

            if !pipe.passed && bird.right() > pipe.right() {
                pipe.passed = true;
                step.newly_passed += 1;
            }

            if bird_rect.overlaps(&pipe.rect()) {
                step.collided = true;
            }
        }

        step
    }

    /// Drop pipes whose right edge is more than one pipe width past the left
    /// boundary. Returns how many were removed.
    pub fn retire(&mut self) -> usize {
        let mut removed = 0;
        while let Some(front) = self.queue.front() {
            if front.right() >= -front.width {
                break;
            }
            self.queue.pop_front();
            removed += 1;
        }
        removed
    }

    /// Spawn order must equal left-to-right order.
    pub fn is_sorted_by_x(&self) -> bool {
        self.queue
            .iter()
            .zip(self.queue.iter().skip(1))
            .all(|(a, b)| a.x <= b.x)
    }
}
