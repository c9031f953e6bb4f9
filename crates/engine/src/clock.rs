//! Fixed-cadence scheduler for the two game drivers.
//!
//! The host feeds wall-clock time in; the clock emits `Frame` events every
//! `frame_ms` and `Spawn` events every `spawn_interval_ms`, in chronological
//! order. The two cadences are independent: spawning does not depend on how
//! many frames were actually rendered.

use crate::types::{FRAME_MS, SPAWN_INTERVAL_MS};

/// Longest stretch of time a single `advance` will simulate.
///
/// After a suspend or a long stall the backlog is dropped instead of replayed
/// as a burst of frames.
pub const MAX_STEP_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Frame,
    Spawn,
}

#[derive(Debug, Clone)]
pub struct Clock {
    frame_ms: u32,
    spawn_interval_ms: u32,
    /// Time since the last frame event.
    frame_acc: u32,
    /// Time since the last spawn event.
    spawn_acc: u32,
}

impl Clock {
    pub fn new(frame_ms: u32, spawn_interval_ms: u32) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            spawn_interval_ms: spawn_interval_ms.max(1),
            frame_acc: 0,
            spawn_acc: 0,
        }
    }

    pub fn frame_ms(&self) -> u32 {
        self.frame_ms
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.spawn_interval_ms
    }

    /// Time until the next event of either kind.
    pub fn until_next_event_ms(&self) -> u32 {
        let frame = self.frame_ms - self.frame_acc;
        let spawn = self.spawn_interval_ms - self.spawn_acc;
        frame.min(spawn)
    }

    /// Restart both cadences from zero.
    pub fn reset(&mut self) {
        self.frame_acc = 0;
        self.spawn_acc = 0;
    }

    /// Advance by `elapsed_ms`, calling `f` for every event that falls due.
    ///
    /// When a frame and a spawn fall due at the same instant the frame is
    /// emitted first.
    pub fn advance(&mut self, elapsed_ms: u32, mut f: impl FnMut(ClockEvent)) {
        let mut remaining = if elapsed_ms > MAX_STEP_MS {
            log::debug!("clock: dropping {}ms of backlog", elapsed_ms - MAX_STEP_MS);
            MAX_STEP_MS
        } else {
            elapsed_ms
        };

        loop {
            let step = self.until_next_event_ms();
            if step > remaining {
                break;
            }
            remaining -= step;
            self.frame_acc += step;
            self.spawn_acc += step;

            if self.frame_acc == self.frame_ms {
                self.frame_acc = 0;
                f(ClockEvent::Frame);
            }
            if self.spawn_acc == self.spawn_interval_ms {
                self.spawn_acc = 0;
                f(ClockEvent::Spawn);
            }
        }

        self.frame_acc += remaining;
        self.spawn_acc += remaining;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(FRAME_MS, SPAWN_INTERVAL_MS)
    }
}
