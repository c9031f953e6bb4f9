//! GameLoop: owns the simulation and drives it from host time.

use crate::clock::{Clock, ClockEvent};
use crate::core::{DrawList, GameState, InteractReport};
use crate::host::{play_cues, replay, AudioDevice, RenderSurface};
use crate::types::{GameAction, Phase, StartMode};

/// Counters accumulated over the lifetime of a loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub spawns: u64,
    pub lives_lost: u32,
    pub audio_failures: u64,
}

/// What one call to [`GameLoop::update`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Frame ticks that advanced the simulation.
    pub frames: u32,
    /// Spawn ticks that produced a pair.
    pub spawns: u32,
    pub ended: bool,
}

pub struct GameLoop<A: AudioDevice> {
    state: GameState,
    clock: Clock,
    audio: A,
    draw_list: DrawList,
    text_buf: String,
    stats: LoopStats,
    dirty: bool,
}

impl<A: AudioDevice> GameLoop<A> {
    pub fn new(state: GameState, clock: Clock, audio: A) -> Self {
        Self {
            state,
            clock,
            audio,
            draw_list: DrawList::new(),
            text_buf: String::with_capacity(16),
            stats: LoopStats::default(),
            dirty: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// True when the state changed since the last [`render`](Self::render).
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Deliver a mapped input action.
    ///
    /// When the game was waiting for its first input, both cadences start
    /// counting from this moment.
    pub fn apply_action(&mut self, action: GameAction) -> InteractReport {
        let report = self.state.apply_action(action);
        if report.from == Phase::NotStarted
            && self.state.config().start_mode == StartMode::OnFirstInput
        {
            self.clock.reset();
        }
        self.stats.audio_failures += play_cues(&mut self.audio, &report.audio) as u64;
        self.dirty = true;
        report
    }

    /// Deliver the player's interaction signal.
    pub fn interact(&mut self) -> InteractReport {
        self.apply_action(GameAction::Interact)
    }

    /// Feed `elapsed_ms` of wall-clock time to both drivers.
    pub fn update(&mut self, elapsed_ms: u32) -> UpdateSummary {
        let mut summary = UpdateSummary::default();
        let Self {
            state,
            clock,
            audio,
            stats,
            ..
        } = self;

        clock.advance(elapsed_ms, |event| match event {
            ClockEvent::Frame => {
                let report = state.advance_frame();
                if !report.advanced {
                    return;
                }
                summary.frames += 1;
                stats.frames += 1;
                if report.ended {
                    summary.ended = true;
                    stats.lives_lost += 1;
                }
                stats.audio_failures += play_cues(audio, &report.audio) as u64;
            }
            ClockEvent::Spawn => {
                if state.spawn_pipes() {
                    summary.spawns += 1;
                    stats.spawns += 1;
                }
            }
        });

        if summary.frames > 0 || summary.spawns > 0 {
            self.dirty = true;
        }
        summary
    }

    /// Draw the current state onto `surface`.
    pub fn render<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        self.state.draw_into(&mut self.draw_list);
        replay(&self.draw_list, surface, &mut self.text_buf);
        self.dirty = false;
    }

    /// Convenience for hosts that only want the phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
}
