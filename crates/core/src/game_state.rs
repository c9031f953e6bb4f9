//! Game state module - owns the complete simulation
//!
//! This module ties together the bird, the pipe queue, the RNG and scoring.
//! It exposes two independently clocked entry points, [`GameState::advance_frame`]
//! and [`GameState::spawn_pipes`], plus the single player interaction
//! [`GameState::interact`]. None of them perform I/O: side effects the host
//! should carry out (audio) are returned as data, and drawing is described by
//! [`GameState::draw_into`].

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::config::GameConfig;
use crate::draw::{DrawCommand, DrawList, Label};
use crate::pipes::Pipes;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PipeSnapshot};
use crate::types::*;

/// Audio requests produced by a single call into the core.
pub type AudioCues = ArrayVec<AudioCue, 4>;

/// Outcome of one frame tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// False when the phase did not allow the simulation to advance.
    pub advanced: bool,
    /// Half points earned this frame.
    pub newly_passed: u32,
    /// Pipes removed from the front of the queue this frame.
    pub retired: usize,
    /// The life ended during this frame.
    pub ended: bool,
    pub audio: AudioCues,
}

/// Outcome of a player interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractReport {
    pub from: Phase,
    pub to: Phase,
    pub audio: AudioCues,
}

impl InteractReport {
    pub fn restarted(&self) -> bool {
        self.from == Phase::GameOver
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    bird: Bird,
    pipes: Pipes,
    rng: SimpleRng,
    phase: Phase,
    score_halves: u32,
    /// Monotonic life counter (increments on restart).
    episode_id: u32,
    /// Frames simulated in the current life.
    frame: u64,
    /// Pairs spawned in the current life.
    spawned_pairs: u32,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            bird: Bird::new(&config),
            pipes: Pipes::new(),
            rng: SimpleRng::new(config.seed),
            phase: Phase::NotStarted,
            score_halves: 0,
            episode_id: 0,
            frame: 0,
            spawned_pairs: 0,
            config,
        }
    }

    /// Reference game with the given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &Pipes {
        &self.pipes
    }

    pub fn score(&self) -> f64 {
        self.score_halves as f64 / 2.0
    }

    pub fn score_halves(&self) -> u32 {
        self.score_halves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn spawned_pairs(&self) -> u32 {
        self.spawned_pairs
    }

    #[cfg(test)]
    pub(crate) fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    /// Whether frame ticks and spawns advance the simulation in this phase.
    pub fn simulating(&self) -> bool {
        match self.phase {
            Phase::Running => true,
            Phase::NotStarted => self.config.start_mode == StartMode::Immediate,
            Phase::GameOver => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> InteractReport {
        match action {
            GameAction::Interact => self.interact(),
        }
    }

    /// Handle the single player interaction (key, click, touch).
    ///
    /// - NotStarted: start the game, start the music and flap.
    /// - GameOver: reset everything, restart the music and flap once.
    /// - Running: flap.
    pub fn interact(&mut self) -> InteractReport {
        let from = self.phase;
        let mut audio = AudioCues::new();

        match from {
            Phase::NotStarted => {
                self.phase = Phase::Running;
                audio.push(AudioCue::PlayLoop(Track::Music));
                log::info!("game started (seed {})", self.rng.seed());
            }
            Phase::GameOver => {
                self.reset();
                self.phase = Phase::Running;
                audio.push(AudioCue::Rewind(Track::Music));
                audio.push(AudioCue::PlayLoop(Track::Music));
                log::info!("restart: episode {}", self.episode_id);
            }
            Phase::Running => {}
        }

        self.bird.flap(self.config.jump_velocity);

        InteractReport {
            from,
            to: self.phase,
            audio,
        }
    }

    /// Restore the start-of-life state. The phase is left to the caller.
    fn reset(&mut self) {
        self.bird.reset(&self.config);
        self.pipes.clear();
        self.score_halves = 0;
        self.frame = 0;
        self.spawned_pairs = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Spawn one pipe pair with a random gap position.
    ///
    /// Returns false (and consumes no randomness) when the phase does not
    /// allow spawning.
    pub fn spawn_pipes(&mut self) -> bool {
        if !self.simulating() {
            return false;
        }
        let unit = self.rng.next_unit();
        let anchor = Pipes::anchor_for(&self.config, unit);
        self.push_pair(anchor);
        true
    }

    /// Spawn one pipe pair with the top pipe at `anchor_y`.
    ///
    /// Same phase gating as [`spawn_pipes`](Self::spawn_pipes); used by
    /// scripted scenarios that need a known layout.
    pub fn spawn_pipes_at(&mut self, anchor_y: f32) -> bool {
        if !self.simulating() {
            return false;
        }
        self.push_pair(anchor_y);
        true
    }

    fn push_pair(&mut self, anchor_y: f32) {
        self.pipes.spawn_pair(&self.config, anchor_y);
        self.spawned_pairs += 1;
        log::trace!("spawned pair {} at y={:.1}", self.spawned_pairs, anchor_y);
    }

    /// Main frame tick - physics, bounds, pipes, scoring, retirement.
    ///
    /// The fall check runs before the pipe checks; both route through the
    /// same idempotent end-of-life path, so a frame that does both only ends
    /// the game once.
    pub fn advance_frame(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.simulating() {
            return report;
        }
        report.advanced = true;
        self.frame += 1;

        self.bird.fall(self.config.gravity);
        if self.bird.is_below(self.config.board_height) {
            report.ended |= self.end_game(&mut report.audio);
        }

        let step = self
            .pipes
            .advance(self.config.scroll_velocity_x, &self.bird);
        self.score_halves += step.newly_passed;
        report.newly_passed = step.newly_passed;
        if step.collided {
            report.ended |= self.end_game(&mut report.audio);
        }

        report.retired = self.pipes.retire();
        if report.retired > 0 {
            log::trace!("retired {} pipes", report.retired);
        }

        report
    }

    /// End the current life. Returns false if it had already ended.
    fn end_game(&mut self, audio: &mut AudioCues) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if self.phase == Phase::Running {
            audio.push(AudioCue::Pause(Track::Music));
        }
        audio.push(AudioCue::PlayOnce(Track::GameOver));
        self.phase = Phase::GameOver;
        log::info!(
            "game over: score {} after {} frames",
            self.score(),
            self.frame
        );
        true
    }

    /// Describe the current frame: clear, bird, pipes, score, banner.
    pub fn draw_into(&self, out: &mut DrawList) {
        out.clear();
        out.push(DrawCommand::Clear(self.config.board_rect()));
        out.push(DrawCommand::Sprite {
            sprite: Sprite::Bird,
            rect: self.bird.rect(),
        });
        for pipe in self.pipes.iter() {
            out.push(DrawCommand::Sprite {
                sprite: pipe.kind.sprite(),
                rect: pipe.rect(),
            });
        }
        out.push(DrawCommand::Text {
            label: Label::Score(self.score_halves),
            x: SCORE_TEXT_X,
            y: SCORE_TEXT_Y,
        });
        if self.game_over() {
            out.push(DrawCommand::Text {
                label: Label::GameOver,
                x: SCORE_TEXT_X,
                y: GAME_OVER_TEXT_Y,
            });
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.bird = self.bird.into();
        out.pipes.clear();
        for pipe in self.pipes.iter() {
            if out.pipes.try_push(PipeSnapshot::from(*pipe)).is_err() {
                break;
            }
        }
        out.pipe_count = self.pipes.len();
        out.score_halves = self.score_halves;
        out.board_width = self.config.board_width;
        out.board_height = self.config.board_height;
        out.opening_space = self.config.opening_space;
        out.episode_id = self.episode_id;
        out.frame = self.frame;
        out.spawned_pairs = self.spawned_pairs;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipes::PipeKind;

    fn running() -> GameState {
        let mut state = GameState::with_seed(12345);
        state.interact();
        state
    }

    /// Kill the bird by dropping it below the board.
    fn kill(state: &mut GameState) {
        let below = state.config().board_height + 1.0;
        let bird = state.bird_mut();
        bird.y = below;
        bird.velocity_y = 0.0;
        state.advance_frame();
        assert!(state.game_over());
    }

    #[test]
    fn test_out_of_bounds_checked_after_physics() {
        let mut state = running();
        let below = state.config().board_height + 1.0;
        // Still rising from the flap: one tick carries the bird back inside.
        state.bird_mut().y = below;
        state.advance_frame();
        assert_eq!(state.phase(), Phase::Running);

        kill(&mut state);
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(12345);

        assert_eq!(state.phase(), Phase::NotStarted);
        assert_eq!(state.score(), 0.0);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.frame(), 0);
        assert!(state.pipes().is_empty());
        assert_eq!(state.bird().y, BIRD_START_Y);
    }

    #[test]
    fn test_not_started_blocks_simulation_by_default() {
        let mut state = GameState::with_seed(1);
        let report = state.advance_frame();
        assert!(!report.advanced);
        assert!(!state.spawn_pipes());
        assert_eq!(state.bird().y, BIRD_START_Y);
        assert!(state.pipes().is_empty());
    }

    #[test]
    fn test_immediate_mode_simulates_before_first_input() {
        let config = GameConfig::default().with_start_mode(StartMode::Immediate);
        let mut state = GameState::new(config);
        assert!(state.advance_frame().advanced);
        assert!(state.spawn_pipes());
        assert_eq!(state.phase(), Phase::NotStarted);
        assert!(state.bird().y > BIRD_START_Y);
    }

    #[test]
    fn test_first_interaction_starts_music_and_flaps() {
        let mut state = GameState::with_seed(1);
        let report = state.interact();

        assert_eq!(report.from, Phase::NotStarted);
        assert_eq!(report.to, Phase::Running);
        assert_eq!(report.audio.as_slice(), &[AudioCue::PlayLoop(Track::Music)]);
        assert_eq!(state.bird().velocity_y, JUMP_VELOCITY);
    }

    #[test]
    fn test_running_interaction_only_flaps() {
        let mut state = running();
        for _ in 0..5 {
            state.advance_frame();
        }
        let report = state.interact();
        assert!(report.audio.is_empty());
        assert_eq!(report.to, Phase::Running);
        assert_eq!(state.bird().velocity_y, JUMP_VELOCITY);
    }

    #[test]
    fn test_velocity_after_tick() {
        let mut state = running();
        // Flap set the velocity exactly; the next tick adds gravity.
        assert_eq!(state.bird().velocity_y, JUMP_VELOCITY);
        for _ in 0..20 {
            let before = state.bird().velocity_y;
            state.advance_frame();
            assert!((state.bird().velocity_y - (before + GRAVITY)).abs() < 1e-5);
        }
        state.interact();
        assert_eq!(state.bird().velocity_y, JUMP_VELOCITY);
    }

    #[test]
    fn test_ten_ticks_from_start_position() {
        let config = GameConfig::default().with_start_mode(StartMode::Immediate);
        let mut state = GameState::new(config);
        for _ in 0..10 {
            state.advance_frame();
        }
        assert!((state.bird().y - 342.0).abs() < 1e-3);
    }

    #[test]
    fn test_bird_never_above_top() {
        let mut state = running();
        for _ in 0..200 {
            state.interact();
            state.advance_frame();
            assert!(state.bird().y >= 0.0);
        }
        assert_eq!(state.bird().y, 0.0);
    }

    #[test]
    fn test_spawned_pair_gap() {
        let mut state = running();
        assert!(state.spawn_pipes());

        let pipes: Vec<_> = state.pipes().iter().copied().collect();
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].kind, PipeKind::Top);
        assert_eq!(pipes[1].y, pipes[0].y + PIPE_HEIGHT + OPENING_SPACE);
        let (min, max) = state.config().anchor_range();
        assert!(pipes[0].y > min && pipes[0].y <= max);
    }

    #[test]
    fn test_spawn_uses_seeded_rng() {
        let mut a = GameState::with_seed(77);
        let mut b = GameState::with_seed(77);
        a.interact();
        b.interact();
        for _ in 0..5 {
            a.spawn_pipes();
            b.spawn_pipes();
        }
        let ya: Vec<f32> = a.pipes().iter().map(|p| p.y).collect();
        let yb: Vec<f32> = b.pipes().iter().map(|p| p.y).collect();
        assert_eq!(ya, yb);
    }

    #[test]
    fn test_fall_ends_game_once() {
        let mut state = running();
        let mut ended = 0;
        let mut game_over_sounds = 0;
        for _ in 0..500 {
            let report = state.advance_frame();
            if report.ended {
                ended += 1;
            }
            game_over_sounds += report
                .audio
                .iter()
                .filter(|c| **c == AudioCue::PlayOnce(Track::GameOver))
                .count();
        }
        assert!(state.game_over());
        assert_eq!(ended, 1);
        assert_eq!(game_over_sounds, 1);
    }

    #[test]
    fn test_game_over_cues_pause_music_then_sound() {
        let mut state = running();
        state.bird_mut().y = BOARD_HEIGHT + 5.0;
        let report = state.advance_frame();
        assert!(report.ended);
        assert_eq!(
            report.audio.as_slice(),
            &[
                AudioCue::Pause(Track::Music),
                AudioCue::PlayOnce(Track::GameOver)
            ]
        );
    }

    #[test]
    fn test_fall_and_collision_same_frame_end_once() {
        let mut state = running();
        // Bottom pipe sitting right where the falling bird will be.
        let below = BOARD_HEIGHT + 1.0;
        let anchor = below - PIPE_HEIGHT - OPENING_SPACE - 10.0;
        assert!(state.spawn_pipes_at(anchor));
        for _ in 0..157 {
            // Hold the bird inside the gap while the pair scrolls onto its column.
            state.bird_mut().y = 500.0;
            state.bird_mut().velocity_y = 0.0;
            state.advance_frame();
        }
        assert!(!state.game_over());
        state.bird_mut().y = below;
        let report = state.advance_frame();
        assert!(report.ended);
        assert_eq!(
            report
                .audio
                .iter()
                .filter(|c| **c == AudioCue::PlayOnce(Track::GameOver))
                .count(),
            1
        );
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = running();
        state.spawn_pipes();
        kill(&mut state);

        let snapshot = state.snapshot();
        let report = state.advance_frame();
        assert!(!report.advanced);
        assert!(!state.spawn_pipes());
        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = running();
        state.spawn_pipes_at(-300.0);
        for _ in 0..200 {
            state.bird_mut().y = 250.0;
            state.advance_frame();
        }
        assert!(state.score_halves() > 0);
        kill(&mut state);

        let report = state.interact();
        assert!(report.restarted());
        assert_eq!(report.to, Phase::Running);
        assert_eq!(
            report.audio.as_slice(),
            &[
                AudioCue::Rewind(Track::Music),
                AudioCue::PlayLoop(Track::Music)
            ]
        );
        assert_eq!(state.score(), 0.0);
        assert!(state.pipes().is_empty());
        assert_eq!(state.bird().y, BIRD_START_Y);
        assert_eq!(state.bird().x, BIRD_START_X);
        assert_eq!(state.bird().velocity_y, JUMP_VELOCITY);
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.frame(), 0);
    }

    #[test]
    fn test_pair_scores_one_point() {
        let mut state = running();
        // Wide open gap around the bird's row.
        state.spawn_pipes_at(-400.0);
        let mut halves_seen = Vec::new();
        for _ in 0..300 {
            state.bird_mut().y = 200.0;
            state.bird_mut().velocity_y = 0.0;
            let report = state.advance_frame();
            assert!(!report.ended);
            if report.newly_passed > 0 {
                halves_seen.push(report.newly_passed);
            }
        }
        assert_eq!(state.score(), 1.0);
        assert_eq!(halves_seen, vec![2]);
    }

    #[test]
    fn test_pipes_stay_sorted_and_retire() {
        let mut state = running();
        let mut retired = 0;
        for frame in 0..2000u32 {
            if frame % 94 == 0 {
                state.spawn_pipes();
            }
            // Steer the bird into the gap of the pair it is about to meet.
            let bird_x = state.bird().x;
            let gap_y = state
                .pipes()
                .iter()
                .find(|p| p.kind == PipeKind::Top && p.right() >= bird_x)
                .map(|p| p.y + PIPE_HEIGHT + (OPENING_SPACE - BIRD_HEIGHT) / 2.0)
                .unwrap_or(300.0);
            state.bird_mut().y = gap_y;
            state.bird_mut().velocity_y = 0.0;
            let report = state.advance_frame();
            retired += report.retired;
            assert!(state.pipes().is_sorted_by_x());
            if state.game_over() {
                break;
            }
        }
        let spawned = state.spawned_pairs() as usize * 2;
        assert_eq!(spawned, retired + state.pipes().len());
    }

    #[test]
    fn test_draw_list_layout() {
        let mut state = running();
        state.spawn_pipes_at(-200.0);
        let mut list = DrawList::new();
        state.draw_into(&mut list);

        let cmds: Vec<DrawCommand> = list.iter().copied().collect();
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[0], DrawCommand::Clear(Rect::new(0.0, 0.0, 360.0, 640.0)));
        assert!(matches!(
            cmds[1],
            DrawCommand::Sprite {
                sprite: Sprite::Bird,
                ..
            }
        ));
        assert!(matches!(
            cmds[2],
            DrawCommand::Sprite {
                sprite: Sprite::TopPipe,
                ..
            }
        ));
        assert!(matches!(
            cmds[3],
            DrawCommand::Sprite {
                sprite: Sprite::BottomPipe,
                ..
            }
        ));
        assert_eq!(
            cmds[4],
            DrawCommand::Text {
                label: Label::Score(0),
                x: SCORE_TEXT_X,
                y: SCORE_TEXT_Y
            }
        );
    }

    #[test]
    fn test_draw_list_adds_banner_after_game_over() {
        let mut state = running();
        kill(&mut state);
        let mut list = DrawList::new();
        state.draw_into(&mut list);
        let last = list.iter().last().copied();
        assert_eq!(
            last,
            Some(DrawCommand::Text {
                label: Label::GameOver,
                x: SCORE_TEXT_X,
                y: GAME_OVER_TEXT_Y
            })
        );
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = running();
        state.spawn_pipes_at(-250.0);
        state.advance_frame();
        let snap = state.snapshot();

        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.bird.y, state.bird().y);
        assert_eq!(snap.pipes.len(), 2);
        assert_eq!(snap.pipe_count, 2);
        assert_eq!(snap.frame, 1);
        assert_eq!(snap.spawned_pairs, 1);
        assert_eq!(snap.seed, 12345);
        assert_eq!(snap.next_top_pipe().map(|p| p.y), Some(-250.0));
    }
}
