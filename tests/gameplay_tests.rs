//! Integration tests for the game state machine: start, score, die, restart.

use tui_flappy::autopilot::should_flap;
use tui_flappy::core::{GameConfig, GameState};
use tui_flappy::types::{AudioCue, Phase, StartMode, Track, BIRD_START_Y, JUMP_VELOCITY};

/// Flap whenever the autopilot would, then tick.
fn fly(gs: &mut GameState, frames: u32) {
    for _ in 0..frames {
        if should_flap(&gs.snapshot()) {
            gs.interact();
        }
        gs.advance_frame();
    }
}

#[test]
fn test_game_lifecycle() {
    let mut gs = GameState::with_seed(12345);
    assert_eq!(gs.phase(), Phase::NotStarted);

    // Nothing moves before the first interaction.
    assert!(!gs.advance_frame().advanced);
    assert!(!gs.spawn_pipes());
    assert_eq!(gs.bird().y, BIRD_START_Y);
    assert!(gs.pipes().is_empty());

    let report = gs.interact();
    assert_eq!(report.from, Phase::NotStarted);
    assert_eq!(report.to, Phase::Running);
    assert_eq!(report.audio.as_slice(), &[AudioCue::PlayLoop(Track::Music)]);
    assert_eq!(gs.bird().velocity_y, JUMP_VELOCITY);
}

#[test]
fn test_clearing_a_pair_scores_one_point() {
    let mut gs = GameState::with_seed(1);
    gs.interact();
    // Gap spans roughly y = 212..425, around the bird's start height.
    assert!(gs.spawn_pipes_at(-300.0));

    fly(&mut gs, 200);
    assert_eq!(gs.phase(), Phase::Running);
    assert_eq!(gs.score(), 1.0);
    assert!(gs.pipes().iter().all(|p| p.passed));

    // Keep flying until the pair scrolls off the left edge.
    fly(&mut gs, 60);
    assert_eq!(gs.phase(), Phase::Running);
    assert!(gs.pipes().is_empty());
    assert_eq!(gs.score(), 1.0);
}

#[test]
fn test_pipe_collision_ends_the_game() {
    let mut gs = GameState::with_seed(1);
    gs.interact();
    // Top pipe covers y = 0..512: the bird cannot avoid it.
    gs.spawn_pipes_at(0.0);

    let mut ended_at = None;
    for _ in 0..200 {
        if gs.bird().y > BIRD_START_Y && gs.bird().velocity_y > -2.0 {
            gs.interact();
        }
        let report = gs.advance_frame();
        if report.ended {
            ended_at = Some(gs.frame());
            assert_eq!(
                report.audio.as_slice(),
                &[
                    AudioCue::Pause(Track::Music),
                    AudioCue::PlayOnce(Track::GameOver)
                ]
            );
            break;
        }
    }

    // The pipe's left edge reaches the bird's right edge (x = 79) on frame 141.
    assert_eq!(ended_at, Some(141));
    assert!(gs.game_over());
    assert_eq!(gs.score(), 0.0);
}

#[test]
fn test_game_over_is_frozen_until_restart() {
    let mut gs = GameState::with_seed(7);
    gs.interact();
    gs.spawn_pipes();
    while !gs.game_over() {
        gs.advance_frame();
    }

    let before = gs.snapshot();
    assert!(!gs.advance_frame().advanced);
    assert!(!gs.spawn_pipes());
    assert_eq!(gs.snapshot(), before);

    let report = gs.interact();
    assert!(report.restarted());
    assert_eq!(
        report.audio.as_slice(),
        &[
            AudioCue::Rewind(Track::Music),
            AudioCue::PlayLoop(Track::Music)
        ]
    );
    assert_eq!(gs.phase(), Phase::Running);
    assert_eq!(gs.episode_id(), before.episode_id + 1);
    assert_eq!(gs.score(), 0.0);
    assert!(gs.pipes().is_empty());
    assert_eq!(gs.bird().y, BIRD_START_Y);
    assert_eq!(gs.bird().velocity_y, JUMP_VELOCITY);
}

#[test]
fn test_immediate_mode_simulates_before_first_input() {
    let config = GameConfig::default().with_start_mode(StartMode::Immediate);
    let mut gs = GameState::new(config);

    assert!(gs.advance_frame().advanced);
    assert!(gs.bird().y > BIRD_START_Y);
    assert!(gs.spawn_pipes());
    assert_eq!(gs.phase(), Phase::NotStarted);

    // Falling off the board without ever interacting still ends the game,
    // but there is no music to pause.
    let mut last = None;
    while !gs.game_over() {
        let report = gs.advance_frame();
        if report.ended {
            last = Some(report.audio);
        }
    }
    let audio = last.unwrap();
    assert_eq!(audio.as_slice(), &[AudioCue::PlayOnce(Track::GameOver)]);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = GameState::with_seed(2024);
    let mut b = GameState::with_seed(2024);
    for gs in [&mut a, &mut b] {
        gs.interact();
        for _ in 0..3 {
            gs.spawn_pipes();
        }
    }
    let ys_a: Vec<f32> = a.pipes().iter().map(|p| p.y).collect();
    let ys_b: Vec<f32> = b.pipes().iter().map(|p| p.y).collect();
    assert_eq!(ys_a.len(), 6);
    assert_eq!(ys_a, ys_b);
}
