//! A simple flap heuristic for headless runs and demos.
//!
//! Aim for the lower part of the next gap: flap whenever the bird has sunk
//! below the aim line and is no longer climbing fast. Far from optimal, but
//! deterministic and good enough to clear most layouts.

use crate::core::GameSnapshot;
use crate::types::Phase;

/// Velocity above which a new flap is wasted (the bird is still climbing).
const CLIMBING: f32 = -2.0;

/// Distance kept between the bird's bottom edge and the bottom pipe.
fn margin(snap: &GameSnapshot) -> f32 {
    snap.opening_space * 0.2
}

/// Where the bird's bottom edge should stay above.
pub fn aim_line(snap: &GameSnapshot) -> f32 {
    match snap.next_top_pipe() {
        Some(top) => top.y + top.height + snap.opening_space - margin(snap),
        None => snap.board_height * 0.6,
    }
}

/// Should the player interact this frame?
///
/// Always true before the first interaction, never after death; restarting
/// is the caller's decision.
pub fn should_flap(snap: &GameSnapshot) -> bool {
    match snap.phase {
        Phase::NotStarted => true,
        Phase::GameOver => false,
        Phase::Running => {
            let bottom = snap.bird.y + snap.bird.height;
            bottom > aim_line(snap) && snap.bird.velocity_y > CLIMBING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::PIPE_HEIGHT;

    #[test]
    fn flaps_to_start() {
        let gs = GameState::with_seed(1);
        assert!(should_flap(&gs.snapshot()));
    }

    #[test]
    fn never_flaps_after_death() {
        let mut gs = GameState::with_seed(1);
        gs.interact();
        while !gs.game_over() {
            gs.advance_frame();
        }
        assert!(!should_flap(&gs.snapshot()));
    }

    #[test]
    fn aims_at_the_next_gap() {
        let mut gs = GameState::with_seed(1);
        gs.interact();
        gs.spawn_pipes_at(-300.0);
        let snap = gs.snapshot();
        let gap_bottom = -300.0 + PIPE_HEIGHT + snap.opening_space;
        assert!((aim_line(&snap) - (gap_bottom - snap.opening_space * 0.2)).abs() < 1e-3);
    }

    #[test]
    fn holds_off_while_climbing() {
        let mut gs = GameState::with_seed(1);
        gs.interact();
        // Just flapped: velocity is -5 even though the bird sits low.
        let mut snap = gs.snapshot();
        snap.bird.y = snap.board_height - snap.bird.height;
        assert!(!should_flap(&snap));

        snap.bird.velocity_y = 1.0;
        assert!(should_flap(&snap));
    }
}
