//! Terminal Flappy Bird runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! The game loop is fed real elapsed time; the poll timeout is the time
//! until the next frame or spawn falls due.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use tui_flappy::config::RunConfig;
use tui_flappy::core::GameState;
use tui_flappy::engine::{AudioDevice, Clock, GameLoop};
use tui_flappy::input::{map_event, HostInput};
use tui_flappy::logging;
use tui_flappy::term::{BoardSurface, FrameBuffer, TerminalBell, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref(), config.log_level)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let bell = TerminalBell::new(io::stdout()).muted(config.mute);
    let result = run(&mut term, &config, bell);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn run<A: AudioDevice>(term: &mut TerminalRenderer, config: &RunConfig, audio: A) -> Result<()> {
    let state = GameState::new(config.game_config());
    let mut game = GameLoop::new(state, Clock::default(), audio);
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = Viewport::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let resized = viewport != Viewport::new(w, h);
        if resized {
            viewport = Viewport::new(w, h);
            term.invalidate();
        }

        if game.needs_redraw() || resized {
            let board = game.state().config().board_rect();
            let mut surface = BoardSurface::new(&mut fb, viewport, board.width, board.height);
            game.render(&mut surface);
            surface.draw_status(game.phase());
            term.present(&fb)?;
        }

        let timeout = Duration::from_millis(game.clock().until_next_event_ms() as u64)
            .checked_sub(last.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match map_event(&event::read()?) {
                Some(HostInput::Quit) => return Ok(()),
                Some(HostInput::Game(action)) => {
                    log::debug!("input: {}", action.as_str());
                    game.apply_action(action);
                }
                None => {}
            }
        }

        let elapsed = last.elapsed();
        let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            game.update(elapsed_ms);
            // Keep the sub-millisecond remainder for the next step.
            last += Duration::from_millis(elapsed_ms as u64);
        }
    }
}
