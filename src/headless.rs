//! Headless runner: simulate without a terminal and print observations.
//!
//! Time is simulated, not measured: each tick feeds exactly one frame period
//! to the game loop, so a given config always produces the same output.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::autopilot;
use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::engine::{Clock, GameLoop, NullAudio};
use crate::observe::build_observation;
use crate::types::{Phase, StartMode, FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub frames: u64,
    pub seed: u32,
    pub start_mode: StartMode,
    /// Let the autopilot flap (and restart after a death).
    pub autopilot: bool,
    /// Write an observation every N ticks. Deaths are always written.
    pub every: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            seed: 1,
            start_mode: StartMode::OnFirstInput,
            autopilot: true,
            every: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub frames_simulated: u64,
    pub deaths: u32,
    pub best_score: f64,
    pub final_score: f64,
    pub final_phase: Phase,
    pub records: u64,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("headless: missing value for {}", flag))
}

pub fn parse_args(args: &[String]) -> Result<HeadlessConfig> {
    let mut config = HeadlessConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                i += 1;
                let v = value(args, i, "--frames")?;
                config.frames = v
                    .parse()
                    .map_err(|_| anyhow!("headless: invalid --frames value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = value(args, i, "--seed")?;
                config.seed = v
                    .parse()
                    .map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?;
            }
            "--every" => {
                i += 1;
                let v = value(args, i, "--every")?;
                config.every = match v.parse::<u64>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(anyhow!("headless: invalid --every value: {}", v)),
                };
            }
            "--immediate" => config.start_mode = StartMode::Immediate,
            "--no-autopilot" => config.autopilot = false,
            other => {
                return Err(anyhow!("headless: unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

fn write_record(out: &mut impl Write, snap: &GameSnapshot, seq: u64) -> Result<()> {
    serde_json::to_writer(&mut *out, &build_observation(snap, seq))?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn run(config: &HeadlessConfig, out: &mut impl Write) -> Result<HeadlessSummary> {
    let game_config = GameConfig::default()
        .with_seed(config.seed)
        .with_start_mode(config.start_mode);
    let mut game = GameLoop::new(GameState::new(game_config), Clock::default(), NullAudio);
    let mut snap = GameSnapshot::default();
    let mut summary = HeadlessSummary::default();

    log::info!(
        "headless: seed={} frames={} mode={} autopilot={}",
        config.seed,
        config.frames,
        config.start_mode.as_str(),
        config.autopilot
    );

    for tick in 1..=config.frames {
        if config.autopilot {
            game.state().snapshot_into(&mut snap);
            let restart = snap.phase == Phase::GameOver;
            if restart || autopilot::should_flap(&snap) {
                game.interact();
            }
        }

        let step = game.update(FRAME_MS);
        summary.ticks = tick;
        summary.frames_simulated += step.frames as u64;
        if step.ended {
            summary.deaths += 1;
        }

        game.state().snapshot_into(&mut snap);
        summary.best_score = summary.best_score.max(snap.score());

        if step.ended || tick % config.every == 0 {
            write_record(out, &snap, summary.records)?;
            summary.records += 1;
        }
    }

    out.flush()?;
    summary.final_score = game.state().score();
    summary.final_phase = game.phase();
    log::info!(
        "headless: done deaths={} best={} final={}",
        summary.deaths,
        summary.best_score,
        summary.final_score
    );
    Ok(summary)
}
