//! Headless simulation: JSON-line observations on stdout.
//!
//! ```text
//! flappy-headless [--frames N] [--seed S] [--immediate] [--no-autopilot] [--every N]
//! ```

use std::io::{self, BufWriter};

use anyhow::Result;

use tui_flappy::config::RunConfig;
use tui_flappy::headless::{parse_args, run};
use tui_flappy::logging;

fn main() -> Result<()> {
    let env = RunConfig::from_env();
    logging::init(env.log_path.as_deref(), env.log_level)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(&config, &mut out)?;

    eprintln!(
        "ticks={} frames={} deaths={} best={} final={} ({})",
        summary.ticks,
        summary.frames_simulated,
        summary.deaths,
        summary.best_score,
        summary.final_score,
        summary.final_phase.as_str()
    );
    log::logger().flush();
    Ok(())
}
