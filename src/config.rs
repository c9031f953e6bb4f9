//! Runtime options for the terminal binary, read from the environment.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::StartMode;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u32,
    pub start_mode: StartMode,
    pub mute: bool,
    pub log_path: Option<String>,
    pub log_level: log::LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            start_mode: StartMode::default(),
            mute: false,
            log_path: None,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl RunConfig {
    /// Create from `FLAPPY_*` environment variables.
    ///
    /// Unparseable values fall back to defaults; a missing seed is taken
    /// from the wall clock so every run gets a fresh layout.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("FLAPPY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let start_mode = lookup("FLAPPY_START_MODE")
            .and_then(|s| StartMode::from_str(s.trim()))
            .unwrap_or_default();

        let mute = lookup("FLAPPY_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("FLAPPY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("FLAPPY_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(log::LevelFilter::Info);

        Self {
            seed,
            start_mode,
            mute,
            log_path,
            log_level,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_seed(self.seed)
            .with_start_mode(self.start_mode)
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = RunConfig::from_env();
    }

    #[test]
    fn test_reads_all_variables() {
        let config = RunConfig::from_lookup(lookup(&[
            ("FLAPPY_SEED", "42"),
            ("FLAPPY_START_MODE", "immediate"),
            ("FLAPPY_MUTE", "TRUE"),
            ("FLAPPY_LOG_PATH", " /tmp/flappy.jsonl "),
            ("FLAPPY_LOG_LEVEL", "trace"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.start_mode, StartMode::Immediate);
        assert!(config.mute);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/flappy.jsonl"));
        assert_eq!(config.log_level, log::LevelFilter::Trace);

        let game = config.game_config();
        assert_eq!(game.seed, 42);
        assert_eq!(game.start_mode, StartMode::Immediate);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = RunConfig::from_lookup(lookup(&[
            ("FLAPPY_SEED", "7"),
            ("FLAPPY_START_MODE", "whenever"),
            ("FLAPPY_MUTE", "yes please"),
            ("FLAPPY_LOG_PATH", "   "),
            ("FLAPPY_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config.start_mode, StartMode::OnFirstInput);
        assert!(!config.mute);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }
}
