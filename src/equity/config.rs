use super::mode::Mode;
use std::time::Duration;

/// Policy knobs for one enumeration run.
///
/// Defaults come from the crate constants. [`Config::from_env`] layers process
/// environment overrides on top, and requests layer their own through the
/// `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub exhaustive_limit: u64,
    pub samples: u64,
    pub showdown_samples: u64,
    pub chunk: u64,
    pub seed: Option<u64>,
    pub deadline: Option<Duration>,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            exhaustive_limit: crate::EXHAUSTIVE_LIMIT,
            samples: crate::SAMPLE_COUNT,
            showdown_samples: crate::SHOWDOWN_SAMPLE_COUNT,
            chunk: crate::SAMPLE_CHUNK,
            seed: None,
            deadline: None,
            workers: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `EXHAUSTIVE_LIMIT`, `SAMPLE_COUNT`,
    /// `SHOWDOWN_SAMPLE_COUNT`, `DEADLINE_MS` and `WORKERS`.
    /// Unparseable values are logged and skipped.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            exhaustive_limit: env::<u64>("EXHAUSTIVE_LIMIT").unwrap_or(default.exhaustive_limit),
            samples: env::<u64>("SAMPLE_COUNT")
                .filter(|n| *n > 0)
                .unwrap_or(default.samples),
            showdown_samples: env::<u64>("SHOWDOWN_SAMPLE_COUNT")
                .filter(|n| *n > 0)
                .unwrap_or(default.showdown_samples),
            deadline: env::<u64>("DEADLINE_MS").map(Duration::from_millis),
            workers: env::<usize>("WORKERS").filter(|n| *n > 0),
            ..default
        }
    }
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
    pub fn with_limit(self, exhaustive_limit: u64) -> Self {
        Self {
            exhaustive_limit,
            ..self
        }
    }
    pub fn with_samples(self, samples: u64) -> Self {
        Self {
            samples: samples.max(1),
            ..self
        }
    }
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self { seed, ..self }
    }
    pub fn with_deadline(self, deadline: Option<Duration>) -> Self {
        Self { deadline, ..self }
    }
}

fn env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = std::env::var(key).ok()?;
    value
        .trim()
        .parse::<T>()
        .inspect_err(|_| log::warn!("ignoring {}={:?}, not a number", key, value))
        .ok()
}
