//! Dashboard configuration (environment driven).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use stockboard_observability::{LogFormat, ParseLogFormatError};

use crate::seed::SeedSource;

pub const ENV_SEED_PATH: &str = "STOCKBOARD_SEED_PATH";
pub const ENV_ACTIVITY_INTERVAL_SECS: &str = "STOCKBOARD_ACTIVITY_INTERVAL_SECS";
pub const ENV_NOTIFICATION_SECS: &str = "STOCKBOARD_NOTIFICATION_SECS";
pub const ENV_LOG_FORMAT: &str = "STOCKBOARD_LOG_FORMAT";
pub const ENV_ACTIVITY_SEED: &str = "STOCKBOARD_ACTIVITY_SEED";

/// Counter animation frame period.
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);
/// Time for a counter to count up from zero to its target.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);
/// Delay before the welcome banner appears.
pub const WELCOME_DELAY: Duration = Duration::from_millis(500);

const DEFAULT_ACTIVITY_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}: expected a whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },

    #[error("STOCKBOARD_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),
}

/// Timer periods used by a running dashboard session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timings {
    pub counter_frame: Duration,
    pub counter_duration: Duration,
    pub activity_interval: Duration,
    pub notification_duration: Duration,
    pub welcome_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            counter_frame: COUNTER_FRAME,
            counter_duration: COUNTER_DURATION,
            activity_interval: DEFAULT_ACTIVITY_INTERVAL,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            welcome_delay: WELCOME_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    pub seed_path: Option<PathBuf>,
    pub timings: Timings,
    pub log_format: LogFormat,
    /// Fixed seed for the activity feed's random picks (reproducible demos).
    pub activity_seed: Option<u64>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.seed_path = lookup(ENV_SEED_PATH)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        if let Some(secs) = positive_secs(&lookup, ENV_ACTIVITY_INTERVAL_SECS)? {
            config.timings.activity_interval = secs;
        }
        if let Some(secs) = positive_secs(&lookup, ENV_NOTIFICATION_SECS)? {
            config.timings.notification_duration = secs;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        config.activity_seed = lookup(ENV_ACTIVITY_SEED)
            .map(|value| parse_u64(ENV_ACTIVITY_SEED, &value))
            .transpose()?;

        Ok(config)
    }

    pub fn seed_source(&self) -> SeedSource {
        match &self.seed_path {
            Some(path) => SeedSource::File(path.clone()),
            None => SeedSource::Embedded,
        }
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

fn positive_secs<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match parse_u64(key, &value)? {
        0 => Err(ConfigError::Zero { key }),
        secs => Ok(Some(Duration::from_secs(secs))),
    }
}
