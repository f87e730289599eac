//! Environment configuration.

use std::env;
use std::path::PathBuf;

use crate::error::{HacktermError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub instant: bool,
    pub speed: f64,
    pub seed: Option<u64>,
    pub content_path: Option<PathBuf>,
    pub skip_banner: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            instant: false,
            speed: 1.0,
            seed: None,
            content_path: None,
            skip_banner: false,
            log_path: None,
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        let speed = match env_string_opt("HACKTERM_SPEED") {
            Some(raw) => parse_speed(&raw)?,
            None => 1.0,
        };
        let seed = match env_string_opt("HACKTERM_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| HacktermError::InvalidSeed { value: raw.clone() })?,
            ),
            None => None,
        };

        Ok(Self {
            instant: env_flag("HACKTERM_INSTANT"),
            speed,
            seed,
            content_path: env_string_opt("HACKTERM_CONTENT_PATH").map(PathBuf::from),
            skip_banner: env_flag("HACKTERM_NO_BANNER"),
            log_path: env_string_opt("HACKTERM_LOG_PATH").map(PathBuf::from),
        })
    }

    /// Scale applied to every pause; zero when pacing is disabled.
    pub fn effective_speed(&self) -> f64 {
        if self.instant {
            0.0
        } else {
            self.speed
        }
    }
}

fn parse_speed(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(HacktermError::InvalidSpeed {
            value: raw.to_string(),
        }),
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
