//! Log sink setup.
//!
//! The raw-mode screen owns stdout, so records go to `HACKTERM_LOG_PATH` when set and to
//! stderr otherwise. `RUST_LOG` overrides the default `warn` filter.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

use crate::config::EnvConfig;
use crate::error::{HacktermError, Result};

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger. Repeated calls keep the first logger.
pub fn init(config: &EnvConfig) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp_millis();

    if let Some(path) = config.log_path.as_ref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| HacktermError::log_file(path, source))?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    if builder.try_init().is_err() {
        log::debug!("logger already installed; keeping existing sink");
    }
    Ok(())
}
