use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HacktermError {
    #[error("HACKTERM_SPEED must be a finite, non-negative number; got '{value}'")]
    InvalidSpeed { value: String },

    #[error("HACKTERM_SEED must be an unsigned 64-bit integer; got '{value}'")]
    InvalidSeed { value: String },

    #[error("I/O error while reading content override at {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content override JSON at {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error while opening log file at {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build mail link for '{recipient}': {source}")]
    MailLink {
        recipient: String,
        #[source]
        source: url::ParseError,
    },
}

impl HacktermError {
    #[must_use]
    pub fn content_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ContentRead {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn content_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ContentParse {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn log_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LogFile {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HacktermError>;
