//! Scripted portfolio terminal engine.
//!
//! A submitted line is echoed with the prompt, preceded by a short randomized "connection"
//! prelude, resolved against a fixed command table and played back as a time-ordered sequence
//! of transcript lines with typewriter pacing.
//!
//! Invariant: at most one command plays at a time. [`Session`] rejects submissions while a
//! behavior is in flight.
//!
//! # Public API Overview
//! - Drive the engine headlessly with [`Shell`], or split submission ([`Session`]) from
//!   playback ([`Dispatcher::run`]) when a front end runs commands off its input thread.
//! - Present output by implementing [`OutputSink`]; [`Transcript`] is the in-memory one.
//! - Swap pacing ([`Pacer`]) and randomness ([`RandomSource`]) for deterministic runs.

pub mod behaviors;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod link;
pub mod logging;
pub mod pacing;
pub mod platform;
pub mod random;
pub mod render;
pub mod session;
pub mod shell;

pub use crate::config::EnvConfig;
pub use crate::content::{ContentKey, ContentTable, Identity};
pub use crate::dispatch::{
    parse_line, ArgSpec, CommandContext, CommandRecord, CommandTable, Dispatcher, ParsedLine,
};
pub use crate::error::HacktermError;
pub use crate::link::{MailComposer, MailLink};
pub use crate::pacing::{InstantPacer, Pacer, SleepPacer};
pub use crate::random::{RandomSource, RngSource};
pub use crate::render::{Console, OutputLine, OutputSink, StyleClass, Transcript};
pub use crate::session::{
    navigate, prompt_for, HistoryDirection, HistoryStep, Invocation, Location, Session,
    Submission,
};
pub use crate::shell::Shell;
