//! Interactive front end for the `hackterm` portfolio terminal.
//!
//! The key-handling thread owns [`app::App`] and never blocks on playback; accepted commands
//! run on a worker thread started by [`runtime::Runner`] and report the directory they leave
//! behind as an [`runtime::Event::JobFinished`]. Both threads write through one shared
//! [`tui::Screen`].
//!
//! Keys: Enter submits, Up/Down walk history, Ctrl+L clears, Ctrl+O opens the last mail link,
//! Ctrl+C or Ctrl+D exit. Configuration comes from `HACKTERM_*` environment variables, see
//! [`hackterm::EnvConfig`].

pub mod app;
pub mod runtime;
pub mod tui;
