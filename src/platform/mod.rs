pub mod keys;
#[cfg(unix)]
pub mod process_terminal;
pub mod terminal;
