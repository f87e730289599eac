//! Terminal trait the shell front end drives.

pub type InputHandler = Box<dyn FnMut(String) + Send>;

/// Minimal terminal interface: raw-mode lifecycle and input delivery.
pub trait Terminal {
    /// Enter raw mode and start delivering input chunks to `on_input`.
    fn start(&mut self, on_input: InputHandler) -> std::io::Result<()>;

    /// Stop input delivery and restore the original terminal state.
    fn stop(&mut self) -> std::io::Result<()>;
}

/// RAII guard that stops the terminal on drop.
pub struct TerminalGuard<T: Terminal> {
    terminal: Option<T>,
}

impl<T: Terminal> TerminalGuard<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal: Some(terminal),
        }
    }

    pub fn terminal_mut(&mut self) -> Option<&mut T> {
        self.terminal.as_mut()
    }

    /// Consume the guard without running cleanup.
    pub fn into_inner(mut self) -> Option<T> {
        self.terminal.take()
    }
}

impl<T: Terminal> Drop for TerminalGuard<T> {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            let _ = terminal.stop();
        }
    }
}
