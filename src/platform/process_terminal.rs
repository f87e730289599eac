//! Process-based terminal: raw-mode stdin with a poll-driven input thread, stdout writes.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread::{self, JoinHandle};

use libc::{self, c_int};
use signal_hook::iterator::Signals;

use crate::platform::terminal::{InputHandler, Terminal};

const INPUT_POLL_MS: i32 = 50;

fn wait_writable(fd: c_int) -> std::io::Result<()> {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLOUT,
        revents: 0,
    };
    loop {
        let result = unsafe { libc::poll(&mut fds, 1, -1) };
        if result < 0 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        if result > 0 && (fds.revents & libc::POLLOUT) != 0 {
            return Ok(());
        }
        if result > 0 {
            return Err(std::io::Error::other(format!(
                "poll(POLLOUT) returned revents=0x{:x}",
                fds.revents
            )));
        }
    }
}

fn write_all_fd(fd: c_int, bytes: &[u8]) -> std::io::Result<()> {
    let mut written = 0;
    while written < bytes.len() {
        let remaining = &bytes[written..];
        let result =
            unsafe { libc::write(fd, remaining.as_ptr() as *const libc::c_void, remaining.len()) };
        if result < 0 {
            let err = std::io::Error::last_os_error();
            match err.kind() {
                std::io::ErrorKind::Interrupted => continue,
                std::io::ErrorKind::WouldBlock => wait_writable(fd)?,
                _ => return Err(err),
            }
            continue;
        }
        if result == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "write returned 0",
            ));
        }
        written += result as usize;
    }
    Ok(())
}

fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

fn get_termios(fd: c_int) -> std::io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: c_int, termios: &libc::termios) -> std::io::Result<()> {
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

/// Cloneable handle writing to the terminal's output descriptor.
///
/// Shared between the key-handling thread and the command runner; callers serialize writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtyWriter {
    fd: c_int,
}

impl TtyWriter {
    pub fn stdout() -> Self {
        Self {
            fd: libc::STDOUT_FILENO,
        }
    }

    pub fn write_str(&self, data: &str) {
        if data.is_empty() {
            return;
        }
        if let Err(err) = write_all_fd(self.fd, data.as_bytes()) {
            log::warn!("terminal write failed: {err}");
        }
    }
}

pub struct ProcessTerminal {
    stdin_fd: c_int,
    writer: TtyWriter,
    original_termios: Arc<Mutex<Option<libc::termios>>>,
    input_thread: Option<JoinHandle<()>>,
    stop_flag: Arc<AtomicBool>,
}

impl ProcessTerminal {
    pub fn new() -> Self {
        Self {
            stdin_fd: libc::STDIN_FILENO,
            writer: TtyWriter::stdout(),
            original_termios: Arc::new(Mutex::new(None)),
            input_thread: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn writer(&self) -> TtyWriter {
        self.writer
    }

    /// Closure that restores the saved termios; safe to run from a signal thread.
    pub fn restorer(&self) -> impl Fn() + Send + Sync + 'static {
        let stdin_fd = self.stdin_fd;
        let saved = Arc::clone(&self.original_termios);
        move || {
            let saved = saved.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(original) = saved.as_ref() {
                let _ = set_termios(stdin_fd, original);
            }
        }
    }

    fn enable_raw_mode(&mut self) -> std::io::Result<()> {
        let mut saved = self
            .original_termios
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let original = match *saved {
            Some(original) => original,
            None => {
                let original = get_termios(self.stdin_fd)?;
                *saved = Some(original);
                original
            }
        };
        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        set_termios(self.stdin_fd, &raw)
    }

    fn restore_raw_mode(&mut self) -> std::io::Result<()> {
        let saved = self
            .original_termios
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(original) = saved.as_ref() {
            set_termios(self.stdin_fd, original)?;
        }
        Ok(())
    }

    fn start_input_thread(&mut self, mut on_input: InputHandler) {
        let stdin_fd = self.stdin_fd;
        let stop_flag = Arc::clone(&self.stop_flag);

        self.input_thread = Some(thread::spawn(move || {
            let mut buffer = [0u8; 4096];
            // Holds a UTF-8 sequence split across reads.
            let mut pending: Vec<u8> = Vec::new();

            while !stop_flag.load(Ordering::SeqCst) {
                if !poll_readable(stdin_fd, INPUT_POLL_MS) {
                    continue;
                }
                let read_len =
                    unsafe { libc::read(stdin_fd, buffer.as_mut_ptr() as *mut _, buffer.len()) };
                if read_len <= 0 {
                    continue;
                }

                pending.extend_from_slice(&buffer[..read_len as usize]);
                let valid_up_to = match std::str::from_utf8(&pending) {
                    Ok(_) => pending.len(),
                    Err(err) if err.error_len().is_none() => err.valid_up_to(),
                    Err(_) => pending.len(),
                };
                let chunk: Vec<u8> = pending.drain(..valid_up_to).collect();
                if chunk.is_empty() {
                    continue;
                }
                on_input(String::from_utf8_lossy(&chunk).into_owned());
            }
        }));
    }

    fn stop_input_thread(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.input_thread.take() {
            let _ = handle.join();
        }
    }
}

impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ProcessTerminal {
    fn start(&mut self, on_input: InputHandler) -> std::io::Result<()> {
        self.stop_flag.store(false, Ordering::SeqCst);
        self.enable_raw_mode()?;
        self.start_input_thread(on_input);
        log::debug!("terminal started in raw mode");
        Ok(())
    }

    fn stop(&mut self) -> std::io::Result<()> {
        self.stop_input_thread();

        // Flush input before leaving raw mode to avoid buffered bytes leaking to the shell.
        let _ = unsafe { libc::tcflush(self.stdin_fd, libc::TCIFLUSH) };

        let result = self.restore_raw_mode();
        log::debug!("terminal stopped");
        result
    }
}

/// Signal handler guard for cleanup hooks.
pub struct SignalHookGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

impl Drop for SignalHookGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Install a SIGINT/SIGTERM/SIGHUP hook that runs `cleanup` and then exits the process.
///
/// Raw mode turns Ctrl+C into an input byte, so SIGINT only arrives from outside.
pub fn install_signal_handlers<F>(cleanup: F) -> std::io::Result<SignalHookGuard>
where
    F: Fn() + Send + Sync + 'static,
{
    let mut signals = Signals::new([libc::SIGINT, libc::SIGTERM, libc::SIGHUP])?;
    let handle = signals.handle();

    let thread = thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            cleanup();
            std::process::exit(128 + signal);
        }
    });

    Ok(SignalHookGuard {
        handle,
        thread: Some(thread),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_pipe() -> (c_int, c_int) {
        let mut fds = [0; 2];
        let result = unsafe { libc::pipe(fds.as_mut_ptr()) };
        assert_eq!(result, 0, "pipe() failed");
        (fds[0], fds[1])
    }

    fn close(fd: c_int) {
        unsafe {
            libc::close(fd);
        }
    }

    #[test]
    fn writer_delivers_all_bytes() {
        let (read_fd, write_fd) = open_pipe();
        let writer = TtyWriter { fd: write_fd };
        writer.write_str("guest@bradhudson.dev:/$ ");

        let mut buf = [0u8; 64];
        let read_len = unsafe { libc::read(read_fd, buf.as_mut_ptr() as *mut _, buf.len()) };
        assert_eq!(
            &buf[..read_len as usize],
            "guest@bradhudson.dev:/$ ".as_bytes()
        );

        close(read_fd);
        close(write_fd);
    }

    #[test]
    fn poll_reports_pending_input() {
        let (read_fd, write_fd) = open_pipe();
        assert!(!poll_readable(read_fd, 0));

        write_all_fd(write_fd, b"ls\r").expect("pipe write");
        assert!(poll_readable(read_fd, 100));

        close(read_fd);
        close(write_fd);
    }

    #[test]
    fn termios_query_fails_on_non_tty() {
        let (read_fd, write_fd) = open_pipe();
        assert!(get_termios(read_fd).is_err());
        close(read_fd);
        close(write_fd);
    }
}
