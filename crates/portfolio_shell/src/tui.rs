//! ANSI rendering of transcript lines and the input prompt.
//!
//! Lines are written as they arrive with no redraw of earlier output. The prompt occupies the
//! last screen line while the session is idle and is erased in place when a job starts, so the
//! command echo lands where the prompt was.

use std::sync::{Arc, Mutex, MutexGuard};

use hackterm::platform::process_terminal::TtyWriter;
use hackterm::{MailLink, OutputLine, OutputSink, StyleClass};

const RESET: &str = "\x1b[0m";
const ERASE_LINE: &str = "\r\x1b[2K";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[3J\x1b[H";

/// Raw output target for a [`Screen`].
pub trait ScreenWrite: Send {
    fn put(&mut self, data: &str);
}

impl ScreenWrite for TtyWriter {
    fn put(&mut self, data: &str) {
        self.write_str(data);
    }
}

impl ScreenWrite for String {
    fn put(&mut self, data: &str) {
        self.push_str(data);
    }
}

pub fn sgr(style: StyleClass) -> &'static str {
    match style {
        StyleClass::Info => "\x1b[36m",
        StyleClass::Success => "\x1b[32m",
        StyleClass::Warning => "\x1b[33m",
        StyleClass::Error => "\x1b[31m",
        StyleClass::Output => "",
        StyleClass::Command => "\x1b[1m",
    }
}

/// Raw mode disables output post-processing, so bare newlines need a carriage return.
fn raw_newlines(text: &str) -> String {
    text.replace('\n', "\r\n")
}

fn styled(style: StyleClass, text: &str) -> String {
    let code = sgr(style);
    if text.is_empty() {
        return String::new();
    }
    if code.is_empty() {
        return raw_newlines(text);
    }
    format!("{code}{}{RESET}", raw_newlines(text))
}

/// OSC 8 hyperlink around `label`; falls back to the plain label if the URL cannot be built.
pub fn hyperlink(label: &str, link: &MailLink) -> String {
    match link.mailto_url() {
        Ok(url) => format!("\x1b]8;;{url}\x1b\\\x1b[4m{label}{RESET}\x1b]8;;\x1b\\"),
        Err(error) => {
            log::warn!("cannot render mail link: {error}");
            label.to_string()
        }
    }
}

#[derive(Debug)]
pub struct Screen<W> {
    writer: W,
    line_open: bool,
    prompt_visible: bool,
    last_link: Option<MailLink>,
}

pub type SharedScreen<W> = Arc<Mutex<Screen<W>>>;

impl<W: ScreenWrite> Screen<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_open: false,
            prompt_visible: false,
            last_link: None,
        }
    }

    pub fn shared(writer: W) -> SharedScreen<W> {
        Arc::new(Mutex::new(Self::new(writer)))
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn last_link(&self) -> Option<&MailLink> {
        self.last_link.as_ref()
    }

    pub fn push_line(&mut self, line: &OutputLine) {
        self.break_line();
        let rendered = match &line.link {
            Some(link) => {
                self.last_link = Some(link.clone());
                hyperlink(&line.text, link)
            }
            None => styled(line.style, &line.text),
        };
        self.writer.put(&rendered);
        self.line_open = true;
    }

    /// Appends to the line the cursor is on.
    pub fn extend_line(&mut self, style: StyleClass, text: &str) {
        self.writer.put(&styled(style, text));
        self.line_open = true;
    }

    pub fn clear(&mut self) {
        self.writer.put(CLEAR_SCREEN);
        self.line_open = false;
        self.prompt_visible = false;
        self.last_link = None;
    }

    pub fn draw_prompt(&mut self, prompt: &str, input: &str) {
        if self.prompt_visible {
            self.writer.put(ERASE_LINE);
        } else {
            self.break_line();
        }
        self.writer.put(prompt);
        self.writer.put(input);
        self.line_open = true;
        self.prompt_visible = true;
    }

    pub fn hide_prompt(&mut self) {
        if !self.prompt_visible {
            return;
        }
        self.writer.put(ERASE_LINE);
        self.line_open = false;
        self.prompt_visible = false;
    }

    /// Leaves the cursor on a fresh line with attributes reset.
    pub fn finish(&mut self) {
        self.writer.put(RESET);
        self.break_line();
        self.prompt_visible = false;
    }

    fn break_line(&mut self) {
        if self.line_open {
            self.writer.put("\r\n");
            self.line_open = false;
        }
    }
}

pub fn lock_screen<W>(screen: &SharedScreen<W>) -> MutexGuard<'_, Screen<W>> {
    screen.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// [`OutputSink`] for one job, writing through the shared screen.
pub struct TerminalSink<W> {
    screen: SharedScreen<W>,
    styles: Vec<StyleClass>,
}

impl<W: ScreenWrite> TerminalSink<W> {
    pub fn new(screen: SharedScreen<W>) -> Self {
        Self {
            screen,
            styles: Vec::new(),
        }
    }
}

impl<W: ScreenWrite> OutputSink for TerminalSink<W> {
    fn push_line(&mut self, line: OutputLine) -> usize {
        lock_screen(&self.screen).push_line(&line);
        self.styles.push(line.style);
        self.styles.len() - 1
    }

    fn extend_line(&mut self, index: usize, text: &str) {
        let style = self.styles.get(index).copied().unwrap_or(StyleClass::Output);
        lock_screen(&self.screen).extend_line(style, text);
    }

    fn clear(&mut self) {
        lock_screen(&self.screen).clear();
        self.styles.clear();
    }

    // The terminal is append-only, so output already ends at the bottom.
    fn scroll_to_bottom(&mut self) {}
}
