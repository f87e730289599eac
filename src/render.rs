//! Transcript lines, the presentation capability, and the typed-output renderer.
//!
//! Invariant: a typed line's transcript position is fixed when typing starts; only one
//! command plays at a time, so no other line can be appended while it grows.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use crate::link::MailLink;
use crate::pacing::Pacer;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Info,
    Success,
    Warning,
    Error,
    Output,
    Command,
}

impl StyleClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Output => "output",
            Self::Command => "command",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: StyleClass,
    pub link: Option<MailLink>,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, style: StyleClass) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    pub fn with_link(text: impl Into<String>, style: StyleClass, link: MailLink) -> Self {
        Self {
            text: text.into(),
            style,
            link: Some(link),
        }
    }
}

/// Presentation layer capability: anything that can show an append-only line list.
pub trait OutputSink {
    /// Appends a line and returns its transcript index.
    fn push_line(&mut self, line: OutputLine) -> usize;

    /// Grows the text of the line at `index`.
    fn extend_line(&mut self, index: usize, text: &str);

    fn clear(&mut self);

    fn scroll_to_bottom(&mut self);

    /// The directory shown in the input prompt changed.
    fn prompt_changed(&mut self, _prompt: &str) {}
}

/// In-memory transcript. Used headless and by tests; presentation layers may mirror it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<OutputLine>,
    prompt: Option<String>,
    scrolls: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn scroll_requests(&self) -> usize {
        self.scrolls
    }
}

impl OutputSink for Transcript {
    fn push_line(&mut self, line: OutputLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    fn extend_line(&mut self, index: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.text.push_str(text);
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolls += 1;
    }

    fn prompt_changed(&mut self, prompt: &str) {
        self.prompt = Some(prompt.to_string());
    }
}

/// Typed-output renderer bound to one sink, pacer and random source for a single run.
pub struct Console<'a> {
    sink: &'a mut dyn OutputSink,
    pacer: &'a mut dyn Pacer,
    random: &'a mut dyn RandomSource,
}

impl<'a> Console<'a> {
    pub fn new(
        sink: &'a mut dyn OutputSink,
        pacer: &'a mut dyn Pacer,
        random: &'a mut dyn RandomSource,
    ) -> Self {
        Self {
            sink,
            pacer,
            random,
        }
    }

    pub fn append_line(&mut self, text: impl Into<String>, style: StyleClass) {
        self.sink.push_line(OutputLine::new(text, style));
        self.sink.scroll_to_bottom();
    }

    pub fn append_link(&mut self, text: impl Into<String>, link: MailLink) {
        self.sink
            .push_line(OutputLine::with_link(text, StyleClass::Output, link));
        self.sink.scroll_to_bottom();
    }

    /// Reveals `text` one grapheme at a time, pausing `per_char_ms` between graphemes.
    pub fn type_line(&mut self, text: &str, style: StyleClass, per_char_ms: u64) {
        if per_char_ms == 0 {
            self.append_line(text, style);
            return;
        }

        let index = self.sink.push_line(OutputLine::new(String::new(), style));
        let delay = Duration::from_millis(per_char_ms);
        for grapheme in text.graphemes(true) {
            self.sink.extend_line(index, grapheme);
            self.sink.scroll_to_bottom();
            self.pacer.pause(delay);
        }
    }

    pub fn pause_ms(&mut self, ms: u64) {
        self.pacer.pause(Duration::from_millis(ms));
    }

    /// Pauses `base_ms + U[0,1) * spread_ms`.
    pub fn pause_jitter(&mut self, base_ms: u64, spread_ms: u64) {
        let extra = (self.random.next_unit() * spread_ms as f64) as u64;
        self.pause_ms(base_ms + extra);
    }

    pub fn clear(&mut self) {
        self.sink.clear();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.sink.scroll_to_bottom();
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.sink.prompt_changed(prompt);
    }

    pub fn random(&mut self) -> &mut dyn RandomSource {
        &mut *self.random
    }
}
