//! Session state: working directory, input buffer, history and the re-entrancy flag.

use crate::content::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Root,
    Projects,
}

impl Location {
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Projects => "/projects",
        }
    }
}

/// Prompt text shown before the input buffer and in command echoes.
pub fn prompt_for(identity: &Identity, location: Location) -> String {
    format!("{}@{}:{}$ ", identity.user, identity.host, location.path())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Older,
    Newer,
}

/// Result of one history step: the new cursor and the new input buffer content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStep {
    pub cursor: Option<usize>,
    pub buffer: String,
}

/// Pure history navigation. Returns `None` when there is no history to move through.
pub fn navigate(
    entries: &[String],
    cursor: Option<usize>,
    direction: HistoryDirection,
) -> Option<HistoryStep> {
    if entries.is_empty() {
        return None;
    }

    let last = entries.len() - 1;
    let cursor = cursor.filter(|index| *index <= last);

    let step = match direction {
        HistoryDirection::Older => {
            let next = match cursor {
                None => last,
                Some(index) if index > 0 => index - 1,
                Some(index) => index,
            };
            HistoryStep {
                cursor: Some(next),
                buffer: entries[next].clone(),
            }
        }
        HistoryDirection::Newer => match cursor {
            Some(index) if index < last => HistoryStep {
                cursor: Some(index + 1),
                buffer: entries[index + 1].clone(),
            },
            _ => HistoryStep {
                cursor: None,
                buffer: String::new(),
            },
        },
    };

    Some(step)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record_entry(&mut self, text: String) {
        self.entries.push(text);
        self.cursor = None;
    }

    fn step(&mut self, direction: HistoryDirection) -> Option<String> {
        let step = navigate(&self.entries, self.cursor, direction)?;
        self.cursor = step.cursor;
        Some(step.buffer)
    }
}

/// A line accepted for execution, captured with the directory it was typed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub raw: String,
    pub cwd: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A command is already playing; nothing was recorded.
    Busy,
    /// Whitespace-only input; nothing was recorded.
    Empty,
    Accepted(Invocation),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub cwd: Location,
    pub input: String,
    history: InputHistory,
    busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    /// Replaces the input buffer. Typing leaves history navigation where it is.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn navigate(&mut self, direction: HistoryDirection) {
        if let Some(buffer) = self.history.step(direction) {
            self.input = buffer;
        }
    }

    /// Submits the current input buffer.
    pub fn submit_input(&mut self) -> Submission {
        if self.busy {
            return Submission::Busy;
        }

        let line = self.input.trim().to_string();
        if line.is_empty() {
            return Submission::Empty;
        }

        self.input.clear();
        self.history.record_entry(line.clone());
        self.busy = true;
        Submission::Accepted(Invocation {
            raw: line,
            cwd: self.cwd,
        })
    }

    pub fn submit_line(&mut self, line: &str) -> Submission {
        if self.busy {
            return Submission::Busy;
        }
        self.input = line.to_string();
        self.submit_input()
    }

    /// Marks the session busy for a non-command sequence such as the welcome banner.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Ends the in-flight sequence, adopting the directory it left behind.
    pub fn complete(&mut self, cwd: Location) {
        self.cwd = cwd;
        self.busy = false;
    }
}
