//! Command table, tokenizer and the dispatcher that plays one submitted line.

use std::collections::HashSet;

use thiserror::Error;

use crate::behaviors;
use crate::content::ContentTable;
use crate::random::sample_without_replacement;
use crate::render::{Console, StyleClass};
use crate::session::{prompt_for, Invocation, Location};

const PRELUDE_LOGS: [&str; 6] = [
    "Establishing secure connection to remote host...",
    "Authenticating user credentials...",
    "Analyzing network traffic...",
    "Accessing encrypted sectors...",
    "Verifying security protocols...",
    "Initializing command execution environment...",
];
const PRELUDE_MIN_LINES: usize = 2;
const PRELUDE_EXTRA_LINES: usize = 3;
const PRELUDE_CHAR_MS: u64 = 20;

/// What a behavior sees while it runs. Behaviors move `cwd`; the dispatcher reports it back.
pub struct CommandContext<'a> {
    pub cwd: Location,
    pub content: &'a ContentTable,
    pub arg: Option<&'a str>,
    pub raw: &'a str,
}

pub type BehaviorFn = fn(&mut Console<'_>, &mut CommandContext<'_>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSpec {
    /// Extra arguments are ignored.
    None,
    /// One positional argument; the behavior reports a missing value itself.
    Optional,
    /// The first argument must equal this literal, otherwise the line is an unknown command.
    Literal(&'static str),
}

impl ArgSpec {
    fn accepts(self, arg: Option<&str>) -> bool {
        match self {
            Self::None | Self::Optional => true,
            Self::Literal(expected) => arg == Some(expected),
        }
    }
}

#[derive(Clone)]
pub struct CommandRecord {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arg_spec: ArgSpec,
    pub behavior: BehaviorFn,
}

impl std::fmt::Debug for CommandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRecord")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("arg_spec", &self.arg_spec)
            .finish_non_exhaustive()
    }
}

impl CommandRecord {
    fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    fn answers_to(&self, name: &str) -> bool {
        self.names().any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command name '{0}' is registered twice")]
pub struct DuplicateCommandName(pub String);

#[derive(Debug, Clone)]
pub struct CommandTable {
    records: Vec<CommandRecord>,
}

impl CommandTable {
    /// Builds a table, rejecting names or aliases that collide case-insensitively.
    pub fn new(records: Vec<CommandRecord>) -> Result<Self, DuplicateCommandName> {
        let mut seen = HashSet::new();
        for record in &records {
            for name in record.names() {
                if !seen.insert(name.to_lowercase()) {
                    return Err(DuplicateCommandName(name.to_string()));
                }
            }
        }
        Ok(Self { records })
    }

    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn resolve(&self, name: &str) -> Option<&CommandRecord> {
        self.records.iter().find(|record| record.answers_to(name))
    }
}

pub fn builtin_records() -> Vec<CommandRecord> {
    vec![
        CommandRecord {
            name: "help",
            aliases: &[],
            arg_spec: ArgSpec::None,
            behavior: behaviors::help,
        },
        CommandRecord {
            name: "ls",
            aliases: &[],
            arg_spec: ArgSpec::None,
            behavior: behaviors::ls,
        },
        CommandRecord {
            name: "cd",
            aliases: &[],
            arg_spec: ArgSpec::Optional,
            behavior: behaviors::cd,
        },
        CommandRecord {
            name: "cat",
            aliases: &[],
            arg_spec: ArgSpec::Optional,
            behavior: behaviors::cat,
        },
        CommandRecord {
            name: "message",
            aliases: &["sendmsg", "email"],
            arg_spec: ArgSpec::None,
            behavior: behaviors::message,
        },
        CommandRecord {
            name: "projects",
            aliases: &["list_projects"],
            arg_spec: ArgSpec::None,
            behavior: behaviors::projects,
        },
        CommandRecord {
            name: "hack",
            aliases: &[],
            arg_spec: ArgSpec::Literal("personal_data"),
            behavior: behaviors::hack,
        },
        CommandRecord {
            name: "whoami",
            aliases: &[],
            arg_spec: ArgSpec::None,
            behavior: behaviors::whoami,
        },
        CommandRecord {
            name: "pwd",
            aliases: &[],
            arg_spec: ArgSpec::None,
            behavior: behaviors::pwd,
        },
        CommandRecord {
            name: "clear",
            aliases: &[],
            arg_spec: ArgSpec::None,
            behavior: behaviors::clear,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedLine {
    /// First positional argument; an empty token (from doubled spaces) counts as missing.
    pub fn first_arg(&self) -> Option<&str> {
        self.args
            .first()
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
    }
}

/// Splits on single spaces; the command name is case-folded, arguments keep their case.
pub fn parse_line(line: &str) -> ParsedLine {
    let mut parts = line.split(' ');
    let name = parts.next().unwrap_or_default().to_lowercase();
    ParsedLine {
        name,
        args: parts.map(ToString::to_string).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: CommandTable,
    content: ContentTable,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(CommandTable::builtin(), ContentTable::default())
    }
}

impl Dispatcher {
    pub fn new(table: CommandTable, content: ContentTable) -> Self {
        Self { table, content }
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Plays one accepted line and returns the directory the session ends up in.
    pub fn run(&self, invocation: &Invocation, console: &mut Console<'_>) -> Location {
        let raw = invocation.raw.as_str();
        console.append_line(
            format!("{}{raw}", prompt_for(&self.content.identity, invocation.cwd)),
            StyleClass::Command,
        );

        let parsed = parse_line(raw);
        play_prelude(console);

        let mut ctx = CommandContext {
            cwd: invocation.cwd,
            content: &self.content,
            arg: parsed.first_arg(),
            raw,
        };

        match self.table.resolve(&parsed.name) {
            Some(record) if record.arg_spec.accepts(ctx.arg) => {
                if record.name != parsed.name {
                    log::debug!("alias '{}' resolved to '{}'", parsed.name, record.name);
                }
                log::debug!("dispatching '{}' arg={:?}", record.name, ctx.arg);
                (record.behavior)(console, &mut ctx);
            }
            _ => {
                log::info!("unknown command line '{raw}'");
                behaviors::unknown(console, &mut ctx);
            }
        }

        console.scroll_to_bottom();
        ctx.cwd
    }

    /// Plays the startup banner.
    pub fn welcome(&self, console: &mut Console<'_>) {
        behaviors::welcome(console, &self.content);
    }
}

fn play_prelude(console: &mut Console<'_>) {
    let count = PRELUDE_MIN_LINES + console.random().next_below(PRELUDE_EXTRA_LINES);
    let picked: Vec<&str> = sample_without_replacement(&PRELUDE_LOGS, count, console.random())
        .into_iter()
        .copied()
        .collect();

    for log_line in picked {
        console.type_line(log_line, StyleClass::Info, PRELUDE_CHAR_MS);
        console.pause_jitter(100, 200);
    }
}

pub fn prelude_pool() -> &'static [&'static str] {
    &PRELUDE_LOGS
}
