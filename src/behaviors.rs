//! Scripted command behaviors. Each one is a linear sequence of render and pause steps.
//!
//! Recoverable input problems (missing argument, unknown path) are rendered as error lines;
//! no behavior fails.

use crate::content::{ContentKey, ContentTable};
use crate::dispatch::CommandContext;
use crate::link::MailLink;
use crate::render::Console;
use crate::session::{prompt_for, Location};

use crate::render::StyleClass::{Error, Info, Output, Success, Warning};

const STATUS_CHAR_MS: u64 = 20;

pub const HANDSHAKE_PROGRESS: [u8; 6] = [15, 32, 58, 73, 89, 100];
pub const HACK_PROGRESS: [u8; 6] = [12, 27, 45, 61, 78, 94];

const HACK_STEPS: [&str; 6] = [
    "Attempting unauthorized access to personal_data.db...",
    "Scanning for vulnerabilities...",
    "Bypassing firewall v3.1...",
    "Attempting SQL injection...",
    "Trying buffer overflow exploit...",
    "Bruteforcing encryption keys...",
];

pub const MAIL_LINK_LABEL: &str = "📧 [ENCRYPTED EMAIL TERMINAL] - Click to send message";

/// Templates for unrecognized input; `{}` is replaced by the raw line.
pub const UNKNOWN_TEMPLATES: [&str; 4] = [
    "Command '{}' not found. Type 'help' for available commands.",
    "ERROR: '{}' is not a recognized command.",
    "Access denied: '{}' requires elevated privileges.",
    "Unknown command: '{}'. Nice try, hacker!",
];

fn status(console: &mut Console<'_>, text: &str, pause_ms: u64) {
    console.type_line(text, Info, STATUS_CHAR_MS);
    console.pause_ms(pause_ms);
}

fn elapsed(console: &mut Console<'_>, label: &str) {
    console.append_line(format!("Operation complete. Elapsed time: {label}."), Info);
}

pub fn welcome(console: &mut Console<'_>, content: &ContentTable) {
    for line in &content.banner {
        console.type_line(line, Info, 30);
        console.pause_ms(50);
    }
}

pub fn help(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(console, "Executing command: help...", 200);
    console.append_line("Checksum verification: OK", Success);
    console.pause_ms(100);
    elapsed(console, "147ms");
    console.pause_ms(200);
    console.append_line(ctx.content.get(ContentKey::Help), Output);
}

pub fn ls(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(console, "Executing command: ls...", 150);
    status(console, "Scanning directory structure...", 200);

    let listing = match ctx.cwd {
        Location::Root => &ctx.content.root_listing,
        Location::Projects => &ctx.content.projects_listing,
    };

    console.append_line("Directory scan complete.", Success);
    console.pause_ms(100);
    elapsed(console, "89ms");
    console.pause_ms(150);

    console.append_line("\nDirectory listing:", Output);
    for entry in listing {
        console.type_line(entry, Output, 15);
        console.pause_ms(50);
    }
}

pub fn cd(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(
        console,
        &format!("Executing command: cd {}...", ctx.arg.unwrap_or_default()),
        150,
    );

    let Some(target) = ctx.arg else {
        console.append_line("Error: No directory specified", Error);
        return;
    };

    match (ctx.cwd, target) {
        (Location::Root, "projects") => change_directory(console, ctx, Location::Projects),
        (Location::Projects, "..") => change_directory(console, ctx, Location::Root),
        (_, "data" | ".secrets") => {
            console.type_line(
                "Attempting to access restricted directory...",
                Warning,
                STATUS_CHAR_MS,
            );
            console.pause_ms(300);
            console.append_line("ACCESS DENIED: Insufficient privileges", Error);
            console.append_line("Security breach attempt logged", Warning);
        }
        (_, other) => {
            console.append_line(format!("Error: Directory '{other}' not found"), Error);
        }
    }

    console.set_prompt(&prompt_for(&ctx.content.identity, ctx.cwd));
    elapsed(console, "67ms");
}

fn change_directory(console: &mut Console<'_>, ctx: &mut CommandContext<'_>, to: Location) {
    ctx.cwd = to;
    status(
        console,
        &format!("Changing directory to: {}", to.path()),
        100,
    );
    console.append_line("Directory changed successfully.", Success);
}

pub fn cat(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(
        console,
        &format!("Executing command: cat {}...", ctx.arg.unwrap_or_default()),
        150,
    );

    let Some(file) = ctx.arg else {
        console.append_line("Error: No filename specified", Error);
        return;
    };

    status(console, "Accessing file system...", 200);
    status(console, "Decrypting file contents...", 250);

    match file {
        "about.txt" => {
            console.append_line("File decryption successful.", Success);
            console.pause_ms(100);
            console.append_line(ctx.content.get(ContentKey::About), Output);
        }
        "contact.msg" => {
            console.append_line("Error: File is encrypted with quantum encryption", Error);
            console.pause_ms(100);
            console.append_line(
                "Use 'message' command to establish secure communication",
                Warning,
            );
        }
        other => {
            console.append_line(
                format!("Error: File '{other}' not found or access denied"),
                Error,
            );
        }
    }

    elapsed(console, "234ms");
}

pub fn message(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    let identity = &ctx.content.identity;
    status(console, "Initiating secure message protocol...", 300);
    status(console, "Encrypting payload with RSA-2048...", 400);
    status(
        console,
        &format!("Establishing secure channel to {}...", identity.email),
        350,
    );

    for percent in HANDSHAKE_PROGRESS {
        console.type_line(
            &format!("Secure handshake progress: {percent}%..."),
            Success,
            15,
        );
        console.pause_ms(150);
    }

    console.append_line(
        "Message protocol established. Opening secure transmission window...",
        Success,
    );
    console.pause_ms(200);
    console.append_line(ctx.content.get(ContentKey::Contact), Output);
    console.append_link(
        MAIL_LINK_LABEL,
        MailLink::new(identity.email.as_str(), identity.mail_subject.as_str()),
    );
    console.pause_ms(200);
    elapsed(console, "1247ms");
}

pub fn projects(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(console, "Executing command: projects...", 200);
    status(console, "Accessing project database...", 250);
    status(console, "Decrypting project metadata...", 300);

    console.append_line("Project database decrypted successfully.", Success);
    console.pause_ms(150);
    console.append_line(ctx.content.get(ContentKey::Projects), Output);
    elapsed(console, "445ms");
}

pub fn hack(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    console.type_line("Executing command: hack personal_data...", Warning, 20);
    console.pause_ms(200);
    console.type_line("WARNING: Unauthorized access attempt detected!", Error, 30);
    console.pause_ms(400);

    for step in HACK_STEPS {
        console.type_line(step, Warning, 25);
        console.pause_jitter(200, 300);
    }

    for progress in HACK_PROGRESS {
        console.type_line(&format!("Access progress: {progress}%..."), Warning, 20);
        console.pause_ms(150);
    }

    console.pause_ms(500);
    let escalation: [(&str, u64, u64); 4] = [
        ("ACCESS DENIED: Insufficient Privileges", 40, 300),
        ("INTRUSION DETECTED - Logging IP address...", 30, 400),
        ("Initiating counter-intrusion protocol...", 30, 500),
        ("Security forces dispatched to your location... 🚨", 40, 800),
    ];
    for (line, per_char_ms, pause_ms) in escalation {
        console.type_line(line, Error, per_char_ms);
        console.pause_ms(pause_ms);
    }

    console.type_line("Just kidding! 😄", Success, 50);
    console.pause_ms(300);
    console.type_line("Here's some public info about Brad instead:", Success, 30);
    console.pause_ms(200);

    console.append_line(ctx.content.get(ContentKey::PublicInfo), Output);
    elapsed(console, "3.7 seconds");
}

pub fn whoami(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    let identity = &ctx.content.identity;
    status(console, "Executing command: whoami...", 150);

    console.append_line(format!("Current User: {}", identity.user), Output);
    console.append_line(format!("Host: {}", identity.host), Output);
    console.append_line(format!("Session: {}", identity.session), Output);
    console.append_line(format!("Access Level: {}", identity.access_level), Warning);
    elapsed(console, "34ms");
}

pub fn pwd(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    status(console, "Executing command: pwd...", 100);
    console.append_line(ctx.cwd.path(), Output);
    elapsed(console, "12ms");
}

pub fn clear(console: &mut Console<'_>, _ctx: &mut CommandContext<'_>) {
    console.clear();
}

pub fn unknown(console: &mut Console<'_>, ctx: &mut CommandContext<'_>) {
    let raw = ctx.raw;
    status(console, &format!("Executing command: {raw}..."), 200);
    console.type_line("Command not found in system database...", Warning, STATUS_CHAR_MS);
    console.pause_ms(150);
    console.type_line("Checking security protocols...", Warning, STATUS_CHAR_MS);
    console.pause_ms(200);

    let pick = console.random().next_below(UNKNOWN_TEMPLATES.len());
    console.append_line(render_unknown(UNKNOWN_TEMPLATES[pick], raw), Error);
    console.append_line("Operation failed. Elapsed time: 156ms.", Info);
}

pub fn render_unknown(template: &str, raw: &str) -> String {
    template.replacen("{}", raw, 1)
}
