use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use hackterm::{Dispatcher, Invocation, Location, MailComposer, MailLink, RandomSource, RngSource};
use portfolio_shell::app::{HostOps, Job};
use portfolio_shell::runtime::{play, Event, Runner, SharedRandom, TerminalHost};
use portfolio_shell::tui::{lock_screen, Screen};

fn shared_random(seed: u64) -> SharedRandom {
    let random: Box<dyn RandomSource + Send> = Box::new(RngSource::seeded(seed));
    Arc::new(Mutex::new(random))
}

fn invocation(raw: &str, cwd: Location) -> Job {
    Job::Command(Invocation {
        raw: raw.to_string(),
        cwd,
    })
}

#[test]
fn play_writes_echo_and_returns_new_directory() {
    let screen = Screen::shared(String::new());
    let cwd = play(
        &Dispatcher::default(),
        invocation("cd projects", Location::Root),
        Arc::clone(&screen),
        &shared_random(3),
        0.0,
    );

    assert_eq!(cwd, Location::Projects);
    let written = lock_screen(&screen).writer().clone();
    assert!(written.starts_with("\x1b[1mguest@bradhudson.dev:/$ cd projects\x1b[0m\r\n"));
    assert!(written.contains("Directory changed successfully."));
}

#[test]
fn play_welcome_keeps_directory() {
    let screen = Screen::shared(String::new());
    let cwd = play(
        &Dispatcher::default(),
        Job::Welcome {
            cwd: Location::Projects,
        },
        Arc::clone(&screen),
        &shared_random(1),
        0.0,
    );

    assert_eq!(cwd, Location::Projects);
    assert!(lock_screen(&screen)
        .writer()
        .contains("Initializing secure terminal connection..."));
}

#[test]
fn message_leaves_a_link_for_ctrl_o() {
    let screen = Screen::shared(String::new());
    play(
        &Dispatcher::default(),
        invocation("email", Location::Root),
        Arc::clone(&screen),
        &shared_random(9),
        0.0,
    );

    let link = lock_screen(&screen).last_link().cloned();
    assert_eq!(
        link,
        Some(MailLink::new(
            "brad@bradhudson.dev",
            "Hello from Terminal Portfolio"
        ))
    );
}

#[derive(Clone, Default)]
struct RecordingComposer {
    opened: Arc<Mutex<Vec<MailLink>>>,
}

impl MailComposer for RecordingComposer {
    fn compose(&mut self, link: &MailLink) -> std::io::Result<()> {
        self.opened
            .lock()
            .expect("composer lock")
            .push(link.clone());
        Ok(())
    }
}

#[test]
fn host_runs_job_in_background_and_opens_link() {
    let screen = Screen::shared(String::new());
    let (events_tx, events_rx) = mpsc::channel();
    let runner = Runner::new(
        Arc::new(Dispatcher::default()),
        Arc::clone(&screen),
        Box::new(RngSource::seeded(4)),
        0.0,
        events_tx,
    );
    let composer = RecordingComposer::default();
    let opened = Arc::clone(&composer.opened);
    let mut host = TerminalHost::new(runner, Box::new(composer));

    host.draw_prompt("guest@bradhudson.dev:/$ ", "message");
    host.start_job(invocation("message", Location::Root))
        .expect("job starts");

    let event = events_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("job reports completion");
    assert_eq!(
        event,
        Event::JobFinished {
            cwd: Location::Root
        }
    );

    host.open_link();
    assert_eq!(opened.lock().expect("composer lock").len(), 1);

    let written = lock_screen(&screen).writer().clone();
    assert!(written.starts_with("guest@bradhudson.dev:/$ message\r\x1b[2K"));
}

#[test]
fn clear_after_message_leaves_nothing_for_ctrl_o() {
    let screen = Screen::shared(String::new());
    let random = shared_random(2);
    let dispatcher = Dispatcher::default();
    play(
        &dispatcher,
        invocation("message", Location::Root),
        Arc::clone(&screen),
        &random,
        0.0,
    );
    assert!(lock_screen(&screen).last_link().is_some());

    play(
        &dispatcher,
        invocation("clear", Location::Root),
        Arc::clone(&screen),
        &random,
        0.0,
    );
    assert_eq!(lock_screen(&screen).last_link(), None);
}
