use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use hackterm::{
    Console, Dispatcher, Location, MailComposer, MailLink, RandomSource, SleepPacer,
};

use crate::app::{HostOps, Job};
use crate::tui::{lock_screen, ScreenWrite, SharedScreen, TerminalSink};

/// Everything the key-handling loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(String),
    JobFinished { cwd: Location },
}

pub type SharedRandom = Arc<Mutex<Box<dyn RandomSource + Send>>>;

/// Plays jobs on worker threads. Callers keep at most one job in flight.
pub struct Runner<W> {
    dispatcher: Arc<Dispatcher>,
    screen: SharedScreen<W>,
    random: SharedRandom,
    speed: f64,
    events: Sender<Event>,
    next_job_id: u64,
}

impl<W: ScreenWrite + 'static> Runner<W> {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        screen: SharedScreen<W>,
        random: Box<dyn RandomSource + Send>,
        speed: f64,
        events: Sender<Event>,
    ) -> Self {
        Self {
            dispatcher,
            screen,
            random: Arc::new(Mutex::new(random)),
            speed,
            events,
            next_job_id: 1,
        }
    }

    pub fn spawn(&mut self, job: Job) -> io::Result<JoinHandle<()>> {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let dispatcher = Arc::clone(&self.dispatcher);
        let screen = Arc::clone(&self.screen);
        let random = Arc::clone(&self.random);
        let events = self.events.clone();
        let speed = self.speed;

        thread::Builder::new()
            .name(format!("portfolio-job-{job_id}"))
            .spawn(move || {
                let fallback = job.cwd();
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    play(&dispatcher, job, screen, &random, speed)
                }));
                let cwd = outcome.unwrap_or_else(|_| {
                    log::warn!("job {job_id} panicked");
                    fallback
                });
                // The receiver is gone only when the shell is exiting.
                let _ = events.send(Event::JobFinished { cwd });
            })
    }
}

/// Runs one job to completion against the shared screen and returns the resulting directory.
pub fn play<W: ScreenWrite>(
    dispatcher: &Dispatcher,
    job: Job,
    screen: SharedScreen<W>,
    random: &SharedRandom,
    speed: f64,
) -> Location {
    let mut sink = TerminalSink::new(screen);
    let mut pacer = SleepPacer::new(speed);
    let mut random = lock_unpoisoned(random);
    let mut console = Console::new(&mut sink, &mut pacer, &mut **random);

    match job {
        Job::Welcome { cwd } => {
            dispatcher.welcome(&mut console);
            cwd
        }
        Job::Command(invocation) => dispatcher.run(&invocation, &mut console),
    }
}

/// Hands mail links to the desktop's default `mailto:` handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailComposer;

impl MailComposer for SystemMailComposer {
    fn compose(&mut self, link: &MailLink) -> io::Result<()> {
        let url = link.mailto_url().map_err(io::Error::other)?;
        webbrowser::open(url.as_str())
    }
}

/// [`HostOps`] backed by a real screen, worker runner and mail composer.
pub struct TerminalHost<W> {
    runner: Runner<W>,
    screen: SharedScreen<W>,
    composer: Box<dyn MailComposer>,
    pub stop_requested: bool,
}

impl<W: ScreenWrite + 'static> TerminalHost<W> {
    pub fn new(runner: Runner<W>, composer: Box<dyn MailComposer>) -> Self {
        let screen = Arc::clone(&runner.screen);
        Self {
            runner,
            screen,
            composer,
            stop_requested: false,
        }
    }
}

impl<W: ScreenWrite + 'static> HostOps for TerminalHost<W> {
    fn start_job(&mut self, job: Job) -> Result<(), String> {
        lock_screen(&self.screen).hide_prompt();
        self.runner
            .spawn(job)
            .map(|_| ())
            .map_err(|error| format!("Failed to spawn job worker: {error}"))
    }

    fn draw_prompt(&mut self, prompt: &str, input: &str) {
        lock_screen(&self.screen).draw_prompt(prompt, input);
    }

    fn open_link(&mut self) {
        let link = lock_screen(&self.screen).last_link().cloned();
        let Some(link) = link else {
            log::debug!("no mail link to open");
            return;
        };
        if let Err(error) = self.composer.compose(&link) {
            log::warn!("failed to open mail link for {}: {error}", link.recipient);
        }
    }

    fn request_stop(&mut self) {
        self.stop_requested = true;
    }
}

fn lock_unpoisoned<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
