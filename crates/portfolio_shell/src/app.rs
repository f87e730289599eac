use hackterm::platform::keys::Key;
use hackterm::{prompt_for, HistoryDirection, Identity, Invocation, Location, Session, Submission};

/// Unit of work handed to the background runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Welcome { cwd: Location },
    Command(Invocation),
}

impl Job {
    /// Directory to restore if the job never reports back.
    pub fn cwd(&self) -> Location {
        match self {
            Self::Welcome { cwd } => *cwd,
            Self::Command(invocation) => invocation.cwd,
        }
    }
}

pub trait HostOps {
    fn start_job(&mut self, job: Job) -> Result<(), String>;
    fn draw_prompt(&mut self, prompt: &str, input: &str);
    fn open_link(&mut self);
    fn request_stop(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub session: Session,
    identity: Identity,
    pub should_exit: bool,
}

impl App {
    pub fn new(identity: Identity) -> Self {
        Self {
            session: Session::new(),
            identity,
            should_exit: false,
        }
    }

    pub fn prompt(&self) -> String {
        prompt_for(&self.identity, self.session.cwd)
    }

    /// Plays the welcome banner, or shows the prompt straight away when `banner` is false.
    pub fn start(&mut self, banner: bool, host: &mut dyn HostOps) {
        if banner && self.session.try_begin() {
            let cwd = self.session.cwd;
            self.begin(Job::Welcome { cwd }, host);
            return;
        }
        self.redraw(host);
    }

    pub fn on_key(&mut self, key: Key, host: &mut dyn HostOps) {
        match key {
            Key::CtrlC | Key::CtrlD => {
                self.should_exit = true;
                host.request_stop();
            }
            Key::CtrlO => host.open_link(),
            Key::Enter => {
                let submission = self.session.submit_input();
                self.on_submission(submission, host);
            }
            Key::CtrlL => {
                // Runs `clear` without losing what was typed so far.
                let draft = self.session.input.clone();
                let submission = self.session.submit_line("clear");
                self.session.set_input(draft);
                self.on_submission(submission, host);
            }
            Key::Up | Key::Down if self.session.is_busy() => {
                log::debug!("history navigation ignored while busy");
            }
            Key::Up => {
                self.session.navigate(HistoryDirection::Older);
                self.redraw(host);
            }
            Key::Down => {
                self.session.navigate(HistoryDirection::Newer);
                self.redraw(host);
            }
            Key::Backspace => {
                self.session.input.pop();
                self.redraw(host);
            }
            Key::Text(text) => {
                self.session.input.push_str(&text);
                self.redraw(host);
            }
            Key::Tab | Key::Left | Key::Right | Key::Escape | Key::Unknown(_) => {}
        }
    }

    /// Ends the in-flight job and brings the prompt back with whatever was typed meanwhile.
    pub fn on_job_finished(&mut self, cwd: Location, host: &mut dyn HostOps) {
        self.session.complete(cwd);
        self.redraw(host);
    }

    fn on_submission(&mut self, submission: Submission, host: &mut dyn HostOps) {
        match submission {
            Submission::Busy => log::debug!("submission discarded while a command plays"),
            Submission::Empty => self.redraw(host),
            Submission::Accepted(invocation) => self.begin(Job::Command(invocation), host),
        }
    }

    fn begin(&mut self, job: Job, host: &mut dyn HostOps) {
        let cwd = job.cwd();
        if let Err(error) = host.start_job(job) {
            log::warn!("failed to start job: {error}");
            self.on_job_finished(cwd, host);
        }
    }

    fn redraw(&self, host: &mut dyn HostOps) {
        if self.session.is_busy() {
            return;
        }
        host.draw_prompt(&self.prompt(), &self.session.input);
    }
}
