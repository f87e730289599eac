//! Single-task driver: session state plus dispatcher, played synchronously.

use crate::dispatch::Dispatcher;
use crate::pacing::Pacer;
use crate::random::RandomSource;
use crate::render::{Console, OutputSink};
use crate::session::{prompt_for, HistoryDirection, Session, Submission};

#[derive(Debug, Clone, Default)]
pub struct Shell {
    session: Session,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            session: Session::new(),
            dispatcher,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn prompt(&self) -> String {
        prompt_for(&self.dispatcher.content().identity, self.session.cwd)
    }

    pub fn navigate(&mut self, direction: HistoryDirection) {
        self.session.navigate(direction);
    }

    /// Submits `line` and, when accepted, plays it to completion before returning.
    pub fn execute(
        &mut self,
        line: &str,
        sink: &mut dyn OutputSink,
        pacer: &mut dyn Pacer,
        random: &mut dyn RandomSource,
    ) -> Submission {
        let submission = self.session.submit_line(line);
        if let Submission::Accepted(invocation) = &submission {
            let mut console = Console::new(sink, pacer, random);
            let cwd = self.dispatcher.run(invocation, &mut console);
            self.session.complete(cwd);
        }
        submission
    }

    pub fn welcome(
        &mut self,
        sink: &mut dyn OutputSink,
        pacer: &mut dyn Pacer,
        random: &mut dyn RandomSource,
    ) {
        if !self.session.try_begin() {
            return;
        }
        let mut console = Console::new(sink, pacer, random);
        self.dispatcher.welcome(&mut console);
        let cwd = self.session.cwd;
        self.session.complete(cwd);
    }
}
