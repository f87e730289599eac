#![allow(dead_code)]

use std::collections::VecDeque;

use hackterm::{
    InstantPacer, OutputLine, RandomSource, Shell, StyleClass, Submission, Transcript,
};

/// Random source that replays scripted answers and falls back to zero.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    below: VecDeque<usize>,
    units: VecDeque<f64>,
    pub below_calls: usize,
}

impl ScriptedRandom {
    pub fn with_below(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            below: values.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        self.below_calls += 1;
        self.below.pop_front().unwrap_or(0) % bound.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

/// Everything a headless run needs: shell, transcript and instant pacing.
pub struct Harness {
    pub shell: Shell,
    pub transcript: Transcript,
    pub pacer: InstantPacer,
    pub random: Box<dyn RandomSource>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_random(Box::new(ScriptedRandom::default()))
    }

    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self {
            shell: Shell::default(),
            transcript: Transcript::new(),
            pacer: InstantPacer::default(),
            random,
        }
    }

    pub fn run(&mut self, line: &str) -> Submission {
        self.shell.execute(
            line,
            &mut self.transcript,
            &mut self.pacer,
            self.random.as_mut(),
        )
    }

    /// Runs `line` on a cleared transcript and returns what it produced.
    pub fn run_fresh(&mut self, line: &str) -> Vec<OutputLine> {
        self.transcript = Transcript::new();
        self.run(line);
        self.transcript.lines().to_vec()
    }
}

/// Drops the command echo and the prelude lines, leaving the behavior's own output.
pub fn behavior_output(lines: &[OutputLine]) -> Vec<OutputLine> {
    let prelude = hackterm::dispatch::prelude_pool();
    lines
        .iter()
        .skip(1)
        .skip_while(|line| line.style == StyleClass::Info && prelude.contains(&line.text.as_str()))
        .cloned()
        .collect()
}

pub fn texts(lines: &[OutputLine]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}
