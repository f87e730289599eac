//! Suspend-for-duration primitive used by scripted output.
//!
//! Pauses only shape wall-clock timing; transcript content never depends on them.

use std::thread;
use std::time::Duration;

pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread, scaling every pause by `speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepPacer {
    speed: f64,
}

impl SleepPacer {
    pub fn new(speed: f64) -> Self {
        let speed = if speed.is_finite() && speed >= 0.0 {
            speed
        } else {
            1.0
        };
        Self { speed }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if self.speed == 0.0 || duration.is_zero() {
            return;
        }
        thread::sleep(scaled(duration, self.speed));
    }
}

/// `duration * speed`, saturating at `Duration::MAX` instead of overflowing.
fn scaled(duration: Duration, speed: f64) -> Duration {
    Duration::try_from_secs_f64(duration.as_secs_f64() * speed).unwrap_or(Duration::MAX)
}

/// Returns immediately and tallies what was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantPacer {
    pub pauses: usize,
    pub requested: Duration,
}

impl Pacer for InstantPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses += 1;
        self.requested += duration;
    }
}
