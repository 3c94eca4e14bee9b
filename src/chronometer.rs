//! Countdown timer advanced by frame deltas.
//!
//! A `Chronometer` never reads the wall clock: it only moves when `update` is
//! called, so a simulation can be fast-forwarded frame by frame in tests.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChronometerState {
    #[default]
    Idle,
    Running,
    Expired,
}

#[derive(Debug, Clone, Default)]
pub struct Chronometer {
    duration: Duration,
    elapsed: Duration,
    state: ChronometerState,
}

impl Chronometer {
    pub fn new() -> Self {
        Chronometer::default()
    }

    /// Resets the elapsed time and starts counting toward `duration`.
    pub fn run(&mut self, duration: Duration) {
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.state = if duration.is_zero() {
            ChronometerState::Expired
        } else {
            ChronometerState::Running
        };
    }

    pub fn update(&mut self, dt: Duration) {
        if self.state != ChronometerState::Running {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.state = ChronometerState::Expired;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == ChronometerState::Running && self.elapsed < self.duration
    }

    pub fn state(&self) -> ChronometerState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}
