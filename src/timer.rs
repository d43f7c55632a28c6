use std::time::{Duration, Instant};

/// One-shot deferred action. The event loop polls `fire` each tick; the
/// deadline is consumed the first time it is observed as passed, so the
/// action runs exactly once, or never if `cancel` lands first.
#[derive(Debug, Default)]
pub struct Delay {
    deadline: Option<Instant>,
}

impl Delay {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(&mut self, duration: Duration) {
        self.deadline = Some(Instant::now() + duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, the first time `now` reaches the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, used as the event poll timeout.
    /// `None` when idle, zero when already due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
