use std::time::{Duration, Instant};

/// A wall-clock deadline `now + window`, polled by the accumulation loops.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    window: Duration,
    at: Instant,
}

impl Deadline {
    pub fn after(window: Duration) -> Self {
        Self {
            window,
            at: Instant::now() + window,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Restarts the window from now. Used for idle-time deadlines.
    pub fn restart(&mut self) {
        self.at = Instant::now() + self.window;
    }
}
