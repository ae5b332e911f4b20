use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2500);

/// Transient status line. Showing a new message replaces the current one and
/// restarts the timer.
#[derive(Debug, Clone)]
pub struct Toast {
    message: Option<String>,
    expires_at: Option<Instant>,
    duration: Duration,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            message: None,
            expires_at: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.expires_at = Some(now + self.duration);
    }

    /// Drop the message once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if matches!(self.expires_at, Some(at) if now >= at) {
            self.message = None;
            self.expires_at = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
