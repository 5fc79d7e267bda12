//! Coalescing of rapid updates, such as pointer moves while dragging.

use std::time::{Duration, Instant};

/// Coalesces a stream of values so that at most one is applied per window.
///
/// A value offered inside the window replaces whatever is pending and is
/// handed out by a later [`flush`](Self::flush) once the window has passed,
/// or by [`take`](Self::take) at any time.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window: Duration,
    last: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    /// Create a throttle with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: None,
            pending: None,
        }
    }

    fn is_open(&self, now: Instant) -> bool {
        self.last
            .map_or(true, |last| now.saturating_duration_since(last) >= self.window)
    }

    /// Offer a value. Returns it if it should be applied now, otherwise keeps
    /// it as the pending value, dropping any older one.
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        if self.is_open(now) {
            self.last = Some(now);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Return the pending value if its window has passed.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_some() && self.is_open(now) {
            self.last = Some(now);
            self.pending.take()
        } else {
            None
        }
    }

    /// Return the pending value regardless of the window.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Start a new window at `now` without a value.
    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Whether a value is waiting for its window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
