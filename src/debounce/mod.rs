//! Debounce - Trailing-edge input debouncing.
//!
//! A [`Debouncer`] holds at most one pending value. Every new input replaces
//! the pending value and re-arms the deadline; the value is released once a
//! full quiet period passes without further input. Time is passed in
//! explicitly, so the caller's event loop decides when to poll.
//!
//! ## Example
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use kinoteka::Debouncer;
//!
//! let mut search = Debouncer::new(Duration::from_millis(500));
//! let t0 = Instant::now();
//! search.push("ма".to_string(), t0);
//! search.push("мат".to_string(), t0 + Duration::from_millis(100));
//!
//! assert_eq!(search.poll(t0 + Duration::from_millis(599)), None);
//! assert_eq!(search.poll(t0 + Duration::from_millis(600)), Some("мат".to_string()));
//! ```

#[cfg(feature = "runtime")]
mod driver;

use std::time::{Duration, Instant};

#[cfg(feature = "runtime")]
pub use driver::DebounceDriver;

struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Single-slot trailing-edge debouncer.
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Replace whatever is pending with `value`, due one quiet period after `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet,
        });
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some(pending) if now >= pending.deadline);
        if due {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.value)
    }
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("quiet", &self.quiet)
            .field("deadline", &self.deadline())
            .finish()
    }
}
