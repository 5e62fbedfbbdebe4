//! Clock collaborator for date-based queries.
//!
//! # Responsibility
//! - Supply "today" as an ISO-8601 date string.
//! - Keep the wall clock injectable so `today` queries are deterministic
//!   under test.

use chrono::Local;

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date formatted as ISO-8601 `YYYY-MM-DD`.
    fn today_iso(&self) -> String;
}

/// Wall-clock implementation using the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_iso(&self) -> String {
        Local::now().date_naive().format("%Y-%m-%d").to_string()
    }
}

/// Clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: String,
}

impl FixedClock {
    pub fn new(today: impl Into<String>) -> Self {
        Self {
            today: today.into(),
        }
    }
}

impl Clock for FixedClock {
    fn today_iso(&self) -> String {
        self.today.clone()
    }
}
