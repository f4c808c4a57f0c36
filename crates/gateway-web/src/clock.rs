//! Render Clock
//!
//! Time source behind the footer's copyright year. Injected instead of
//! read inline so rendering stays deterministic under test.

use chrono::{Datelike, Utc};

/// Source of the current calendar year
pub trait Clock {
    /// Current year, e.g. 2026
    fn current_year(&self) -> i32;
}

/// Wall clock used by the running page
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Clock pinned to a fixed year
#[cfg(test)]
pub struct FixedClock(pub i32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
