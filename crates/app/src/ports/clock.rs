//! Clock port — where the idle screen gets the wall-clock time from.

use chrono::NaiveDateTime;

/// Source of local wall-clock time.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// [`Clock`] reading the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
