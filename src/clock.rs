//! Time source abstraction so deadline checks are deterministic in tests

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Trait for reading the current time, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's date in the user's local timezone
    fn today(&self) -> NaiveDate;

    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
