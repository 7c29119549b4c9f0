//! Injectable source of "now" so reconciliation logic is testable.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
///
/// All calendar decisions in the reconciliation service go through this
/// trait so that tests can pin "today" to a fixed date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day, with the time component discarded.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl FixedClock {
    /// Pins the clock to midnight UTC on the given day.
    pub fn on_day(day: NaiveDate) -> Self {
        Self(day.and_hms_opt(0, 0, 0).unwrap().and_utc())
    }
}
