// Time Provider Port (for testability)

use chrono::NaiveDate;

/// Time provider interface (allows pinning "today" in tests)
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Fixed time provider (tests, reproducible reports)
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider(pub NaiveDate);

impl TimeProvider for FixedTimeProvider {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
