//! Time source for the classifier.
//!
//! `lt`/`gt` violations without a parameter are bounded by "now". Reading
//! the wall clock inside a formatter makes output time-dependent, so the read
//! sits behind [`Clock`] and tests pin it with [`FixedClock`].

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current time in RFC 3339, seconds precision, `Z` for a zero offset.
    fn now_rfc3339(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// The process wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub const fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 instant.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `s` is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}
