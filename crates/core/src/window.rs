//! Query time window.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Inclusive range of UTC instants covered by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window ending now and starting `minutes` earlier.
    ///
    /// The clock is read exactly once: the upper bound is fixed before the
    /// query executes, so documents indexed between capture and execution
    /// still fall inside the window.
    pub fn last_minutes(minutes: u32) -> Self {
        let end = Utc::now();
        Self::new(end - Duration::minutes(i64::from(minutes)), end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Lower bound rendered as RFC 3339, e.g. "2024-01-15T10:00:00Z".
    pub fn gte(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Upper bound rendered as RFC 3339.
    pub fn lte(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
