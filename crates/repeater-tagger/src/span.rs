use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A half-open stretch of local calendar time, `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Span {
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Length of the span in whole seconds.
    pub fn width(&self) -> i64 {
        (self.end - self.begin).num_seconds()
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.begin <= instant && instant < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}..{})",
            self.begin.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
