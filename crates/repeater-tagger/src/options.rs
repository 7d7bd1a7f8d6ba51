//! Caller-supplied configuration carried by every constructed repeater.
//!
//! The classifier never reads these fields; it clones the options into each
//! repeater it builds, and the concrete families consult them when computing
//! occurrences.

use serde::{Deserialize, Serialize};

/// Which day begins a week for week and fortnight repeaters.
///
/// Does **not** affect day-name repeaters like "monday" or "pt".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 convention.
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    #[default]
    Sunday,
}

/// Options for [`scan`](crate::scan::scan) and [`classify`](crate::scan::classify).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Which day starts the week for week/fortnight computations.
    pub week_start: WeekStartDay,
    /// Clock-time interpretation: `Some(true)` reads every literal as a
    /// 24-hour time, `Some(false)` treats every non-zero hour as 12-hour
    /// ambiguous, `None` applies the usual heuristic.
    pub hours24: Option<bool>,
}
