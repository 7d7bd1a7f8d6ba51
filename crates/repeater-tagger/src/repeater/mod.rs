//! The repeater contract and its concrete families.
//!
//! A repeater is a recurring calendar unit ("monday", "morning", "hour").
//! Instances start unanchored: only [`Repeater::width`] and the width
//! ordering are meaningful. Once an anchor ("now") is established with
//! [`Repeater::start`], [`Repeater::next`] and [`Repeater::this`] compute
//! concrete [`Span`]s relative to it.
//!
//! # Ordering
//!
//! Repeaters are ordered purely by width, never by family or symbol, so
//! `dyn Repeater` implements `Ord` through [`Repeater::cmp_width`] and a
//! `Vec<Box<dyn Repeater>>` sorts from the narrowest to the widest unit.

mod day_name;
mod day_portion;
mod month_name;
mod quarter_name;
mod season_name;
mod time;
mod units;

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TagError};
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{Family, Symbol, Unit};

pub use day_name::RepeaterDayName;
pub use day_portion::RepeaterDayPortion;
pub use month_name::RepeaterMonthName;
pub use quarter_name::RepeaterQuarterName;
pub use season_name::RepeaterSeasonName;
pub use time::{RepeaterTime, Tick};
pub use units::{
    RepeaterDay, RepeaterFortnight, RepeaterHour, RepeaterMinute, RepeaterMonth,
    RepeaterQuarter, RepeaterSeason, RepeaterSecond, RepeaterWeek, RepeaterWeekday,
    RepeaterWeekend, RepeaterYear,
};

/// Prefix shared by every repeater's display label.
pub const REPEATER_LABEL: &str = "repeater";

/// Direction of an occurrence lookup.
///
/// For [`Repeater::next`], `None` behaves like `Future`. For
/// [`Repeater::this`], `None` asks for the whole occurrence while `Future`
/// and `Past` trim it to the part after or before the anchor where the
/// family supports that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pointer {
    Past,
    #[default]
    Future,
    None,
}

impl Pointer {
    pub fn is_past(self) -> bool {
        self == Pointer::Past
    }
}

/// The reference instant of a repeater. Unset until the resolution stage
/// calls [`Repeater::start`]; set at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor(Option<NaiveDateTime>);

impl Anchor {
    pub fn get(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn set(&mut self, now: NaiveDateTime) -> Result<()> {
        if self.0.is_some() {
            return Err(TagError::AnchorAlreadySet);
        }
        self.0 = Some(now);
        Ok(())
    }

    /// The anchor, or [`TagError::AnchorNotSet`] naming `operation`.
    pub fn require(&self, operation: &'static str) -> Result<NaiveDateTime> {
        self.0.ok_or(TagError::AnchorNotSet(operation))
    }
}

/// Capability every concrete repeater type implements.
pub trait Repeater: fmt::Debug + fmt::Display {
    fn family(&self) -> Family;

    /// The matched symbol; `None` for literal clock times.
    fn symbol(&self) -> Option<Symbol>;

    /// Options passed through from the classifier, untouched.
    fn options(&self) -> &ScanOptions;

    /// Width of one occurrence in seconds.
    fn width(&self) -> i64;

    fn anchor(&self) -> &Anchor;

    fn anchor_mut(&mut self) -> &mut Anchor;

    /// The next occurrence after (or, with [`Pointer::Past`], before) the
    /// anchor. Repeated calls keep stepping in the given direction.
    ///
    /// # Errors
    ///
    /// [`TagError::AnchorNotSet`] if [`start`](Self::start) was never called.
    fn next(&mut self, pointer: Pointer) -> Result<Span>;

    /// The occurrence containing or nearest to the anchor. Does not move the
    /// cursor used by [`next`](Self::next).
    ///
    /// # Errors
    ///
    /// [`TagError::AnchorNotSet`] if [`start`](Self::start) was never called.
    fn this(&mut self, pointer: Pointer) -> Result<Span>;

    /// Establish the anchor. Fails with [`TagError::AnchorAlreadySet`] on a
    /// second call.
    fn start(&mut self, now: NaiveDateTime) -> Result<()> {
        self.anchor_mut().set(now)
    }

    fn now(&self) -> Option<NaiveDateTime> {
        self.anchor().get()
    }

    fn is_anchored(&self) -> bool {
        self.anchor().get().is_some()
    }

    fn cmp_width(&self, other: &dyn Repeater) -> Ordering {
        self.width().cmp(&other.width())
    }
}

impl PartialEq for dyn Repeater {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_width(other) == Ordering::Equal
    }
}

impl Eq for dyn Repeater {}

impl PartialOrd for dyn Repeater {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn Repeater {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_width(other)
    }
}

// ── Factory ─────────────────────────────────────────────────────────────────

/// Build the concrete repeater for a symbol.
pub fn build(symbol: Symbol, options: &ScanOptions) -> Box<dyn Repeater> {
    match symbol {
        Symbol::QuarterName(quarter) => Box::new(RepeaterQuarterName::new(quarter, options)),
        Symbol::SeasonName(season) => Box::new(RepeaterSeasonName::new(season, options)),
        Symbol::MonthName(month) => Box::new(RepeaterMonthName::new(month, options)),
        Symbol::DayName(day) => Box::new(RepeaterDayName::new(day, options)),
        Symbol::DayPortion(portion) => Box::new(RepeaterDayPortion::new(portion, options)),
        Symbol::Unit(unit) => build_unit(unit, options),
    }
}

/// Build the concrete repeater registered for a generic unit.
pub fn build_unit(unit: Unit, options: &ScanOptions) -> Box<dyn Repeater> {
    match unit {
        Unit::Year => Box::new(RepeaterYear::new(options)),
        Unit::Quarter => Box::new(RepeaterQuarter::new(options)),
        Unit::Season => Box::new(RepeaterSeason::new(options)),
        Unit::Month => Box::new(RepeaterMonth::new(options)),
        Unit::Fortnight => Box::new(RepeaterFortnight::new(options)),
        Unit::Week => Box::new(RepeaterWeek::new(options)),
        Unit::Weekend => Box::new(RepeaterWeekend::new(options)),
        Unit::Weekday => Box::new(RepeaterWeekday::new(options)),
        Unit::Day => Box::new(RepeaterDay::new(options)),
        Unit::Hour => Box::new(RepeaterHour::new(options)),
        Unit::Minute => Box::new(RepeaterMinute::new(options)),
        Unit::Second => Box::new(RepeaterSecond::new(options)),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
