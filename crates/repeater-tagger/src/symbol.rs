//! Symbols: the canonical meanings a matched pattern resolves to.
//!
//! Month and day names reuse [`chrono::Month`] and [`chrono::Weekday`]; the
//! remaining families get their own closed enums. Every [`Symbol`] belongs to
//! exactly one [`Family`].

use std::fmt;

use chrono::{Month, Weekday};
use serde::{Serialize, Serializer};

/// A classification family. The order of [`Family::SCAN_ORDER`] is the order
/// in which the classifier consults the families for each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    QuarterName,
    SeasonName,
    MonthName,
    DayName,
    DayPortion,
    Time,
    Unit,
}

impl Family {
    pub const SCAN_ORDER: [Family; 7] = [
        Family::QuarterName,
        Family::SeasonName,
        Family::MonthName,
        Family::DayName,
        Family::DayPortion,
        Family::Time,
        Family::Unit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Family::QuarterName => "quartername",
            Family::SeasonName => "seasonname",
            Family::MonthName => "monthname",
            Family::DayName => "dayname",
            Family::DayPortion => "dayportion",
            Family::Time => "time",
            Family::Unit => "unit",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuarterName {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl QuarterName {
    /// Zero-based position within the year.
    pub fn index(self) -> u32 {
        match self {
            QuarterName::Q1 => 0,
            QuarterName::Q2 => 1,
            QuarterName::Q3 => 2,
            QuarterName::Q4 => 3,
        }
    }

    /// First calendar month (1-based) of the quarter.
    pub fn first_month(self) -> u32 {
        self.index() * 3 + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuarterName::Q1 => "q1",
            QuarterName::Q2 => "q2",
            QuarterName::Q3 => "q3",
            QuarterName::Q4 => "q4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Month and day on which the season begins.
    pub fn start(self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 20),
            Season::Summer => (6, 21),
            Season::Autumn => (9, 23),
            Season::Winter => (12, 22),
        }
    }

    pub fn succ(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn pred(self) -> Season {
        match self {
            Season::Spring => Season::Winter,
            Season::Summer => Season::Spring,
            Season::Autumn => Season::Summer,
            Season::Winter => Season::Autumn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPortion {
    Am,
    Pm,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPortion {
    /// Seconds after midnight at which the portion starts and ends.
    pub fn range(self) -> (i64, i64) {
        const HOUR: i64 = 3600;
        match self {
            DayPortion::Am => (0, 12 * HOUR),
            DayPortion::Pm => (12 * HOUR, 24 * HOUR),
            DayPortion::Morning => (6 * HOUR, 12 * HOUR),
            DayPortion::Afternoon => (13 * HOUR, 17 * HOUR),
            DayPortion::Evening => (17 * HOUR, 20 * HOUR),
            DayPortion::Night => (20 * HOUR, 24 * HOUR),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayPortion::Am => "am",
            DayPortion::Pm => "pm",
            DayPortion::Morning => "morning",
            DayPortion::Afternoon => "afternoon",
            DayPortion::Evening => "evening",
            DayPortion::Night => "night",
        }
    }
}

/// Generic duration units. Each variant has its own concrete repeater type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Quarter,
    Season,
    Month,
    Fortnight,
    Week,
    Weekend,
    Weekday,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Quarter => "quarter",
            Unit::Season => "season",
            Unit::Month => "month",
            Unit::Fortnight => "fortnight",
            Unit::Week => "week",
            Unit::Weekend => "weekend",
            Unit::Weekday => "weekday",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }
}

/// The meaning of a matched token, tagged with its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    QuarterName(QuarterName),
    SeasonName(Season),
    MonthName(Month),
    DayName(Weekday),
    DayPortion(DayPortion),
    Unit(Unit),
}

impl Symbol {
    pub fn family(self) -> Family {
        match self {
            Symbol::QuarterName(_) => Family::QuarterName,
            Symbol::SeasonName(_) => Family::SeasonName,
            Symbol::MonthName(_) => Family::MonthName,
            Symbol::DayName(_) => Family::DayName,
            Symbol::DayPortion(_) => Family::DayPortion,
            Symbol::Unit(_) => Family::Unit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::QuarterName(q) => q.as_str(),
            Symbol::SeasonName(s) => s.as_str(),
            Symbol::MonthName(m) => month_name(m),
            Symbol::DayName(d) => weekday_name(d),
            Symbol::DayPortion(p) => p.as_str(),
            Symbol::Unit(u) => u.as_str(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub(crate) fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "january",
        Month::February => "february",
        Month::March => "march",
        Month::April => "april",
        Month::May => "may",
        Month::June => "june",
        Month::July => "july",
        Month::August => "august",
        Month::September => "september",
        Month::October => "october",
        Month::November => "november",
        Month::December => "december",
    }
}

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
