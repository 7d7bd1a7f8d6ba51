//! Calendar arithmetic shared by the concrete repeaters.
//!
//! Pure functions over `chrono` naive dates: no clock access and no timezone
//! handling. The caller's anchor is already a local wall-clock time, and
//! every boundary computed here is a local midnight or a local clock time on
//! that calendar.

use chrono::{
    Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};

use crate::error::{Result, TagError};
use crate::options::WeekStartDay;
use crate::symbol::Season;

pub const MINUTE_SECONDS: i64 = 60;
pub const HOUR_SECONDS: i64 = 60 * MINUTE_SECONDS;
pub const DAY_SECONDS: i64 = 24 * HOUR_SECONDS;
pub const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;
pub const WEEKEND_SECONDS: i64 = 2 * DAY_SECONDS;
pub const FORTNIGHT_SECONDS: i64 = 14 * DAY_SECONDS;
pub const MONTH_SECONDS: i64 = 30 * DAY_SECONDS;
pub const QUARTER_SECONDS: i64 = 90 * DAY_SECONDS;
pub const SEASON_SECONDS: i64 = 91 * DAY_SECONDS;
pub const YEAR_SECONDS: i64 = 365 * DAY_SECONDS;

// ── Truncation ──────────────────────────────────────────────────────────────

/// Local midnight at the start of `date`.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    midnight(dt.date())
}

pub fn start_of_hour(dt: NaiveDateTime) -> NaiveDateTime {
    start_of_day(dt) + Duration::hours(dt.hour() as i64)
}

pub fn start_of_minute(dt: NaiveDateTime) -> NaiveDateTime {
    start_of_hour(dt) + Duration::minutes(dt.minute() as i64)
}

/// Drop sub-second precision.
pub fn start_of_second(dt: NaiveDateTime) -> NaiveDateTime {
    start_of_minute(dt) + Duration::seconds(dt.second() as i64)
}

/// Seconds elapsed since the local midnight of `dt`.
pub fn seconds_since_midnight(dt: NaiveDateTime) -> i64 {
    dt.num_seconds_from_midnight() as i64
}

// ── Weeks ───────────────────────────────────────────────────────────────────

/// How many days `weekday` is from the week-start day.
pub fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> Result<NaiveDate> {
    shift_days(date, -days_from_week_start(date.weekday(), week_start))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first date strictly after (`forward`) or strictly before `date` that
/// falls on `weekday`.
pub fn step_to_weekday(date: NaiveDate, weekday: Weekday, forward: bool) -> Result<NaiveDate> {
    let current = date.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    if forward {
        let ahead = (target - current + 7) % 7;
        shift_days(date, if ahead == 0 { 7 } else { ahead })
    } else {
        let back = (current - target + 7) % 7;
        shift_days(date, -(if back == 0 { 7 } else { back }))
    }
}

// ── Months, quarters, years ─────────────────────────────────────────────────

pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TagError::OutOfRange(format!("{year}-{month:02}-01")))
}

pub fn first_of_year(year: i32) -> Result<NaiveDate> {
    first_of_month(year, 1)
}

/// First day of the quarter containing `date`.
pub fn start_of_quarter(date: NaiveDate) -> Result<NaiveDate> {
    let q_start_month = ((date.month() - 1) / 3) * 3 + 1;
    first_of_month(date.year(), q_start_month)
}

/// Move `date` by a signed number of calendar months, clamping the day to
/// the end of shorter months.
pub fn add_months(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or_else(|| TagError::OutOfRange(format!("{date} shifted by {months} months")))
}

pub fn add_years(date: NaiveDate, years: i32) -> Result<NaiveDate> {
    add_months(date, years * 12)
}

/// Add a signed duration, reporting overflow instead of panicking.
pub fn shift(dt: NaiveDateTime, by: Duration) -> Result<NaiveDateTime> {
    dt.checked_add_signed(by)
        .ok_or_else(|| TagError::OutOfRange(format!("{dt} shifted by {by}")))
}

pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| TagError::OutOfRange(format!("{date} shifted by {days} days")))
}

// ── Seasons ─────────────────────────────────────────────────────────────────

/// The date on which `season` begins in `year`.
pub fn season_start(season: Season, year: i32) -> Result<NaiveDate> {
    let (month, day) = season.start();
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TagError::OutOfRange(format!("{} of {year}", season.as_str())))
}

/// The season containing `date` and the date that season began.
///
/// Winter straddles the new year: January 5th belongs to the winter that
/// began on December 22nd of the previous year.
pub fn season_containing(date: NaiveDate) -> Result<(Season, NaiveDate)> {
    let year = date.year();
    let mut found = (Season::Winter, season_start(Season::Winter, year - 1)?);
    for season in Season::ALL {
        let start = season_start(season, year)?;
        if start <= date {
            found = (season, start);
        }
    }
    Ok(found)
}

/// The date the season following the one that began on `start` begins.
pub fn next_season_start(season: Season, start: NaiveDate) -> Result<NaiveDate> {
    let next = season.succ();
    let year = if next == Season::Spring {
        start.year() + 1
    } else {
        start.year()
    };
    season_start(next, year)
}

/// The date the season preceding the one that began on `start` began.
pub fn prev_season_start(season: Season, start: NaiveDate) -> Result<NaiveDate> {
    let prev = season.pred();
    let year = if season == Season::Spring {
        start.year() - 1
    } else {
        start.year()
    };
    season_start(prev, year)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_truncation() {
        let dt = at(2026, 2, 18, 14, 37, 52);
        assert_eq!(start_of_day(dt), at(2026, 2, 18, 0, 0, 0));
        assert_eq!(start_of_hour(dt), at(2026, 2, 18, 14, 0, 0));
        assert_eq!(start_of_minute(dt), at(2026, 2, 18, 14, 37, 0));
        assert_eq!(seconds_since_midnight(dt), 14 * 3600 + 37 * 60 + 52);
    }

    #[test]
    fn test_start_of_week_monday_and_sunday() {
        // Wed Feb 18 2026
        let wed = date(2026, 2, 18);
        assert_eq!(start_of_week(wed, WeekStartDay::Monday).unwrap(), date(2026, 2, 16));
        assert_eq!(start_of_week(wed, WeekStartDay::Sunday).unwrap(), date(2026, 2, 15));
    }

    #[test]
    fn test_step_to_weekday_is_strict() {
        let wed = date(2026, 2, 18);
        assert_eq!(step_to_weekday(wed, Weekday::Wed, true).unwrap(), date(2026, 2, 25));
        assert_eq!(step_to_weekday(wed, Weekday::Wed, false).unwrap(), date(2026, 2, 11));
        assert_eq!(step_to_weekday(wed, Weekday::Fri, true).unwrap(), date(2026, 2, 20));
        assert_eq!(step_to_weekday(wed, Weekday::Mon, false).unwrap(), date(2026, 2, 16));
    }

    #[test]
    fn test_quarter_and_month_arithmetic() {
        assert_eq!(start_of_quarter(date(2026, 5, 9)).unwrap(), date(2026, 4, 1));
        assert_eq!(add_months(date(2026, 11, 1), 3).unwrap(), date(2027, 2, 1));
        assert_eq!(add_months(date(2026, 1, 1), -1).unwrap(), date(2025, 12, 1));
        assert_eq!(add_years(date(2026, 3, 1), -2).unwrap(), date(2024, 3, 1));
    }

    #[test]
    fn test_season_containing_wraps_winter() {
        assert_eq!(
            season_containing(date(2026, 1, 5)).unwrap(),
            (Season::Winter, date(2025, 12, 22))
        );
        assert_eq!(
            season_containing(date(2026, 7, 4)).unwrap(),
            (Season::Summer, date(2026, 6, 21))
        );
        assert_eq!(
            season_containing(date(2026, 12, 25)).unwrap(),
            (Season::Winter, date(2026, 12, 22))
        );
    }

    #[test]
    fn test_season_neighbours() {
        assert_eq!(
            next_season_start(Season::Winter, date(2025, 12, 22)).unwrap(),
            date(2026, 3, 20)
        );
        assert_eq!(
            prev_season_start(Season::Spring, date(2026, 3, 20)).unwrap(),
            date(2025, 12, 22)
        );
        assert_eq!(
            next_season_start(Season::Summer, date(2026, 6, 21)).unwrap(),
            date(2026, 9, 23)
        );
    }

    #[test]
    fn test_shift_overflow_is_an_error() {
        let err = shift(NaiveDateTime::MAX, Duration::days(1)).unwrap_err();
        assert!(matches!(err, TagError::OutOfRange(_)));
    }

    #[test]
    fn test_week_helpers_at_the_calendar_edges() {
        let last = NaiveDate::MAX;
        let err = step_to_weekday(last, last.weekday(), true).unwrap_err();
        assert!(matches!(err, TagError::OutOfRange(_)));

        let first = NaiveDate::MIN;
        let err = step_to_weekday(first, first.weekday(), false).unwrap_err();
        assert!(matches!(err, TagError::OutOfRange(_)));

        // At most one week-start day can leave MIN where it is.
        let week_start = if first.weekday() == Weekday::Mon {
            WeekStartDay::Sunday
        } else {
            WeekStartDay::Monday
        };
        let err = start_of_week(first, week_start).unwrap_err();
        assert!(matches!(err, TagError::OutOfRange(_)));
    }
}
