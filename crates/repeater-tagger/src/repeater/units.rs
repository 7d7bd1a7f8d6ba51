//! Generic duration units: "year", "tydzień", "hrs", "weekend".
//!
//! Each unit shares the same anchoring and cursor handling; they differ only
//! in where the first occurrence starts, how far one step moves, and how the
//! occurrence containing the anchor is trimmed for `this`.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{
    self, DAY_SECONDS, FORTNIGHT_SECONDS, HOUR_SECONDS, MINUTE_SECONDS, MONTH_SECONDS,
    QUARTER_SECONDS, SEASON_SECONDS, WEEKEND_SECONDS, WEEK_SECONDS, YEAR_SECONDS,
};
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{Family, Symbol, Unit};

/// Per-unit stepping rules behind the shared [`Repeater`] impl.
trait Steps {
    /// Start of the first occurrence after (or before) the one holding `now`.
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime>;

    /// Start of the occurrence adjacent to the one starting at `begin`.
    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime>;

    /// End of the occurrence starting at `begin`.
    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime>;

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span>;
}

macro_rules! unit_repeater {
    ($(#[$meta:meta])* $name:ident, $unit:ident, $width:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            anchor: Anchor,
            options: ScanOptions,
            current: Option<NaiveDateTime>,
        }

        impl $name {
            pub fn new(options: &ScanOptions) -> Self {
                Self {
                    anchor: Anchor::default(),
                    options: options.clone(),
                    current: None,
                }
            }
        }

        impl Repeater for $name {
            fn family(&self) -> Family {
                Family::Unit
            }

            fn symbol(&self) -> Option<Symbol> {
                Some(Symbol::Unit(Unit::$unit))
            }

            fn options(&self) -> &ScanOptions {
                &self.options
            }

            fn width(&self) -> i64 {
                $width
            }

            fn anchor(&self) -> &Anchor {
                &self.anchor
            }

            fn anchor_mut(&mut self) -> &mut Anchor {
                &mut self.anchor
            }

            fn next(&mut self, pointer: Pointer) -> Result<Span> {
                let now = self.anchor.require("next")?;
                let forward = !pointer.is_past();
                let begin = match self.current {
                    None => self.first(now, forward)?,
                    Some(current) => self.step(current, forward)?,
                };
                self.current = Some(begin);
                Ok(Span::new(begin, self.end_of(begin)?))
            }

            fn this(&mut self, pointer: Pointer) -> Result<Span> {
                let now = self.anchor.require("this")?;
                self.this_span(now, pointer)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{REPEATER_LABEL}-{}", Unit::$unit.as_str())
            }
        }
    };
}

unit_repeater!(
    /// One calendar year, January 1st to January 1st.
    RepeaterYear, Year, YEAR_SECONDS
);
unit_repeater!(
    /// One calendar quarter starting in January, April, July or October.
    RepeaterQuarter, Quarter, QUARTER_SECONDS
);
unit_repeater!(
    /// One astronomical season.
    RepeaterSeason, Season, SEASON_SECONDS
);
unit_repeater!(RepeaterMonth, Month, MONTH_SECONDS);
unit_repeater!(
    /// Two weeks starting on the configured week-start day.
    RepeaterFortnight, Fortnight, FORTNIGHT_SECONDS
);
unit_repeater!(
    /// Seven days starting on the configured week-start day.
    RepeaterWeek, Week, WEEK_SECONDS
);
unit_repeater!(
    /// Saturday and Sunday.
    RepeaterWeekend, Weekend, WEEKEND_SECONDS
);
unit_repeater!(
    /// A single Monday-to-Friday day.
    RepeaterWeekday, Weekday, DAY_SECONDS
);
unit_repeater!(RepeaterDay, Day, DAY_SECONDS);
unit_repeater!(RepeaterHour, Hour, HOUR_SECONDS);
unit_repeater!(RepeaterMinute, Minute, MINUTE_SECONDS);
unit_repeater!(RepeaterSecond, Second, 1);

// ── Shared helpers ──────────────────────────────────────────────────────────

fn signed(forward: bool, amount: i64) -> i64 {
    if forward {
        amount
    } else {
        -amount
    }
}

fn step_seconds(begin: NaiveDateTime, seconds: i64, forward: bool) -> Result<NaiveDateTime> {
    calendar::shift(begin, Duration::seconds(signed(forward, seconds)))
}

fn step_months(begin: NaiveDateTime, months: i32, forward: bool) -> Result<NaiveDateTime> {
    let months = if forward { months } else { -months };
    Ok(calendar::midnight(calendar::add_months(begin.date(), months)?))
}

/// Trim `whole` for `this`: the part from `future_from` onward, the part
/// before `past_until`, or all of it.
fn trim(whole: Span, pointer: Pointer, future_from: NaiveDateTime, past_until: NaiveDateTime) -> Span {
    match pointer {
        Pointer::Future => Span::new(future_from, whole.end),
        Pointer::Past => Span::new(whole.begin, past_until),
        Pointer::None => whole,
    }
}

/// Midnight after the day containing `now`.
fn tomorrow(now: NaiveDateTime) -> Result<NaiveDateTime> {
    calendar::shift(calendar::start_of_day(now), Duration::seconds(DAY_SECONDS))
}

// ── Clock units ─────────────────────────────────────────────────────────────

impl Steps for RepeaterSecond {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(calendar::start_of_second(now), 1, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, 1, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, 1, true)
    }

    fn this_span(&self, now: NaiveDateTime, _pointer: Pointer) -> Result<Span> {
        let begin = calendar::start_of_second(now);
        Ok(Span::new(begin, self.end_of(begin)?))
    }
}

impl Steps for RepeaterMinute {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(calendar::start_of_minute(now), MINUTE_SECONDS, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, MINUTE_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, MINUTE_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::start_of_minute(now);
        let whole = Span::new(begin, self.end_of(begin)?);
        let second = calendar::start_of_second(now);
        Ok(trim(whole, pointer, step_seconds(second, 1, true)?, second))
    }
}

impl Steps for RepeaterHour {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(calendar::start_of_hour(now), HOUR_SECONDS, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, HOUR_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, HOUR_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::start_of_hour(now);
        let whole = Span::new(begin, self.end_of(begin)?);
        let minute = calendar::start_of_minute(now);
        Ok(trim(whole, pointer, step_seconds(minute, MINUTE_SECONDS, true)?, minute))
    }
}

// ── Day-based units ─────────────────────────────────────────────────────────

impl Steps for RepeaterDay {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(calendar::start_of_day(now), DAY_SECONDS, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, DAY_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, DAY_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::start_of_day(now);
        let whole = Span::new(begin, self.end_of(begin)?);
        let hour = calendar::start_of_hour(now);
        Ok(trim(whole, pointer, hour, hour))
    }
}

impl RepeaterWeek {
    fn week_start(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        let date = calendar::start_of_week(now.date(), self.options.week_start)?;
        Ok(calendar::midnight(date))
    }
}

impl Steps for RepeaterWeek {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(self.week_start(now)?, WEEK_SECONDS, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, WEEK_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, WEEK_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = self.week_start(now)?;
        let whole = Span::new(begin, self.end_of(begin)?);
        let hour = calendar::start_of_hour(now);
        Ok(trim(whole, pointer, step_seconds(hour, HOUR_SECONDS, true)?, hour))
    }
}

impl RepeaterFortnight {
    fn week_start(&self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        let date = calendar::start_of_week(now.date(), self.options.week_start)?;
        Ok(calendar::midnight(date))
    }
}

impl Steps for RepeaterFortnight {
    /// A future fortnight begins with next week; a past one ends where the
    /// current week begins.
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let week = self.week_start(now)?;
        if forward {
            step_seconds(week, WEEK_SECONDS, true)
        } else {
            step_seconds(week, FORTNIGHT_SECONDS, false)
        }
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, FORTNIGHT_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, FORTNIGHT_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = self.week_start(now)?;
        let whole = Span::new(begin, self.end_of(begin)?);
        let hour = calendar::start_of_hour(now);
        Ok(trim(whole, pointer, step_seconds(hour, HOUR_SECONDS, true)?, hour))
    }
}

impl RepeaterWeekend {
    /// Saturday of the weekend containing `date`, if it is one.
    fn current_saturday(date: NaiveDate) -> Result<Option<NaiveDate>> {
        match date.weekday() {
            Weekday::Sat => Ok(Some(date)),
            Weekday::Sun => calendar::shift_days(date, -1).map(Some),
            _ => Ok(None),
        }
    }
}

impl Steps for RepeaterWeekend {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let today = now.date();
        let saturday = match Self::current_saturday(today)? {
            Some(current) => calendar::shift_days(current, signed(forward, 7))?,
            None => calendar::step_to_weekday(today, Weekday::Sat, forward)?,
        };
        Ok(calendar::midnight(saturday))
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_seconds(begin, WEEK_SECONDS, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, WEEKEND_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let today = now.date();
        let saturday = match Self::current_saturday(today)? {
            Some(current) => current,
            None => calendar::step_to_weekday(today, Weekday::Sat, !pointer.is_past())?,
        };
        let begin = calendar::midnight(saturday);
        Ok(Span::new(begin, self.end_of(begin)?))
    }
}

/// The closest weekday strictly after (or before) `date`.
fn adjacent_weekday(date: NaiveDate, forward: bool) -> Result<NaiveDate> {
    let mut day = calendar::shift_days(date, signed(forward, 1))?;
    while calendar::is_weekend(day) {
        day = calendar::shift_days(day, signed(forward, 1))?;
    }
    Ok(day)
}

impl Steps for RepeaterWeekday {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        Ok(calendar::midnight(adjacent_weekday(now.date(), forward)?))
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        Ok(calendar::midnight(adjacent_weekday(begin.date(), forward)?))
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_seconds(begin, DAY_SECONDS, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let today = now.date();
        let day = if calendar::is_weekend(today) {
            adjacent_weekday(today, !pointer.is_past())?
        } else {
            today
        };
        let begin = calendar::midnight(day);
        Ok(Span::new(begin, self.end_of(begin)?))
    }
}

// ── Calendar units ──────────────────────────────────────────────────────────

impl Steps for RepeaterMonth {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let begin = calendar::midnight(calendar::first_of_month(now.year(), now.month())?);
        step_months(begin, 1, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_months(begin, 1, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_months(begin, 1, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::midnight(calendar::first_of_month(now.year(), now.month())?);
        let whole = Span::new(begin, self.end_of(begin)?);
        Ok(trim(whole, pointer, tomorrow(now)?, calendar::start_of_day(now)))
    }
}

impl Steps for RepeaterQuarter {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let begin = calendar::midnight(calendar::start_of_quarter(now.date())?);
        step_months(begin, 3, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_months(begin, 3, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_months(begin, 3, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::midnight(calendar::start_of_quarter(now.date())?);
        let whole = Span::new(begin, self.end_of(begin)?);
        Ok(trim(whole, pointer, tomorrow(now)?, calendar::start_of_day(now)))
    }
}

impl Steps for RepeaterYear {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let begin = calendar::midnight(calendar::first_of_year(now.year())?);
        step_months(begin, 12, forward)
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        step_months(begin, 12, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        step_months(begin, 12, true)
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let begin = calendar::midnight(calendar::first_of_year(now.year())?);
        let whole = Span::new(begin, self.end_of(begin)?);
        Ok(trim(whole, pointer, tomorrow(now)?, calendar::start_of_day(now)))
    }
}

impl Steps for RepeaterSeason {
    fn first(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let (season, start) = calendar::season_containing(now.date())?;
        let begin = if forward {
            calendar::next_season_start(season, start)?
        } else {
            calendar::prev_season_start(season, start)?
        };
        Ok(calendar::midnight(begin))
    }

    fn step(&self, begin: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        self.first(begin, forward)
    }

    fn end_of(&self, begin: NaiveDateTime) -> Result<NaiveDateTime> {
        let (season, start) = calendar::season_containing(begin.date())?;
        Ok(calendar::midnight(calendar::next_season_start(season, start)?))
    }

    fn this_span(&self, now: NaiveDateTime, pointer: Pointer) -> Result<Span> {
        let (_, start) = calendar::season_containing(now.date())?;
        let begin = calendar::midnight(start);
        let whole = Span::new(begin, self.end_of(begin)?);
        Ok(trim(whole, pointer, tomorrow(now)?, calendar::start_of_day(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;
    use crate::options::WeekStartDay;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at(y, m, d, 0, 0, 0)
    }

    // Wednesday, February 18 2026, 14:37:52
    fn now() -> NaiveDateTime {
        at(2026, 2, 18, 14, 37, 52)
    }

    fn anchored<R: Repeater>(mut repeater: R, now: NaiveDateTime) -> R {
        repeater.start(now).unwrap();
        repeater
    }

    fn opts() -> ScanOptions {
        ScanOptions::default()
    }

    #[test]
    fn test_widths_are_ordered() {
        let o = opts();
        let widths = [
            RepeaterSecond::new(&o).width(),
            RepeaterMinute::new(&o).width(),
            RepeaterHour::new(&o).width(),
            RepeaterDay::new(&o).width(),
            RepeaterWeekend::new(&o).width(),
            RepeaterWeek::new(&o).width(),
            RepeaterFortnight::new(&o).width(),
            RepeaterMonth::new(&o).width(),
            RepeaterQuarter::new(&o).width(),
            RepeaterSeason::new(&o).width(),
            RepeaterYear::new(&o).width(),
        ];
        assert!(widths.windows(2).all(|w| w[0] < w[1]), "{widths:?}");
        assert_eq!(RepeaterWeekday::new(&o).width(), RepeaterDay::new(&o).width());
    }

    #[test]
    fn test_second() {
        let mut second = anchored(RepeaterSecond::new(&opts()), now());
        assert_eq!(
            second.next(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 14, 37, 53), at(2026, 2, 18, 14, 37, 54))
        );
        assert_eq!(
            second.this(Pointer::None).unwrap(),
            Span::new(at(2026, 2, 18, 14, 37, 52), at(2026, 2, 18, 14, 37, 53))
        );
    }

    #[test]
    fn test_minute_next_and_this() {
        let mut minute = anchored(RepeaterMinute::new(&opts()), now());
        assert_eq!(
            minute.next(Pointer::Past).unwrap(),
            Span::new(at(2026, 2, 18, 14, 36, 0), at(2026, 2, 18, 14, 37, 0))
        );
        assert_eq!(
            minute.next(Pointer::Past).unwrap().begin,
            at(2026, 2, 18, 14, 35, 0)
        );
        assert_eq!(
            minute.this(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 14, 37, 53), at(2026, 2, 18, 14, 38, 0))
        );
        assert_eq!(
            minute.this(Pointer::Past).unwrap(),
            Span::new(at(2026, 2, 18, 14, 37, 0), at(2026, 2, 18, 14, 37, 52))
        );
    }

    #[test]
    fn test_hour() {
        let mut hour = anchored(RepeaterHour::new(&opts()), now());
        assert_eq!(
            hour.next(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 15, 0, 0), at(2026, 2, 18, 16, 0, 0))
        );
        assert_eq!(
            hour.next(Pointer::Future).unwrap().begin,
            at(2026, 2, 18, 16, 0, 0)
        );
        assert_eq!(
            hour.this(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 14, 38, 0), at(2026, 2, 18, 15, 0, 0))
        );
        assert_eq!(
            hour.this(Pointer::Past).unwrap(),
            Span::new(at(2026, 2, 18, 14, 0, 0), at(2026, 2, 18, 14, 37, 0))
        );
    }

    #[test]
    fn test_day() {
        let mut d = anchored(RepeaterDay::new(&opts()), now());
        assert_eq!(d.next(Pointer::Future).unwrap(), Span::new(day(2026, 2, 19), day(2026, 2, 20)));
        let mut back = anchored(RepeaterDay::new(&opts()), now());
        assert_eq!(back.next(Pointer::Past).unwrap(), Span::new(day(2026, 2, 17), day(2026, 2, 18)));
        assert_eq!(
            d.this(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 14, 0, 0), day(2026, 2, 19))
        );
        assert_eq!(
            d.this(Pointer::None).unwrap(),
            Span::new(day(2026, 2, 18), day(2026, 2, 19))
        );
    }

    #[test]
    fn test_week_respects_week_start() {
        let mut sunday = anchored(RepeaterWeek::new(&opts()), now());
        assert_eq!(
            sunday.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 22), day(2026, 3, 1))
        );

        let monday_opts = ScanOptions {
            week_start: WeekStartDay::Monday,
            ..ScanOptions::default()
        };
        let mut monday = anchored(RepeaterWeek::new(&monday_opts), now());
        assert_eq!(
            monday.next(Pointer::Past).unwrap(),
            Span::new(day(2026, 2, 9), day(2026, 2, 16))
        );
        assert_eq!(
            monday.this(Pointer::Future).unwrap(),
            Span::new(at(2026, 2, 18, 15, 0, 0), day(2026, 2, 23))
        );
        assert_eq!(
            monday.this(Pointer::Past).unwrap(),
            Span::new(day(2026, 2, 16), at(2026, 2, 18, 14, 0, 0))
        );
    }

    #[test]
    fn test_fortnight() {
        let mut future = anchored(RepeaterFortnight::new(&opts()), now());
        assert_eq!(
            future.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 22), day(2026, 3, 8))
        );
        assert_eq!(future.next(Pointer::Future).unwrap().begin, day(2026, 3, 8));

        let mut past = anchored(RepeaterFortnight::new(&opts()), now());
        assert_eq!(
            past.next(Pointer::Past).unwrap(),
            Span::new(day(2026, 2, 1), day(2026, 2, 15))
        );
    }

    #[test]
    fn test_weekend_from_midweek() {
        let mut future = anchored(RepeaterWeekend::new(&opts()), now());
        assert_eq!(
            future.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 21), day(2026, 2, 23))
        );
        assert_eq!(future.next(Pointer::Future).unwrap().begin, day(2026, 2, 28));

        let mut past = anchored(RepeaterWeekend::new(&opts()), now());
        assert_eq!(
            past.next(Pointer::Past).unwrap(),
            Span::new(day(2026, 2, 14), day(2026, 2, 16))
        );
    }

    #[test]
    fn test_weekend_from_sunday_skips_current() {
        let sunday = at(2026, 2, 22, 11, 0, 0);
        let mut past = anchored(RepeaterWeekend::new(&opts()), sunday);
        assert_eq!(past.next(Pointer::Past).unwrap().begin, day(2026, 2, 14));
        let mut future = anchored(RepeaterWeekend::new(&opts()), sunday);
        assert_eq!(future.next(Pointer::Future).unwrap().begin, day(2026, 2, 28));
        assert_eq!(
            future.this(Pointer::None).unwrap(),
            Span::new(day(2026, 2, 21), day(2026, 2, 23))
        );
    }

    #[test]
    fn test_weekday_skips_weekends() {
        let friday = at(2026, 2, 20, 9, 0, 0);
        let mut weekday = anchored(RepeaterWeekday::new(&opts()), friday);
        assert_eq!(
            weekday.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 23), day(2026, 2, 24))
        );
        assert_eq!(weekday.next(Pointer::Future).unwrap().begin, day(2026, 2, 24));
        assert_eq!(
            weekday.this(Pointer::None).unwrap(),
            Span::new(day(2026, 2, 20), day(2026, 2, 21))
        );

        let saturday = at(2026, 2, 21, 9, 0, 0);
        let mut weekend = anchored(RepeaterWeekday::new(&opts()), saturday);
        assert_eq!(weekend.this(Pointer::Past).unwrap().begin, day(2026, 2, 20));
        assert_eq!(weekend.this(Pointer::Future).unwrap().begin, day(2026, 2, 23));
        assert_eq!(weekend.next(Pointer::Past).unwrap().begin, day(2026, 2, 20));
    }

    #[test]
    fn test_month() {
        let mut month = anchored(RepeaterMonth::new(&opts()), now());
        assert_eq!(
            month.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 3, 1), day(2026, 4, 1))
        );
        assert_eq!(
            month.this(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 19), day(2026, 3, 1))
        );
        assert_eq!(
            month.this(Pointer::Past).unwrap(),
            Span::new(day(2026, 2, 1), day(2026, 2, 18))
        );

        let mut january = anchored(RepeaterMonth::new(&opts()), at(2026, 1, 31, 12, 0, 0));
        assert_eq!(
            january.next(Pointer::Past).unwrap(),
            Span::new(day(2025, 12, 1), day(2026, 1, 1))
        );
    }

    #[test]
    fn test_quarter_and_year() {
        let mut quarter = anchored(RepeaterQuarter::new(&opts()), now());
        assert_eq!(
            quarter.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 4, 1), day(2026, 7, 1))
        );
        assert_eq!(
            quarter.this(Pointer::None).unwrap(),
            Span::new(day(2026, 1, 1), day(2026, 4, 1))
        );

        let mut year = anchored(RepeaterYear::new(&opts()), now());
        assert_eq!(
            year.next(Pointer::Past).unwrap(),
            Span::new(day(2025, 1, 1), day(2026, 1, 1))
        );
        assert_eq!(year.next(Pointer::Past).unwrap().begin, day(2024, 1, 1));
        assert_eq!(
            year.this(Pointer::Future).unwrap(),
            Span::new(day(2026, 2, 19), day(2027, 1, 1))
        );
    }

    #[test]
    fn test_season_unit() {
        // Feb 18 is in the winter that began Dec 22 2025.
        let mut season = anchored(RepeaterSeason::new(&opts()), now());
        assert_eq!(
            season.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 3, 20), day(2026, 6, 21))
        );
        assert_eq!(
            season.next(Pointer::Future).unwrap(),
            Span::new(day(2026, 6, 21), day(2026, 9, 23))
        );

        let mut past = anchored(RepeaterSeason::new(&opts()), now());
        assert_eq!(
            past.next(Pointer::Past).unwrap(),
            Span::new(day(2025, 9, 23), day(2025, 12, 22))
        );
        assert_eq!(
            past.this(Pointer::None).unwrap(),
            Span::new(day(2025, 12, 22), day(2026, 3, 20))
        );
    }

    #[test]
    fn test_this_does_not_move_next() {
        let mut day_unit = anchored(RepeaterDay::new(&opts()), now());
        day_unit.this(Pointer::None).unwrap();
        assert_eq!(day_unit.next(Pointer::Future).unwrap().begin, day(2026, 2, 19));
    }

    fn every_unit() -> Vec<Box<dyn Repeater>> {
        let o = opts();
        vec![
            Box::new(RepeaterYear::new(&o)),
            Box::new(RepeaterQuarter::new(&o)),
            Box::new(RepeaterSeason::new(&o)),
            Box::new(RepeaterMonth::new(&o)),
            Box::new(RepeaterFortnight::new(&o)),
            Box::new(RepeaterWeek::new(&o)),
            Box::new(RepeaterWeekend::new(&o)),
            Box::new(RepeaterWeekday::new(&o)),
            Box::new(RepeaterDay::new(&o)),
            Box::new(RepeaterHour::new(&o)),
            Box::new(RepeaterMinute::new(&o)),
            Box::new(RepeaterSecond::new(&o)),
        ]
    }

    #[test]
    fn test_edge_of_calendar_is_out_of_range() {
        let last = NaiveDate::MAX.and_hms_opt(23, 59, 59).unwrap();
        for mut unit in every_unit() {
            unit.start(last).unwrap();
            assert!(
                matches!(unit.next(Pointer::Future), Err(TagError::OutOfRange(_))),
                "{unit} next"
            );
            assert!(
                matches!(unit.this(Pointer::None), Err(TagError::OutOfRange(_))),
                "{unit} this"
            );
        }

        let first = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
        for mut unit in every_unit() {
            unit.start(first).unwrap();
            assert!(
                matches!(unit.next(Pointer::Past), Err(TagError::OutOfRange(_))),
                "{unit} past"
            );
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(RepeaterFortnight::new(&opts()).to_string(), "repeater-fortnight");
        assert_eq!(RepeaterWeekday::new(&opts()).to_string(), "repeater-weekday");
    }
}
