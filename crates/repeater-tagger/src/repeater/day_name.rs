use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{self, DAY_SECONDS};
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{weekday_name, Family, Symbol};

/// A named day of the week: "monday", "pt", "sob".
#[derive(Debug, Clone)]
pub struct RepeaterDayName {
    day: Weekday,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDate>,
}

impl RepeaterDayName {
    pub fn new(day: Weekday, options: &ScanOptions) -> Self {
        Self {
            day,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    fn day_span(date: NaiveDate) -> Result<Span> {
        let end = calendar::shift_days(date, 1)?;
        Ok(Span::new(calendar::midnight(date), calendar::midnight(end)))
    }

    fn nearest(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDate> {
        let today = now.date();
        if today.weekday() == self.day {
            Ok(today)
        } else {
            calendar::step_to_weekday(today, self.day, forward)
        }
    }
}

impl Repeater for RepeaterDayName {
    fn family(&self) -> Family {
        Family::DayName
    }

    fn symbol(&self) -> Option<Symbol> {
        Some(Symbol::DayName(self.day))
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        DAY_SECONDS
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
        let date = match self.current {
            None => calendar::step_to_weekday(now.date(), self.day, forward)?,
            Some(current) => calendar::shift_days(current, if forward { 7 } else { -7 })?,
        };
        self.current = Some(date);
        Self::day_span(date)
    }

    fn this(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        Self::day_span(self.nearest(now, !pointer.is_past())?)
    }
}

impl fmt::Display for RepeaterDayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-dayname-{}", weekday_name(self.day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagError;

    // Wednesday, February 18 2026, 10:00
    fn anchored(day: Weekday) -> RepeaterDayName {
        let mut repeater = RepeaterDayName::new(day, &ScanOptions::default());
        repeater
            .start(
                NaiveDate::from_ymd_opt(2026, 2, 18)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            )
            .unwrap();
        repeater
    }

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_next_future_steps_weekly() {
        let mut friday = anchored(Weekday::Fri);
        assert_eq!(friday.next(Pointer::Future).unwrap(), Span::new(day(20), day(21)));
        assert_eq!(friday.next(Pointer::Future).unwrap(), Span::new(day(27), day(28)));
    }

    #[test]
    fn test_next_past() {
        let mut monday = anchored(Weekday::Mon);
        assert_eq!(monday.next(Pointer::Past).unwrap(), Span::new(day(16), day(17)));
        assert_eq!(monday.next(Pointer::Past).unwrap(), Span::new(day(9), day(10)));
    }

    #[test]
    fn test_next_same_weekday_skips_today() {
        let mut wednesday = anchored(Weekday::Wed);
        assert_eq!(wednesday.next(Pointer::Future).unwrap(), Span::new(day(25), day(26)));
    }

    #[test]
    fn test_this_contains_today() {
        let mut wednesday = anchored(Weekday::Wed);
        assert_eq!(wednesday.this(Pointer::None).unwrap(), Span::new(day(18), day(19)));
        let mut sunday = anchored(Weekday::Sun);
        assert_eq!(sunday.this(Pointer::Past).unwrap(), Span::new(day(15), day(16)));
        assert_eq!(sunday.this(Pointer::Future).unwrap(), Span::new(day(22), day(23)));
    }

    #[test]
    fn test_edge_of_calendar_is_out_of_range() {
        let last = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
        let beyond = NaiveDate::MAX.weekday().succ();
        let mut repeater = RepeaterDayName::new(beyond, &ScanOptions::default());
        repeater.start(last).unwrap();
        assert!(matches!(repeater.next(Pointer::Future), Err(TagError::OutOfRange(_))));
        assert!(matches!(repeater.this(Pointer::Future), Err(TagError::OutOfRange(_))));

        let first = NaiveDate::MIN.and_hms_opt(12, 0, 0).unwrap();
        let mut repeater = RepeaterDayName::new(NaiveDate::MIN.weekday(), &ScanOptions::default());
        repeater.start(first).unwrap();
        assert!(matches!(repeater.next(Pointer::Past), Err(TagError::OutOfRange(_))));
    }

    #[test]
    fn test_label() {
        assert_eq!(anchored(Weekday::Tue).to_string(), "repeater-dayname-tuesday");
        assert_eq!(anchored(Weekday::Tue).width(), 86_400);
    }
}
