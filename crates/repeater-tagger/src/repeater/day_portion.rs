use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar;
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{DayPortion, Family, Symbol};

/// A portion of the day: "am", "morning", "wieczorem", "w nocy".
#[derive(Debug, Clone)]
pub struct RepeaterDayPortion {
    portion: DayPortion,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDate>,
}

impl RepeaterDayPortion {
    pub fn new(portion: DayPortion, options: &ScanOptions) -> Self {
        Self {
            portion,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        }
    }

    pub fn portion(&self) -> DayPortion {
        self.portion
    }

    /// The portion's window on `date`.
    fn window(&self, date: NaiveDate) -> Result<Span> {
        let (begin, end) = self.portion.range();
        let midnight = calendar::midnight(date);
        Ok(Span::new(
            calendar::shift(midnight, Duration::seconds(begin))?,
            calendar::shift(midnight, Duration::seconds(end))?,
        ))
    }
}

impl Repeater for RepeaterDayPortion {
    fn family(&self) -> Family {
        Family::DayPortion
    }

    fn symbol(&self) -> Option<Symbol> {
        Some(Symbol::DayPortion(self.portion))
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        let (begin, end) = self.portion.range();
        end - begin
    }

    fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    fn anchor_mut(&mut self) -> &mut Anchor {
        &mut self.anchor
    }

    fn next(&mut self, pointer: Pointer) -> Result<Span> {
        let now: NaiveDateTime = self.anchor.require("next")?;
        let forward = !pointer.is_past();
        let date = match self.current {
            Some(current) => calendar::shift_days(current, if forward { 1 } else { -1 })?,
            None => {
                let (begin, end) = self.portion.range();
                let elapsed = calendar::seconds_since_midnight(now);
                let today = now.date();
                let offset = if elapsed < begin {
                    // Today's window is still ahead.
                    if forward { 0 } else { -1 }
                } else if elapsed >= end {
                    if forward { 1 } else { 0 }
                } else if forward {
                    1
                } else {
                    -1
                };
                calendar::shift_days(today, offset)?
            }
        };
        self.current = Some(date);
        self.window(date)
    }

    fn this(&mut self, _pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        self.window(now.date())
    }
}

impl fmt::Display for RepeaterDayPortion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-dayportion-{}", self.portion.as_str())
    }
}
