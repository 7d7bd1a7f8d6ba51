use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{self, MONTH_SECONDS};
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{month_name, Family, Symbol};

/// A named month: "january", "sept.", "października".
#[derive(Debug, Clone)]
pub struct RepeaterMonthName {
    month: Month,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDate>,
}

impl RepeaterMonthName {
    pub fn new(month: Month, options: &ScanOptions) -> Self {
        Self {
            month,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    fn index(&self) -> u32 {
        self.month.number_from_month()
    }

    fn month_span(begin: NaiveDate) -> Result<Span> {
        let end = calendar::add_months(begin, 1)?;
        Ok(Span::new(calendar::midnight(begin), calendar::midnight(end)))
    }
}

impl Repeater for RepeaterMonthName {
    fn family(&self) -> Family {
        Family::MonthName
    }

    fn symbol(&self) -> Option<Symbol> {
        Some(Symbol::MonthName(self.month))
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        MONTH_SECONDS
    }

    fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    fn anchor_mut(&mut self) -> &mut Anchor {
        &mut self.anchor
    }

    fn next(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("next")?;
        let begin = match self.current {
            Some(current) => {
                calendar::add_years(current, if pointer.is_past() { -1 } else { 1 })?
            }
            None => {
                let this_year = calendar::first_of_month(now.year(), self.index())?;
                match pointer {
                    Pointer::Past if now.month() > self.index() => this_year,
                    Pointer::Past => calendar::add_years(this_year, -1)?,
                    _ if now.month() < self.index() => this_year,
                    _ => calendar::add_years(this_year, 1)?,
                }
            }
        };
        self.current = Some(begin);
        Self::month_span(begin)
    }

    fn this(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        let this_year = calendar::first_of_month(now.year(), self.index())?;
        let begin = match pointer {
            Pointer::Past if now.month() >= self.index() => this_year,
            Pointer::Past => calendar::add_years(this_year, -1)?,
            _ if now.month() <= self.index() => this_year,
            _ => calendar::add_years(this_year, 1)?,
        };
        Self::month_span(begin)
    }
}

impl fmt::Display for RepeaterMonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-monthname-{}", month_name(self.month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    // August 10 2026, noon
    fn anchored(month: Month) -> RepeaterMonthName {
        let mut repeater = RepeaterMonthName::new(month, &ScanOptions::default());
        repeater
            .start(
                NaiveDate::from_ymd_opt(2026, 8, 10)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            )
            .unwrap();
        repeater
    }

    fn first(y: i32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_next_future_later_this_year() {
        let mut november = anchored(Month::November);
        assert_eq!(
            november.next(Pointer::Future).unwrap(),
            Span::new(first(2026, 11), first(2026, 12))
        );
        assert_eq!(
            november.next(Pointer::Future).unwrap(),
            Span::new(first(2027, 11), first(2027, 12))
        );
    }

    #[test]
    fn test_next_future_wraps_to_next_year() {
        let mut march = anchored(Month::March);
        assert_eq!(
            march.next(Pointer::Future).unwrap(),
            Span::new(first(2027, 3), first(2027, 4))
        );
        let mut august = anchored(Month::August);
        assert_eq!(
            august.next(Pointer::Future).unwrap(),
            Span::new(first(2027, 8), first(2027, 9))
        );
    }

    #[test]
    fn test_next_past() {
        let mut march = anchored(Month::March);
        assert_eq!(
            march.next(Pointer::Past).unwrap(),
            Span::new(first(2026, 3), first(2026, 4))
        );
        let mut december = anchored(Month::December);
        assert_eq!(
            december.next(Pointer::Past).unwrap(),
            Span::new(first(2025, 12), first(2026, 1))
        );
    }

    #[test]
    fn test_this_includes_current_month() {
        let mut august = anchored(Month::August);
        assert_eq!(
            august.this(Pointer::None).unwrap(),
            Span::new(first(2026, 8), first(2026, 9))
        );
        let mut january = anchored(Month::January);
        assert_eq!(
            january.this(Pointer::Future).unwrap(),
            Span::new(first(2027, 1), first(2027, 2))
        );
        assert_eq!(
            january.this(Pointer::Past).unwrap(),
            Span::new(first(2026, 1), first(2026, 2))
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(anchored(Month::May).to_string(), "repeater-monthname-may");
    }
}
