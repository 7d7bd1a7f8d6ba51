use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{self, QUARTER_SECONDS};
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{Family, QuarterName, Symbol};

/// A named quarter of the year: "q1" .. "q4".
#[derive(Debug, Clone)]
pub struct RepeaterQuarterName {
    quarter: QuarterName,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDate>,
}

impl RepeaterQuarterName {
    pub fn new(quarter: QuarterName, options: &ScanOptions) -> Self {
        Self {
            quarter,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        }
    }

    pub fn quarter(&self) -> QuarterName {
        self.quarter
    }

    fn quarter_span(begin: NaiveDate) -> Result<Span> {
        let end = calendar::add_months(begin, 3)?;
        Ok(Span::new(calendar::midnight(begin), calendar::midnight(end)))
    }
}

impl Repeater for RepeaterQuarterName {
    fn family(&self) -> Family {
        Family::QuarterName
    }

    fn symbol(&self) -> Option<Symbol> {
        Some(Symbol::QuarterName(self.quarter))
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        QUARTER_SECONDS
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
                let current_q = (now.month() - 1) / 3;
                let target = self.quarter.index();
                let this_year = calendar::first_of_month(now.year(), self.quarter.first_month())?;
                match pointer {
                    Pointer::Past if current_q > target => this_year,
                    Pointer::Past => calendar::add_years(this_year, -1)?,
                    _ if current_q < target => this_year,
                    _ => calendar::add_years(this_year, 1)?,
                }
            }
        };
        self.current = Some(begin);
        Self::quarter_span(begin)
    }

    fn this(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        let current_q = (now.month() - 1) / 3;
        let target = self.quarter.index();
        let this_year = calendar::first_of_month(now.year(), self.quarter.first_month())?;
        let begin = match pointer {
            Pointer::Past if current_q >= target => this_year,
            Pointer::Past => calendar::add_years(this_year, -1)?,
            _ if current_q <= target => this_year,
            _ => calendar::add_years(this_year, 1)?,
        };
        Self::quarter_span(begin)
    }
}

impl fmt::Display for RepeaterQuarterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-quartername-{}", self.quarter.as_str())
    }
}
