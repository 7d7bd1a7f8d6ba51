use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{self, SEASON_SECONDS};
use crate::error::Result;
use crate::options::ScanOptions;
use crate::span::Span;
use crate::symbol::{Family, Season, Symbol};

/// A named season: "spring", "latem", "jesienią".
///
/// Seasons begin on March 20th, June 21st, September 23rd and December
/// 22nd, and run until the next one begins.
#[derive(Debug, Clone)]
pub struct RepeaterSeasonName {
    season: Season,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDate>,
}

impl RepeaterSeasonName {
    pub fn new(season: Season, options: &ScanOptions) -> Self {
        Self {
            season,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    fn season_span(&self, begin: NaiveDate) -> Result<Span> {
        let end = calendar::next_season_start(self.season, begin)?;
        Ok(Span::new(calendar::midnight(begin), calendar::midnight(end)))
    }

    /// Start of the first occurrence beginning after `now`.
    fn upcoming(&self, now: NaiveDateTime) -> Result<NaiveDate> {
        let today = now.date();
        let mut begin = calendar::season_start(self.season, today.year())?;
        if begin <= today {
            begin = calendar::add_years(begin, 1)?;
        }
        Ok(begin)
    }

    /// Start of the latest occurrence that ended before the current season.
    fn previous(&self, now: NaiveDateTime) -> Result<NaiveDate> {
        let (_, current_start) = calendar::season_containing(now.date())?;
        let mut begin = calendar::season_start(self.season, now.year())?;
        while begin >= current_start {
            begin = calendar::add_years(begin, -1)?;
        }
        Ok(begin)
    }
}

impl Repeater for RepeaterSeasonName {
    fn family(&self) -> Family {
        Family::SeasonName
    }

    fn symbol(&self) -> Option<Symbol> {
        Some(Symbol::SeasonName(self.season))
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        SEASON_SECONDS
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
            None if pointer.is_past() => self.previous(now)?,
            None => self.upcoming(now)?,
        };
        self.current = Some(begin);
        self.season_span(begin)
    }

    fn this(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        let (current, current_start) = calendar::season_containing(now.date())?;
        let begin = if current == self.season {
            current_start
        } else if pointer.is_past() {
            self.previous(now)?
        } else {
            self.upcoming(now)?
        };
        self.season_span(begin)
    }
}

impl fmt::Display for RepeaterSeasonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-seasonname-{}", self.season.as_str())
    }
}
