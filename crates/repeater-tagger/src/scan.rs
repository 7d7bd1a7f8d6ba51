//! The classifier: turns words into repeater tags.
//!
//! Each family has its own scanner, and every scanner runs for every word in
//! a fixed order (quarter names, season names, month names, day names, day
//! portions, literal times, generic units). Within a family the first
//! matching table entry wins, so a word yields at most one tag per family.

use crate::error::Result;
use crate::options::ScanOptions;
use crate::patterns::{self, PatternTable};
use crate::repeater::{
    self, Repeater, RepeaterDayName, RepeaterDayPortion, RepeaterMonthName, RepeaterQuarterName,
    RepeaterSeasonName, RepeaterTime,
};
use crate::symbol::Family;
use crate::token::Token;

/// Match `word` against `table` and build a repeater from the first
/// matching entry's symbol.
pub fn scan_for<S: Copy, R>(
    word: &str,
    table: &PatternTable<S>,
    build: impl FnOnce(S) -> R,
) -> Option<R> {
    table.find(word).map(build)
}

pub fn scan_for_quarter_names(word: &str, options: &ScanOptions) -> Option<RepeaterQuarterName> {
    scan_for(word, patterns::quarter_names(), |q| RepeaterQuarterName::new(q, options))
}

pub fn scan_for_season_names(word: &str, options: &ScanOptions) -> Option<RepeaterSeasonName> {
    scan_for(word, patterns::season_names(), |s| RepeaterSeasonName::new(s, options))
}

pub fn scan_for_month_names(word: &str, options: &ScanOptions) -> Option<RepeaterMonthName> {
    scan_for(word, patterns::month_names(), |m| RepeaterMonthName::new(m, options))
}

pub fn scan_for_day_names(word: &str, options: &ScanOptions) -> Option<RepeaterDayName> {
    scan_for(word, patterns::day_names(), |d| RepeaterDayName::new(d, options))
}

pub fn scan_for_day_portions(word: &str, options: &ScanOptions) -> Option<RepeaterDayPortion> {
    scan_for(word, patterns::day_portions(), |p| RepeaterDayPortion::new(p, options))
}

/// Clock-time literals carry no symbol; the word itself is parsed.
///
/// Words the literal pattern rejects yield `Ok(None)`, and every word it
/// accepts parses.
///
/// # Errors
///
/// Returns [`TagError::InvalidTime`](crate::error::TagError::InvalidTime)
/// only if [`RepeaterTime::parse`] rejects a word the literal pattern
/// accepted, which no word in the pattern's language does.
pub fn scan_for_times(word: &str, options: &ScanOptions) -> Result<Option<RepeaterTime>> {
    if !patterns::time_literal().is_match(word) {
        return Ok(None);
    }
    RepeaterTime::parse(word, options).map(Some)
}

pub fn scan_for_units(word: &str, options: &ScanOptions) -> Option<Box<dyn Repeater>> {
    scan_for(word, patterns::units(), |unit| repeater::build_unit(unit, options))
}

/// Every repeater `word` classifies as, in family scan order.
///
/// Pure: nothing is attached and no table is modified.
pub fn classify(word: &str, options: &ScanOptions) -> Result<Vec<Box<dyn Repeater>>> {
    let mut found: Vec<Box<dyn Repeater>> = Vec::new();
    for family in Family::SCAN_ORDER {
        let tag: Option<Box<dyn Repeater>> = match family {
            Family::QuarterName => scan_for_quarter_names(word, options).map(boxed),
            Family::SeasonName => scan_for_season_names(word, options).map(boxed),
            Family::MonthName => scan_for_month_names(word, options).map(boxed),
            Family::DayName => scan_for_day_names(word, options).map(boxed),
            Family::DayPortion => scan_for_day_portions(word, options).map(boxed),
            Family::Time => scan_for_times(word, options)?.map(boxed),
            Family::Unit => scan_for_units(word, options),
        };
        if let Some(tag) = tag {
            tracing::trace!(word, family = %family, tag = %tag, "Matched");
            found.push(tag);
        }
    }
    Ok(found)
}

fn boxed<R: Repeater + 'static>(repeater: R) -> Box<dyn Repeater> {
    Box::new(repeater)
}

/// Attach every matching repeater to each token.
///
/// Existing tags are kept and token order is untouched.
///
/// # Errors
///
/// Fails only where [`classify`] does, on the time scanner's error path.
/// No word reaches it, so in practice every token is tagged.
pub fn scan(tokens: &mut [Token], options: &ScanOptions) -> Result<()> {
    for token in tokens.iter_mut() {
        for tag in classify(&token.word, options)? {
            token.tag(tag);
        }
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────
