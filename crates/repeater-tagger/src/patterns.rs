//! Pattern tables for every classification family.
//!
//! The linguistic data lives in the `static` slices below as plain
//! `(pattern, symbol)` pairs so it can be reviewed on its own. Each slice is
//! compiled once, on first use, into a [`PatternTable`] whose regexes are
//! anchored at both ends and case-insensitive (Unicode-aware, so `TYDZIEŃ`
//! folds to `tydzień`).
//!
//! Order inside a slice is significant: the first entry that matches a word
//! wins.

use std::sync::OnceLock;

use chrono::{Month, Weekday};
use regex::{Regex, RegexBuilder};

use crate::symbol::{DayPortion, Family, QuarterName, Season, Unit};

// ── Family data ─────────────────────────────────────────────────────────────

pub static QUARTER_NAMES: &[(&str, QuarterName)] = &[
    ("q1", QuarterName::Q1),
    ("q2", QuarterName::Q2),
    ("q3", QuarterName::Q3),
    ("q4", QuarterName::Q4),
];

pub static SEASON_NAMES: &[(&str, Season)] = &[
    ("springs?|wiosn[aą]", Season::Spring),
    ("summers?|lato|latem", Season::Summer),
    ("autumns?|falls?|jesieni[aą]|na jesie[nń]", Season::Autumn),
    ("winters?|zim[ąa]|w zimie", Season::Winter),
];

pub static MONTH_NAMES: &[(&str, Month)] = &[
    (r"jan[:.]?(uary)?|stycze[nń]|stycznia", Month::January),
    (r"feb[:.]?(ruary)?|luty|lutego", Month::February),
    (r"mar[:.]?(ch)?|marzec|marca", Month::March),
    (r"apr[:.]?(il)?|kwiecie[nń]|kwietnia", Month::April),
    (r"may|maja?", Month::May),
    (r"jun[:.]?e?|czerwiec|czerwca", Month::June),
    (r"jul[:.]?y?|lipiec|lipca", Month::July),
    (r"aug[:.]?(ust)?|sierpie[nń]|sierpnia", Month::August),
    (r"sep[:.]?(t[:.]?|tember)?|wrzesie[nń]|wrze[sś]nia", Month::September),
    (r"oct[:.]?(ober)?|pa[zź]dziernika?", Month::October),
    (r"nov[:.]?(ember)?|listopada?", Month::November),
    (r"dec[:.]?(ember)?|grudzie[nń]|grudnia", Month::December),
];

pub static DAY_NAMES: &[(&str, Weekday)] = &[
    ("m[ou]n(day)?|poniedzia[lł]ek|pon|pn", Weekday::Mon),
    ("t(ue|eu|oo|u)s?(day)?|wtorek|wto?", Weekday::Tue),
    ("we(d|dnes|dnds|nds|nns)(day)?|[śs]r(oda)?", Weekday::Wed),
    ("th(u|ur|urs|ers)(day)?|czw(artek)?", Weekday::Thu),
    ("fr[iy](day)?|pi[aą]tek|pt|pi[aą]", Weekday::Fri),
    ("sat(t?[ue]rday)?|sobota|sb|sob", Weekday::Sat),
    ("su[nm](day)?|niedziela|nd|niedz|ndz", Weekday::Sun),
];

pub static DAY_PORTIONS: &[(&str, DayPortion)] = &[
    ("ams?|przed po[lł]udniem", DayPortion::Am),
    ("pms?|po po[lł]udniu", DayPortion::Pm),
    ("mornings?|rano|rankiem", DayPortion::Morning),
    ("afternoons?|popo[lł]udnie|popo[lł]udniami", DayPortion::Afternoon),
    ("evenings?|wiecz[oó]r|wieczorem|wieczorami", DayPortion::Evening),
    ("nights?|nites?|noc|noc[ąa]|nocami|w nocy", DayPortion::Night),
];

/// Clock-time literal: hours, optional minutes, optional seconds with up to
/// six fractional digits.
pub static TIME_LITERAL: &str = r"[0-9]{1,2}(:?[0-9]{1,2})?([.:]?[0-9]{1,2}([.:][0-9]{1,6})?)?";

/// Abbreviations are listed ahead of the full words for hour, minute and
/// second.
pub static UNITS: &[(&str, Unit)] = &[
    ("years?|rok|roku|lata|lat", Unit::Year),
    ("q|quarters?|kwarta[lł]", Unit::Quarter),
    ("seasons?", Unit::Season),
    ("months?|miesi[eęaą]c[yeua]?", Unit::Month),
    ("fortnights?", Unit::Fortnight),
    ("weeks?|tydzie[nń]|tygodni[eu]?", Unit::Week),
    ("weekends?", Unit::Weekend),
    ("(week|business)days?", Unit::Weekday),
    ("days?|dzie[nń]|dni", Unit::Day),
    (r"hrs?|godz\.?", Unit::Hour),
    ("hours?|godzin[eęay]?", Unit::Hour),
    ("mins?", Unit::Minute),
    ("minutes?|minut[ęay]?", Unit::Minute),
    ("secs?|sek", Unit::Second),
    ("seconds?|sekund[ęya]?", Unit::Second),
];

// ── Compiled tables ─────────────────────────────────────────────────────────

/// An ordered, compiled family table.
#[derive(Debug)]
pub struct PatternTable<S> {
    family: Family,
    entries: Vec<(Regex, S)>,
}

impl<S: Copy> PatternTable<S> {
    /// Compile a family's `(pattern, symbol)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex. Tables are static data, so
    /// this is a build defect rather than bad input.
    pub fn compile(family: Family, source: &[(&str, S)]) -> Self {
        let entries: Vec<(Regex, S)> = source
            .iter()
            .map(|&(pattern, symbol)| (anchored(family, pattern), symbol))
            .collect();
        tracing::debug!(family = %family, entries = entries.len(), "Compiled pattern table");
        Self { family, entries }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The symbol of the first entry whose pattern claims the whole word.
    pub fn find(&self, word: &str) -> Option<S> {
        self.position(word).map(|(_, symbol)| symbol)
    }

    /// Like [`find`](Self::find), also reporting which entry matched.
    pub fn position(&self, word: &str) -> Option<(usize, S)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, (regex, _))| regex.is_match(word))
            .map(|(index, &(_, symbol))| (index, symbol))
    }
}

fn anchored(family: Family, pattern: &str) -> Regex {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid {family} pattern {pattern:?}: {e}"))
}

pub fn quarter_names() -> &'static PatternTable<QuarterName> {
    static TABLE: OnceLock<PatternTable<QuarterName>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::QuarterName, QUARTER_NAMES))
}

pub fn season_names() -> &'static PatternTable<Season> {
    static TABLE: OnceLock<PatternTable<Season>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::SeasonName, SEASON_NAMES))
}

pub fn month_names() -> &'static PatternTable<Month> {
    static TABLE: OnceLock<PatternTable<Month>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::MonthName, MONTH_NAMES))
}

pub fn day_names() -> &'static PatternTable<Weekday> {
    static TABLE: OnceLock<PatternTable<Weekday>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::DayName, DAY_NAMES))
}

pub fn day_portions() -> &'static PatternTable<DayPortion> {
    static TABLE: OnceLock<PatternTable<DayPortion>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::DayPortion, DAY_PORTIONS))
}

pub fn units() -> &'static PatternTable<Unit> {
    static TABLE: OnceLock<PatternTable<Unit>> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable::compile(Family::Unit, UNITS))
}

pub fn time_literal() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| anchored(Family::Time, TIME_LITERAL))
}

/// [`TIME_LITERAL`] with named groups for the numeric fields.
pub fn time_parts() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        anchored(
            Family::Time,
            r"(?P<h>[0-9]{1,2})(?:[.:]?(?P<m>[0-9]{1,2}))?(?:[.:]?(?P<s>[0-9]{1,2})(?:[.:](?P<f>[0-9]{1,6}))?)?",
        )
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
