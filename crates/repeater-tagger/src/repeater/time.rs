use std::fmt;

use chrono::{Duration, NaiveDateTime};

use super::{Anchor, Pointer, Repeater, REPEATER_LABEL};
use crate::calendar::{self, DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS};
use crate::error::{Result, TagError};
use crate::options::ScanOptions;
use crate::patterns;
use crate::span::Span;
use crate::symbol::{Family, Symbol};

/// Offset of a clock time from midnight.
///
/// An ambiguous tick may be read as either a morning or an evening time
/// ("3" could be 03:00 or 15:00), so it repeats every twelve hours instead
/// of every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    offset: Duration,
    ambiguous: bool,
}

impl Tick {
    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }

    fn period(&self) -> Duration {
        if self.ambiguous {
            Duration::seconds(DAY_SECONDS / 2)
        } else {
            Duration::seconds(DAY_SECONDS)
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.offset.num_seconds();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            total / HOUR_SECONDS,
            (total % HOUR_SECONDS) / MINUTE_SECONDS,
            total % MINUTE_SECONDS
        )?;
        let nanos = (self.offset - Duration::seconds(total)).num_nanoseconds().unwrap_or(0);
        if nanos > 0 {
            write!(f, ".{:06}", nanos / 1_000)?;
        }
        Ok(())
    }
}

/// A literal clock time: "14:30", "1430", "9", "14:30:00.123456".
#[derive(Debug, Clone)]
pub struct RepeaterTime {
    word: String,
    tick: Tick,
    anchor: Anchor,
    options: ScanOptions,
    current: Option<NaiveDateTime>,
}

impl RepeaterTime {
    /// Parse a clock-time literal.
    ///
    /// Words made only of digits are split from the right into two-digit
    /// groups, so `"130"` reads as 1:30 and `"143000"` as 14:30:00.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidTime`] if `word` is not a clock-time literal.
    pub fn parse(word: &str, options: &ScanOptions) -> Result<Self> {
        let invalid = || TagError::InvalidTime(word.to_string());
        if !patterns::time_literal().is_match(word) {
            return Err(invalid());
        }
        let (fields, fraction) = if word.bytes().all(|b| b.is_ascii_digit()) {
            (split_digits(word), None)
        } else {
            let caps = patterns::time_parts().captures(word).ok_or_else(invalid)?;
            let fields = ["h", "m", "s"]
                .iter()
                .filter_map(|name| caps.name(name).map(|m| m.as_str()))
                .collect();
            (fields, caps.name("f").map(|m| m.as_str()))
        };
        let tick = tick_from_fields(&fields, fraction, options.hours24).ok_or_else(invalid)?;
        Ok(Self {
            word: word.to_string(),
            tick,
            anchor: Anchor::default(),
            options: options.clone(),
            current: None,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// First candidate at or past the anchor in the given direction.
    fn first_occurrence(&self, now: NaiveDateTime, forward: bool) -> Result<NaiveDateTime> {
        let half_day = Duration::seconds(DAY_SECONDS / 2);
        let day = Duration::seconds(DAY_SECONDS);
        let midnight = calendar::start_of_day(now);
        let offset = self.tick.offset;
        let from = |base: NaiveDateTime, extra: Duration| calendar::shift(base, extra + offset);
        let candidates = if forward {
            let tomorrow = calendar::shift(midnight, day)?;
            if self.tick.ambiguous {
                vec![
                    from(midnight, Duration::zero())?,
                    from(midnight, half_day)?,
                    from(tomorrow, Duration::zero())?,
                ]
            } else {
                vec![from(midnight, Duration::zero())?, from(tomorrow, Duration::zero())?]
            }
        } else {
            let yesterday = calendar::shift(midnight, -day)?;
            if self.tick.ambiguous {
                vec![
                    from(midnight, half_day)?,
                    from(midnight, Duration::zero())?,
                    from(yesterday, half_day)?,
                ]
            } else {
                vec![from(midnight, Duration::zero())?, from(yesterday, Duration::zero())?]
            }
        };
        candidates
            .into_iter()
            .find(|&t| if forward { t > now } else { t < now })
            .ok_or_else(|| TagError::OutOfRange(format!("no occurrence of {} near {now}", self.tick)))
    }
}

/// Split an all-digit word into hour, minute and second groups, taking two
/// digits at a time from the right.
fn split_digits(word: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = word;
    while rest.len() > 2 && groups.len() < 2 {
        let (head, tail) = rest.split_at(rest.len() - 2);
        groups.push(tail);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    groups
}

fn tick_from_fields(fields: &[&str], fraction: Option<&str>, hours24: Option<bool>) -> Option<Tick> {
    let hour_text = *fields.first()?;
    let mut hours: i64 = hour_text.parse().ok()?;
    let minutes: i64 = match fields.get(1) {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    let seconds: i64 = match fields.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    let nanos: i64 = match fraction {
        Some(fraction) => {
            let value: i64 = fraction.parse().ok()?;
            value * 10_i64.pow(9 - fraction.len() as u32)
        }
        None => 0,
    };

    let mut ambiguous = false;
    if hours24 != Some(true) {
        ambiguous = (hour_text.len() == 1 && hours > 0)
            || (10..=12).contains(&hours)
            || (hours24 == Some(false) && hours > 0);
        if hours == 12 && ambiguous {
            hours = 0;
        }
    }

    let offset = Duration::seconds(hours * HOUR_SECONDS + minutes * MINUTE_SECONDS + seconds)
        + Duration::nanoseconds(nanos);
    Some(Tick { offset, ambiguous })
}

impl Repeater for RepeaterTime {
    fn family(&self) -> Family {
        Family::Time
    }

    fn symbol(&self) -> Option<Symbol> {
        None
    }

    fn options(&self) -> &ScanOptions {
        &self.options
    }

    fn width(&self) -> i64 {
        1
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
        let at = match self.current {
            None => self.first_occurrence(now, forward)?,
            Some(current) => {
                let period = self.tick.period();
                calendar::shift(current, if forward { period } else { -period })?
            }
        };
        self.current = Some(at);
        Ok(Span::new(at, calendar::shift(at, Duration::seconds(1))?))
    }

    fn this(&mut self, pointer: Pointer) -> Result<Span> {
        let now = self.anchor.require("this")?;
        let at = self.first_occurrence(now, !pointer.is_past())?;
        Ok(Span::new(at, calendar::shift(at, Duration::seconds(1))?))
    }
}

impl fmt::Display for RepeaterTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPEATER_LABEL}-time-{}", self.tick)
    }
}
