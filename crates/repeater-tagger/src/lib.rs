//! # repeater-tagger
//!
//! Classifies single words of English or Polish text as calendar repeaters:
//! recurring temporal units such as "monday", "q3", "wieczorem", "14:30" or
//! "tydzień". Each match becomes a tag on the token; an anchored tag can then
//! compute concrete occurrences relative to a reference time.
//!
//! ## Modules
//!
//! - [`scan`]: the classifier (`classify` is pure, `scan` attaches tags)
//! - [`patterns`]: the seven family pattern tables
//! - [`symbol`]: symbols and families
//! - [`repeater`]: the `Repeater` trait and one concrete type per family and unit
//! - [`calendar`]: naive-date arithmetic used by the repeaters
//! - [`token`], [`span`], [`options`], [`error`]: supporting types
//!
//! ```
//! use repeater_tagger::{scan, ScanOptions, Token};
//!
//! let mut tokens = vec![Token::new("friday"), Token::new("evening")];
//! scan(&mut tokens, &ScanOptions::default()).unwrap();
//! assert_eq!(tokens[0].tags()[0].to_string(), "repeater-dayname-friday");
//! assert_eq!(tokens[1].tags()[0].to_string(), "repeater-dayportion-evening");
//! ```

pub mod calendar;
pub mod error;
pub mod options;
pub mod patterns;
pub mod repeater;
pub mod scan;
pub mod span;
pub mod symbol;
pub mod token;

pub use error::{Result, TagError};
pub use options::{ScanOptions, WeekStartDay};
pub use repeater::{build, build_unit, Anchor, Pointer, Repeater, RepeaterTime, Tick};
pub use scan::{classify, scan, scan_for};
pub use span::Span;
pub use symbol::{DayPortion, Family, QuarterName, Season, Symbol, Unit};
pub use token::Token;
