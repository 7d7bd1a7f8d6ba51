//! Error types for repeater-tagger operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("Anchor not set: start point must be set before calling #{0}")]
    AnchorNotSet(&'static str),

    #[error("Anchor already set: a repeater is anchored exactly once")]
    AnchorAlreadySet,

    #[error("Invalid time literal: {0}")]
    InvalidTime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TagError>;
