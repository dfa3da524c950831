//! Error types for civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-time construction and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A field is non-finite or outside its calendar range.
    InvalidInput(&'static str),
    /// An ISO-8601 string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid civil time: {msg}"),
            Self::Parse(msg) => write!(f, "cannot parse civil time: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<std::num::ParseFloatError> for TimeError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::Parse(e.to_string())
    }
}
