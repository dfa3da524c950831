//! Error types for almanac assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_engine::EngineError;
use panchanga_time::TimeError;

/// Errors from almanac computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AlmanacError {
    /// The request instant is malformed or out of range.
    InvalidInput(String),
    /// An iterative stage gave up.
    Convergence {
        /// Which stage: `"kepler"`, `"tithi"`, `"nakshatra"`, ...
        stage: &'static str,
        /// Iterations spent before giving up.
        iterations: u32,
        /// What went wrong, when it was more than hitting the cap.
        cause: Option<&'static str>,
    },
    /// The configuration could not be read, parsed or validated.
    Config(String),
}

impl Display for AlmanacError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Convergence {
                stage,
                iterations,
                cause,
            } => {
                write!(f, "{stage} did not converge after {iterations} iterations")?;
                match cause {
                    Some(cause) => write!(f, ": {cause}"),
                    None => Ok(()),
                }
            }
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for AlmanacError {}

impl From<TimeError> for AlmanacError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EngineError> for AlmanacError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::NoConvergence { solver, iterations } => Self::Convergence {
                stage: solver,
                iterations,
                cause: None,
            },
            EngineError::NonFinite(what) => Self::Convergence {
                stage: "engine",
                iterations: 0,
                cause: Some(what),
            },
            _ => Self::Convergence {
                stage: "engine",
                iterations: 0,
                cause: None,
            },
        }
    }
}

impl From<toml::de::Error> for AlmanacError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for AlmanacError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Config(e.to_string())
    }
}
