//! Error types for the position engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the position engine and its iterative solvers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// An iterative solver hit its iteration cap.
    NoConvergence {
        solver: &'static str,
        iterations: u32,
    },
    /// A non-finite value entered or left a computation.
    NonFinite(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoConvergence { solver, iterations } => {
                write!(f, "{solver} did not converge after {iterations} iterations")
            }
            Self::NonFinite(what) => write!(f, "non-finite value in {what}"),
        }
    }
}

impl Error for EngineError {}
