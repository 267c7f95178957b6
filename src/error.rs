//! Construction errors.
//!
//! Eagerly-detectable errors are recorded at the offending chain call (first
//! error wins) and surfaced by `compile()`; matcher rejections surface from
//! `compile()` directly. There is no recovery and no partial output.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Error {
    /// A composed repetition range with `max < min`.
    InvalidQuantifier { min: usize, max: usize },
    /// `of_group(n)` where group `n` has not been opened in this chain.
    UnresolvedGroupReference { reference: usize, available: usize },
    /// `reluctantly()` with no immediately preceding quantified atom.
    MisplacedReluctance,
    /// The external matcher rejected the assembled pattern text.
    MatcherConstruction(Arc<fancy_regex::Error>),
}

impl Error {
    pub(crate) fn matcher(err: fancy_regex::Error) -> Error {
        Error::MatcherConstruction(Arc::new(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidQuantifier { min, max } => {
                write!(f, "invalid quantifier range: max {max} is less than min {min}")
            }
            Error::UnresolvedGroupReference { reference, available } => {
                write!(
                    f,
                    "back-reference to group {reference}, but only {available} group(s) opened"
                )
            }
            Error::MisplacedReluctance => {
                write!(f, "reluctantly() must immediately follow a quantified atom")
            }
            Error::MatcherConstruction(err) => {
                write!(f, "pattern rejected by matcher: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MatcherConstruction(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        match (self, other) {
            (
                Error::InvalidQuantifier { min: a, max: b },
                Error::InvalidQuantifier { min: c, max: d },
            ) => (a, b) == (c, d),
            (
                Error::UnresolvedGroupReference { reference: a, available: b },
                Error::UnresolvedGroupReference { reference: c, available: d },
            ) => (a, b) == (c, d),
            (Error::MisplacedReluctance, Error::MisplacedReluctance) => true,
            (Error::MatcherConstruction(a), Error::MatcherConstruction(b)) => {
                a.to_string() == b.to_string()
            }
            _ => false,
        }
    }
}
