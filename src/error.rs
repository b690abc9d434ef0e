use std::num::ParseFloatError;

use thiserror::Error;

use crate::{Bound, Range};

/// Result type used throughout this crate
pub type Result<T, E = RangeError> = std::result::Result<T, E>;

/// Everything that can go wrong while building, merging or parsing ranges
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A range would start after it ends
    #[error("range start {start} is after end {end}")]
    InvalidRange { start: Bound, end: Bound },

    /// [`Range::merge`](Range::merge) was called on ranges that don't overlap
    #[error("range {left} does not overlap range {right}")]
    DisjointRange { left: Range, right: Range },

    #[error("error parsing range ({text}) with delimiter ({delimiter}): {reason}")]
    Parse {
        text: String,
        delimiter: String,
        #[source]
        reason: ParseFailure,
    },

    /// A bound was `NaN`, which has no place on the extended real line
    #[error("range bound is not a number")]
    NotANumber,
}

/// Why a piece of text could not be read as a range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error(transparent)]
    Number(#[from] ParseFloatError),

    #[error("NaN is not a valid bound")]
    NotANumber,

    #[error("expected two bounds, found {0}")]
    BoundCount(usize),

    #[error("the delimiter is empty")]
    EmptyDelimiter,
}

impl RangeError {
    pub(crate) fn parse(text: &str, delimiter: &str, reason: ParseFailure) -> Self {
        RangeError::Parse {
            text: text.to_owned(),
            delimiter: delimiter.to_owned(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn messages() {
        let err = RangeError::InvalidRange {
            start: Bound::Finite(10.0),
            end: Bound::Finite(1.0),
        };
        assert_eq!("range start 10 is after end 1", err.to_string());

        let err = RangeError::parse("3:1:1", ":", ParseFailure::BoundCount(3));
        assert_eq!(
            "error parsing range (3:1:1) with delimiter (:): expected two bounds, found 3",
            err.to_string()
        );
    }

    #[test]
    fn parse_error_has_source() {
        let cause = "x".parse::<f64>().unwrap_err();
        let err = RangeError::parse("x", ":", ParseFailure::from(cause.clone()));

        let source = err.source().expect("parse errors carry their cause");
        assert_eq!(cause.to_string(), source.to_string());
        assert!(RangeError::NotANumber.source().is_none());
    }
}
