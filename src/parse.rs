use std::str::FromStr;

use crate::error::{ParseFailure, RangeError, Result};
use crate::{Bound, Range, RangeCollection};

/// The delimiter used by the [`FromStr`](FromStr) implementations
pub const DEFAULT_DELIMITER: &str = ":";

/// Parse a range from text, with `delimiter` separating the two bounds
///
/// Assuming `:` as delimiter the accepted forms are
///
/// - `:` an unbounded range
/// - `:4` a range unbounded below
/// - `3:` a range unbounded above
/// - `3:4` a bounded range
/// - `3` a range holding a single value
///
/// # Example
///
/// ```rust
/// use float_rangeset::{parse_range, Bound, Range};
///
/// assert_eq!(Range::new(Bound::NegInfinity, 4.0)?, parse_range(":4", ":")?);
/// assert_eq!(Range::new(3.0, 4.5)?, parse_range("3..4.5", "..")?);
/// assert!(parse_range("3:1:1", ":").is_err());
/// # Ok::<(), float_rangeset::RangeError>(())
/// ```
pub fn parse_range(text: &str, delimiter: &str) -> Result<Range> {
    if delimiter.is_empty() {
        return Err(failed(text, delimiter, ParseFailure::EmptyDelimiter));
    }

    if text == delimiter {
        return Ok(Range::unbound());
    }

    if let Some(end) = text.strip_prefix(delimiter) {
        let end = parse_bound(end).map_err(|reason| failed(text, delimiter, reason))?;
        return Range::new(Bound::NegInfinity, end);
    }

    if let Some(start) = text.strip_suffix(delimiter) {
        let start = parse_bound(start).map_err(|reason| failed(text, delimiter, reason))?;
        return Range::new(start, Bound::PosInfinity);
    }

    match text.split_once(delimiter) {
        Some((_, rest)) if rest.contains(delimiter) => {
            let count = text.split(delimiter).count();
            Err(failed(text, delimiter, ParseFailure::BoundCount(count)))
        }
        Some((start, end)) => {
            let start = parse_bound(start).map_err(|reason| failed(text, delimiter, reason))?;
            let end = parse_bound(end).map_err(|reason| failed(text, delimiter, reason))?;
            Range::new(start, end)
        }
        None => {
            let value = parse_bound(text).map_err(|reason| failed(text, delimiter, reason))?;
            Range::new(value, value)
        }
    }
}

/// Parse every text in `texts` with [`parse_range`](parse_range)
///
/// Stops at the first text that fails to parse and returns its error.
///
/// # Example
///
/// ```rust
/// use float_rangeset::parse_range_collection;
///
/// let collection = parse_range_collection(["1:5", "7:", "4:6"], ":")?;
/// assert_eq!("1:6,7:", collection.merge().to_string());
///
/// assert!(parse_range_collection(["1:5", "x"], ":").is_err());
/// # Ok::<(), float_rangeset::RangeError>(())
/// ```
pub fn parse_range_collection<I, S>(texts: I, delimiter: &str) -> Result<RangeCollection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| parse_range(text.as_ref(), delimiter))
        .collect()
}

fn parse_bound(token: &str) -> Result<Bound, ParseFailure> {
    let value: f64 = token.parse()?;

    if value.is_nan() {
        return Err(ParseFailure::NotANumber);
    }

    Ok(Bound::from(value))
}

fn failed(text: &str, delimiter: &str, reason: ParseFailure) -> RangeError {
    log::debug!("failed to parse range {:?} with delimiter {:?}: {}", text, delimiter, reason);
    RangeError::parse(text, delimiter, reason)
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_range(s, DEFAULT_DELIMITER)
    }
}

/// Reads a comma separated list of ranges, the empty string is the empty collection
impl FromStr for RangeCollection {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(RangeCollection::new());
        }

        parse_range_collection(s.split(','), DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: impl Into<Bound>, end: impl Into<Bound>) -> Range {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn full_range() {
        assert_eq!(range(3, 4), parse_range("3:4", ":").unwrap());
        assert_eq!(range(-3.5, 1e3), parse_range("-3.5:1e3", ":").unwrap());
    }

    #[test]
    fn open_ranges() {
        assert_eq!(range(Bound::NegInfinity, 4), parse_range(":4", ":").unwrap());
        assert_eq!(range(3, Bound::PosInfinity), parse_range("3:", ":").unwrap());
        assert_eq!(Range::unbound(), parse_range(":", ":").unwrap());
    }

    #[test]
    fn singleton_range() {
        assert_eq!(range(3, 3), parse_range("3", ":").unwrap());
    }

    #[test]
    fn multi_character_delimiter() {
        assert_eq!(Range::unbound(), parse_range("..", "..").unwrap());
        assert_eq!(range(Bound::NegInfinity, 4), parse_range("..4", "..").unwrap());
        assert_eq!(range(3, Bound::PosInfinity), parse_range("3..", "..").unwrap());
        assert_eq!(range(3, 4), parse_range("3..4", "..").unwrap());
        assert_eq!(range(3, 3), parse_range("3", "..").unwrap());
    }

    #[test]
    fn too_many_bounds() {
        let err = parse_range("3:1:1", ":").unwrap_err();
        assert_eq!(RangeError::parse("3:1:1", ":", ParseFailure::BoundCount(3)), err);

        assert!(matches!(
            parse_range("3::4", ":"),
            Err(RangeError::Parse { reason: ParseFailure::BoundCount(3), .. })
        ));
    }

    #[test]
    fn malformed_numbers() {
        for text in ["", "a", "a:4", "3:b", ":x", "x:", "1 : 2", "3.4.5"] {
            match parse_range(text, ":") {
                Err(RangeError::Parse { text: t, delimiter, reason }) => {
                    assert_eq!(text, t);
                    assert_eq!(":", delimiter);
                    assert!(matches!(reason, ParseFailure::Number(_)), "{:?}", reason);
                }
                other => panic!("expected a parse error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(
            parse_range("NaN:4", ":"),
            Err(RangeError::Parse { reason: ParseFailure::NotANumber, .. })
        ));
    }

    #[test]
    fn empty_delimiter() {
        assert!(matches!(
            parse_range("3", ""),
            Err(RangeError::Parse { reason: ParseFailure::EmptyDelimiter, .. })
        ));
    }

    #[test]
    fn start_after_end() {
        assert_eq!(
            Err(RangeError::InvalidRange {
                start: Bound::Finite(4.0),
                end: Bound::Finite(3.0),
            }),
            parse_range("4:3", ":")
        );
        assert!(matches!(parse_range("inf", ":"), Ok(r) if r.start().is_pos_infinity()));
        assert!(matches!(parse_range(":-inf", ":"), Ok(r) if r.end().is_neg_infinity()));
    }

    #[test]
    fn collection() {
        let empty: [&str; 0] = [];
        assert!(parse_range_collection(empty, ":").unwrap().is_empty());

        let collection = parse_range_collection(vec!["1:2".to_string(), "4:".to_string()], ":").unwrap();
        assert_eq!(
            RangeCollection::from(vec![range(1, 2), range(4, Bound::PosInfinity)]),
            collection
        );
    }

    #[test]
    fn collection_fails_on_first_error() {
        let err = parse_range_collection(["1:2", "5:4", "x"], ":").unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn from_str() {
        assert_eq!(range(3, 4), "3:4".parse::<Range>().unwrap());

        let collection: RangeCollection = "1:5,7:,4:6".parse().unwrap();
        assert_eq!(3, collection.len());

        let collection: RangeCollection = "".parse().unwrap();
        assert!(collection.is_empty());

        assert!("1:5,,2".parse::<RangeCollection>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for text in [":", ":4", "3:", "3:4", "3", "-2.5:-1", ":-inf", "inf:"] {
            let parsed: Range = text.parse().unwrap();
            assert_eq!(parsed, parsed.to_string().parse::<Range>().unwrap());
        }
    }
}
