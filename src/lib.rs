//! Ranges of floats with optionally unbounded ends, and collections of them
//!
//! A [`Range`](Range) is a closed interval `[start, end]` on the extended real line, either end
//! can be unbounded. Ranges can be parsed from text like `3:4`, `:4` or `3:`, merged when they
//! overlap, and the whole numbers inside them can be enumerated.
//!
//! A [`RangeCollection`](RangeCollection) is an ordered list of ranges, which can be
//! [merged](RangeCollection::merge) into its canonical form: sorted, with no two neighbours
//! overlapping.
//!
//! ```rust
//! use float_rangeset::{parse_range_collection, r, range_collection};
//!
//! let collection = parse_range_collection(["1:5", "7:", "4:6"], ":")?;
//! assert_eq!(range_collection![r!(1 ..= 6), r!(7 ..)], collection.merge());
//! assert_eq!(vec![2.0, 3.0, 4.0], collection.values_in(&r!(2 ..= 4)));
//! # Ok::<(), float_rangeset::RangeError>(())
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

mod bound;
mod conversions;
mod error;
mod internal;
mod macros;
mod parse;
#[cfg(feature = "serde")]
mod serialization;
mod values;

use crate::internal::LinearRangeMerger;

pub use crate::bound::Bound;
pub use crate::error::{ParseFailure, RangeError, Result};
pub use crate::parse::{parse_range, parse_range_collection, DEFAULT_DELIMITER};
pub use crate::r as range;
pub use crate::values::Values;

/// The list type used for storing multiple ranges in a collection
///
/// Disable the `smallvec` feature to use the std [Vec](Vec)
#[cfg(feature = "smallvec")]
pub type RangeVec<T> = smallvec::SmallVec<[T; 5]>;

/// The list type used for storing multiple ranges in a collection
///
/// Enable the `smallvec` feature to use the smallvec's [`SmallVec`](smallvec::SmallVec)
#[cfg(not(feature = "smallvec"))]
pub type RangeVec<T> = Vec<T>;

/// A closed range between `start` and `end`, both ends are included
///
/// A range always has `start <= end`, and its bounds are never `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    start: Bound,
    end: Bound,
}

impl Range {
    /// Create a new range from the 2 given bounds
    ///
    /// Fails if `start` is after `end`, or either of them is `NaN`. Float infinities are accepted
    /// in place of the [`Bound`](Bound) sentinels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::{Bound, Range, RangeError};
    ///
    /// let range = Range::new(Bound::NegInfinity, 4.0)?;
    /// assert_eq!(Range::new(f64::NEG_INFINITY, 4)?, range);
    ///
    /// assert!(matches!(Range::new(10, 1), Err(RangeError::InvalidRange { .. })));
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn new(start: impl Into<Bound>, end: impl Into<Bound>) -> Result<Range> {
        let (Some(start), Some(end)) = (start.into().normalized(), end.into().normalized()) else {
            return Err(RangeError::NotANumber);
        };

        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }

        Ok(Range { start, end })
    }

    /// Create a new infinite range
    #[inline]
    pub fn unbound() -> Range {
        Range {
            start: Bound::NegInfinity,
            end: Bound::PosInfinity,
        }
    }

    /// Create a range holding only `value`
    pub fn singleton(value: impl Into<Bound>) -> Result<Range> {
        let value = value.into();
        Range::new(value, value)
    }

    #[inline]
    pub fn start(&self) -> Bound {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Bound {
        self.end
    }

    /// Returns the internal `start` and `end` boundaries
    #[inline]
    pub fn into_inner(self) -> (Bound, Bound) {
        (self.start, self.end)
    }

    /// Returns `true` if this range is unbounded on both sides
    #[inline]
    pub fn is_unbound(&self) -> bool {
        self.start.is_neg_infinity() && self.end.is_pos_infinity()
    }

    /// Returns `true` if `value` falls within this range, both ends included
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start.to_f64() && value <= self.end.to_f64()
    }

    /// Returns `true` if this range can be merged with `other`
    ///
    /// Only the end of this range is checked against the start of `other`, a range lying
    /// completely below this one still counts as overlapping. Merging and the
    /// [restricted enumeration](Range::values_in) are built on this test. Use
    /// [`intersects`](Range::intersects) to check whether two ranges share a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::r;
    ///
    /// assert!(r!(2 ..= 5).overlaps(&r!(3 ..= 6)));
    /// assert!(!r!(2 ..= 5).overlaps(&r!(6 ..= 10)));
    /// assert!(r!(5 ..= 10).overlaps(&r!(-100 ..= -50)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.end >= other.start
    }

    /// Returns `true` if this range and `other` share at least one value
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::r;
    ///
    /// assert!(r!(2 ..= 5).intersects(&r!(5 ..)));
    /// assert!(!r!(5 ..= 10).intersects(&r!(-100 ..= -50)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Merge this range with `other` into a new range spanning both
    ///
    /// Fails if the ranges don't [overlap](Range::overlaps).
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::{r, RangeError};
    ///
    /// assert_eq!(r!(1 ..= 7), r!(1 ..= 5).merge(&r!(3 ..= 7))?);
    /// assert!(matches!(r!(1 ..= 4).merge(&r!(5 ..= 7)), Err(RangeError::DisjointRange { .. })));
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn merge(&self, other: &Range) -> Result<Range> {
        if !self.overlaps(other) {
            return Err(RangeError::DisjointRange {
                left: *self,
                right: *other,
            });
        }

        Ok(self.hull(other))
    }

    /// The smallest range covering both ranges
    #[inline]
    pub(crate) fn hull(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns an iterator over the values in this range
    ///
    /// See [`Values`](Values) for what gets yielded for unbounded ranges.
    pub fn values(&self) -> Values {
        match (self.start, self.end) {
            (Bound::NegInfinity, end) => Values::endpoints(f64::NEG_INFINITY, end.to_f64()),
            (start, Bound::PosInfinity) => Values::endpoints(start.to_f64(), f64::INFINITY),
            (start, end) => Values::steps(start.to_f64(), end.to_f64()),
        }
    }

    /// Call `f` with every value of this range
    pub fn each_value<F: FnMut(f64)>(&self, f: F) {
        self.values().for_each(f)
    }

    /// Returns `f` applied to every value of this range
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::r;
    ///
    /// assert_eq!(vec![2.0, 4.0, 6.0], r!(1 ..= 3).value_map(|v| v * 2.0));
    /// assert_eq!(vec![f64::NEG_INFINITY, 6.0], r!(..= 3).value_map(|v| v * 2.0));
    /// ```
    pub fn value_map<T, F: FnMut(f64) -> T>(&self, f: F) -> Vec<T> {
        self.values().map(f).collect()
    }

    /// Returns an iterator over the values in this range that also lie within `other`
    ///
    /// Nothing is yielded if the ranges don't [overlap](Range::overlaps). Otherwise the walk
    /// covers `[max(starts), min(ends)]`, where an unbounded side of that window is yielded as
    /// its float infinity, the same way [`values`](Range::values) does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::r;
    ///
    /// let values: Vec<_> = r!(..= 4).values_in(&r!(2 ..= 5)).collect();
    /// assert_eq!(vec![2.0, 3.0, 4.0], values);
    ///
    /// let values: Vec<_> = r!(4 ..).values_in(&r!(..= 3)).collect();
    /// assert!(values.is_empty());
    /// ```
    pub fn values_in(&self, other: &Range) -> Values {
        if !self.overlaps(other) {
            return Values::empty();
        }

        if other.is_unbound() {
            return self.values();
        }

        match (other.start, other.end) {
            (Bound::NegInfinity, other_end) => {
                let last = other_end.min(self.end).to_f64();

                match self.start {
                    Bound::NegInfinity => Values::endpoints(f64::NEG_INFINITY, last),
                    start => Values::steps(start.to_f64(), last),
                }
            }
            (other_start, Bound::PosInfinity) => {
                let first = other_start.max(self.start).to_f64();

                match self.end {
                    Bound::PosInfinity => Values::endpoints(first, f64::INFINITY),
                    end => Values::steps(first, end.to_f64()),
                }
            }
            (other_start, other_end) => Values::steps(
                other_start.max(self.start).to_f64(),
                other_end.min(self.end).to_f64(),
            ),
        }
    }

    /// Call `f` with every value of this range that also lies within `other`
    pub fn each_value_in<F: FnMut(f64)>(&self, other: &Range, f: F) {
        self.values_in(other).for_each(f)
    }

    /// Returns `f` applied to every value of this range that also lies within `other`
    pub fn map_value_in<T, F: FnMut(f64) -> T>(&self, other: &Range, f: F) -> Vec<T> {
        self.values_in(other).map(f).collect()
    }
}

// Bounds are normalized and never NaN, which makes equality total
impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.to_f64().to_bits().hash(state);
        self.end.to_f64().to_bits().hash(state);
    }
}

impl PartialOrd for Range {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by `start`, then by `end`
impl Ord for Range {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then_with(|| self.end.total_cmp(&other.end))
    }
}

/// Writes the range in the form [`parse_range`](parse_range) reads with the `:` delimiter
impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (Bound::NegInfinity, Bound::PosInfinity) => f.write_str(DEFAULT_DELIMITER),
            (Bound::NegInfinity, end) => write!(f, "{}{}", DEFAULT_DELIMITER, end),
            (start, Bound::PosInfinity) => write!(f, "{}{}", start, DEFAULT_DELIMITER),
            (start, end) if start == end => write!(f, "{}", start),
            (start, end) => write!(f, "{}{}{}", start, DEFAULT_DELIMITER, end),
        }
    }
}

/// An ordered list of ranges
///
/// The ranges are kept in the order they were added until the collection gets
/// [merged](RangeCollection::merge). Equality is positional, two collections holding the same
/// ranges in a different order are not equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeCollection {
    pub(crate) items: RangeVec<Range>,
}

impl RangeCollection {
    /// Create a new, empty collection
    #[cfg(feature = "smallvec")]
    pub const fn new() -> Self {
        RangeCollection {
            items: RangeVec::new_const(),
        }
    }

    /// Create a new, empty collection
    #[cfg(not(feature = "smallvec"))]
    pub const fn new() -> Self {
        RangeCollection { items: Vec::new() }
    }

    /// Create a new collection with given capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        RangeCollection {
            items: RangeVec::with_capacity(capacity),
        }
    }

    /// Append a range, this does not merge
    #[inline]
    pub fn push(&mut self, range: Range) {
        self.items.push(range);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator with all ranges inside of this collection
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Range] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Range> {
        self.items.into_iter().collect()
    }

    /// Check if `value` falls within any of the ranges
    pub fn contains(&self, value: f64) -> bool {
        self.items.iter().any(|range| range.contains(value))
    }

    /// Returns `true` if the ranges are sorted and no two neighbours overlap
    ///
    /// Empty collections and collections with a single range are always merged.
    pub fn is_merged(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| pair[0] <= pair[1] && !pair[0].overlaps(&pair[1]))
    }

    /// Sort the ranges by `start`, ranges with the same start by `end`
    pub fn sort(&mut self) {
        self.items.sort();
    }

    /// Merge the ranges so that they are sorted and non-overlapping
    ///
    /// The result covers the same values as this collection, and does not depend on the order
    /// of the ranges in it. Merging a merged collection gives the same collection back.
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::{r, range_collection};
    ///
    /// let collection = range_collection![r!(1 ..= 5), r!(7 ..), r!(4 ..= 6)];
    /// assert_eq!(range_collection![r!(1 ..= 6), r!(7 ..)], collection.merge());
    ///
    /// let collection = range_collection![r!(1 ..= 2), r!(1 ..)];
    /// assert_eq!(range_collection![r!(1 ..)], collection.merge());
    /// ```
    pub fn merge(&self) -> RangeCollection {
        if self.is_empty() || self.is_merged() {
            return self.clone();
        }

        let mut sorted = self.items.clone();
        sorted.sort();

        let mut merger = LinearRangeMerger::with_capacity(sorted.len());
        for range in sorted {
            if merger.add(range) {
                break;
            }
        }

        let merged = merger.finalize();
        log::trace!("merged {} ranges into {}", self.len(), merged.len());
        merged
    }

    /// Replace this collection with its [merged](RangeCollection::merge) form
    pub fn merge_in_place(&mut self) {
        if !self.is_merged() {
            *self = self.merge();
        }
    }

    /// All values of the ranges in this collection, in order
    ///
    /// The collection is merged first if it isn't already, so no value is produced twice.
    pub fn values(&self) -> Vec<f64> {
        self.merged().iter().flat_map(Range::values).collect()
    }

    /// All values of the ranges in this collection that also lie within `range`
    pub fn values_in(&self, range: &Range) -> Vec<f64> {
        self.merged()
            .iter()
            .flat_map(|item| item.values_in(range))
            .collect()
    }

    fn merged(&self) -> Cow<'_, RangeCollection> {
        if self.is_merged() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.merge())
        }
    }
}

/// Writes the ranges separated by commas, the form read by
/// [`RangeCollection::from_str`](std::str::FromStr)
impl Display for RangeCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, range) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }

            write!(f, "{}", range)?;
        }

        Ok(())
    }
}
