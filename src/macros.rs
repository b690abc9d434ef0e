/// Create a new range collection from the given ranges, keeping their order
///
/// Examples:
///
/// ```rust
/// use float_rangeset::{r, range_collection};
///
/// let ranges = range_collection![r!(..= 4), r!(10 ..)];
/// assert_eq!(2, ranges.len());
///
/// let empty = range_collection![];
/// assert!(empty.is_merged());
/// ```
#[macro_export]
macro_rules! range_collection {
    [$($item:expr),* $(,)?] => {
        {
            let arr: [$crate::Range; 0 $(+ $crate::range_collection!(([one]) $item))*] = [$($item),*];
            $crate::RangeCollection::from(arr)
        }
    };

    (([one]) $_item:expr) => {
        1
    };
}

/// Create a new range from a range-like expression (`range` is an alias for `r`)
///
/// Both ends are inclusive, so only `..=` is accepted between two bounds. A single value
/// creates a range holding just that value.
///
/// **Note:** an expression in the left position must be wrapped in parenthesis, for rust not to
/// be confused
///
/// # Panics
///
/// Panics if the start is after the end or either bound is `NaN`, use
/// [`Range::new`](crate::Range::new) to handle those cases as an error.
///
/// # Examples
///
/// ```rust
/// use float_rangeset::{r, range, Range};
///
/// // Unbound range
/// let a: Range = r!(..);
/// assert!(a.is_unbound());
///
/// let a = r!(..= 4);
/// assert!(a.contains(4.0));
/// let a = r!(4 ..);
/// assert!(a.contains(1e300));
/// let a = range!(1 ..= 4.5);
/// assert!(!a.contains(5.0));
/// let a = r!(-2);
/// assert_eq!(vec![-2.0], a.values().collect::<Vec<_>>());
///
/// // Expression start
/// let a = r!((5 + 5) ..= 12);
/// assert!(a.contains(10.0));
/// assert!(!a.contains(9.0));
/// ```
#[macro_export]
macro_rules! r {
    (@new $l:expr, $r:expr) => {
        match $crate::Range::new($l, $r) {
            ::core::result::Result::Ok(range) => range,
            ::core::result::Result::Err(err) => ::core::panic!("invalid range literal: {}", err),
        }
    };

    (..) => {
        $crate::Range::unbound()
    };

    (..= $r:expr) => {
        $crate::r!(@new $crate::Bound::NegInfinity, $r)
    };

    ($l:literal ..) => {
        $crate::r!(@new $l, $crate::Bound::PosInfinity)
    };

    ($l:literal ..= $r:expr) => {
        $crate::r!(@new $l, $r)
    };

    (($l:expr) ..) => {
        $crate::r!(@new $l, $crate::Bound::PosInfinity)
    };

    (($l:expr) ..= $r:expr) => {
        $crate::r!(@new $l, $r)
    };

    ($v:expr) => {
        {
            let value = $v;
            $crate::r!(@new value, value)
        }
    };
}
