use std::iter::FusedIterator;

/// Beyond this magnitude stepping by one is no longer exact for every float
const EXACT_STEP_LIMIT: f64 = 4_503_599_627_370_496.0;

/// An iterator over the values of a [`Range`](crate::Range)
///
/// A finite range yields its start and every value one step above it, up to and including its
/// end. A range with an unbounded side yields exactly two values, its start and its end, with the
/// unbounded side given as a float infinity.
///
/// # Example
///
/// ```rust
/// use float_rangeset::Range;
///
/// let range = Range::new(1.0, 3.0)?;
/// assert_eq!(vec![1.0, 2.0, 3.0], range.values().collect::<Vec<_>>());
///
/// let range = Range::new(1.0, f64::INFINITY)?;
/// assert_eq!(vec![1.0, f64::INFINITY], range.values().collect::<Vec<_>>());
/// # Ok::<(), float_rangeset::RangeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Values {
    walk: Walk,
}

#[derive(Debug, Clone, Copy)]
enum Walk {
    Pair(f64, f64),
    Single(f64),
    Steps { current: f64, last: f64 },
    Done,
}

impl Values {
    /// Yields `first` and then `second`
    pub(crate) fn endpoints(first: f64, second: f64) -> Self {
        Values {
            walk: Walk::Pair(first, second),
        }
    }

    /// Yields `first`, `first + 1`, ... while the value stays at or below `last`
    pub(crate) fn steps(first: f64, last: f64) -> Self {
        Values {
            walk: Walk::Steps {
                current: first,
                last,
            },
        }
    }

    pub(crate) fn empty() -> Self {
        Values { walk: Walk::Done }
    }
}

impl Iterator for Values {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, rest) = match self.walk {
            Walk::Pair(first, second) => (Some(first), Walk::Single(second)),
            Walk::Single(value) => (Some(value), Walk::Done),
            Walk::Steps { current, last } if current <= last => {
                let next = current + 1.0;

                // Once the step gets lost in rounding the walk would never end
                let rest = if next == current {
                    Walk::Done
                } else {
                    Walk::Steps {
                        current: next,
                        last,
                    }
                };

                (Some(current), rest)
            }
            Walk::Steps { .. } | Walk::Done => (None, Walk::Done),
        };

        self.walk = rest;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.walk {
            Walk::Pair(..) => (2, Some(2)),
            Walk::Single(_) => (1, Some(1)),
            Walk::Done => (0, Some(0)),
            Walk::Steps { current, last } if current > last => (0, Some(0)),
            Walk::Steps { current, last } => {
                let exact = current.fract() == 0.0
                    && current.abs() < EXACT_STEP_LIMIT
                    && last.abs() < EXACT_STEP_LIMIT;

                if exact {
                    let count = (last - current).floor() as usize + 1;
                    (count, Some(count))
                } else {
                    (1, None)
                }
            }
        }
    }
}

impl FusedIterator for Values {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let values = Values::endpoints(f64::NEG_INFINITY, 3.0);
        assert_eq!((2, Some(2)), values.size_hint());
        assert_eq!(vec![f64::NEG_INFINITY, 3.0], values.collect::<Vec<_>>());
    }

    #[test]
    fn steps() {
        assert_eq!(vec![1.0, 2.0, 3.0], Values::steps(1.0, 3.0).collect::<Vec<_>>());
        assert_eq!(vec![4.0], Values::steps(4.0, 4.0).collect::<Vec<_>>());
        assert_eq!(Vec::<f64>::new(), Values::steps(4.0, 3.0).collect::<Vec<_>>());

        // Fractional starts keep their offset
        assert_eq!(vec![0.5, 1.5, 2.5], Values::steps(0.5, 3.0).collect::<Vec<_>>());
    }

    #[test]
    fn size_hint_matches_length() {
        let values = Values::steps(-3.0, 7.0);
        assert_eq!((11, Some(11)), values.size_hint());
        assert_eq!(11, values.count());

        let mut values = Values::steps(2.0, 3.0);
        values.next();
        assert_eq!((1, Some(1)), values.size_hint());
        values.next();
        assert_eq!((0, Some(0)), values.size_hint());
    }

    #[test]
    fn terminates_beyond_float_precision() {
        let start = 2f64.powi(60);
        let values: Vec<_> = Values::steps(start, start * 2.0).collect();
        assert_eq!(vec![start], values);
    }

    #[test]
    fn fused() {
        let mut values = Values::endpoints(1.0, 2.0);
        assert_eq!(Some(1.0), values.next());
        assert_eq!(Some(2.0), values.next());
        assert_eq!(None, values.next());
        assert_eq!(None, values.next());

        let mut values = Values::empty();
        assert_eq!(None, values.next());
    }
}
