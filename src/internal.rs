use crate::{Range, RangeCollection, RangeVec};

/// Sweeps over ranges sorted by `(start, end)` and folds overlapping neighbours together
#[derive(Debug)]
pub struct LinearRangeMerger {
    items: RangeVec<Range>,
    last: Option<Range>,
}

impl Default for LinearRangeMerger {
    #[inline]
    fn default() -> Self {
        Self::with_capacity(4)
    }
}

impl LinearRangeMerger {
    pub fn with_capacity(cap: usize) -> Self {
        LinearRangeMerger {
            items: RangeVec::with_capacity(cap),
            last: None,
        }
    }

    /// Feed the next range, returns `true` once the running range is unbounded above and
    /// nothing after it can change the outcome
    pub fn add(&mut self, range: Range) -> bool {
        match self.last.take() {
            None => self.last = Some(range),
            Some(current) => {
                debug_assert!(current <= range, "range added to merger is lower than previous range");

                if current.overlaps(&range) {
                    let merged = current.hull(&range);
                    log::trace!("merged {} and {} into {}", current, range, merged);
                    self.last = Some(merged);
                } else {
                    self.items.push(current);
                    self.last = Some(range);
                }
            }
        }

        let done = self.last.as_ref().map_or(false, |x| x.end().is_pos_infinity());
        if done {
            log::trace!("stopping merge sweep, running range is unbounded above");
        }

        done
    }

    pub fn finalize(mut self) -> RangeCollection {
        if let Some(v) = self.last {
            self.items.push(v);
        }

        RangeCollection { items: self.items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bound;

    fn range(start: impl Into<Bound>, end: impl Into<Bound>) -> Range {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn folds_overlapping_neighbours() {
        let mut merger = LinearRangeMerger::default();
        assert!(!merger.add(range(1, 3)));
        assert!(!merger.add(range(2, 5)));
        assert!(!merger.add(range(7, 8)));

        let merged = merger.finalize();
        assert_eq!(vec![range(1, 5), range(7, 8)], merged.into_vec());
    }

    #[test]
    fn signals_unbounded_end() {
        let mut merger = LinearRangeMerger::with_capacity(2);
        assert!(!merger.add(range(1, 3)));
        assert!(merger.add(range(3, Bound::PosInfinity)));

        assert_eq!(vec![range(1, Bound::PosInfinity)], merger.finalize().into_vec());
    }

    #[test]
    fn empty() {
        assert!(LinearRangeMerger::default().finalize().is_empty());
    }
}
