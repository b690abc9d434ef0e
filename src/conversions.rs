use crate::error::RangeError;
use crate::{Bound, Range, RangeCollection, RangeVec};

#[cfg(feature = "smallvec")]
impl<const N: usize> From<smallvec::SmallVec<[Range; N]>> for RangeCollection {
    fn from(value: smallvec::SmallVec<[Range; N]>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<Range>> for RangeCollection {
    fn from(value: Vec<Range>) -> Self {
        value.into_iter().collect()
    }
}

impl<const N: usize> From<[Range; N]> for RangeCollection {
    fn from(value: [Range; N]) -> Self {
        let mut items = RangeVec::with_capacity(N);
        items.extend(value);

        RangeCollection { items }
    }
}

impl From<Range> for RangeCollection {
    fn from(value: Range) -> Self {
        RangeCollection::from([value])
    }
}

impl FromIterator<Range> for RangeCollection {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        RangeCollection {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Range> for RangeCollection {
    fn extend<I: IntoIterator<Item = Range>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for RangeCollection {
    type Item = Range;
    type IntoIter = <RangeVec<Range> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeCollection {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl TryFrom<(Bound, Bound)> for Range {
    type Error = RangeError;

    fn try_from(value: (Bound, Bound)) -> Result<Self, Self::Error> {
        Range::new(value.0, value.1)
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = RangeError;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        Range::new(value.0, value.1)
    }
}

impl From<Range> for (Bound, Bound) {
    fn from(value: Range) -> Self {
        value.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples() {
        let range = Range::try_from((1.0, 4.0)).unwrap();
        let bounds: (Bound, Bound) = range.into();
        assert_eq!((Bound::Finite(1.0), Bound::Finite(4.0)), bounds);

        assert!(Range::try_from((Bound::NegInfinity, Bound::Finite(4.0))).is_ok());
        assert!(Range::try_from((4.0, 1.0)).is_err());
        assert!(Range::try_from((f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn collections_keep_order() {
        let a = Range::new(5, 6).unwrap();
        let b = Range::new(1, 2).unwrap();

        let from_vec = RangeCollection::from(vec![a, b]);
        let from_array = RangeCollection::from([a, b]);
        let collected: RangeCollection = [a, b].into_iter().collect();

        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec, collected);
        assert_eq!(vec![a, b], from_vec.into_vec());
    }

    #[test]
    fn extend_and_iterate() {
        let a = Range::new(1, 2).unwrap();
        let mut collection = RangeCollection::from(a);
        collection.extend([Range::unbound()]);

        let borrowed: Vec<&Range> = (&collection).into_iter().collect();
        assert_eq!(vec![&a, &Range::unbound()], borrowed);

        let owned: Vec<Range> = collection.into_iter().collect();
        assert_eq!(vec![a, Range::unbound()], owned);
    }
}
