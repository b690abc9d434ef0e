use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Bound, Range, RangeCollection};

#[derive(Serialize, Deserialize)]
#[serde(rename = "Range")]
struct RangeRepr {
    start: Bound,
    end: Bound,
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RangeRepr {
            start: self.start(),
            end: self.end(),
        }
        .serialize(serializer)
    }
}

/// Goes through [`Range::new`](Range::new), so a reversed or `NaN` range is rejected
impl<'de> Deserialize<'de> for Range {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RangeRepr::deserialize(deserializer)?;
        Range::new(repr.start, repr.end).map_err(D::Error::custom)
    }
}

impl Serialize for RangeCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for RangeCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Range>::deserialize(deserializer).map(RangeCollection::from)
    }
}
