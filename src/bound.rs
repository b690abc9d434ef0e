use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// One endpoint of a [`Range`](crate::Range), a point on the extended real line
///
/// The infinities are modelled as their own variants, so code matching on a bound never has to
/// look at float bit patterns. `Finite(f64::INFINITY)` still compares equal to `PosInfinity`,
/// and every bound stored inside a [`Range`](crate::Range) is normalized to the sentinel form.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    /// Unbounded below
    NegInfinity,
    Finite(f64),
    /// Unbounded above
    PosInfinity,
}

impl Bound {
    /// The value of this bound as a float, the sentinels map to the float infinities
    ///
    /// # Example
    ///
    /// ```rust
    /// use float_rangeset::Bound;
    ///
    /// assert_eq!(f64::NEG_INFINITY, Bound::NegInfinity.to_f64());
    /// assert_eq!(4.5, Bound::Finite(4.5).to_f64());
    /// ```
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Bound::NegInfinity => f64::NEG_INFINITY,
            Bound::Finite(value) => value,
            Bound::PosInfinity => f64::INFINITY,
        }
    }

    /// Returns `true` if this bound is a real number
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }

    #[inline]
    pub fn is_neg_infinity(self) -> bool {
        self.to_f64() == f64::NEG_INFINITY
    }

    #[inline]
    pub fn is_pos_infinity(self) -> bool {
        self.to_f64() == f64::INFINITY
    }

    /// Bring this bound in its canonical form, `None` if it holds `NaN`
    ///
    /// Float infinities become sentinels and `-0.0` becomes `0.0`, which keeps
    /// [`total_cmp`](Bound::total_cmp) consistent with `==`.
    pub(crate) fn normalized(self) -> Option<Bound> {
        let value = self.to_f64();

        if value.is_nan() {
            None
        } else if value == f64::NEG_INFINITY {
            Some(Bound::NegInfinity)
        } else if value == f64::INFINITY {
            Some(Bound::PosInfinity)
        } else if value == 0.0 {
            Some(Bound::Finite(0.0))
        } else {
            Some(Bound::Finite(value))
        }
    }

    /// Total order over normalized bounds
    #[inline]
    pub(crate) fn total_cmp(&self, other: &Bound) -> Ordering {
        self.to_f64().total_cmp(&other.to_f64())
    }

    #[inline]
    pub(crate) fn min(self, other: Bound) -> Bound {
        if self.total_cmp(&other).is_le() {
            self
        } else {
            other
        }
    }

    #[inline]
    pub(crate) fn max(self, other: Bound) -> Bound {
        if self.total_cmp(&other).is_ge() {
            self
        } else {
            other
        }
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        let bound = Bound::Finite(value);
        // NaN is kept as is, so the range constructor can reject it
        bound.normalized().unwrap_or(bound)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Finite(f64::from(value))
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.to_f64() == other.to_f64()
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f64().partial_cmp(&other.to_f64())
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::NegInfinity => f.write_str("-inf"),
            Bound::PosInfinity => f.write_str("inf"),
            Bound::Finite(value) => write!(f, "{}", value),
        }
    }
}
