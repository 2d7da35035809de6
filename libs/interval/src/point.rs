use core::fmt;

use serde::{Deserialize, Serialize};

use crate::DiscreteValue;

/// A point on one axis: a domain value extended with sentinels below and
/// above every value.
///
/// The derived ordering is total with `Bottom < At(v) < Top` for every `v`.
/// Stepping saturates at the sentinels, which keeps the interval algebra free
/// of partial functions: `At(max).successor() == Top` and
/// `Top.successor() == Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainPoint<V> {
    /// Below every domain value.
    Bottom,
    /// A concrete domain value.
    At(V),
    /// Above every domain value.
    Top,
}

impl<V: DiscreteValue> DomainPoint<V> {
    /// The next point up, saturating at [`Top`].
    ///
    /// [`Top`]: DomainPoint::Top
    #[must_use]
    pub fn successor(&self) -> Self {
        match self {
            Self::Bottom => Self::At(V::min_value()),
            Self::At(value) => value.successor().map_or(Self::Top, Self::At),
            Self::Top => Self::Top,
        }
    }

    /// The next point down, saturating at [`Bottom`].
    ///
    /// [`Bottom`]: DomainPoint::Bottom
    #[must_use]
    pub fn predecessor(&self) -> Self {
        match self {
            Self::Bottom => Self::Bottom,
            Self::At(value) => value.predecessor().map_or(Self::Bottom, Self::At),
            Self::Top => Self::At(V::max_value()),
        }
    }

    /// The order-preserving projection onto the real line, with the sentinels
    /// mapping to the two infinities.
    pub fn ordered_hash(&self) -> f64 {
        match self {
            Self::Bottom => f64::NEG_INFINITY,
            Self::At(value) => value.ordered_hash(),
            Self::Top => f64::INFINITY,
        }
    }

    /// Like [`ordered_hash`], but sentinels clamp to the hashes of the domain
    /// extrema. No value lies outside the extrema, so a clamped box covers
    /// the same values while staying finite for the spatial index.
    ///
    /// [`ordered_hash`]: DomainPoint::ordered_hash
    pub fn clamped_hash(&self) -> f64 {
        match self {
            Self::Bottom => V::min_value().ordered_hash(),
            Self::At(value) => value.ordered_hash(),
            Self::Top => V::max_value().ordered_hash(),
        }
    }

    /// The concrete value, if this point is not a sentinel.
    pub const fn finite(&self) -> Option<&V> {
        match self {
            Self::At(value) => Some(value),
            Self::Bottom | Self::Top => None,
        }
    }
}

impl<V: fmt::Debug> fmt::Display for DomainPoint<V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => fmt.write_str("-\u{221e}"),
            Self::At(value) => write!(fmt, "{value:?}"),
            Self::Top => fmt.write_str("+\u{221e}"),
        }
    }
}

impl<V> From<V> for DomainPoint<V> {
    fn from(value: V) -> Self {
        Self::At(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_bracket_every_value() {
        assert!(DomainPoint::Bottom < DomainPoint::At(i32::MIN));
        assert!(DomainPoint::At(i32::MAX) < DomainPoint::<i32>::Top);
    }

    #[test]
    fn stepping_saturates() {
        assert_eq!(
            DomainPoint::At(i32::MAX).successor(),
            DomainPoint::<i32>::Top
        );
        assert_eq!(
            DomainPoint::At(i32::MIN).predecessor(),
            DomainPoint::<i32>::Bottom
        );
        assert_eq!(DomainPoint::<i32>::Top.successor(), DomainPoint::Top);
        assert_eq!(DomainPoint::<i32>::Bottom.predecessor(), DomainPoint::Bottom);
        assert_eq!(
            DomainPoint::<i32>::Bottom.successor(),
            DomainPoint::At(i32::MIN)
        );
        assert_eq!(
            DomainPoint::<i32>::Top.predecessor(),
            DomainPoint::At(i32::MAX)
        );
    }

    #[test]
    fn hashes_preserve_order() {
        assert!(DomainPoint::<i32>::Bottom.ordered_hash() < DomainPoint::At(0).ordered_hash());
        assert!(DomainPoint::At(0).ordered_hash() < DomainPoint::<i32>::Top.ordered_hash());
        assert!(DomainPoint::<i32>::Bottom.clamped_hash().is_finite());
        assert!(DomainPoint::<i32>::Top.clamped_hash().is_finite());
    }
}
