use core::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive as _;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime};

/// A totally ordered scalar with a discrete step function, usable on one axis
/// of a dimensional interval.
///
/// The extrema are inclusive and finite; stepping off either end yields
/// `None`. [`ordered_hash`] maps values into `f64` order-preservingly so the
/// spatial index can place them on a real axis. The hash does not need to be
/// invertible, and distinct values may collapse onto the same hash once the
/// domain outgrows `f64` precision.
///
/// [`ordered_hash`]: DiscreteValue::ordered_hash
pub trait DiscreteValue: Clone + Ord + fmt::Debug {
    /// The smallest representable value.
    fn min_value() -> Self;

    /// The largest representable value.
    fn max_value() -> Self;

    /// The next value up, or `None` iff `self` is [`max_value`].
    ///
    /// [`max_value`]: DiscreteValue::max_value
    fn successor(&self) -> Option<Self>;

    /// The next value down, or `None` iff `self` is [`min_value`].
    ///
    /// [`min_value`]: DiscreteValue::min_value
    fn predecessor(&self) -> Option<Self>;

    /// An order-preserving projection onto the real line.
    fn ordered_hash(&self) -> f64;
}

macro_rules! discrete_int {
    ($($int:ty),*) => {
        $(impl DiscreteValue for $int {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }

            fn successor(&self) -> Option<Self> {
                self.checked_add(1)
            }

            fn predecessor(&self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[expect(clippy::cast_precision_loss, reason = "order is preserved")]
            fn ordered_hash(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

discrete_int!(i32, i64);

/// `BigInt` is conceptually unbounded, but the sentinel points above and below
/// an axis need reachable extrema. The domain is pinned to ±10^100, far
/// outside anything `f64` distinguishes; hashes saturate to ±∞ beyond the
/// exactly-representable range, which keeps the projection monotone.
impl DiscreteValue for BigInt {
    fn min_value() -> Self {
        -Self::max_value()
    }

    fn max_value() -> Self {
        Self::from(10).pow(100)
    }

    fn successor(&self) -> Option<Self> {
        (*self != Self::max_value()).then(|| self + 1)
    }

    fn predecessor(&self) -> Option<Self> {
        (*self != Self::min_value()).then(|| self - 1)
    }

    fn ordered_hash(&self) -> f64 {
        self.to_f64().unwrap_or_else(|| match self.sign() {
            Sign::Minus => f64::NEG_INFINITY,
            Sign::NoSign | Sign::Plus => f64::INFINITY,
        })
    }
}

/// Wall-clock instants step in nanoseconds, the finest unit `time` stores.
impl DiscreteValue for OffsetDateTime {
    fn min_value() -> Self {
        PrimitiveDateTime::MIN.assume_utc()
    }

    fn max_value() -> Self {
        PrimitiveDateTime::MAX.assume_utc()
    }

    fn successor(&self) -> Option<Self> {
        self.checked_add(Duration::nanoseconds(1))
    }

    fn predecessor(&self) -> Option<Self> {
        self.checked_sub(Duration::nanoseconds(1))
    }

    #[expect(clippy::cast_precision_loss, reason = "order is preserved")]
    fn ordered_hash(&self) -> f64 {
        self.unix_timestamp_nanos() as f64
    }
}

impl DiscreteValue for Date {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }

    fn successor(&self) -> Option<Self> {
        self.next_day()
    }

    fn predecessor(&self) -> Option<Self> {
        self.previous_day()
    }

    fn ordered_hash(&self) -> f64 {
        f64::from(self.to_julian_day())
    }
}
