use core::{cmp::Ordering, fmt};

use error_stack::{Report, bail};

use crate::DiscreteValue;

/// A type with a fixed, statically known, ordered set of members.
///
/// The sequence returned by [`values`] defines the order of the domain: the
/// first element is the minimum, the last the maximum, and neighbours in the
/// sequence are adjacent on the axis. The sequence must be non-empty and free
/// of duplicates; [`Enumerated::new`] verifies both.
///
/// [`values`]: Enumerable::values
pub trait Enumerable: Clone + Eq + fmt::Debug + Sized + 'static {
    /// The members of this enumeration, in axis order.
    fn values() -> &'static [Self];
}

/// A well-formed enumeration member is absent from [`Enumerable::values`], or
/// the sequence itself is empty or contains duplicates.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("the enumeration sequence is empty, duplicated, or missing the value")]
#[must_use]
pub struct InvalidEnumeration;

/// Adapts any [`Enumerable`] into a [`DiscreteValue`] by its position in the
/// declared sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enumerated<T> {
    index: usize,
    value: T,
}

impl<T: Enumerable> Enumerated<T> {
    /// Wraps `value`, locating it in [`Enumerable::values`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEnumeration`] if the sequence is empty, contains a
    /// duplicate entry, or does not contain `value`.
    pub fn new(value: T) -> Result<Self, Report<InvalidEnumeration>> {
        let values = T::values();
        if values.is_empty() {
            bail!(InvalidEnumeration);
        }
        for (position, member) in values.iter().enumerate() {
            if values[..position].contains(member) {
                bail!(InvalidEnumeration);
            }
        }
        values
            .iter()
            .position(|member| *member == value)
            .map_or_else(
                || Err(Report::new(InvalidEnumeration)),
                |index| Ok(Self { index, value }),
            )
    }

    /// The wrapped value.
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    fn at(index: usize) -> Self {
        Self {
            index,
            value: T::values()[index].clone(),
        }
    }
}

impl<T: Enumerable> PartialOrd for Enumerated<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Enumerable> Ord for Enumerated<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T: Enumerable> DiscreteValue for Enumerated<T> {
    /// # Panics
    ///
    /// Panics if [`Enumerable::values`] is empty. Constructing any member
    /// through [`Enumerated::new`] first rules this out.
    fn min_value() -> Self {
        assert!(
            !T::values().is_empty(),
            "an enumeration axis requires a non-empty sequence"
        );
        Self::at(0)
    }

    fn max_value() -> Self {
        assert!(
            !T::values().is_empty(),
            "an enumeration axis requires a non-empty sequence"
        );
        Self::at(T::values().len() - 1)
    }

    fn successor(&self) -> Option<Self> {
        (self.index + 1 < T::values().len()).then(|| Self::at(self.index + 1))
    }

    fn predecessor(&self) -> Option<Self> {
        self.index.checked_sub(1).map(Self::at)
    }

    #[expect(clippy::cast_precision_loss, reason = "order is preserved")]
    fn ordered_hash(&self) -> f64 {
        self.index as f64
    }
}
