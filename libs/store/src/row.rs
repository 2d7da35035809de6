use core::fmt;

use axial_interval::DimensionalInterval;
use serde::{Deserialize, Serialize};

/// The unit of storage: a value and the region it is valid in.
///
/// Renders as the row literal `interval -> value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidData<I, V> {
    pub interval: I,
    pub value: V,
}

impl<I, V> ValidData<I, V> {
    pub const fn new(interval: I, value: V) -> Self {
        Self { interval, value }
    }
}

impl<I: DimensionalInterval, V> ValidData<I, V> {
    /// The per-axis start points identifying this row in a disjoint set.
    pub fn start_key(&self) -> I::Start {
        self.interval.start_key()
    }
}

impl<I: DimensionalInterval, V: fmt::Debug> fmt::Display for ValidData<I, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.interval.fmt_interval(fmt)?;
        write!(fmt, " -> {:?}", self.value)
    }
}

impl<I, V> From<(I, V)> for ValidData<I, V> {
    fn from((interval, value): (I, V)) -> Self {
        Self { interval, value }
    }
}
