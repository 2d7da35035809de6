use axial_interval::DimensionalInterval;
use serde::{Deserialize, Serialize};

use crate::ValidData;

/// One step of a store-to-store diff, keyed by the row's start points.
///
/// `Create` and `Update` carry the full target row; `Delete` carries only the
/// key. `Update` matches an existing row by its start key and replaces it
/// wholesale, so a diff never needs to describe partial edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Serialize, I::Start: Serialize, V: Serialize",
    deserialize = "I: Deserialize<'de>, I::Start: Deserialize<'de>, V: Deserialize<'de>"
))]
pub enum DiffAction<I: DimensionalInterval, V> {
    Create(ValidData<I, V>),
    Update(ValidData<I, V>),
    Delete(I::Start),
}
