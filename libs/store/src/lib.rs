//! A dimensional store of disjoint interval-keyed values.
//!
//! [`DataStore`] associates each value with a region of an N-dimensional
//! coordinate space and keeps all regions pairwise disjoint: setting,
//! updating, or removing a region carves every intersecting row into the
//! axis-aligned remainder pieces outside the overlap, then re-compresses the
//! values it touched. Region lookups are accelerated by a bucketed
//! [`BoxTree`] over ordered-hash space, with a linear-scan fallback when the
//! index is disabled via [`Capabilities`].
//!
//! [`Snapshot`] is the copy-on-write façade over the same engine,
//! [`MultiValueStore`] lifts the payload to a set per region, and
//! [`DiffAction`] sequences take one store's content to another's and back.

mod box_tree;
mod capability;
mod diff;
mod display;
mod error;
mod multi;
mod projection;
mod row;
mod snapshot;
mod store;

pub use self::{
    box_tree::BoxTree,
    capability::Capabilities,
    diff::DiffAction,
    error::{DisjointnessViolation, KeyNotFound, NoSingleValue},
    multi::MultiValueStore,
    row::ValidData,
    snapshot::Snapshot,
    store::DataStore,
};
