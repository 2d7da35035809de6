//! A versioned façade over the dimensional store.
//!
//! Every row carries an integer version axis in front of the user's region.
//! Public operations take a [`VersionSelection`] (the current version, the
//! reserved unapproved partition, or an explicit version) which resolves to
//! a version range composed onto the region before it reaches the engine.
//! The reserved sentinel [`UNAPPROVED`] splits the timeline into approved
//! history and parked changes awaiting [`VersionedStore::approve`].

mod carrier;
mod error;
mod store;

pub use self::{
    carrier::{UNAPPROVED, VersionCarrier, VersionId},
    error::{VersionOutOfRange, VersionsExhausted},
    store::{VersionInfo, VersionSelection, VersionedStore},
};
