//! Discrete domain values, sentinel-bounded intervals, and their multi-axis
//! algebra.
//!
//! An axis is described by a [`DiscreteValue`]: a totally ordered scalar with
//! finite extrema and a step function. [`DomainPoint`] extends such a scalar
//! with `Bottom` and `Top` sentinels so that every endpoint operation is
//! total, and [`Interval`] pairs two points into a non-empty closed range
//! with the full one-axis algebra (intersection, union, difference with split
//! remainders, gaps, adjacency).
//!
//! [`DimensionalInterval`] lifts the algebra to N axes as the Cartesian
//! product of one interval per axis, implemented for plain intervals and for
//! tuples of up to four intervals. The dimensional store in `axial-store` is
//! generic over that trait.

pub mod sequence;

mod bounds;
mod dimensional;
mod enumeration;
mod interval;
mod point;
mod value;

pub use self::{
    bounds::{HyperBox, SpatialBounds},
    dimensional::DimensionalInterval,
    enumeration::{Enumerable, Enumerated, InvalidEnumeration},
    interval::{Interval, MalformedInterval, Remainder, RemainderIter},
    point::DomainPoint,
    sequence::IntervalSequence,
    value::DiscreteValue,
};
