use core::fmt;

use crate::{
    DiscreteValue, DomainPoint, HyperBox, Interval, IntervalSequence as _, SpatialBounds,
};

/// A region in an N-dimensional coordinate space: the Cartesian product of
/// one [`Interval`] per axis.
///
/// This is the seam between the one-axis algebra and the dimensional store.
/// Every operation lifts pointwise across axes: a region contains a point
/// when every axis does, two regions intersect when every axis pair does, and
/// a region is empty as soon as a single axis is. The store is generic over
/// this trait and never names an axis, so the same mutation and compression
/// code serves every arity.
///
/// Implementations exist for [`Interval`] itself (one axis) and for tuples of
/// intervals up to four axes, with heterogeneous domain types per axis.
pub trait DimensionalInterval: Sized + Clone + PartialEq + fmt::Debug {
    /// The per-axis start points, ordered lexicographically by axis. Unique
    /// per region in any disjoint set of regions, which makes it the row key
    /// of the dimensional store.
    type Start: Clone + Ord + fmt::Debug;

    /// The per-axis domain points of a single location.
    type Point: Clone + fmt::Debug;

    /// The footprint of a region in ordered-hash space.
    type Bounds: SpatialBounds;

    /// The number of axes.
    const DIMENSIONS: usize;

    /// The region covering the whole space.
    fn unbounded() -> Self;

    /// The ordered-hash box spanned by the domain extrema on every axis.
    fn domain_bounds() -> Self::Bounds;

    /// The start points of this region.
    fn start_key(&self) -> Self::Start;

    /// Checks whether `point` lies within this region.
    fn contains_point(&self, point: &Self::Point) -> bool;

    /// The degenerate ordered-hash box of a single location.
    fn point_bounds(point: &Self::Point) -> Self::Bounds;

    /// Checks whether both regions share any point.
    fn overlaps(&self, other: &Self) -> bool;

    /// The region of all points in both regions, if any.
    fn intersect(&self, other: &Self) -> Option<Self>;

    /// Checks whether `other` lies fully within this region.
    fn contains_interval(&self, other: &Self) -> bool;

    /// Merges two regions that touch along exactly the given axis and agree
    /// on all others; `None` when they are not mergeable that way. This is
    /// the step relation of compression, which sweeps the axes in
    /// declaration order.
    fn merge_adjacent_on_axis(&self, other: &Self, axis: usize) -> Option<Self>;

    /// Merges two regions that touch along exactly one axis and agree on all
    /// others, trying the axes in declaration order.
    fn merge_adjacent(&self, other: &Self) -> Option<Self> {
        (0..Self::DIMENSIONS).find_map(|axis| self.merge_adjacent_on_axis(other, axis))
    }

    /// Tiles `self \ cut` with axis-aligned boxes, where `cut` must lie
    /// within this region. Each axis contributes its up-to-two remainder
    /// pieces plus the cut's own piece; the Cartesian product of those
    /// choices minus the all-cut cell tiles the difference.
    fn remainders(&self, cut: &Self) -> Vec<Self>;

    /// The unique atomic decomposition of a set of regions: per-axis unique
    /// intervals, Cartesian-producted, filtered to cells lying within at
    /// least one input. No atom straddles a boundary of any input.
    fn atoms(inputs: &[Self]) -> Vec<Self>;

    /// The footprint of this region in ordered-hash space.
    fn to_bounds(&self) -> Self::Bounds;

    /// Renders the region literal: the bare interval for one axis, the
    /// `{i₁, i₂, …}` product form otherwise.
    fn fmt_interval(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<V: DiscreteValue> DimensionalInterval for Interval<V> {
    type Bounds = HyperBox<1>;
    type Point = DomainPoint<V>;
    type Start = DomainPoint<V>;

    const DIMENSIONS: usize = 1;

    fn unbounded() -> Self {
        Self::unbounded()
    }

    fn domain_bounds() -> Self::Bounds {
        HyperBox::new(
            [V::min_value().ordered_hash()],
            [V::max_value().ordered_hash()],
        )
    }

    fn start_key(&self) -> Self::Start {
        self.start().clone()
    }

    fn contains_point(&self, point: &Self::Point) -> bool {
        self.contains_point(point)
    }

    fn point_bounds(point: &Self::Point) -> Self::Bounds {
        HyperBox::new([point.clamped_hash()], [point.clamped_hash()])
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.overlaps(other)
    }

    fn intersect(&self, other: &Self) -> Option<Self> {
        self.intersect(other)
    }

    fn contains_interval(&self, other: &Self) -> bool {
        self.contains_interval(other)
    }

    fn merge_adjacent_on_axis(&self, other: &Self, axis: usize) -> Option<Self> {
        (axis == 0 && self.is_adjacent_to(other)).then(|| self.merge(other))
    }

    fn remainders(&self, cut: &Self) -> Vec<Self> {
        debug_assert!(
            self.contains_interval(cut),
            "the cut must lie within the region"
        );
        self.excluding(cut).into_iter().collect()
    }

    fn atoms(inputs: &[Self]) -> Vec<Self> {
        inputs.unique_intervals()
    }

    fn to_bounds(&self) -> Self::Bounds {
        HyperBox::new([self.start().clamped_hash()], [self.end().clamped_hash()])
    }

    fn fmt_interval(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

macro_rules! dimensional_tuple {
    ($dimensions:literal => $(($axis:ident, $idx:tt, $pieces:ident, $cell:ident)),+) => {
        impl<$($axis: DiscreteValue),+> DimensionalInterval for ($(Interval<$axis>,)+) {
            type Bounds = HyperBox<$dimensions>;
            type Point = ($(DomainPoint<$axis>,)+);
            type Start = ($(DomainPoint<$axis>,)+);

            const DIMENSIONS: usize = $dimensions;

            fn unbounded() -> Self {
                ($(Interval::<$axis>::unbounded(),)+)
            }

            fn domain_bounds() -> Self::Bounds {
                HyperBox::new(
                    [$($axis::min_value().ordered_hash()),+],
                    [$($axis::max_value().ordered_hash()),+],
                )
            }

            fn start_key(&self) -> Self::Start {
                ($(self.$idx.start().clone(),)+)
            }

            fn contains_point(&self, point: &Self::Point) -> bool {
                $(self.$idx.contains_point(&point.$idx))&&+
            }

            fn point_bounds(point: &Self::Point) -> Self::Bounds {
                HyperBox::new(
                    [$(point.$idx.clamped_hash()),+],
                    [$(point.$idx.clamped_hash()),+],
                )
            }

            fn overlaps(&self, other: &Self) -> bool {
                $(self.$idx.overlaps(&other.$idx))&&+
            }

            fn intersect(&self, other: &Self) -> Option<Self> {
                Some(($(self.$idx.intersect(&other.$idx)?,)+))
            }

            fn contains_interval(&self, other: &Self) -> bool {
                $(self.$idx.contains_interval(&other.$idx))&&+
            }

            fn merge_adjacent_on_axis(&self, other: &Self, axis: usize) -> Option<Self> {
                debug_assert!(axis < Self::DIMENSIONS, "axis out of range");
                let mut merged = self.clone();
                $(
                    if axis == $idx {
                        if !self.$idx.is_adjacent_to(&other.$idx) {
                            return None;
                        }
                        merged.$idx = self.$idx.merge(&other.$idx);
                    } else if self.$idx != other.$idx {
                        return None;
                    }
                )+
                Some(merged)
            }

            fn remainders(&self, cut: &Self) -> Vec<Self> {
                debug_assert!(
                    self.contains_interval(cut),
                    "the cut must lie within the region"
                );
                $(
                    let mut $pieces: Vec<(Interval<$axis>, bool)> = self
                        .$idx
                        .excluding(&cut.$idx)
                        .into_iter()
                        .map(|piece| (piece, false))
                        .collect();
                    $pieces.push((cut.$idx.clone(), true));
                )+

                let total = 1_usize $(* $pieces.len())+;
                let mut tiles = Vec::with_capacity(total - 1);
                for index in 0..total {
                    let mut remaining = index;
                    $(
                        let $cell = &$pieces[remaining % $pieces.len()];
                        remaining /= $pieces.len();
                    )+
                    let _ = remaining;
                    if $($cell.1)&&+ {
                        // the cut itself
                        continue;
                    }
                    tiles.push(($($cell.0.clone(),)+));
                }
                tiles
            }

            fn atoms(inputs: &[Self]) -> Vec<Self> {
                if inputs.is_empty() {
                    return Vec::new();
                }
                $(
                    let $pieces = inputs
                        .iter()
                        .map(|input| input.$idx.clone())
                        .collect::<Vec<_>>()
                        .unique_intervals();
                )+

                let total = 1_usize $(* $pieces.len())+;
                let mut cells = Vec::new();
                for index in 0..total {
                    let mut remaining = index;
                    $(
                        let $cell = &$pieces[remaining % $pieces.len()];
                        remaining /= $pieces.len();
                    )+
                    let _ = remaining;
                    let cell = ($($cell.clone(),)+);
                    if inputs.iter().any(|input| input.contains_interval(&cell)) {
                        cells.push(cell);
                    }
                }
                cells
            }

            fn to_bounds(&self) -> Self::Bounds {
                HyperBox::new(
                    [$(self.$idx.start().clamped_hash()),+],
                    [$(self.$idx.end().clamped_hash()),+],
                )
            }

            fn fmt_interval(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt.write_str("{")?;
                let mut separate = false;
                $(
                    if core::mem::replace(&mut separate, true) {
                        fmt.write_str(", ")?;
                    }
                    write!(fmt, "{}", self.$idx)?;
                )+
                fmt.write_str("}")
            }
        }
    };
}

dimensional_tuple!(2 => (A, 0, pieces_a, cell_a), (B, 1, pieces_b, cell_b));
dimensional_tuple!(3 =>
    (A, 0, pieces_a, cell_a),
    (B, 1, pieces_b, cell_b),
    (C, 2, pieces_c, cell_c)
);
dimensional_tuple!(4 =>
    (A, 0, pieces_a, cell_a),
    (B, 1, pieces_b, cell_b),
    (C, 2, pieces_c, cell_c),
    (D, 3, pieces_d, cell_d)
);
