use axial_interval::{DimensionalInterval, DiscreteValue, DomainPoint, Interval};

/// The integer version axis prepended to every versioned row.
pub type VersionId = i32;

/// The reserved version parking changes that are not yet approved.
///
/// Everything below it is the approved timeline; data written at this version
/// stays invisible to [`VersionSelection::Current`] reads until approved.
///
/// [`VersionSelection::Current`]: crate::VersionSelection
pub const UNAPPROVED: VersionId = VersionId::MAX;

/// A dimensional interval whose first axis is the system-managed version
/// timeline.
///
/// The versioned store keeps its engine generic by speaking through this
/// trait: `Public` is the user-visible interval type with the version axis
/// stripped, and composition re-attaches a version range in front of it.
pub trait VersionCarrier: DimensionalInterval {
    /// The user-visible interval type, without the version axis.
    type Public: DimensionalInterval;

    /// Prepends a version range to a public region.
    fn compose(version: Interval<VersionId>, public: Self::Public) -> Self;

    /// Prepends a version point to a public point.
    fn compose_point(
        version: DomainPoint<VersionId>,
        public: <Self::Public as DimensionalInterval>::Point,
    ) -> Self::Point;

    /// The version range of this region.
    fn version_axis(&self) -> &Interval<VersionId>;

    /// This region with the version axis stripped.
    fn public_part(&self) -> Self::Public;
}

impl<B: DiscreteValue> VersionCarrier for (Interval<VersionId>, Interval<B>) {
    type Public = Interval<B>;

    fn compose(version: Interval<VersionId>, public: Self::Public) -> Self {
        (version, public)
    }

    fn compose_point(
        version: DomainPoint<VersionId>,
        public: DomainPoint<B>,
    ) -> Self::Point {
        (version, public)
    }

    fn version_axis(&self) -> &Interval<VersionId> {
        &self.0
    }

    fn public_part(&self) -> Self::Public {
        self.1.clone()
    }
}

impl<B: DiscreteValue, C: DiscreteValue> VersionCarrier
    for (Interval<VersionId>, Interval<B>, Interval<C>)
{
    type Public = (Interval<B>, Interval<C>);

    fn compose(version: Interval<VersionId>, public: Self::Public) -> Self {
        (version, public.0, public.1)
    }

    fn compose_point(
        version: DomainPoint<VersionId>,
        public: (DomainPoint<B>, DomainPoint<C>),
    ) -> Self::Point {
        (version, public.0, public.1)
    }

    fn version_axis(&self) -> &Interval<VersionId> {
        &self.0
    }

    fn public_part(&self) -> Self::Public {
        (self.1.clone(), self.2.clone())
    }
}
