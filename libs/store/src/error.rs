#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("the given rows are not pairwise disjoint")]
#[must_use]
pub struct DisjointnessViolation;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no row starts at the given key")]
#[must_use]
pub struct KeyNotFound;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("the store does not cover the whole space with exactly one row")]
#[must_use]
pub struct NoSingleValue;
