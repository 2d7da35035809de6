#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("the version lies outside the usable timeline")]
#[must_use]
pub struct VersionOutOfRange;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("the next version would collide with the unapproved sentinel")]
#[must_use]
pub struct VersionsExhausted;
