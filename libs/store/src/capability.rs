/// Construction-time switches for optional store behaviours.
///
/// The textual surface is an open set of string-keyed flags; the reserved
/// names are parsed by [`from_flags`] and unknown names are ignored.
///
/// `brute_force_update` selects the generic remainder-tiling mutation path
/// over an axis-specialised one. The tiling path has measured at least as
/// fast in every dimension, so it is the only path implemented here and the
/// flag is accepted for interface stability only.
///
/// [`from_flags`]: Capabilities::from_flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Disable the box-tree; every lookup scans the by-start map instead.
    pub no_search_tree: bool,
    /// Validate pairwise disjointness when constructing from rows.
    pub require_disjoint: bool,
    /// Use the generic tiling algorithm for every mutation.
    pub brute_force_update: bool,
    /// Bucket capacity of the box-tree, when enabled.
    pub search_tree_bucket_capacity: usize,
}

impl Capabilities {
    pub const NO_SEARCH_TREE: &'static str = "noSearchTree";
    pub const REQUIRE_DISJOINT: &'static str = "requireDisjoint";
    pub const BRUTE_FORCE_UPDATE: &'static str = "bruteForceUpdate";

    /// Parses the reserved flag names, ignoring any unknown ones.
    pub fn from_flags<'f>(flags: impl IntoIterator<Item = &'f str>) -> Self {
        let mut capabilities = Self::default();
        for flag in flags {
            match flag {
                Self::NO_SEARCH_TREE => capabilities.no_search_tree = true,
                Self::REQUIRE_DISJOINT => capabilities.require_disjoint = true,
                Self::BRUTE_FORCE_UPDATE => capabilities.brute_force_update = true,
                _ => {}
            }
        }
        capabilities
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            no_search_tree: false,
            require_disjoint: false,
            brute_force_update: true,
            search_tree_bucket_capacity: 16,
        }
    }
}
