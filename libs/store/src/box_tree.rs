use std::collections::BTreeSet;

use axial_interval::SpatialBounds;

/// One indexed region: a payload and its footprint in ordered-hash space.
#[derive(Debug, Clone)]
struct Entry<P, B> {
    payload: P,
    bounds: B,
}

#[derive(Debug, Clone)]
enum Node<P, B> {
    Leaf(Vec<Entry<P, B>>),
    Branch(Vec<Node<P, B>>),
}

/// A bucketed 2ᴺ-ary spatial index over axis-aligned boxes.
///
/// A leaf holds up to `bucket_capacity` entries. Splitting a leaf creates one
/// child per orthant of the node's box; an entry straddling a split is stored
/// in every child it intersects, so queries deduplicate payloads before
/// returning them.
///
/// The root box starts at the domain extent and grows by doubling its
/// half-extents toward any inserted entry that falls outside, re-bucketing
/// the whole tree. It never shrinks: after a large deletion the boundary
/// stays where the data once reached.
///
/// The index is an accelerator only. Everything it answers must equal a
/// linear scan over the same entries, and the store falls back to exactly
/// that scan when the index is disabled.
#[derive(Debug, Clone)]
pub struct BoxTree<P, B> {
    root: Node<P, B>,
    bounds: B,
    bucket_capacity: usize,
    depth_limit: u32,
}

impl<P, B> BoxTree<P, B>
where
    P: Clone + Ord,
    B: SpatialBounds,
{
    /// The default number of entries a leaf holds before splitting.
    pub const DEFAULT_BUCKET_CAPACITY: usize = 16;

    /// Nodes below this depth no longer split. Identical boxes would
    /// otherwise subdivide forever once a bucket fills with them.
    const DEPTH_LIMIT: u32 = 24;

    /// Creates an empty tree over the given initial boundary.
    pub fn new(bounds: B, bucket_capacity: usize) -> Self {
        Self {
            root: Node::Leaf(Vec::new()),
            bounds,
            bucket_capacity: bucket_capacity.max(1),
            depth_limit: Self::DEPTH_LIMIT,
        }
    }

    /// The current root boundary.
    pub const fn bounds(&self) -> &B {
        &self.bounds
    }

    /// Inserts an entry, growing the root boundary first if the entry's box
    /// falls outside it.
    pub fn insert(&mut self, payload: P, bounds: B) {
        if !self.bounds.contains(&bounds) {
            let mut grown = self.bounds.clone();
            while !grown.contains(&bounds) {
                grown = grown.grown_toward(&bounds);
            }
            self.rescale(grown);
        }
        Self::insert_at(
            &mut self.root,
            &self.bounds,
            Entry { payload, bounds },
            self.bucket_capacity,
            self.depth_limit,
        );
    }

    /// Removes every entry with the given payload, descending only the
    /// children intersecting `bounds`.
    pub fn remove(&mut self, payload: &P, bounds: &B) {
        Self::remove_at(&mut self.root, &self.bounds, payload, bounds);
    }

    /// The payloads of all entries intersecting `probe`, deduplicated and in
    /// payload order.
    pub fn query(&self, probe: &B) -> Vec<P> {
        let mut payloads = BTreeSet::new();
        Self::query_at(&self.root, &self.bounds, probe, &mut payloads);
        payloads.into_iter().collect()
    }

    /// Replaces the root boundary and re-buckets every entry under it.
    fn rescale(&mut self, bounds: B) {
        tracing::debug!(?bounds, "box-tree root outgrown, re-bucketing");
        let mut entries = Vec::new();
        Self::drain_into(
            core::mem::replace(&mut self.root, Node::Leaf(Vec::new())),
            &mut entries,
        );
        self.bounds = bounds;
        for entry in entries {
            Self::insert_at(
                &mut self.root,
                &self.bounds,
                entry,
                self.bucket_capacity,
                self.depth_limit,
            );
        }
    }

    fn drain_into(node: Node<P, B>, entries: &mut Vec<Entry<P, B>>) {
        match node {
            Node::Leaf(bucket) => {
                // Straddling entries were stored once per intersecting
                // child; keep a single copy of each payload.
                for entry in bucket {
                    if entries.iter().all(|seen| seen.payload != entry.payload) {
                        entries.push(entry);
                    }
                }
            }
            Node::Branch(children) => {
                for child in children {
                    Self::drain_into(child, entries);
                }
            }
        }
    }

    fn insert_at(
        node: &mut Node<P, B>,
        bounds: &B,
        entry: Entry<P, B>,
        bucket_capacity: usize,
        depth_left: u32,
    ) {
        match node {
            Node::Leaf(bucket) => {
                bucket.push(entry);
                if bucket.len() > bucket_capacity && depth_left > 0 {
                    let bucket = core::mem::take(bucket);
                    let mut children = Vec::with_capacity(B::fanout());
                    children.resize_with(B::fanout(), || Node::Leaf(Vec::new()));
                    *node = Node::Branch(children);
                    for entry in bucket {
                        Self::insert_at(node, bounds, entry, bucket_capacity, depth_left);
                    }
                }
            }
            Node::Branch(children) => {
                // Straddling entries land in every child they intersect.
                for (index, child) in children.iter_mut().enumerate() {
                    let child_bounds = bounds.orthant(index);
                    if child_bounds.intersects(&entry.bounds) {
                        Self::insert_at(
                            child,
                            &child_bounds,
                            entry.clone(),
                            bucket_capacity,
                            depth_left - 1,
                        );
                    }
                }
            }
        }
    }

    fn remove_at(node: &mut Node<P, B>, bounds: &B, payload: &P, probe: &B) {
        match node {
            Node::Leaf(bucket) => {
                bucket.retain(|entry| entry.payload != *payload);
            }
            Node::Branch(children) => {
                for (index, child) in children.iter_mut().enumerate() {
                    let child_bounds = bounds.orthant(index);
                    if child_bounds.intersects(probe) {
                        Self::remove_at(child, &child_bounds, payload, probe);
                    }
                }
            }
        }
    }

    fn query_at(node: &Node<P, B>, bounds: &B, probe: &B, payloads: &mut BTreeSet<P>) {
        match node {
            Node::Leaf(bucket) => {
                for entry in bucket {
                    if entry.bounds.intersects(probe) {
                        payloads.insert(entry.payload.clone());
                    }
                }
            }
            Node::Branch(children) => {
                for (index, child) in children.iter().enumerate() {
                    let child_bounds = bounds.orthant(index);
                    if child_bounds.intersects(probe) {
                        Self::query_at(child, &child_bounds, probe, payloads);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axial_interval::HyperBox;

    use super::*;

    fn span(lo: f64, hi: f64) -> HyperBox<1> {
        HyperBox::new([lo], [hi])
    }

    #[test]
    fn query_finds_straddling_entries_once() {
        let mut tree = BoxTree::new(span(0.0, 100.0), 2);
        for key in 0_i32..20 {
            let position = f64::from(key) * 5.0;
            tree.insert(key, span(position, position + 7.0));
        }
        let hits = tree.query(&span(48.0, 52.0));
        assert_eq!(hits, vec![9, 10]);
        let mut sorted = hits.clone();
        sorted.dedup();
        assert_eq!(hits, sorted);
    }

    #[test]
    fn out_of_range_inserts_grow_the_root() {
        let mut tree = BoxTree::new(span(0.0, 10.0), 4);
        tree.insert(1, span(2.0, 3.0));
        tree.insert(2, span(500.0, 510.0));
        assert!(tree.bounds().contains(&span(500.0, 510.0)));
        assert_eq!(tree.query(&span(0.0, 1000.0)), vec![1, 2]);
    }

    #[test]
    fn removal_deletes_every_duplicate() {
        let mut tree = BoxTree::new(span(0.0, 100.0), 1);
        for key in 0_i32..8 {
            tree.insert(key, span(0.0, 100.0));
        }
        tree.remove(&3, &span(0.0, 100.0));
        assert!(!tree.query(&span(0.0, 100.0)).contains(&3));
        assert_eq!(tree.query(&span(0.0, 100.0)).len(), 7);
    }

    #[test]
    fn identical_boxes_respect_the_depth_limit() {
        let mut tree = BoxTree::new(span(0.0, 1.0), 1);
        for key in 0_i32..32 {
            tree.insert(key, span(0.5, 0.5));
        }
        assert_eq!(tree.query(&span(0.5, 0.5)).len(), 32);
    }
}
