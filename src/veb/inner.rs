//! Internal node: recursive cluster decomposition with a summary.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use super::node::Node;
use crate::universe::split_shift;

/// Internal node of the recursive layout.
///
/// Splits its universe into `2^shift` clusters of `2^shift` keys each,
/// with a summary structure tracking which clusters are occupied. Ordered
/// queries descend into exactly one child per level.
///
/// Invariants:
/// - The smallest key lives only in the cached `bounds`, never in a
///   cluster.
/// - The largest key lives in both `bounds` and its cluster whenever the
///   node holds two or more keys.
/// - A cluster slot is `Some` exactly while that cluster holds a key, and
///   the matching summary bit is set exactly then.
#[derive(Debug, Clone)]
pub struct InnerNode {
    /// Number of key bits that select the in-cluster offset; the
    /// remaining upper bits select the cluster
    shift: u32,
    /// Occupancy structure over cluster numbers, one key per occupied
    /// cluster
    summary: Box<Node>,
    /// Lazily allocated children, `None` while a cluster holds no keys
    clusters: Vec<Option<Box<Node>>>,
    /// Cached (min, max) of the whole subtree, `None` when empty
    bounds: Option<(u32, u32)>,
}

impl InnerNode {
    /// Create an empty node covering `[0, universe)`.
    ///
    /// The summary is built eagerly; clusters are allocated on first
    /// insert into them.
    pub fn new(universe: u64) -> Self {
        let shift = split_shift(universe);
        let cluster_count = 1usize << shift;
        Self {
            shift,
            summary: Box::new(Node::with_universe(cluster_count as u64)),
            clusters: vec![None; cluster_count],
            bounds: None,
        }
    }

    /// Cluster number for a key.
    #[inline(always)]
    fn high(&self, value: u32) -> usize {
        (value >> self.shift) as usize
    }

    /// Offset of a key within its cluster.
    #[inline(always)]
    fn low(&self, value: u32) -> u32 {
        value & ((1u32 << self.shift) - 1)
    }

    /// Recombine a cluster number and an in-cluster offset into a key.
    #[inline(always)]
    fn index(&self, cluster: usize, offset: u32) -> u32 {
        ((cluster as u32) << self.shift) | offset
    }

    /// Smallest key stored in an occupied cluster.
    fn cluster_min(&self, cluster: usize) -> u32 {
        self.clusters[cluster]
            .as_deref()
            .and_then(|c| c.min())
            .expect("Cluster should be occupied")
    }

    /// Largest key stored in an occupied cluster.
    fn cluster_max(&self, cluster: usize) -> u32 {
        self.clusters[cluster]
            .as_deref()
            .and_then(|c| c.max())
            .expect("Cluster should be occupied")
    }

    /// Insert a key into the node.
    ///
    /// # Returns
    /// * `true` if the key was newly inserted
    /// * `false` if the key already existed
    pub fn insert(&mut self, value: u32) -> bool {
        let Some((min, max)) = self.bounds else {
            // First key lives only in the cached bounds
            self.bounds = Some((value, value));
            return true;
        };

        if value == min || value == max {
            return false;
        }

        // A new global minimum swaps places with the old one, which is
        // pushed down into the clusters instead
        let mut value = value;
        if value < min {
            self.bounds = Some((value, max));
            value = min;
        } else if value > max {
            self.bounds = Some((min, value));
        }

        let i = self.high(value);
        let low = self.low(value);

        match self.clusters[i].as_deref_mut() {
            Some(cluster) => cluster.insert(low),
            None => {
                // First key routed to this cluster: record it in the
                // summary and allocate the cluster on demand
                self.summary.insert(i as u32);
                let mut cluster = Node::with_universe(1u64 << self.shift);
                cluster.insert(low);
                self.clusters[i] = Some(Box::new(cluster));
                true
            }
        }
    }

    /// Remove a key from the node.
    ///
    /// # Returns
    /// * `true` if the key was removed (existed before)
    /// * `false` if the key didn't exist
    pub fn remove(&mut self, value: u32) -> bool {
        let Some((min, max)) = self.bounds else {
            return false;
        };

        if value < min || value > max {
            return false;
        }

        if min == max {
            // Single key, held only in the cached bounds
            if value != min {
                return false;
            }
            self.bounds = None;
            return true;
        }

        // Removing the minimum promotes the smallest clustered key into
        // the bounds cache, then deletes that key from its cluster below
        let mut value = value;
        let mut cur_min = min;
        if value == min {
            let first = self.summary.min().expect("Summary should be occupied") as usize;
            value = self.index(first, self.cluster_min(first));
            cur_min = value;
            self.bounds = Some((cur_min, max));
        }

        let i = self.high(value);
        let low = self.low(value);

        let removed = match self.clusters[i].as_deref_mut() {
            Some(cluster) => cluster.remove(low),
            None => return false,
        };
        if !removed {
            return false;
        }

        // Drop the cluster the moment it empties so memory and summary
        // track occupancy exactly
        if self.clusters[i].as_deref().is_some_and(|c| c.is_empty()) {
            self.summary.remove(i as u32);
            self.clusters[i] = None;
        }

        // Removing the maximum re-derives it from the last occupied
        // cluster, or collapses to the minimum when none remain
        if value == max {
            let new_max = match self.summary.max() {
                Some(last) => {
                    let last = last as usize;
                    self.index(last, self.cluster_max(last))
                }
                None => cur_min,
            };
            self.bounds = Some((cur_min, new_max));
        }

        true
    }

    /// Check if a key exists in the node.
    pub fn contains(&self, value: u32) -> bool {
        let Some((min, max)) = self.bounds else {
            return false;
        };
        if value == min || value == max {
            return true;
        }
        if value < min || value > max {
            return false;
        }
        match self.clusters[self.high(value)].as_deref() {
            Some(cluster) => cluster.contains(self.low(value)),
            None => false,
        }
    }

    /// Find the smallest stored key at or above `value`.
    ///
    /// # Algorithm
    /// 1. Quick checks against the cached bounds resolve queries at or
    ///    below the minimum and above the maximum without descending.
    /// 2. The value's own cluster answers when its maximum reaches the
    ///    queried offset, costing one O(1) probe before the descent.
    /// 3. Otherwise the summary locates the next occupied cluster, whose
    ///    cached minimum is the answer.
    ///
    /// Either step 2 or step 3 recurses, never both, which bounds the
    /// whole search by the height of the structure.
    pub fn successor(&self, value: u32) -> Option<u32> {
        let (min, max) = self.bounds?;

        if value <= min {
            return Some(min);
        }
        if value > max {
            return None;
        }

        let i = self.high(value);
        let low = self.low(value);

        if let Some(cluster) = self.clusters[i].as_deref() {
            if cluster.max().is_some_and(|m| low <= m) {
                let offset = cluster.successor(low)?;
                return Some(self.index(i, offset));
            }
        }

        let next = self.summary.successor(i as u32 + 1)? as usize;
        Some(self.index(next, self.cluster_min(next)))
    }

    /// Find the largest stored key at or below `value`.
    ///
    /// # Algorithm
    /// Mirror image of `successor`, with one extra case: when no occupied
    /// cluster exists below the value's own, the answer is the cached
    /// minimum, which never lives in a cluster.
    pub fn predecessor(&self, value: u32) -> Option<u32> {
        let (min, max) = self.bounds?;

        if value >= max {
            return Some(max);
        }
        if value < min {
            return None;
        }

        let i = self.high(value);
        let low = self.low(value);

        if let Some(cluster) = self.clusters[i].as_deref() {
            if cluster.min().is_some_and(|m| m <= low) {
                let offset = cluster.predecessor(low)?;
                return Some(self.index(i, offset));
            }
        }

        if let Some(prev) = (i as u32)
            .checked_sub(1)
            .and_then(|below| self.summary.predecessor(below))
        {
            let prev = prev as usize;
            return Some(self.index(prev, self.cluster_max(prev)));
        }
        Some(min)
    }

    /// Get the smallest stored key, or `None` if empty.
    #[inline]
    pub fn min(&self) -> Option<u32> {
        self.bounds.map(|(min, _)| min)
    }

    /// Get the largest stored key, or `None` if empty.
    #[inline]
    pub fn max(&self) -> Option<u32> {
        self.bounds.map(|(_, max)| max)
    }

    /// Check if the node holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}
