//! Node enum: picks the flat bitmap or the recursive layout per universe.

use super::inner::InnerNode;
use super::leaf::Leaf;
use crate::constants::LEAF_BITS;

/// One node of the recursive structure.
///
/// Universes of at most 256 keys are served by a flat bitmap; anything
/// larger splits into clusters recursively. Every operation dispatches
/// to the matching representation.
#[derive(Debug, Clone)]
pub enum Node {
    /// Flat 256-bit bitmap, the base of the recursion
    Leaf(Leaf),
    /// Cluster decomposition with a summary
    Inner(InnerNode),
}

impl Node {
    /// Create an empty node covering `[0, universe)`.
    pub fn with_universe(universe: u64) -> Self {
        if universe <= LEAF_BITS {
            Node::Leaf(Leaf::new())
        } else {
            Node::Inner(InnerNode::new(universe))
        }
    }

    /// Insert a key, reporting whether it was newly added.
    #[inline]
    pub fn insert(&mut self, value: u32) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.insert(value),
            Node::Inner(inner) => inner.insert(value),
        }
    }

    /// Remove a key, reporting whether it was present.
    #[inline]
    pub fn remove(&mut self, value: u32) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.remove(value),
            Node::Inner(inner) => inner.remove(value),
        }
    }

    /// Check if a key is stored.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.contains(value),
            Node::Inner(inner) => inner.contains(value),
        }
    }

    /// Find the smallest stored key at or above `value`.
    #[inline]
    pub fn successor(&self, value: u32) -> Option<u32> {
        match self {
            Node::Leaf(leaf) => leaf.successor(value),
            Node::Inner(inner) => inner.successor(value),
        }
    }

    /// Find the largest stored key at or below `value`.
    #[inline]
    pub fn predecessor(&self, value: u32) -> Option<u32> {
        match self {
            Node::Leaf(leaf) => leaf.predecessor(value),
            Node::Inner(inner) => inner.predecessor(value),
        }
    }

    /// Get the smallest stored key, or `None` if empty.
    #[inline]
    pub fn min(&self) -> Option<u32> {
        match self {
            Node::Leaf(leaf) => leaf.min(),
            Node::Inner(inner) => inner.min(),
        }
    }

    /// Get the largest stored key, or `None` if empty.
    #[inline]
    pub fn max(&self) -> Option<u32> {
        match self {
            Node::Leaf(leaf) => leaf.max(),
            Node::Inner(inner) => inner.max(),
        }
    }

    /// Check if the node holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.is_empty(),
            Node::Inner(inner) => inner.is_empty(),
        }
    }
}
