//! Leaf node backed by a flat 256-bit bitmap.

use crate::bitmap;
use crate::constants::{BITMAP_WORDS, LEAF_BITS};

/// Leaf of the recursive layout.
///
/// Covers a universe of at most 256 keys with one bit per key, so the
/// recursion bottoms out in a constant number of word operations: every
/// query on a leaf is a masked scan over 4 u64 words.
///
/// Unlike internal nodes, a leaf stores all of its keys in the bitmap;
/// there is no cached minimum to exclude.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    /// Presence bitmap, bit i set iff key i is stored
    bits: [u64; BITMAP_WORDS],
}

impl Leaf {
    /// Create an empty leaf.
    pub fn new() -> Self {
        Self {
            bits: [0; BITMAP_WORDS],
        }
    }

    /// Insert a key into the leaf.
    ///
    /// # Arguments
    /// * `value` - Key to insert (0-255)
    ///
    /// # Returns
    /// * `true` if the key was newly inserted
    /// * `false` if the key already existed
    pub fn insert(&mut self, value: u32) -> bool {
        debug_assert!((value as u64) < LEAF_BITS, "key outside leaf universe");
        bitmap::test_and_set_bit(&mut self.bits, value as u8)
    }

    /// Remove a key from the leaf.
    ///
    /// # Arguments
    /// * `value` - Key to remove (0-255)
    ///
    /// # Returns
    /// * `true` if the key was removed (existed before)
    /// * `false` if the key didn't exist
    pub fn remove(&mut self, value: u32) -> bool {
        debug_assert!((value as u64) < LEAF_BITS, "key outside leaf universe");
        bitmap::test_and_clear_bit(&mut self.bits, value as u8)
    }

    /// Check if a key exists in the leaf.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        debug_assert!((value as u64) < LEAF_BITS, "key outside leaf universe");
        bitmap::is_set(&self.bits, value as u8)
    }

    /// Check if the leaf holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        bitmap::is_empty(&self.bits)
    }

    /// Get the smallest stored key, or `None` if the leaf is empty.
    #[inline]
    pub fn min(&self) -> Option<u32> {
        bitmap::first_set_bit(&self.bits).map(u32::from)
    }

    /// Get the largest stored key, or `None` if the leaf is empty.
    #[inline]
    pub fn max(&self) -> Option<u32> {
        bitmap::last_set_bit(&self.bits).map(u32::from)
    }

    /// Find the smallest stored key at or above `value`.
    ///
    /// Values past the end of the leaf have no successor; parents probe
    /// one slot past their last cluster when scanning forward, so that
    /// case answers `None` instead of being a contract violation.
    pub fn successor(&self, value: u32) -> Option<u32> {
        if value as u64 >= LEAF_BITS {
            return None;
        }
        bitmap::next_set_bit(&self.bits, value as u8).map(u32::from)
    }

    /// Find the largest stored key at or below `value`.
    ///
    /// Values past the end of the leaf sit above every stored key, so
    /// they answer the leaf maximum.
    pub fn predecessor(&self, value: u32) -> Option<u32> {
        if value as u64 >= LEAF_BITS {
            return self.max();
        }
        bitmap::prev_set_bit(&self.bits, value as u8).map(u32::from)
    }
}
