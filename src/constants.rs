//! Core constants for the van Emde Boas layout.

/// Number of keys covered by one leaf (recursion stops here).
///
/// Universes of this size or smaller are stored as a flat 256-bit
/// bitmap instead of recursing further, so the deepest levels of the
/// recursion collapse into a few word operations.
pub const LEAF_BITS: u64 = 256;

/// Number of u64 words in a 256-bit leaf bitmap (256 / 64 = 4)
pub const BITMAP_WORDS: usize = 4;

/// Largest supported universe size (keys are u32, so 2^32)
pub const MAX_UNIVERSE: u64 = 1 << 32;

/// Smallest supported universe size (a set over fewer than two
/// possible keys has no ordering structure to maintain)
pub const MIN_UNIVERSE: u64 = 2;
