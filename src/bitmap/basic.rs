//! Basic single-bit operations.

use crate::constants::BITMAP_WORDS;

/// Set a bit in the bitmap at the given index.
///
/// # Arguments
/// * `bitmap` - Mutable reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Performance
/// O(1) - direct array access and bitwise OR
#[inline]
pub fn set_bit(bitmap: &mut [u64; BITMAP_WORDS], idx: u8) {
    let word = idx as usize / 64;
    let bit = idx as usize % 64;
    bitmap[word] |= 1u64 << bit;
}

/// Clear a bit in the bitmap at the given index.
///
/// # Arguments
/// * `bitmap` - Mutable reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Performance
/// O(1) - direct array access and bitwise AND
#[inline]
pub fn clear_bit(bitmap: &mut [u64; BITMAP_WORDS], idx: u8) {
    let word = idx as usize / 64;
    let bit = idx as usize % 64;
    bitmap[word] &= !(1u64 << bit);
}

/// Check if a bit is set in the bitmap.
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Returns
/// `true` if bit is set, `false` otherwise
///
/// # Performance
/// O(1) - direct array access and bitwise AND
#[inline]
pub fn is_set(bitmap: &[u64; BITMAP_WORDS], idx: u8) -> bool {
    let word = idx as usize / 64;
    let bit = idx as usize % 64;
    bitmap[word] & (1u64 << bit) != 0
}

/// Set a bit and report whether it changed.
///
/// # Arguments
/// * `bitmap` - Mutable reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Returns
/// `true` if the bit was NOT set before (newly set), `false` if already set
///
/// # Performance
/// O(1) - one test plus one bitwise OR
#[inline]
pub fn test_and_set_bit(bitmap: &mut [u64; BITMAP_WORDS], idx: u8) -> bool {
    if is_set(bitmap, idx) {
        return false;
    }
    set_bit(bitmap, idx);
    true
}

/// Clear a bit and report whether it changed.
///
/// # Arguments
/// * `bitmap` - Mutable reference to 4-word bitmap
/// * `idx` - Bit index (0-255)
///
/// # Returns
/// `true` if the bit was set before (newly cleared), `false` if already clear
///
/// # Performance
/// O(1) - one test plus one bitwise AND
#[inline]
pub fn test_and_clear_bit(bitmap: &mut [u64; BITMAP_WORDS], idx: u8) -> bool {
    if !is_set(bitmap, idx) {
        return false;
    }
    clear_bit(bitmap, idx);
    true
}

/// Check if bitmap is empty (no bits set).
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
///
/// # Returns
/// `true` if no bits are set, `false` otherwise
///
/// # Performance
/// O(1) - checks all 4 words
#[inline]
pub fn is_empty(bitmap: &[u64; BITMAP_WORDS]) -> bool {
    bitmap[0] == 0 && bitmap[1] == 0 && bitmap[2] == 0 && bitmap[3] == 0
}
