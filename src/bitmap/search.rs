//! Search operations for finding set bits in bitmap.

use crate::constants::BITMAP_WORDS;

/// Find first set bit (minimum).
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
///
/// # Returns
/// Index of first set bit, or None if bitmap is empty
///
/// # Performance
/// O(1) - uses CPU intrinsics (TZCNT) for fast bit scanning
#[inline]
pub fn first_set_bit(bitmap: &[u64; BITMAP_WORDS]) -> Option<u8> {
    for (word_idx, &word) in bitmap.iter().enumerate() {
        if word != 0 {
            let bit_in_word = word.trailing_zeros() as usize;
            return Some((word_idx * 64 + bit_in_word) as u8);
        }
    }
    None
}

/// Find last set bit (maximum).
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
///
/// # Returns
/// Index of last set bit, or None if bitmap is empty
///
/// # Performance
/// O(1) - uses CPU intrinsics (LZCNT) for fast bit scanning
#[inline]
pub fn last_set_bit(bitmap: &[u64; BITMAP_WORDS]) -> Option<u8> {
    for (word_idx, &word) in bitmap.iter().enumerate().rev() {
        if word != 0 {
            let bit_in_word = 63 - word.leading_zeros() as usize;
            return Some((word_idx * 64 + bit_in_word) as u8);
        }
    }
    None
}

/// Find first set bit at or after the given index.
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
/// * `from` - Index to search from, inclusive (0-255)
///
/// # Returns
/// Index of next set bit, or None if no set bits found
///
/// # Performance
/// O(1) - uses CPU intrinsics (TZCNT) for fast bit scanning
#[inline]
pub fn next_set_bit(bitmap: &[u64; BITMAP_WORDS], from: u8) -> Option<u8> {
    let start_word = from as usize / 64;
    let start_bit = from as usize % 64;

    // Bits at or above `from` in the first word
    let masked = bitmap[start_word] & (!0u64 << start_bit);
    if masked != 0 {
        let bit_in_word = masked.trailing_zeros() as usize;
        return Some((start_word * 64 + bit_in_word) as u8);
    }

    // Check subsequent words
    for word_idx in (start_word + 1)..BITMAP_WORDS {
        if bitmap[word_idx] != 0 {
            let bit_in_word = bitmap[word_idx].trailing_zeros() as usize;
            return Some((word_idx * 64 + bit_in_word) as u8);
        }
    }

    None
}

/// Find last set bit at or before the given index.
///
/// # Arguments
/// * `bitmap` - Reference to 4-word bitmap
/// * `from` - Index to search from, inclusive (0-255)
///
/// # Returns
/// Index of previous set bit, or None if no set bits found
///
/// # Performance
/// O(1) - uses CPU intrinsics (LZCNT) for fast bit scanning
#[inline]
pub fn prev_set_bit(bitmap: &[u64; BITMAP_WORDS], from: u8) -> Option<u8> {
    let end_word = from as usize / 64;
    let end_bit = from as usize % 64;

    // Bits at or below `from` in the last word
    let masked = bitmap[end_word] & (!0u64 >> (63 - end_bit));
    if masked != 0 {
        let bit_in_word = 63 - masked.leading_zeros() as usize;
        return Some((end_word * 64 + bit_in_word) as u8);
    }

    // Check preceding words
    for word_idx in (0..end_word).rev() {
        if bitmap[word_idx] != 0 {
            let bit_in_word = 63 - bitmap[word_idx].leading_zeros() as usize;
            return Some((word_idx * 64 + bit_in_word) as u8);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::set_bit;

    #[test]
    fn test_first_set_bit() {
        // Empty bitmap
        let bitmap = [0u64; 4];
        assert_eq!(first_set_bit(&bitmap), None);

        // First word
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 5);
        assert_eq!(first_set_bit(&bitmap), Some(5));

        // Multiple bits - should return first
        set_bit(&mut bitmap, 10);
        set_bit(&mut bitmap, 100);
        assert_eq!(first_set_bit(&bitmap), Some(5));

        // Second word
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 67);
        assert_eq!(first_set_bit(&bitmap), Some(67));

        // Last word
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 255);
        assert_eq!(first_set_bit(&bitmap), Some(255));
    }

    #[test]
    fn test_last_set_bit() {
        // Empty bitmap
        let bitmap = [0u64; 4];
        assert_eq!(last_set_bit(&bitmap), None);

        // Last word
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 200);
        assert_eq!(last_set_bit(&bitmap), Some(200));

        // Multiple bits - should return last
        set_bit(&mut bitmap, 5);
        set_bit(&mut bitmap, 100);
        assert_eq!(last_set_bit(&bitmap), Some(200));

        // First word
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 10);
        assert_eq!(last_set_bit(&bitmap), Some(10));

        // Bit 255 (last possible)
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 255);
        assert_eq!(last_set_bit(&bitmap), Some(255));
    }

    #[test]
    fn test_next_set_bit() {
        let mut bitmap = [0u64; 4];

        // Set some bits
        set_bit(&mut bitmap, 5);
        set_bit(&mut bitmap, 67);
        set_bit(&mut bitmap, 200);

        // Inclusive: a set start index finds itself
        assert_eq!(next_set_bit(&bitmap, 0), Some(5));
        assert_eq!(next_set_bit(&bitmap, 5), Some(5));
        assert_eq!(next_set_bit(&bitmap, 6), Some(67));
        assert_eq!(next_set_bit(&bitmap, 67), Some(67));
        assert_eq!(next_set_bit(&bitmap, 68), Some(200));
        assert_eq!(next_set_bit(&bitmap, 200), Some(200));
        assert_eq!(next_set_bit(&bitmap, 201), None);

        // Edge cases
        assert_eq!(next_set_bit(&bitmap, 255), None);
        let empty = [0u64; 4];
        assert_eq!(next_set_bit(&empty, 0), None);
    }

    #[test]
    fn test_next_set_bit_word_boundaries() {
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 63);
        set_bit(&mut bitmap, 64);
        set_bit(&mut bitmap, 192);

        assert_eq!(next_set_bit(&bitmap, 63), Some(63));
        assert_eq!(next_set_bit(&bitmap, 64), Some(64));
        assert_eq!(next_set_bit(&bitmap, 65), Some(192));
        assert_eq!(next_set_bit(&bitmap, 192), Some(192));
        assert_eq!(next_set_bit(&bitmap, 193), None);
    }

    #[test]
    fn test_prev_set_bit() {
        let mut bitmap = [0u64; 4];

        // Set some bits
        set_bit(&mut bitmap, 5);
        set_bit(&mut bitmap, 67);
        set_bit(&mut bitmap, 200);

        // Inclusive: a set start index finds itself
        assert_eq!(prev_set_bit(&bitmap, 255), Some(200));
        assert_eq!(prev_set_bit(&bitmap, 200), Some(200));
        assert_eq!(prev_set_bit(&bitmap, 199), Some(67));
        assert_eq!(prev_set_bit(&bitmap, 67), Some(67));
        assert_eq!(prev_set_bit(&bitmap, 66), Some(5));
        assert_eq!(prev_set_bit(&bitmap, 5), Some(5));
        assert_eq!(prev_set_bit(&bitmap, 4), None);

        // Edge cases
        assert_eq!(prev_set_bit(&bitmap, 0), None);
        let empty = [0u64; 4];
        assert_eq!(prev_set_bit(&empty, 255), None);
    }

    #[test]
    fn test_prev_set_bit_word_boundaries() {
        let mut bitmap = [0u64; 4];
        set_bit(&mut bitmap, 63);
        set_bit(&mut bitmap, 64);
        set_bit(&mut bitmap, 192);

        assert_eq!(prev_set_bit(&bitmap, 62), None);
        assert_eq!(prev_set_bit(&bitmap, 63), Some(63));
        assert_eq!(prev_set_bit(&bitmap, 64), Some(64));
        assert_eq!(prev_set_bit(&bitmap, 191), Some(64));
        assert_eq!(prev_set_bit(&bitmap, 192), Some(192));
    }
}
