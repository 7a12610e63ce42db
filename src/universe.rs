//! Universe splitting arithmetic for the recursive layout.

/// Compute the cluster shift for a universe of the given size.
///
/// Splits a universe of `u` keys into `2^shift` clusters of `2^shift`
/// keys each, sized so that `2^(2*shift) >= u`. Rounding both halves to
/// the same power of two keeps key decomposition a shift and a mask:
/// key `x` lives in cluster `x >> shift` at offset `x & ((1 << shift) - 1)`.
///
/// # Arguments
/// * `universe` - Universe size, at least 2
///
/// # Returns
/// Shift amount in bits (half the key width, rounded up)
///
/// # Performance
/// O(1) - leading-zeros intrinsic plus integer halving
#[inline]
pub fn split_shift(universe: u64) -> u32 {
    debug_assert!(universe >= 2, "universe too small to split");
    let key_bits = 64 - (universe - 1).leading_zeros();
    key_bits.div_ceil(2)
}
