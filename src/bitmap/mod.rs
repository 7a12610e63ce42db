//! Low-level bitmap operations using CPU intrinsics.
//!
//! These functions provide efficient bit manipulation for 256-bit leaf
//! bitmaps represented as arrays of 4 u64 words.

mod basic;
mod search;

// Re-export all public functions
pub use basic::{clear_bit, is_empty, is_set, set_bit, test_and_clear_bit, test_and_set_bit};
pub use search::{first_set_bit, last_set_bit, next_set_bit, prev_set_bit};
