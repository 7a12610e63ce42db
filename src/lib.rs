//! # veb-set
//!
//! Ordered set of u32 keys drawn from a fixed universe [0, U).
//! O(1) min/max. Stable O(log log U) latency.
//!
//! ## Features
//! - O(1) min and max via cached bounds
//! - O(log log U) insert, remove, contains, successor, predecessor
//! - Lazy cluster allocation: memory tracks occupancy, not universe size
//! - no_std compatible (requires alloc)

#![no_std]

extern crate alloc;

mod bitmap;
mod constants;
mod universe;
mod veb;

pub use veb::{Iter, RangeIter, VebSet};
