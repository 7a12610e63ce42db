//! Iterator support for VebSet traversal.
//!
//! Both iterators walk the set with repeated successor queries, so each
//! element costs one O(log log U) descent and the cursor is the only
//! state. Exhausted iterators stay exhausted.

use core::ops::{Bound, RangeBounds};

use super::veb::VebSet;

/// Smallest stored key strictly above `key`, bounded by the universe.
fn step(set: &VebSet, key: u32) -> Option<u32> {
    let next = key.checked_add(1)?;
    if (next as u64) < set.universe() {
        set.successor(next)
    } else {
        None
    }
}

/// Iterator over keys in ascending order.
///
/// The cursor always holds the next key to yield, already confirmed
/// present, so `next` is a yield plus one successor query.
///
/// # Example
/// ```rust
/// use veb_set::VebSet;
///
/// let mut set = VebSet::new();
/// set.insert(30);
/// set.insert(10);
/// set.insert(20);
///
/// let keys: Vec<u32> = set.iter().collect();
/// assert_eq!(keys, vec![10, 20, 30]);
/// ```
pub struct Iter<'a> {
    /// The set being traversed
    set: &'a VebSet,

    /// Next key to yield, `None` once exhausted
    cursor: Option<u32>,
}

impl<'a> Iter<'a> {
    /// Create an iterator positioned at the smallest stored key.
    ///
    /// # Performance
    /// O(1) - reads the cached minimum
    pub(crate) fn new(set: &'a VebSet) -> Self {
        Self {
            set,
            cursor: set.min(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = step(self.set, key);
        Some(key)
    }
}

/// Iterator over keys within a range, in ascending order.
///
/// Positions itself with one successor query at the range start, then
/// steps like [`Iter`] until a key crosses the end bound.
///
/// # Example
/// ```rust
/// use veb_set::VebSet;
///
/// let mut set = VebSet::new();
/// for k in [5u32, 15, 25, 35] {
///     set.insert(k);
/// }
///
/// let keys: Vec<u32> = set.range(10..30).collect();
/// assert_eq!(keys, vec![15, 25]);
/// ```
pub struct RangeIter<'a> {
    /// The set being traversed
    set: &'a VebSet,

    /// Next candidate key, `None` once exhausted
    cursor: Option<u32>,

    /// End bound for range checking
    end: Bound<u32>,
}

impl<'a> RangeIter<'a> {
    /// Create an iterator positioned at the first stored key in range.
    ///
    /// # Performance
    /// O(log log U) - one successor query locates the start
    pub(crate) fn new<R>(set: &'a VebSet, range: R) -> Self
    where
        R: RangeBounds<u32>,
    {
        let start = match range.start_bound() {
            Bound::Included(&key) => Some(key),
            Bound::Excluded(&key) => key.checked_add(1),
            Bound::Unbounded => Some(0),
        };

        // A start at or past the universe cannot precede any stored key
        let cursor = start.and_then(|from| {
            if (from as u64) < set.universe() {
                set.successor(from)
            } else {
                None
            }
        });

        Self {
            set,
            cursor,
            end: range.end_bound().cloned(),
        }
    }

    /// Check if a key is past the end bound.
    fn is_past_end(&self, key: u32) -> bool {
        match self.end {
            Bound::Included(end) => key > end,
            Bound::Excluded(end) => key >= end,
            Bound::Unbounded => false,
        }
    }
}

impl<'a> Iterator for RangeIter<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        if self.is_past_end(key) {
            self.cursor = None;
            return None;
        }
        self.cursor = step(self.set, key);
        Some(key)
    }
}

/// Public API methods for VebSet iterators.
impl VebSet {
    /// Create an iterator over all keys in ascending order.
    ///
    /// # Performance
    /// O(log log U) per element
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// set.insert(10);
    /// set.insert(20);
    /// set.insert(30);
    ///
    /// let keys: Vec<u32> = set.iter().collect();
    /// assert_eq!(keys, vec![10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Create an iterator over keys within a specified range.
    ///
    /// Supports all range types:
    /// - `set.range(10..20)` - half-open range [10, 20)
    /// - `set.range(10..=20)` - closed range [10, 20]
    /// - `set.range(..20)` - unbounded start, bounded end
    /// - `set.range(10..)` - bounded start, unbounded end
    /// - `set.range(..)` - full range (same as `iter()`)
    ///
    /// Range endpoints may lie outside the configured universe; keys
    /// outside it simply never match.
    ///
    /// # Arguments
    /// * `range` - Range bounds (implements `RangeBounds<u32>`)
    ///
    /// # Performance
    /// O(log log U) setup, then O(log log U) per element
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// for i in 0..100 {
    ///     set.insert(i);
    /// }
    ///
    /// let keys: Vec<u32> = set.range(10..20).collect();
    /// assert_eq!(keys.len(), 10);
    ///
    /// let keys: Vec<u32> = set.range(10..=20).collect();
    /// assert_eq!(keys.len(), 11);
    ///
    /// let keys: Vec<u32> = set.range(..50).collect();
    /// assert_eq!(keys.len(), 50);
    ///
    /// let keys: Vec<u32> = set.range(50..).collect();
    /// assert_eq!(keys.len(), 50);
    /// ```
    #[inline]
    pub fn range<R>(&self, range: R) -> RangeIter<'_>
    where
        R: RangeBounds<u32>,
    {
        RangeIter::new(self, range)
    }
}
