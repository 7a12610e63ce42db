//! Main VebSet structure for ordered integer sets.

use super::node::Node;
use crate::constants::{MAX_UNIVERSE, MIN_UNIVERSE};

/// Ordered integer set with sublogarithmic complexity.
///
/// A van Emde Boas layout over a fixed universe of u32 keys. Every
/// operation runs in O(log log U) time in the universe size U,
/// independent of the number of stored elements.
///
/// # Key Features
/// - O(log log U) insert, remove, contains, successor, predecessor
/// - O(1) min and max via cached bounds
/// - Lazy cluster allocation: memory tracks occupancy, not universe size
/// - Zero dependencies: no_std compatible (requires alloc)
///
/// # Architecture
/// - Each level splits its universe into `√U` clusters of `√U` keys
/// - A summary structure per level tracks which clusters are occupied
/// - 256-bit bitmap leaves stop the recursion
/// - The minimum of every level is cached outside the clusters, so
///   ordered queries and deletes descend into exactly one child
///
/// # Performance Characteristics
/// - Three levels cover the full 32-bit universe
/// - Insert/remove/queries: a handful of cache lines per level
/// - Memory: ~520 KiB fixed tables for the full universe, then
///   proportional to the number of occupied clusters
///
/// # Example
/// ```rust
/// use veb_set::VebSet;
///
/// let mut set = VebSet::new();
/// set.insert(42);
/// set.insert(7);
/// set.insert(100_000);
///
/// assert_eq!(set.min(), Some(7));
/// assert_eq!(set.successor(43), Some(100_000));
/// assert_eq!(set.predecessor(41), Some(7));
///
/// set.remove(7);
/// assert_eq!(set.min(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct VebSet {
    /// Root of the recursive structure
    root: Node,

    /// Number of keys representable: valid keys are `0..universe`
    universe: u64,

    /// Number of keys currently stored
    len: usize,
}

impl VebSet {
    /// Create an empty set over the full 32-bit key space.
    ///
    /// # Performance
    /// O(√U) - builds the root cluster table and summary eagerly;
    /// clusters themselves are allocated on first use
    ///
    /// # Memory Usage
    /// ~520 KiB fixed overhead for the full universe (root cluster
    /// table plus summaries)
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert!(set.is_empty());
    /// set.insert(u32::MAX);
    /// assert_eq!(set.max(), Some(u32::MAX));
    /// ```
    pub fn new() -> Self {
        Self::with_universe(MAX_UNIVERSE)
    }

    /// Create an empty set over the universe `[0, universe)`.
    ///
    /// Smaller universes build proportionally smaller tables; a universe
    /// of at most 256 is served by a single flat bitmap.
    ///
    /// # Arguments
    /// * `universe` - Number of representable keys, `2..=2^32`
    ///
    /// # Panics
    /// Panics if `universe` is below 2 or above `2^32`.
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::with_universe(10_000);
    /// set.insert(9_999);
    /// assert_eq!(set.max(), Some(9_999));
    /// ```
    pub fn with_universe(universe: u64) -> Self {
        assert!(
            universe >= MIN_UNIVERSE,
            "universe must hold at least two keys"
        );
        assert!(
            universe <= MAX_UNIVERSE,
            "universe exceeds the 32-bit key space"
        );
        Self {
            root: Node::with_universe(universe),
            universe,
            len: 0,
        }
    }

    /// Check that a key is inside the configured universe.
    #[inline]
    fn check_key(&self, key: u32) {
        assert!(
            (key as u64) < self.universe,
            "key {} outside universe [0, {})",
            key,
            self.universe
        );
    }

    /// Insert a key into the set.
    ///
    /// # Arguments
    /// * `key` - The key to insert, `0 <= key < universe`
    ///
    /// # Returns
    /// * `true` if the key was newly inserted
    /// * `false` if the key already existed
    ///
    /// # Panics
    /// Panics if `key` lies outside the configured universe.
    ///
    /// # Performance
    /// O(log log U) - descends one cluster chain
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert!(set.insert(42));   // New key
    /// assert!(!set.insert(42));  // Already exists
    /// ```
    pub fn insert(&mut self, key: u32) -> bool {
        self.check_key(key);
        let inserted = self.root.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove a key from the set.
    ///
    /// # Arguments
    /// * `key` - The key to remove, `0 <= key < universe`
    ///
    /// # Returns
    /// * `true` if the key was removed (existed before)
    /// * `false` if the key didn't exist
    ///
    /// # Panics
    /// Panics if `key` lies outside the configured universe.
    ///
    /// # Performance
    /// O(log log U) - descends one cluster chain; an emptied cluster is
    /// freed on the way
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert!(!set.remove(42));  // Key doesn't exist
    /// set.insert(42);
    /// assert!(set.remove(42));   // Key removed
    /// assert!(!set.remove(42));  // Key no longer exists
    /// ```
    pub fn remove(&mut self, key: u32) -> bool {
        self.check_key(key);
        let removed = self.root.remove(key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Check if a key exists in the set.
    ///
    /// # Arguments
    /// * `key` - The key to search for, `0 <= key < universe`
    ///
    /// # Returns
    /// * `true` if the key exists in the set
    /// * `false` if the key does not exist
    ///
    /// # Panics
    /// Panics if `key` lies outside the configured universe.
    ///
    /// # Performance
    /// O(log log U) - cached bounds answer the extremes without descending
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert!(!set.contains(42));
    /// set.insert(42);
    /// assert!(set.contains(42));
    /// ```
    pub fn contains(&self, key: u32) -> bool {
        self.check_key(key);
        self.root.contains(key)
    }

    /// Find the smallest stored key at or above `key`.
    ///
    /// The search is inclusive: a stored `key` answers itself. Step one
    /// past a result to continue an ascending scan.
    ///
    /// # Arguments
    /// * `key` - Lower bound of the search, `0 <= key < universe`
    ///
    /// # Returns
    /// Smallest stored key `>= key`, or `None` if all stored keys are
    /// smaller
    ///
    /// # Panics
    /// Panics if `key` lies outside the configured universe.
    ///
    /// # Performance
    /// O(log log U) - one descent; each level recurses into either the
    /// key's own cluster or the summary, never both
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// set.insert(10);
    /// set.insert(20);
    ///
    /// assert_eq!(set.successor(10), Some(10));
    /// assert_eq!(set.successor(15), Some(20));
    /// assert_eq!(set.successor(21), None);
    /// ```
    pub fn successor(&self, key: u32) -> Option<u32> {
        self.check_key(key);
        self.root.successor(key)
    }

    /// Find the largest stored key at or below `key`.
    ///
    /// The search is inclusive: a stored `key` answers itself.
    ///
    /// # Arguments
    /// * `key` - Upper bound of the search, `0 <= key < universe`
    ///
    /// # Returns
    /// Largest stored key `<= key`, or `None` if all stored keys are
    /// larger
    ///
    /// # Panics
    /// Panics if `key` lies outside the configured universe.
    ///
    /// # Performance
    /// O(log log U) - mirror of `successor`
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// set.insert(10);
    /// set.insert(20);
    ///
    /// assert_eq!(set.predecessor(20), Some(20));
    /// assert_eq!(set.predecessor(15), Some(10));
    /// assert_eq!(set.predecessor(9), None);
    /// ```
    pub fn predecessor(&self, key: u32) -> Option<u32> {
        self.check_key(key);
        self.root.predecessor(key)
    }

    /// Get the minimum key in the set.
    ///
    /// # Returns
    /// Smallest stored key, or `None` if the set is empty
    ///
    /// # Performance
    /// O(1) - returns cached value
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert_eq!(set.min(), None);
    /// set.insert(42);
    /// set.insert(10);
    /// assert_eq!(set.min(), Some(10));
    /// ```
    #[inline]
    pub fn min(&self) -> Option<u32> {
        self.root.min()
    }

    /// Get the maximum key in the set.
    ///
    /// # Returns
    /// Largest stored key, or `None` if the set is empty
    ///
    /// # Performance
    /// O(1) - returns cached value
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert_eq!(set.max(), None);
    /// set.insert(42);
    /// set.insert(10);
    /// assert_eq!(set.max(), Some(42));
    /// ```
    #[inline]
    pub fn max(&self) -> Option<u32> {
        self.root.max()
    }

    /// Get the number of keys in the set.
    ///
    /// # Performance
    /// O(1) - returns cached value
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(42);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the set is empty.
    ///
    /// # Performance
    /// O(1) - checks cached length
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let mut set = VebSet::new();
    /// assert!(set.is_empty());
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the configured universe size.
    ///
    /// Valid keys are `0..universe`.
    ///
    /// # Performance
    /// O(1)
    ///
    /// # Example
    /// ```rust
    /// use veb_set::VebSet;
    ///
    /// let set = VebSet::with_universe(10_000);
    /// assert_eq!(set.universe(), 10_000);
    /// ```
    #[inline]
    pub fn universe(&self) -> u64 {
        self.universe
    }
}

impl Default for VebSet {
    fn default() -> Self {
        Self::new()
    }
}
