use super::BTree;
use crate::raw::RawBTree;

impl<K> BTree<K> {
    /// Creates an empty tree with node slots reserved for `capacity` keys.
    ///
    /// The reservation assumes half-full leaves, which is what a split leaves
    /// behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree: BTree<String> = BTree::with_capacity(10_000);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 10_000);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BTree {
            raw: RawBTree::with_capacity(capacity),
        }
    }

    /// Returns how many keys the tree can hold, with half-full nodes, before
    /// its node arena reallocates.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
