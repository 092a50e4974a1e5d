use core::borrow::Borrow;
use core::fmt;

use crate::raw::RawBTree;

mod capacity;
mod traverse;

/// An ordered set of keys stored in a B-tree.
///
/// Keys live only in the tree's nodes; there are no values attached to them.
/// Each node holds up to 255 keys, and every node other than the root keeps at
/// least 102, so lookups, insertions and deletions touch O(log n) nodes.
///
/// Iteration is callback driven: [`scan`], [`reverse`], [`ascend`] and
/// [`descend`] hand each key to a closure, and stop as soon as that closure
/// returns `false`.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by the [`Ord`] trait, changes while
/// it is in the tree. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `BTree` that observed it and will
/// not result in undefined behavior.
///
/// [`scan`]: BTree::scan
/// [`reverse`]: BTree::reverse
/// [`ascend`]: BTree::ascend
/// [`descend`]: BTree::descend
///
/// # Examples
///
/// ```
/// use tinybtree::BTree;
///
/// let mut tree = BTree::new();
/// assert!(!tree.set(String::from("beta")));
/// assert!(!tree.set(String::from("alpha")));
/// assert!(tree.set(String::from("beta")));
///
/// assert!(tree.get("alpha"));
/// assert_eq!(tree.len(), 2);
///
/// let mut keys = Vec::new();
/// tree.scan(|key| {
///     keys.push(key.clone());
///     true
/// });
/// assert_eq!(keys, ["alpha", "beta"]);
///
/// assert!(tree.delete("alpha"));
/// assert!(!tree.delete("alpha"));
/// ```
pub struct BTree<K> {
    raw: RawBTree<K>,
}

impl<K> BTree<K> {
    /// Makes a new, empty `BTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.set("key");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> BTree<K> {
        BTree {
            raw: RawBTree::new(),
        }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.set("a");
    /// tree.set("a");
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no keys.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of edges between the root and the leaves.
    ///
    /// An empty tree, and a tree whose root is still a leaf, both have height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.height(), 0);
    /// for i in 0..1_000 {
    ///     tree.set(i);
    /// }
    /// assert_eq!(tree.height(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn height(&self) -> usize {
        self.raw.height()
    }

    /// Removes every key, returning the tree to its empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) to drop the keys.
    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

impl<K: Ord> BTree<K> {
    /// Adds a key to the tree.
    ///
    /// Returns whether the key was already present. A present key is left in
    /// place and the tree is not modified; `key` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.set(2), false);
    /// assert_eq!(tree.set(2), true);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn set(&mut self, key: K) -> bool {
        self.raw.insert(key)
    }

    /// Returns `true` if the tree contains `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from([String::from("a"), String::from("b")]);
    /// assert!(tree.get("a"));
    /// assert!(!tree.get("c"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(key)
    }

    /// Removes `key` from the tree. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::from([1, 2]);
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).is_some()
    }

    /// Removes `key` from the tree and returns the stored key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let mut tree = BTree::from([String::from("a")]);
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }
}

impl<K: Clone> Clone for BTree<K> {
    fn clone(&self) -> Self {
        BTree {
            raw: self.raw.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.scan(|key| {
            set.entry(key);
            true
        });
        set.finish()
    }
}

impl<K> Default for BTree<K> {
    /// Creates an empty `BTree`.
    fn default() -> BTree<K> {
        BTree::new()
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> BTree<K> {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.set(key);
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for BTree<K> {
    /// Converts a `[K; N]` into a `BTree<K>`, keeping one copy of any repeated
    /// key.
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from([3, 1, 2, 1]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use super::*;

    #[test]
    fn debug_lists_keys_in_order() {
        let tree = BTree::from([3, 1, 2]);
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
        assert_eq!(format!("{:?}", BTree::<u8>::new()), "{}");
    }

    #[test]
    fn clone_is_independent() {
        let mut original: BTree<String> = (0..100).map(|i| format!("{i:03}")).collect();
        let copy = original.clone();
        original.clear();

        assert_eq!(copy.len(), 100);
        assert!(copy.get("042"));
        assert!(!original.get("042"));
        copy.raw.validate_invariants();
    }

    #[test]
    fn height_follows_root_growth_and_collapse() {
        let mut tree = BTree::new();
        let mut key = 0u32;
        while tree.height() < 2 {
            tree.set(key);
            key += 1;
        }
        tree.raw.validate_invariants();

        while !tree.is_empty() {
            key -= 1;
            assert!(tree.delete(&key));
        }
        assert_eq!(tree.height(), 0);
        tree.raw.validate_invariants();
    }
}
