use core::borrow::Borrow;

use super::BTree;

impl<K> BTree<K> {
    /// Calls `visit` on every key in ascending order.
    ///
    /// The walk ends as soon as `visit` returns `false`; no further keys are
    /// visited and no further nodes are read.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from(["c", "a", "b"]);
    ///
    /// let mut seen = Vec::new();
    /// tree.scan(|key| {
    ///     seen.push(*key);
    ///     seen.len() < 2
    /// });
    /// assert_eq!(seen, ["a", "b"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n) for `k` visited keys.
    pub fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.raw.scan(&mut visit);
    }

    /// Calls `visit` on every key in descending order, until it returns
    /// `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from([1, 2, 3]);
    ///
    /// let mut seen = Vec::new();
    /// tree.reverse(|key| {
    ///     seen.push(*key);
    ///     true
    /// });
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n) for `k` visited keys.
    pub fn reverse<F>(&self, mut visit: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.raw.reverse(&mut visit);
    }

    /// Returns the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// assert_eq!(BTree::from([2, 1]).first(), Some(&1));
    /// assert_eq!(BTree::<u8>::new().first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.raw.first()
    }

    /// Returns the largest key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.raw.last()
    }
}

impl<K: Ord> BTree<K> {
    /// Calls `visit` on every key greater than or equal to `pivot`, in
    /// ascending order, until it returns `false`.
    ///
    /// `pivot` does not need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from([10, 20, 30, 40]);
    ///
    /// let mut seen = Vec::new();
    /// tree.ascend(&25, |key| {
    ///     seen.push(*key);
    ///     true
    /// });
    /// assert_eq!(seen, [30, 40]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n) for `k` visited keys.
    pub fn ascend<Q, F>(&self, pivot: &Q, mut visit: F)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(&K) -> bool,
    {
        self.raw.ascend(pivot, &mut visit);
    }

    /// Calls `visit` on every key less than or equal to `pivot`, in
    /// descending order, until it returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinybtree::BTree;
    ///
    /// let tree = BTree::from([String::from("ant"), String::from("bee"), String::from("cat")]);
    ///
    /// let mut seen = Vec::new();
    /// tree.descend("bee", |key| {
    ///     seen.push(key.clone());
    ///     true
    /// });
    /// assert_eq!(seen, ["bee", "ant"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n) for `k` visited keys.
    pub fn descend<Q, F>(&self, pivot: &Q, mut visit: F)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(&K) -> bool,
    {
        self.raw.descend(pivot, &mut visit);
    }
}
