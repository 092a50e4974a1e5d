use core::borrow::Borrow;

use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{MAX_ITEMS, Node, SearchResult};

/// The core B-tree backing `BTree`.
///
/// Nodes never record whether they are leaves. Every recursive walk carries the
/// height of the node it is visiting (0 at the leaf level) and hands
/// `height - 1` to its children.
#[derive(Clone)]
pub(crate) struct RawBTree<K> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Height of the root; 0 while the root is a leaf.
    height: usize,
    /// Total number of keys in the tree.
    len: usize,
}

/// What a recursive delete is looking for.
enum Removal<'a, Q: ?Sized> {
    Key(&'a Q),
    /// The largest key of the subtree, used to refill a separator slot.
    Max,
}

impl<Q: ?Sized> Clone for Removal<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized> Copy for Removal<'_, Q> {}

impl<K> RawBTree<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            height: 0,
            len: 0,
        }
    }

    /// Creates an empty tree with node slots reserved for about `capacity` keys.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity.div_ceil(MAX_ITEMS / 2)),
            ..Self::new()
        }
    }

    /// Number of keys the reserved node slots can hold with every node at
    /// least half full.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() * (MAX_ITEMS / 2)
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    /// Returns the tree to its canonical empty state.
    pub(crate) fn clear(&mut self) {
        if self.len > 0 {
            trace!(len = self.len, "btree.clear");
        }
        self.nodes.clear();
        self.root = None;
        self.height = 0;
        self.len = 0;
    }

    /// Smallest key, found by following the leftmost spine.
    pub(crate) fn first(&self) -> Option<&K> {
        let mut current = self.root?;
        for _ in 0..self.height {
            current = self.nodes.get(current).child(0);
        }
        self.nodes.get(current).items().first()
    }

    pub(crate) fn last(&self) -> Option<&K> {
        let mut current = self.root?;
        for _ in 0..self.height {
            let node = self.nodes.get(current);
            current = node.child(node.len());
        }
        self.nodes.get(current).items().last()
    }

    /// Visits every key in ascending order until `visit` returns `false`.
    pub(crate) fn scan<F>(&self, visit: &mut F)
    where
        F: ?Sized + FnMut(&K) -> bool,
    {
        if let Some(root) = self.root {
            self.scan_from(root, self.height, visit);
        }
    }

    /// Visits every key in descending order until `visit` returns `false`.
    pub(crate) fn reverse<F>(&self, visit: &mut F)
    where
        F: ?Sized + FnMut(&K) -> bool,
    {
        if let Some(root) = self.root {
            self.reverse_from(root, self.height, visit);
        }
    }

    // Each walk returns `false` once `visit` has asked to stop, and every caller
    // bails out as soon as it sees that.
    fn scan_from<F>(&self, handle: Handle, height: usize, visit: &mut F) -> bool
    where
        F: ?Sized + FnMut(&K) -> bool,
    {
        let node = self.nodes.get(handle);
        if height == 0 {
            return node.items().iter().all(|key| visit(key));
        }
        for (key, &child) in node.items().iter().zip(node.children()) {
            if !self.scan_from(child, height - 1, visit) || !visit(key) {
                return false;
            }
        }
        self.scan_from(node.child(node.len()), height - 1, visit)
    }

    fn reverse_from<F>(&self, handle: Handle, height: usize, visit: &mut F) -> bool
    where
        F: ?Sized + FnMut(&K) -> bool,
    {
        let node = self.nodes.get(handle);
        if height == 0 {
            return node.items().iter().rev().all(|key| visit(key));
        }
        if !self.reverse_from(node.child(node.len()), height - 1, visit) {
            return false;
        }
        for (key, &child) in node.items().iter().zip(node.children()).rev() {
            if !visit(key) || !self.reverse_from(child, height - 1, visit) {
                return false;
            }
        }
        true
    }
}

impl<K: Ord> RawBTree<K> {
    /// Returns true if the tree contains the key.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(mut current) = self.root else {
            return false;
        };
        let mut height = self.height;

        loop {
            let node = self.nodes.get(current);
            match node.search(key) {
                SearchResult::Found(_) => return true,
                SearchResult::NotFound(_) if height == 0 => return false,
                SearchResult::NotFound(index) => {
                    current = node.child(index);
                    height -= 1;
                }
            }
        }
    }

    /// Inserts a key. Returns true if it was already present, in which case
    /// the tree is left untouched.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(key)));
            self.len = 1;
            return false;
        };

        if self.insert_at(root, key, self.height) {
            return true;
        }

        if self.nodes.get(root).is_full() {
            let (median, right) = self.nodes.get_mut(root).split(self.height);
            let right = self.nodes.alloc(right);
            self.root = Some(self.nodes.alloc(Node::root(root, median, right)));
            self.height += 1;
            trace!(height = self.height, len = self.len + 1, "btree.root.split");
        }
        self.len += 1;
        false
    }

    fn insert_at(&mut self, handle: Handle, key: K, height: usize) -> bool {
        let node = self.nodes.get_mut(handle);
        let index = match node.search(&key) {
            SearchResult::Found(_) => return true,
            SearchResult::NotFound(index) => index,
        };

        if height == 0 {
            node.insert_item(index, key);
            return false;
        }

        let child = node.child(index);
        if self.insert_at(child, key, height - 1) {
            return true;
        }

        // Split on the way back up, so no node is ever seen holding more than
        // MAX_ITEMS keys.
        if self.nodes.get(child).is_full() {
            let (median, right) = self.nodes.get_mut(child).split(height - 1);
            let right = self.nodes.alloc(right);
            self.nodes.get_mut(handle).insert_split(index, median, right);
        }
        false
    }

    /// Removes a key and returns it.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let root = self.root?;
        let removed = self.remove_at(root, Removal::Key(key), self.height)?;

        self.len -= 1;
        if self.len == 0 {
            self.clear();
        } else if self.nodes.get(root).is_empty() {
            // Only reachable with height > 0: an empty leaf root means len == 0.
            let child = self.nodes.get(root).child(0);
            self.nodes.free(root);
            self.root = Some(child);
            self.height -= 1;
            trace!(height = self.height, "btree.root.collapse");
        }
        Some(removed)
    }

    fn remove_at<Q>(&mut self, handle: Handle, target: Removal<'_, Q>, height: usize) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get_mut(handle);
        let (mut index, found) = match target {
            Removal::Max => (node.len() - 1, true),
            Removal::Key(key) => match node.search(key) {
                SearchResult::Found(index) => (index, true),
                SearchResult::NotFound(index) => (index, false),
            },
        };

        if height == 0 {
            return found.then(|| node.remove_item(index));
        }

        let removed = match (found, target) {
            (true, Removal::Max) => {
                index += 1;
                let child = node.child(index);
                self.remove_at(child, Removal::Max, height - 1)
            }
            (true, Removal::Key(_)) => {
                // The predecessor (max of the left subtree) takes the slot.
                let child = node.child(index);
                let predecessor = self.remove_at(child, Removal::Max, height - 1)?;
                Some(self.nodes.get_mut(handle).replace_item(index, predecessor))
            }
            (false, _) => {
                let child = node.child(index);
                self.remove_at(child, target, height - 1)
            }
        }?;

        if self.nodes.get(self.nodes.get(handle).child(index)).is_underfull() {
            self.rebalance(handle, index, height);
        }
        Some(removed)
    }

    /// Repairs `children[index]` of `handle` after it dropped below MIN_ITEMS,
    /// using its right sibling, or its left one if it is the last child.
    ///
    /// - merge when both siblings and the separator fit in one node;
    /// - otherwise the larger sibling lends one item across the separator
    ///   (left wins only when strictly larger).
    fn rebalance(&mut self, handle: Handle, index: usize, height: usize) {
        let parent = self.nodes.get(handle);
        let index = if index == parent.len() { index - 1 } else { index };
        let (left, right) = (parent.child(index), parent.child(index + 1));
        let left_len = self.nodes.get(left).len();
        let right_len = self.nodes.get(right).len();
        let child_height = height - 1;

        if left_len + right_len + 1 < MAX_ITEMS {
            let (separator, _) = self.nodes.get_mut(handle).remove_separator(index);
            let right = self.nodes.take(right);
            self.nodes.get_mut(left).merge(separator, right, child_height);
        } else if left_len > right_len {
            let (item, child) = self.nodes.get_mut(left).pop_back(child_height);
            let separator = self.nodes.get_mut(handle).replace_item(index, item);
            self.nodes.get_mut(right).push_front(separator, child);
        } else {
            let (item, child) = self.nodes.get_mut(right).pop_front(child_height);
            let separator = self.nodes.get_mut(handle).replace_item(index, item);
            self.nodes.get_mut(left).push_back(separator, child);
        }
    }

    /// Visits every key `>= pivot` in ascending order until `visit` returns
    /// `false`.
    pub(crate) fn ascend<Q, F>(&self, pivot: &Q, visit: &mut F)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: ?Sized + FnMut(&K) -> bool,
    {
        if let Some(root) = self.root {
            self.ascend_from(root, pivot, self.height, visit);
        }
    }

    /// Visits every key `<= pivot` in descending order until `visit` returns
    /// `false`.
    pub(crate) fn descend<Q, F>(&self, pivot: &Q, visit: &mut F)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: ?Sized + FnMut(&K) -> bool,
    {
        if let Some(root) = self.root {
            self.descend_from(root, pivot, self.height, visit);
        }
    }

    fn ascend_from<Q, F>(&self, handle: Handle, pivot: &Q, height: usize, visit: &mut F) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: ?Sized + FnMut(&K) -> bool,
    {
        let node = self.nodes.get(handle);
        let start = match node.search(pivot) {
            SearchResult::Found(index) => index,
            SearchResult::NotFound(index) => {
                // Part of the child below the insertion point may still be >= pivot.
                if height > 0 && !self.ascend_from(node.child(index), pivot, height - 1, visit) {
                    return false;
                }
                index
            }
        };

        for index in start..node.len() {
            if !visit(node.item(index)) {
                return false;
            }
            if height > 0 && !self.scan_from(node.child(index + 1), height - 1, visit) {
                return false;
            }
        }
        true
    }

    fn descend_from<Q, F>(&self, handle: Handle, pivot: &Q, height: usize, visit: &mut F) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: ?Sized + FnMut(&K) -> bool,
    {
        let node = self.nodes.get(handle);
        let end = match node.search(pivot) {
            SearchResult::Found(index) => index + 1,
            SearchResult::NotFound(index) => {
                if height > 0 && !self.descend_from(node.child(index), pivot, height - 1, visit) {
                    return false;
                }
                index
            }
        };

        for index in (0..end).rev() {
            if !visit(node.item(index)) {
                return false;
            }
            if height > 0 && !self.reverse_from(node.child(index), height - 1, visit) {
                return false;
            }
        }
        true
    }
}
