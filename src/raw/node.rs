use core::borrow::Borrow;

use smallvec::SmallVec;

use super::handle::Handle;

#[cfg(test)]
pub(crate) const MAX_ITEMS: usize = 15;
#[cfg(not(test))]
pub(crate) const MAX_ITEMS: usize = 255;

/// Fewest items a non-root node may hold once an operation returns.
pub(crate) const MIN_ITEMS: usize = MAX_ITEMS * 40 / 100;
pub(crate) const MAX_CHILDREN: usize = MAX_ITEMS + 1;

// Merging two siblings must never overflow, and a split half must never underflow.
const _: () = assert!(MIN_ITEMS <= MAX_ITEMS / 2);

/// A tree node. Leaves and internal nodes share this shape; which one a node
/// is depends only on the height its caller is at, and leaves keep `children`
/// empty.
#[derive(Clone)]
pub(crate) struct Node<K> {
    // Strictly increasing.
    items: SmallVec<[K; MAX_ITEMS]>,
    // Internal nodes: exactly `items.len() + 1` entries. `children[i]` holds the
    // keys between `items[i - 1]` and `items[i]`.
    children: SmallVec<[Handle; MAX_CHILDREN]>,
}

/// Result of searching for a key in a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// Key is stored at the given index.
    Found(usize),
    /// Key is absent; the index is both its insertion point and the child
    /// that would hold it.
    NotFound(usize),
}

impl<K> Node<K> {
    pub(crate) fn new() -> Self {
        Self {
            items: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// A leaf holding a single key.
    pub(crate) fn leaf(key: K) -> Self {
        let mut node = Self::new();
        node.items.push(key);
        node
    }

    /// A fresh root over two subtrees split apart at `median`.
    pub(crate) fn root(left: Handle, median: K, right: Handle) -> Self {
        let mut node = Self::leaf(median);
        node.children.push(left);
        node.children.push(right);
        node
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.items.len() == MAX_ITEMS
    }

    pub(crate) fn is_underfull(&self) -> bool {
        self.items.len() < MIN_ITEMS
    }

    #[inline]
    pub(crate) fn item(&self, index: usize) -> &K {
        &self.items[index]
    }

    pub(crate) fn items(&self) -> &[K] {
        &self.items
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> Handle {
        self.children[index]
    }

    pub(crate) fn children(&self) -> &[Handle] {
        &self.children
    }

    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.items.binary_search_by(|item| item.borrow().cmp(key)) {
            Ok(index) => SearchResult::Found(index),
            Err(index) => SearchResult::NotFound(index),
        }
    }

    /// Inserts a key into a leaf at its search position.
    pub(crate) fn insert_item(&mut self, index: usize, key: K) {
        debug_assert!(self.children.is_empty(), "`Node::insert_item()` - called on an internal node");
        debug_assert!(!self.is_full(), "`Node::insert_item()` - node is full");
        self.items.insert(index, key);
    }

    /// Removes the key at `index` from a leaf.
    pub(crate) fn remove_item(&mut self, index: usize) -> K {
        self.items.remove(index)
    }

    /// Swaps in a new separator and hands back the old one.
    pub(crate) fn replace_item(&mut self, index: usize, key: K) -> K {
        core::mem::replace(&mut self.items[index], key)
    }

    /// Links a freshly split sibling in after `children[index]`, with `median`
    /// as the separator between them.
    pub(crate) fn insert_split(&mut self, index: usize, median: K, right: Handle) {
        debug_assert!(!self.is_full(), "`Node::insert_split()` - node is full");
        self.items.insert(index, median);
        self.children.insert(index + 1, right);
    }

    /// Splits a full node around its median. `self` keeps the lower half; the
    /// returned sibling gets the upper half, plus the matching children when
    /// `height > 0`.
    pub(crate) fn split(&mut self, height: usize) -> (K, Node<K>) {
        debug_assert!(self.is_full(), "`Node::split()` - node is not full");
        let mid = MAX_ITEMS / 2;

        let mut right = Node::new();
        right.items = self.items.drain(mid + 1..).collect();
        if height > 0 {
            right.children = self.children.drain(mid + 1..).collect();
        }
        let median = self.items.remove(mid);

        (median, right)
    }

    /// Detaches `items[index]` and `children[index + 1]` so that the two
    /// children around the separator can be merged.
    pub(crate) fn remove_separator(&mut self, index: usize) -> (K, Handle) {
        let separator = self.items.remove(index);
        let right = self.children.remove(index + 1);
        (separator, right)
    }

    /// Appends `separator` and everything in `right` onto this node.
    pub(crate) fn merge(&mut self, separator: K, right: Node<K>, height: usize) {
        debug_assert!(
            self.len() + right.len() < MAX_ITEMS,
            "`Node::merge()` - merged node would overflow"
        );
        self.items.push(separator);
        self.items.extend(right.items);
        if height > 0 {
            self.children.extend(right.children);
        }
    }

    /// Takes the last item, and the last child when `height > 0`.
    pub(crate) fn pop_back(&mut self, height: usize) -> (K, Option<Handle>) {
        let child = if height > 0 { self.children.pop() } else { None };
        let item = self.items.pop().expect("`Node::pop_back()` - node is empty!");
        (item, child)
    }

    /// Takes the first item, and the first child when `height > 0`.
    pub(crate) fn pop_front(&mut self, height: usize) -> (K, Option<Handle>) {
        let child = (height > 0).then(|| self.children.remove(0));
        (self.items.remove(0), child)
    }

    pub(crate) fn push_back(&mut self, item: K, child: Option<Handle>) {
        self.items.push(item);
        self.children.extend(child);
    }

    pub(crate) fn push_front(&mut self, item: K, child: Option<Handle>) {
        self.items.insert(0, item);
        if let Some(child) = child {
            self.children.insert(0, child);
        }
    }
}
