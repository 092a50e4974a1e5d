//! A compact in-memory B-tree holding an ordered set of keys.
//!
//! [`BTree`] stores keys only, with no values attached. Every node keeps between
//! 102 and 255 keys (the root may hold fewer), and all leaves sit at the same
//! depth, so every operation touches O(log n) nodes.
//!
//! # Example
//!
//! ```
//! use tinybtree::BTree;
//!
//! let mut tree = BTree::new();
//! for name in ["carol", "alice", "bob", "dave"] {
//!     tree.set(String::from(name));
//! }
//!
//! // Point operations report presence as a bool.
//! assert!(tree.get("bob"));
//! assert!(tree.delete("dave"));
//! assert_eq!(tree.len(), 3);
//!
//! // Walks hand each key to a closure and stop when it returns false.
//! let mut from_b = Vec::new();
//! tree.ascend("b", |key| {
//!     from_b.push(key.clone());
//!     true
//! });
//! assert_eq!(from_b, ["bob", "carol"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Borrowed lookups** - `BTree<String>` can be queried with `&str`
//! - **Early-exit walks** - Ascending, descending and pivot-bounded traversals
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to their children by handle. A node
//! does not record whether it is a leaf; each recursive step knows its height
//! above the leaf level and passes `height - 1` down. Overfull children are split
//! on the way back up from an insertion. Underfull children are merged with a
//! sibling or borrow one key from it on the way back up from a deletion.
//!
//! The tree is not internally synchronised. Shared references may be read from
//! many threads at once, but mutation needs `&mut`.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod btree;

pub use btree::BTree;
