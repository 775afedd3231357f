//! Ordered collections over a stable-address binary search tree.
//!
//! This crate provides [`TreeMap`] and [`TreeSet`], ordered map and set types
//! backed by a plain (unbalanced) binary search tree whose nodes carry parent
//! links and never move while they are alive. Stable node addresses enable an
//! API the standard B-tree collections cannot offer: cursors that name a
//! position in the tree, walk the sorted sequence in either direction, and
//! remove the element they point at while landing on a still-valid position.
//!
//! # Example
//!
//! ```
//! use sabi_tree::TreeMap;
//!
//! let mut scores = TreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Standard BTreeMap operations work as expected
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Cursors walk the sorted sequence and survive removal
//! let mut cursor = scores.find_cursor_mut(&"Bob");
//! assert_eq!(cursor.remove_current(), Some(("Bob", 85)));
//! assert_eq!(cursor.key(), Some(&"Carol"));
//! assert_eq!(scores.len(), 2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar surface** - API mirrors `std::collections::BTreeMap`/`BTreeSet`
//! - **Stable cursors** - Positions stay valid across unrelated mutations and
//!   across removal of the current element
//! - **Arena storage** - Nodes and values live in slot arenas; teardown and
//!   `clear` are flat buffer drops, never a per-node walk
//!
//! # Implementation
//!
//! The tree is a classic parent-linked binary search tree with no rebalancing:
//! operations cost O(depth), which is O(log n) for random insertion order but
//! degrades to O(n) when keys arrive sorted. Workloads needing a depth
//! guarantee want a B-tree instead; workloads needing stable positions under
//! churn are what this layout is for. Links are arena handles rather than
//! pointers, so the whole structure is a single owner with no reference
//! cycles, and deep copies are driven by an explicit worklist rather than
//! call-stack recursion.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: We have to allow unsafe code in order to performantly match BTreeMap and BTreeSet's functionality.
// #![forbid(unsafe_code)]
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

pub mod tree_map;
pub mod tree_set;

pub use tree_map::TreeMap;
pub use tree_set::TreeSet;
