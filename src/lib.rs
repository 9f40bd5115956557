//! # rbkit
//!
//! An arena-backed red-black tree and the ordered containers built on it.
//!
//! ## Overview
//!
//! - **Tree**: [`tree::RedBlackTree`], a self-balancing ordered-key engine with
//!   copyable [`tree::Cursor`] positions, O(1) access to both ends, merge, swap
//!   and structure-preserving copy
//! - **Comparators**: [`compare::Comparator`] for injected strict weak orders
//! - **Map**: [`map::OrderedMap`], key/value pairs ordered by key
//! - **Set**: [`set::OrderedSet`], unique ordered elements
//!
//! Nodes are stored in a per-tree arena and linked by index, with slot 0 acting
//! as the shared black sentinel. No operation recurses, so deep or skewed
//! inputs cannot exhaust the call stack.
//!
//! ## Feature Flags
//!
//! - `map`: the [`map::OrderedMap`] adapter
//! - `set`: the [`set::OrderedSet`] adapter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rbkit::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! let (cursor, inserted) = tree.insert(42);
//! assert!(inserted);
//! assert_eq!(tree.get_at(cursor), Some(&42));
//! assert_eq!(tree.next(cursor), tree.end());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rbkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compare::{Comparator, FnComparator, Natural, Reverse};
    pub use crate::error::{ContainerError, KeyNotFoundError};
    pub use crate::tree::{Color, Cursor, RedBlackTree};

    #[cfg(feature = "map")]
    pub use crate::map::OrderedMap;

    #[cfg(feature = "set")]
    pub use crate::set::OrderedSet;
}

pub mod compare;

pub mod error;

pub mod tree;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "set")]
pub mod set;
