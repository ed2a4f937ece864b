//! Copy-on-write linked sequence.
//!
//! - [`CowList`]: value-semantic doubly-linked list
//! - [`Position`]: weak handle to one node, used for O(1) positional edits
//! - [`Cursor`]: traversal index with a one-past-the-end sentinel
//!
//! # Copy-on-Write
//!
//! Cloning a list is O(1): both values point at the same chain and its
//! share count goes up. The first mutation through either value finds the
//! chain shared, deep-copies it, and only then applies the edit. Later
//! mutations are O(1) again until the next clone.
//!
//! ```rust
//! use cowlink::sequence::CowList;
//!
//! let mut original: CowList<i32> = (1..=3).collect();
//! let snapshot = original.clone();
//! assert!(original.is_shared());
//!
//! original.append(4);
//! assert!(!original.is_shared());
//! assert_eq!(original.to_string(), "1 -> 2 -> 3 -> 4");
//! assert_eq!(snapshot.to_string(), "1 -> 2 -> 3");
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer holding a shared chain.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`.
/// Otherwise it is `std::rc::Rc`. Either way the strong count is the share
/// count that copy-on-write consults.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod node;
mod position;

pub use list::CowList;
pub use list::CowListIntoIterator;
pub use list::CowListIterator;
pub use position::Cursor;
pub use position::Position;
