//! # cowlink
//!
//! A doubly-linked list with value semantics.
//!
//! ## Overview
//!
//! [`CowList`](sequence::CowList) behaves like any other Rust value:
//! mutating one copy never affects another. Copies are cheap because the
//! node chain is shared copy-on-write and only duplicated on the first
//! mutation after a share.
//!
//! Interior nodes are addressed through [`Position`](sequence::Position)
//! handles, which are weak: they never keep a node alive and resolve to
//! nothing once the node is gone. That gives O(1) insert and remove after
//! any node without handing out references into the list.
//!
//! ## Feature Flags
//!
//! - `arc`: share chains through `Arc` instead of `Rc`
//!
//! ## Example
//!
//! ```rust
//! use cowlink::sequence::CowList;
//!
//! let mut list = CowList::new();
//! list.append(2);
//! list.insert_first(1);
//! let last = list.last().unwrap();
//! list.insert_after(3, last).unwrap();
//!
//! assert_eq!(list.to_string(), "1 -> 2 -> 3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use cowlink::prelude::*;
///
/// let list: CowList<u8> = CowList::new();
/// assert!(list.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::{ListError, ParseListError};
    pub use crate::sequence::*;
}

mod error;
pub mod sequence;

pub use error::{ListError, ParseListError};
