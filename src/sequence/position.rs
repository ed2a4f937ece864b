//! Non-owning handles into a [`CowList`](super::CowList).
//!
//! A [`Position`] names one node of one chain. It never keeps that node
//! alive and it never needs to be released: it is a plain `Copy` value
//! that a list either resolves or rejects.
//!
//! A [`Cursor`] is the traversal index built on the same idea. It points
//! at a node or at the one-past-the-end sentinel of its chain, so a loop
//! that stops when the cursor equals [`CowList::end`](super::CowList::end)
//! visits every element.

use std::fmt;
use std::hash::Hash;

use static_assertions::assert_impl_all;

use super::node::ChainId;

/// A weak, generation-checked handle to a node.
///
/// Two positions are equal iff they were taken from the same slot of the
/// same chain at the same generation. Equal payload values never make two
/// positions equal.
///
/// A position resolves to absent once its node is removed, or once the
/// list it came from rebuilt its chain during copy-on-write. It is never
/// valid for a different list value, even a structurally equal one.
///
/// # Examples
///
/// ```rust
/// use cowlink::sequence::CowList;
///
/// let mut list = CowList::new();
/// list.append(1);
/// list.append(1);
///
/// let first = list.first().unwrap();
/// let last = list.last().unwrap();
/// assert_ne!(first, last);
/// assert_eq!(list.get(first), list.get(last));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    chain: ChainId,
    index: usize,
    generation: u32,
}

impl Position {
    #[inline]
    pub(crate) const fn new(chain: ChainId, index: usize, generation: u32) -> Self {
        Self {
            chain,
            index,
            generation,
        }
    }

    #[inline]
    pub(crate) const fn chain(self) -> ChainId {
        self.chain
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}/slot {}@g{}",
            self.chain, self.index, self.generation
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Place {
    Node(Position),
    End,
}

/// A traversal index over a [`CowList`](super::CowList).
///
/// Cursors compare by identity: two cursors are equal iff they point at
/// the same node, or both at the end of the same chain. Ordering needs the
/// list and lives in [`CowList::compare`](super::CowList::compare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    chain: ChainId,
    place: Place,
}

impl Cursor {
    #[inline]
    pub(crate) const fn at(position: Position) -> Self {
        Self {
            chain: position.chain(),
            place: Place::Node(position),
        }
    }

    #[inline]
    pub(crate) const fn end_of(chain: ChainId) -> Self {
        Self {
            chain,
            place: Place::End,
        }
    }

    #[inline]
    pub(crate) const fn chain(self) -> ChainId {
        self.chain
    }

    /// Returns the node this cursor points at, or `None` for the end sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (1..=2).collect();
    /// assert_eq!(list.start().position(), list.first());
    /// assert_eq!(list.end().position(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn position(self) -> Option<Position> {
        match self.place {
            Place::Node(position) => Some(position),
            Place::End => None,
        }
    }

    /// Returns `true` if this is the one-past-the-end sentinel.
    #[inline]
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self.place, Place::End)
    }
}

impl From<Position> for Cursor {
    fn from(position: Position) -> Self {
        Self::at(position)
    }
}

assert_impl_all!(Position: Copy, Eq, Hash, Send, Sync, fmt::Display);
assert_impl_all!(Cursor: Copy, Eq, Hash, Send, Sync);
