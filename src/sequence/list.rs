//! Copy-on-write doubly-linked list.
//!
//! This module provides [`CowList`], a linked list with value semantics
//! whose node chain is shared between copies until one of them mutates.
//!
//! # Overview
//!
//! - O(1) clone (shares the chain, bumps the share count)
//! - O(1) `insert_first`, `append`, `remove_first`, `remove_last`
//! - O(1) `insert_after` / `remove_after` through a [`Position`]
//! - O(n) first mutation after a clone (deep copy of the shared chain)
//! - O(n) cursor ordering and offsets
//!
//! # Examples
//!
//! ```rust
//! use cowlink::sequence::CowList;
//!
//! let mut list = CowList::new();
//! for value in (1..=3).rev() {
//!     list.insert_first(value);
//! }
//! list.append(4);
//! assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4");
//!
//! let first = list.first().unwrap();
//! assert_eq!(list.remove_after(first), Ok(Some(2)));
//! assert_eq!(list.to_string(), "1 -> 3 -> 4");
//! ```
//!
//! # Sharing
//!
//! ```text
//! let b = a.clone();      a ─┐
//!                            ├─> [1 -> 2 -> 3]   share count 2
//!                         b ─┘
//!
//! b.append(4);            a ───> [1 -> 2 -> 3]        share count 1
//!                         b ───> [1 -> 2 -> 3 -> 4]   fresh chain, count 1
//! ```
//!
//! Positions taken from `a` keep resolving in `a`. They never resolve in
//! `b`, whose chain was rebuilt with a new identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::str::FromStr;

use static_assertions::assert_impl_all;

use super::ReferenceCounter;
use super::node::Chain;
use super::{Cursor, Position};
use crate::error::{ListError, ParseListError};

/// Rendering of an empty list, produced by `Display` and accepted by `FromStr`.
const EMPTY_RENDERING: &str = "Empty list";

/// Separator between rendered elements.
const SEPARATOR: &str = " -> ";

/// Where a cursor lands once resolved against a chain.
enum Stop {
    Node(usize),
    End,
}

/// A doubly-linked list with value semantics and copy-on-write sharing.
///
/// # Time Complexity
///
/// | Operation                     | Complexity           |
/// |-------------------------------|----------------------|
/// | `clone`                       | O(1)                 |
/// | `insert_first` / `append`     | O(1), O(n) if shared |
/// | `insert_after`                | O(1), O(n) if shared |
/// | `remove_first` / `remove_last`| O(1), O(n) if shared |
/// | `remove_after`                | O(1), O(n) if shared |
/// | `first` / `last` / `get`      | O(1)                 |
/// | `len` / `is_empty`            | O(1)                 |
/// | `advance` / `retreat`         | O(1)                 |
/// | `compare` / `precedes`        | O(n)                 |
/// | `offset`                      | O(distance)          |
///
/// # Examples
///
/// ```rust
/// use cowlink::sequence::CowList;
///
/// let list: CowList<i32> = (1..=3).collect();
/// let mut copy = list.clone();
/// copy.remove_first();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(copy.len(), 2);
/// ```
pub struct CowList<T> {
    chain: ReferenceCounter<Chain<T>>,
}

impl<T> CowList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = CowList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: ReferenceCounter::new(Chain::new()),
        }
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.head.is_none()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.length
    }

    /// Returns how many list values currently share this list's chain.
    ///
    /// A freshly built list reports `1`. Each clone adds one until some
    /// holder mutates and moves onto its own chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let copy = list.clone();
    /// assert_eq!(list.share_count(), 2);
    ///
    /// list.append(4);
    /// assert_eq!(list.share_count(), 1);
    /// assert_eq!(copy.share_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn share_count(&self) -> usize {
        ReferenceCounter::strong_count(&self.chain)
    }

    /// Returns `true` if the next mutation will have to copy the chain first.
    #[inline]
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.share_count() > 1
    }

    /// Returns a handle to the first node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let first = list.first().unwrap();
    /// assert_eq!(list.get(first), Some(&1));
    ///
    /// let empty: CowList<i32> = CowList::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.chain.head.map(|index| self.chain.position(index))
    }

    /// Returns a handle to the last node, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Position> {
        self.chain.tail.map(|index| self.chain.position(index))
    }

    /// Resolves a position to the value stored at it.
    ///
    /// Returns `None` if the position is stale or belongs to another list value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=2).collect();
    /// let first = list.first().unwrap();
    /// assert_eq!(list.get(first), Some(&1));
    ///
    /// list.remove_first();
    /// assert_eq!(list.get(first), None);
    /// ```
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        let index = self.chain.locate(position)?;
        self.chain.node(index).map(|node| &node.value)
    }

    /// Returns `true` if the position names a live node of this list.
    #[inline]
    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.chain.locate(position).is_some()
    }

    /// Returns `true` if both positions resolve to the same node here.
    ///
    /// Two positions that both fail to resolve also compare as the same:
    /// an absent node is treated as equal to another absent node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let first = list.first().unwrap();
    /// let last = list.last().unwrap();
    /// assert!(!list.same_node(first, last));
    ///
    /// list.remove_first();
    /// list.remove_last();
    /// assert!(list.same_node(first, last));
    /// ```
    #[must_use]
    pub fn same_node(&self, left: Position, right: Position) -> bool {
        match (self.chain.locate(left), self.chain.locate(right)) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Returns a cursor at the first node, or the end cursor if empty.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Cursor {
        self.cursor_for(self.chain.head)
    }

    /// Returns the one-past-the-end cursor.
    ///
    /// It does not point at any node: [`value_at`](Self::value_at) on it is
    /// `None` and a loop that stops when it reaches `end` has already
    /// visited the last element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let mut visited = Vec::new();
    /// let mut cursor = list.start();
    /// while cursor != list.end() {
    ///     visited.push(*list.value_at(cursor).unwrap());
    ///     cursor = list.advance(cursor).unwrap();
    /// }
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor::end_of(self.chain.id())
    }

    /// Steps a cursor one node forward.
    ///
    /// The last node advances to [`end`](Self::end). Returns `None` when the
    /// cursor is already at the end, is stale, or belongs to another list.
    #[must_use]
    pub fn advance(&self, cursor: Cursor) -> Option<Cursor> {
        match self.resolve(cursor)? {
            Stop::Node(index) => Some(self.cursor_for(self.chain.node(index)?.next)),
            Stop::End => None,
        }
    }

    /// Steps a cursor one node backward.
    ///
    /// [`end`](Self::end) retreats to the last node. Returns `None` when the
    /// cursor is at the first node, the list is empty, or the cursor does
    /// not resolve here.
    #[must_use]
    pub fn retreat(&self, cursor: Cursor) -> Option<Cursor> {
        let previous = match self.resolve(cursor)? {
            Stop::Node(index) => self.chain.node(index)?.previous,
            Stop::End => self.chain.tail,
        };
        previous.map(|index| Cursor::at(self.chain.position(index)))
    }

    /// Returns the value under a cursor, or `None` for the end or a stale cursor.
    #[inline]
    #[must_use]
    pub fn value_at(&self, cursor: Cursor) -> Option<&T> {
        cursor.position().and_then(|position| self.get(position))
    }

    /// Orders two cursors by reachability along the forward chain.
    ///
    /// `lhs` is less than `rhs` iff `rhs` can be reached by walking forward
    /// from `lhs`. The end cursor is greater than every node. Returns
    /// `None` if either cursor does not resolve in this list.
    ///
    /// # Complexity
    ///
    /// O(n): this walks the chain and is not a cheap comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    /// use std::cmp::Ordering;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let second = list.advance(list.start()).unwrap();
    /// assert_eq!(list.compare(list.start(), second), Some(Ordering::Less));
    /// assert_eq!(list.compare(list.end(), second), Some(Ordering::Greater));
    /// ```
    #[must_use]
    pub fn compare(&self, lhs: Cursor, rhs: Cursor) -> Option<Ordering> {
        match (self.resolve(lhs)?, self.resolve(rhs)?) {
            (Stop::End, Stop::End) => Some(Ordering::Equal),
            (Stop::End, Stop::Node(_)) => Some(Ordering::Greater),
            (Stop::Node(_), Stop::End) => Some(Ordering::Less),
            (Stop::Node(left), Stop::Node(right)) if left == right => Some(Ordering::Equal),
            (Stop::Node(left), Stop::Node(right)) => {
                let mut current = self.chain.node(left)?.next;
                while let Some(index) = current {
                    if index == right {
                        return Some(Ordering::Less);
                    }
                    current = self.chain.node(index)?.next;
                }
                Some(Ordering::Greater)
            }
        }
    }

    /// Returns `true` if `lhs` comes strictly before `rhs`.
    ///
    /// # Complexity
    ///
    /// O(n), see [`compare`](Self::compare).
    #[inline]
    #[must_use]
    pub fn precedes(&self, lhs: Cursor, rhs: Cursor) -> bool {
        self.compare(lhs, rhs) == Some(Ordering::Less)
    }

    /// Moves a cursor `distance` steps, forward if positive, backward if negative.
    ///
    /// Returns `None` if the walk would leave the list or the cursor does not
    /// resolve here.
    ///
    /// # Complexity
    ///
    /// O(|distance|)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (2..=8).collect();
    /// let cursor = list.offset(list.end(), -5).unwrap();
    /// assert_eq!(list.value_at(cursor), Some(&4));
    /// assert_eq!(list.offset(list.start(), -1), None);
    /// ```
    #[must_use]
    pub fn offset(&self, cursor: Cursor, distance: isize) -> Option<Cursor> {
        self.resolve(cursor)?;
        let mut current = cursor;
        for _ in 0..distance.unsigned_abs() {
            current = if distance > 0 {
                self.advance(current)?
            } else {
                self.retreat(current)?
            };
        }
        Some(current)
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (1..=3).collect();
    /// let backwards: Vec<&i32> = list.iter().rev().collect();
    /// assert_eq!(backwards, vec![&3, &2, &1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CowListIterator<'_, T> {
        CowListIterator {
            chain: &self.chain,
            front: self.chain.head,
            back: self.chain.tail,
            remaining: self.chain.length,
        }
    }

    /// Builds a new list by applying `function` to every element in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<i32> = (2..=4).collect();
    /// let mapped = list.map(|value| format!("{value}0"));
    /// assert_eq!(mapped.to_string(), "20 -> 30 -> 40");
    /// ```
    pub fn map<U, F>(&self, function: F) -> CowList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    fn resolve(&self, cursor: Cursor) -> Option<Stop> {
        if cursor.chain() != self.chain.id() {
            return None;
        }
        match cursor.position() {
            Some(position) => self.chain.locate(position).map(Stop::Node),
            None => Some(Stop::End),
        }
    }

    fn cursor_for(&self, index: Option<usize>) -> Cursor {
        index.map_or_else(
            || Cursor::end_of(self.chain.id()),
            |index| Cursor::at(self.chain.position(index)),
        )
    }

    /// Turns the list into an owning iterator without cloning any element.
    ///
    /// Works for element types that are not `Clone`, but only when this
    /// list is the sole owner of its chain.
    ///
    /// # Errors
    ///
    /// Hands the list back unchanged if another list value still shares
    /// its chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let list: CowList<Box<str>> = ["a".into(), "b".into()].into_iter().collect();
    /// let shared = list.clone();
    /// let Err(list) = list.try_into_iter() else {
    ///     panic!("chain is still shared");
    /// };
    /// drop(shared);
    /// let drained: Vec<Box<str>> = list.try_into_iter().unwrap().collect();
    /// assert_eq!(drained.len(), 2);
    /// ```
    pub fn try_into_iter(self) -> Result<CowListIntoIterator<T>, Self> {
        ReferenceCounter::try_unwrap(self.chain)
            .map(|chain| CowListIntoIterator { chain })
            .map_err(|chain| Self { chain })
    }

    fn locate_for_mutation(&self, position: Position) -> Result<usize, ListError> {
        self.chain.locate(position).ok_or_else(|| {
            tracing::debug!(%position, chain = %self.chain.id(), "rejected stale position");
            ListError::StalePosition { position }
        })
    }
}

impl<T: Clone> CowList<T> {
    /// Makes this list the exclusive owner of its chain and returns it.
    fn exclusive_chain(&mut self) -> &mut Chain<T> {
        self.exclusive_chain_at(None).0
    }

    /// Like [`exclusive_chain`](Self::exclusive_chain), carrying a slot index
    /// of the current chain across a possible copy.
    ///
    /// A shared chain is rebuilt densely, so slot indices change; the
    /// returned index names the same element in the chain now owned.
    fn exclusive_chain_at(&mut self, anchor: Option<usize>) -> (&mut Chain<T>, Option<usize>) {
        let anchor = if self.is_shared() {
            let (copy, translated) = self.chain.duplicate(anchor);
            tracing::trace!(
                from = %self.chain.id(),
                to = %copy.id(),
                length = copy.length,
                "copied shared chain before mutation"
            );
            self.chain = ReferenceCounter::new(copy);
            translated
        } else {
            anchor
        };
        (ReferenceCounter::make_mut(&mut self.chain), anchor)
    }

    /// Inserts a value at the front of the list.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// O(1), or O(n) if the chain is shared
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list = CowList::new();
    /// for value in (1..=6).rev() {
    ///     list.insert_first(value);
    /// }
    /// assert_eq!(list.to_string(), "1 -> 2 -> 3 -> 4 -> 5 -> 6");
    /// ```
    pub fn insert_first(&mut self, value: T) -> Position {
        let chain = self.exclusive_chain();
        let index = chain.push_front(value);
        chain.position(index)
    }

    /// Appends a value at the back of the list.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// O(1), or O(n) if the chain is shared
    pub fn append(&mut self, value: T) -> Position {
        let chain = self.exclusive_chain();
        let index = chain.push_back(value);
        chain.position(index)
    }

    /// Inserts a value right after the node at `after`.
    ///
    /// Inserting after the last node behaves exactly like [`append`](Self::append).
    /// The position is checked against this list before any copy-on-write
    /// happens; if the chain then gets copied, the insertion lands at the
    /// same place in the copy.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StalePosition`] if `after` does not resolve in
    /// this list. The list is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let first = list.first().unwrap();
    /// list.insert_after(666, first).unwrap();
    /// assert_eq!(list.to_string(), "1 -> 666 -> 2 -> 3");
    /// ```
    pub fn insert_after(&mut self, value: T, after: Position) -> Result<Position, ListError> {
        let anchor = self.locate_for_mutation(after)?;
        let (chain, anchor) = self.exclusive_chain_at(Some(anchor));
        let Some(anchor) = anchor else {
            return Err(ListError::StalePosition { position: after });
        };
        let index = chain.insert_after(anchor, value);
        Ok(chain.position(index))
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1), or O(n) if the chain is shared
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.exclusive_chain().pop_front()
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// A single-element list hands back its only value.
    ///
    /// # Complexity
    ///
    /// O(1), or O(n) if the chain is shared
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = std::iter::once(7).collect();
    /// assert_eq!(list.remove_last(), Some(7));
    /// assert!(list.is_empty());
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.exclusive_chain().pop_back()
    }

    /// Removes and returns the element right after the node at `after`.
    ///
    /// Returns `Ok(None)` and leaves the list untouched, without copying a
    /// shared chain, when that node has no successor.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StalePosition`] if `after` does not resolve in
    /// this list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cowlink::sequence::CowList;
    ///
    /// let mut list: CowList<i32> = (1..=3).collect();
    /// let last = list.last().unwrap();
    /// assert_eq!(list.remove_after(last), Ok(None));
    ///
    /// let first = list.first().unwrap();
    /// assert_eq!(list.remove_after(first), Ok(Some(2)));
    /// assert_eq!(list.to_string(), "1 -> 3");
    /// ```
    pub fn remove_after(&mut self, after: Position) -> Result<Option<T>, ListError> {
        let anchor = self.locate_for_mutation(after)?;
        if self.chain.node(anchor).and_then(|node| node.next).is_none() {
            return Ok(None);
        }
        let (chain, anchor) = self.exclusive_chain_at(Some(anchor));
        Ok(anchor.and_then(|anchor| chain.remove_after(anchor)))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`CowList`].
pub struct CowListIterator<'a, T> {
    chain: &'a Chain<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for CowListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for CowListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.back?)?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for CowListIterator<'_, T> {}

impl<T> FusedIterator for CowListIterator<'_, T> {}

/// An owning iterator over the elements of a [`CowList`].
///
/// Owns a chain no other list shares and drains it from both ends.
pub struct CowListIntoIterator<T> {
    chain: Chain<T>,
}

impl<T> Iterator for CowListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.length, Some(self.chain.length))
    }
}

impl<T> DoubleEndedIterator for CowListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chain.pop_back()
    }
}

impl<T> ExactSizeIterator for CowListIntoIterator<T> {}

impl<T> FusedIterator for CowListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Shares the chain; no element is copied until one side mutates.
impl<T> Clone for CowList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            chain: ReferenceCounter::clone(&self.chain),
        }
    }
}

impl<T> Default for CowList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CowList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        for element in iter {
            chain.push_back(element);
        }
        Self {
            chain: ReferenceCounter::new(chain),
        }
    }
}

impl<T: Clone> Extend<T> for CowList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut elements = iter.into_iter().peekable();
        if elements.peek().is_none() {
            return;
        }
        let chain = self.exclusive_chain();
        for element in elements {
            chain.push_back(element);
        }
    }
}

impl<T: Clone> IntoIterator for CowList<T> {
    type Item = T;
    type IntoIter = CowListIntoIterator<T>;

    /// Consumes the chain in place when exclusive; otherwise iterates a
    /// copy and leaves the other owners untouched.
    fn into_iter(self) -> Self::IntoIter {
        let chain = ReferenceCounter::try_unwrap(self.chain)
            .unwrap_or_else(|shared| shared.duplicate(None).0);
        CowListIntoIterator { chain }
    }
}

impl<'a, T> IntoIterator for &'a CowList<T> {
    type Item = &'a T;
    type IntoIter = CowListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural equality: same values in the same order.
///
/// Node identity plays no part here; use [`Position`] equality for that.
/// Elements are always compared, so a list holding `NaN` is unequal even to
/// a copy sharing its chain, as with `Vec`.
impl<T: PartialEq> PartialEq for CowList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CowList<T> {}

impl<T: Hash> Hash for CowList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CowList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `1 -> 2 -> 3`, or `Empty list`.
impl<T: fmt::Display> fmt::Display for CowList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str(EMPTY_RENDERING);
        }
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                formatter.write_str(SEPARATOR)?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}

/// Parses the `Display` rendering back into a list.
///
/// `Empty list` always parses to the empty list, even for element types
/// whose own rendering could be that text.
///
/// # Examples
///
/// ```rust
/// use cowlink::sequence::CowList;
///
/// let list: CowList<i32> = "1 -> 2 -> 3".parse().unwrap();
/// assert_eq!(list.len(), 3);
///
/// let empty: CowList<i32> = "Empty list".parse().unwrap();
/// assert!(empty.is_empty());
/// ```
impl<T> FromStr for CowList<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = ParseListError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        if source == EMPTY_RENDERING {
            return Ok(Self::new());
        }
        source
            .split(SEPARATOR)
            .enumerate()
            .map(|(index, element)| {
                element.parse().map_err(|error: T::Err| ParseListError {
                    index,
                    message: error.to_string(),
                })
            })
            .collect()
    }
}

assert_impl_all!(CowList<i32>: Clone, Default, Eq, Hash, fmt::Debug, fmt::Display);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(CowList<i32>: Send, Sync);

#[cfg(feature = "arc")]
assert_impl_all!(CowList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
