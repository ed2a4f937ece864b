//! Error types for positional mutation and parsing.
//!
//! Absence is not an error in this crate: removing from an empty list,
//! stepping past either end, or removing after the last node all return
//! `None`. The types here cover the two cases where a caller handed in
//! something that cannot be honoured.

use crate::sequence::Position;

/// Errors reported by the positional mutators of [`CowList`](crate::sequence::CowList).
///
/// # Examples
///
/// ```rust
/// use cowlink::sequence::CowList;
/// use cowlink::ListError;
///
/// let mut list: CowList<i32> = (1..=3).collect();
/// let first = list.first().unwrap();
/// list.remove_first();
///
/// assert!(matches!(
///     list.insert_after(9, first),
///     Err(ListError::StalePosition { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The position no longer resolves to a node of this list.
    ///
    /// It was removed, taken from a different list value, or taken before
    /// a copy-on-write materialisation rebuilt this list's chain.
    #[error("position {position} does not refer to a live node of this list")]
    StalePosition {
        /// The rejected position.
        position: Position,
    },
}

/// Error returned when parsing the `Display` rendering of a list fails.
///
/// # Examples
///
/// ```rust
/// use cowlink::sequence::CowList;
///
/// let error = "1 -> two -> 3".parse::<CowList<i32>>().unwrap_err();
/// assert_eq!(error.index, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("element {index} could not be parsed: {message}")]
pub struct ParseListError {
    /// Zero-based index of the offending element.
    pub index: usize,
    /// Message of the element's own parse error.
    pub message: String,
}
