//! Arena storage for the nodes of a [`CowList`](super::CowList).
//!
//! A [`Chain`] owns every node outright in a vector of slots. Forward and
//! backward links are plain slot indices, so there is no ownership cycle
//! to break and no borrow to juggle while relinking. Each slot carries a
//! generation that is bumped whenever its node is released; together with
//! the chain's own [`ChainId`] this is what lets a [`Position`] go stale.
//!
//! ```text
//! slots:  [0: "b" g0]  [1: vacant g1]  [2: "a" g0]  [3: "c" g0]
//! head = 2 -> 0 -> 3 = tail
//! vacant = [1]
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Position;

/// Process-unique identity of a chain.
///
/// Every chain, including every copy produced by copy-on-write, gets a
/// fresh id. A position is only ever honoured by the chain whose id it
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ChainId(u64);

impl ChainId {
    fn fresh() -> Self {
        static NEXT_CHAIN_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_CHAIN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "chain#{}", self.0)
    }
}

/// A single element and its links.
///
/// `next` is the ownership direction; `previous` only exists for O(1)
/// backward steps and predecessor relinking.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
    pub(crate) previous: Option<usize>,
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// The node arena shared copy-on-write between list values.
pub(crate) struct Chain<T> {
    id: ChainId,
    slots: Vec<Slot<T>>,
    vacant: Vec<usize>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    pub(crate) length: usize,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self {
            id: ChainId::fresh(),
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    #[inline]
    pub(crate) const fn id(&self) -> ChainId {
        self.id
    }

    #[inline]
    pub(crate) fn node(&self, index: usize) -> Option<&Node<T>> {
        self.slots.get(index).and_then(|slot| slot.node.as_ref())
    }

    #[inline]
    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(index).and_then(|slot| slot.node.as_mut())
    }

    /// Builds the handle for an occupied slot of this chain.
    pub(crate) fn position(&self, index: usize) -> Position {
        debug_assert!(
            self.node(index).is_some(),
            "position requested for vacant slot {index}"
        );
        let generation = self.slots.get(index).map_or(0, |slot| slot.generation);
        Position::new(self.id, index, generation)
    }

    /// Resolves a position to a slot index if it still names a live node here.
    pub(crate) fn locate(&self, position: Position) -> Option<usize> {
        if position.chain() != self.id {
            return None;
        }
        let index = position.index();
        self.slots
            .get(index)
            .filter(|slot| slot.generation == position.generation() && slot.node.is_some())
            .map(|_| index)
    }

    fn allocate(&mut self, value: T, next: Option<usize>, previous: Option<usize>) -> usize {
        let node = Node {
            value,
            next,
            previous,
        };
        if let Some(index) = self.vacant.pop() {
            self.slots[index].node = Some(node);
            index
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            self.slots.len() - 1
        }
    }

    fn release(&mut self, index: usize) -> Option<Node<T>> {
        let slot = self.slots.get_mut(index)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(index);
        Some(node)
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.next = next;
        }
    }

    fn set_previous(&mut self, index: usize, previous: Option<usize>) {
        if let Some(node) = self.node_mut(index) {
            node.previous = previous;
        }
    }

    // =========================================================================
    // Link surgery
    // =========================================================================

    pub(crate) fn push_front(&mut self, value: T) -> usize {
        let old_head = self.head;
        let index = self.allocate(value, old_head, None);
        if let Some(old_head) = old_head {
            self.set_previous(old_head, Some(index));
        }
        self.head = Some(index);
        // An empty chain gains its first node; otherwise the old tail stays.
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.length += 1;
        index
    }

    pub(crate) fn push_back(&mut self, value: T) -> usize {
        let Some(old_tail) = self.tail else {
            return self.push_front(value);
        };
        let index = self.allocate(value, None, Some(old_tail));
        self.set_next(old_tail, Some(index));
        self.tail = Some(index);
        self.length += 1;
        index
    }

    /// Splices a new node after `anchor`, which must be occupied.
    pub(crate) fn insert_after(&mut self, anchor: usize, value: T) -> usize {
        if self.tail == Some(anchor) {
            return self.push_back(value);
        }
        let successor = self.node(anchor).and_then(|node| node.next);
        debug_assert!(
            successor.is_some_and(|next| self.node(next).and_then(|node| node.previous) == Some(anchor)),
            "successor of a non-tail node must link back to it"
        );
        let index = self.allocate(value, successor, Some(anchor));
        self.set_next(anchor, Some(index));
        if let Some(successor) = successor {
            self.set_previous(successor, Some(index));
        }
        self.length += 1;
        index
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let removed = self.release(self.head?)?;
        self.head = removed.next;
        match self.head {
            Some(new_head) => self.set_previous(new_head, None),
            None => self.tail = None,
        }
        self.length -= 1;
        Some(removed.value)
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return self.pop_front();
        }
        let removed = self.release(self.tail?)?;
        self.tail = removed.previous;
        if let Some(new_tail) = self.tail {
            self.set_next(new_tail, None);
        }
        self.length -= 1;
        Some(removed.value)
    }

    /// Unlinks the successor of `anchor`, if it has one.
    pub(crate) fn remove_after(&mut self, anchor: usize) -> Option<T> {
        let successor = self.node(anchor)?.next?;
        let removed = self.release(successor)?;
        debug_assert_eq!(removed.previous, Some(anchor));
        self.set_next(anchor, removed.next);
        match removed.next {
            Some(next) => self.set_previous(next, Some(anchor)),
            None => self.tail = Some(anchor),
        }
        self.length -= 1;
        Some(removed.value)
    }

    /// Returns the number of allocated slots, vacant ones included.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Checks that the forward and backward chains agree with each other
    /// and with the cached tail and length.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut count = 0;
        let mut previous = None;
        let mut current = self.head;
        while let Some(index) = current {
            let Some(node) = self.node(index) else {
                return false;
            };
            if node.previous != previous {
                return false;
            }
            count += 1;
            previous = Some(index);
            current = node.next;
        }
        previous == self.tail && count == self.length && self.head.is_none() == (self.length == 0)
    }
}

impl<T: Clone> Chain<T> {
    /// Deep-copies the chain into a dense arena with a fresh identity.
    ///
    /// Walks head to tail and appends a fresh node per value, so the copy
    /// holds no vacant slots and costs O(length). `anchor`, a slot index of
    /// this chain, is translated to the slot holding the same element in
    /// the copy.
    pub(crate) fn duplicate(&self, anchor: Option<usize>) -> (Self, Option<usize>) {
        let mut copy = Self {
            slots: Vec::with_capacity(self.length),
            ..Self::new()
        };
        let mut translated = None;
        let mut current = self.head;
        while let Some(index) = current {
            let Some(node) = self.node(index) else {
                break;
            };
            let copied = copy.push_back(node.value.clone());
            if anchor == Some(index) {
                translated = Some(copied);
            }
            current = node.next;
        }
        debug_assert_eq!(copy.length, self.length);
        (copy, translated)
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.duplicate(None).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values<T: Clone>(chain: &Chain<T>) -> Vec<T> {
        let mut collected = Vec::new();
        let mut current = chain.head;
        while let Some(index) = current {
            let node = chain.node(index).unwrap();
            collected.push(node.value.clone());
            current = node.next;
        }
        collected
    }

    // =========================================================================
    // Tail Cache
    // =========================================================================

    #[rstest]
    fn test_push_front_into_empty_sets_head_and_tail() {
        let mut chain = Chain::new();
        let index = chain.push_front(1);
        assert_eq!(chain.head, Some(index));
        assert_eq!(chain.tail, Some(index));
        assert!(chain.is_consistent());
    }

    #[rstest]
    fn test_push_front_onto_single_node_keeps_former_node_as_tail() {
        let mut chain = Chain::new();
        let former = chain.push_front(2);
        chain.push_front(1);
        assert_eq!(chain.tail, Some(former));
        assert_eq!(values(&chain), vec![1, 2]);
        assert!(chain.is_consistent());
    }

    #[rstest]
    fn test_pop_front_last_node_clears_tail() {
        let mut chain = Chain::new();
        chain.push_back(1);
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.head, None);
        assert_eq!(chain.tail, None);
        assert!(chain.is_consistent());
    }

    #[rstest]
    fn test_pop_back_single_node_returns_value() {
        let mut chain = Chain::new();
        chain.push_back(7);
        assert_eq!(chain.pop_back(), Some(7));
        assert!(chain.is_consistent());
    }

    #[rstest]
    fn test_remove_after_penultimate_moves_tail() {
        let mut chain = Chain::new();
        let first = chain.push_back(1);
        chain.push_back(2);
        assert_eq!(chain.remove_after(first), Some(2));
        assert_eq!(chain.tail, Some(first));
        assert!(chain.is_consistent());
    }

    #[rstest]
    fn test_insert_after_middle_relinks_both_neighbours() {
        let mut chain = Chain::new();
        let first = chain.push_back(1);
        chain.push_back(3);
        chain.insert_after(first, 2);
        assert_eq!(values(&chain), vec![1, 2, 3]);
        assert!(chain.is_consistent());
    }

    // =========================================================================
    // Slot Reuse and Generations
    // =========================================================================

    #[rstest]
    fn test_released_slot_is_reused() {
        let mut chain = Chain::new();
        chain.push_back(1);
        chain.push_back(2);
        chain.pop_front();
        chain.push_back(3);
        assert_eq!(chain.capacity(), 2);
        assert_eq!(values(&chain), vec![2, 3]);
    }

    #[rstest]
    fn test_reused_slot_does_not_resolve_old_position() {
        let mut chain = Chain::new();
        let index = chain.push_back(1);
        let position = chain.position(index);
        chain.pop_front();
        let reused = chain.push_back(2);
        assert_eq!(reused, index);
        assert_eq!(chain.locate(position), None);
        assert_eq!(chain.locate(chain.position(reused)), Some(reused));
    }

    // =========================================================================
    // Deep Copy
    // =========================================================================

    #[rstest]
    fn test_duplicate_has_fresh_identity() {
        let mut chain = Chain::new();
        let index = chain.push_back(1);
        chain.push_back(2);
        let (copy, _) = chain.duplicate(None);
        assert_ne!(copy.id(), chain.id());
        assert_eq!(copy.locate(chain.position(index)), None);
        assert_eq!(values(&copy), vec![1, 2]);
        assert!(copy.is_consistent());
    }

    #[rstest]
    fn test_duplicate_of_shrunk_chain_is_dense() {
        let mut chain = Chain::new();
        for value in 0..1000 {
            chain.push_back(value);
        }
        for _ in 0..998 {
            chain.pop_back();
        }
        assert_eq!(chain.capacity(), 1000);

        let copy = chain.clone();

        assert_eq!(copy.capacity(), 2);
        assert_eq!(values(&copy), vec![0, 1]);
        assert!(copy.is_consistent());
    }

    #[rstest]
    fn test_duplicate_translates_anchor_in_sparse_chain() {
        let mut chain = Chain::new();
        for value in 0..6 {
            chain.push_back(value);
        }
        chain.pop_front();
        chain.pop_front();
        let anchor = chain
            .head
            .and_then(|head| chain.node(head))
            .and_then(|node| node.next)
            .unwrap();
        assert_eq!(chain.node(anchor).map(|node| node.value), Some(3));

        let (copy, translated) = chain.duplicate(Some(anchor));

        assert_eq!(translated, Some(1));
        assert_eq!(
            translated
                .and_then(|index| copy.node(index))
                .map(|node| node.value),
            Some(3)
        );
    }

    #[rstest]
    fn test_chain_id_display() {
        let id = ChainId(3);
        assert_eq!(format!("{id}"), "chain#3");
    }
}
