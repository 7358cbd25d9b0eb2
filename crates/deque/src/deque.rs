//! Double-ended queue
//!
//! Elements are stored in doubly linked nodes inside a [`NodeArena`]. The
//! deque only tracks the head and tail slots; the length is the arena's
//! occupied count.

use std::fmt;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::{DequeError, Result};
use crate::iter::{IntoIter, Iter};
use crate::storage::{Node, NodeArena, SlotId};

/// A double-ended queue with O(1) push and pop at both ends
///
/// The deque owns its nodes but nothing beyond what `T` owns. Storing
/// borrowed values such as `Deque<&str>` leaves the referents with the
/// caller.
#[derive(Clone)]
pub struct Deque<T> {
    nodes: NodeArena<T>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> Deque<T> {
    /// Create an empty deque
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Create an empty deque with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Release the deque's storage
    ///
    /// Elements are dropped the way `T` drops; borrowed elements are left
    /// untouched. Equivalent to letting the deque go out of scope.
    pub fn destroy(self) {
        drop(self);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements the deque can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Append `value` after the current tail
    pub fn push_tail(&mut self, value: T) {
        let id = self.nodes.insert(Node::new(value, self.tail, None));
        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(old_tail) => old_tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Insert `value` before the current head
    pub fn push_head(&mut self, value: T) {
        let id = self.nodes.insert(Node::new(value, None, self.head));
        match self.head.and_then(|head| self.nodes.get_mut(head)) {
            Some(old_head) => old_head.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    pub fn pop_head(&mut self) -> Result<T> {
        self.head
            .and_then(|id| self.unlink(id))
            .ok_or(DequeError::empty("pop_head"))
    }

    pub fn pop_tail(&mut self) -> Result<T> {
        self.tail
            .and_then(|id| self.unlink(id))
            .ok_or(DequeError::empty("pop_tail"))
    }

    pub fn peek_head(&self) -> Result<&T> {
        self.value_at(self.head)
            .ok_or(DequeError::empty("peek_head"))
    }

    pub fn peek_tail(&self) -> Result<&T> {
        self.value_at(self.tail)
            .ok_or(DequeError::empty("peek_tail"))
    }

    /// Element `n` positions from the head, if there is one
    pub fn peek_nth(&self, n: usize) -> Option<&T> {
        self.value_at(self.slot_at(n))
    }

    /// Remove and return the element `n` positions from the head
    pub fn pop_nth(&mut self, n: usize) -> Option<T> {
        let id = self.slot_at(n)?;
        self.unlink(id)
    }

    /// Remove every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Reverse the order of the elements in place
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|id| self.nodes.get_mut(id)) {
            std::mem::swap(&mut node.prev, &mut node.next);
            // prev now holds the old next
            cursor = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Index of the first element, counted from the head, matching `predicate`
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.tail, self.len())
    }

    fn value_at(&self, id: Option<SlotId>) -> Option<&T> {
        id.and_then(|id| self.nodes.get(id)).map(|node| &node.value)
    }

    /// Slot holding the element `n` positions from the head, walking from
    /// whichever end is closer
    fn slot_at(&self, n: usize) -> Option<SlotId> {
        let len = self.len();
        if n >= len {
            return None;
        }

        if n < len / 2 {
            let mut cursor = self.head;
            for _ in 0..n {
                cursor = cursor.and_then(|id| self.nodes.get(id))?.next;
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(len - 1 - n) {
                cursor = cursor.and_then(|id| self.nodes.get(id))?.prev;
            }
            cursor
        }
    }

    /// Detach the node in `id` and splice its neighbours together
    fn unlink(&mut self, id: SlotId) -> Option<T> {
        let node = self.nodes.remove(id)?;

        match node.prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        Some(node.value)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality is element-wise; slot layout is not observable.
impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_tail(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Deque::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Serialize> Serialize for Deque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Deque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DequeVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for DequeVisitor<T> {
            type Value = Deque<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of deque elements")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Deque<T>, A::Error> {
                let mut deque = Deque::with_capacity(cautious_capacity::<T>(seq.size_hint()));
                while let Some(value) = seq.next_element()? {
                    deque.push_tail(value);
                }
                Ok(deque)
            }
        }

        deserializer.deserialize_seq(DequeVisitor(std::marker::PhantomData))
    }
}

/// Slots to reserve for a length hint taken from serialized input. The hint
/// is untrusted, so the reservation is capped by a byte budget.
fn cautious_capacity<T>(hint: Option<usize>) -> usize {
    const MAX_PREALLOC_BYTES: usize = 1024 * 1024;
    let node_size = std::mem::size_of::<Node<T>>().max(1);
    hint.unwrap_or(0).min(MAX_PREALLOC_BYTES / node_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(deque: &Deque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    #[test]
    fn test_new_deque_is_empty() {
        let deque: Deque<u32> = Deque::new();
        assert!(deque.is_empty());
        assert_eq!(deque.len(), 0);
        assert_eq!(deque.capacity(), 0);
    }

    #[test]
    fn test_push_both_ends() {
        let mut deque = Deque::new();
        deque.push_tail(2);
        deque.push_tail(3);
        deque.push_head(1);
        deque.push_head(0);

        assert_eq!(collect(&deque), vec![0, 1, 2, 3]);
        assert_eq!(deque.peek_head(), Ok(&0));
        assert_eq!(deque.peek_tail(), Ok(&3));
        assert_eq!(deque.len(), 4);
    }

    #[test]
    fn test_pop_both_ends() {
        let mut deque: Deque<_> = (1..=4).collect();

        assert_eq!(deque.pop_head(), Ok(1));
        assert_eq!(deque.pop_tail(), Ok(4));
        assert_eq!(deque.pop_tail(), Ok(3));
        assert_eq!(deque.pop_head(), Ok(2));
        assert!(deque.is_empty());
        assert_eq!(deque.peek_head(), Err(DequeError::empty("peek_head")));
    }

    #[test]
    fn test_empty_errors_name_the_operation() {
        let mut deque: Deque<()> = Deque::new();

        assert_eq!(
            deque.pop_head(),
            Err(DequeError::EmptyContainer {
                operation: "pop_head"
            })
        );
        assert_eq!(
            deque.pop_tail(),
            Err(DequeError::EmptyContainer {
                operation: "pop_tail"
            })
        );
        assert_eq!(
            deque.peek_tail(),
            Err(DequeError::EmptyContainer {
                operation: "peek_tail"
            })
        );
        assert_eq!(deque.len(), 0);
    }

    #[test]
    fn test_single_element_is_head_and_tail() {
        let mut deque = Deque::new();
        deque.push_head("only");

        assert_eq!(deque.peek_head(), Ok(&"only"));
        assert_eq!(deque.peek_tail(), Ok(&"only"));

        assert_eq!(deque.pop_tail(), Ok("only"));
        assert!(deque.is_empty());

        // Links must be reset so the next push starts a fresh chain
        deque.push_tail("again");
        assert_eq!(deque.peek_head(), Ok(&"again"));
        assert_eq!(deque.peek_tail(), Ok(&"again"));
    }

    #[test]
    fn test_peek_nth() {
        let deque: Deque<_> = ["a", "b", "c", "d", "e"].into_iter().collect();

        assert_eq!(deque.peek_nth(0), Some(&"a"));
        assert_eq!(deque.peek_nth(1), Some(&"b"));
        assert_eq!(deque.peek_nth(3), Some(&"d"));
        assert_eq!(deque.peek_nth(4), Some(&"e"));
        assert_eq!(deque.peek_nth(5), None);
    }

    #[test]
    fn test_pop_nth_relinks_neighbours() {
        let mut deque: Deque<_> = (0..6).collect();

        assert_eq!(deque.pop_nth(2), Some(2));
        assert_eq!(deque.pop_nth(3), Some(4));
        assert_eq!(collect(&deque), vec![0, 1, 3, 5]);

        assert_eq!(deque.pop_nth(0), Some(0));
        assert_eq!(deque.pop_nth(2), Some(5));
        assert_eq!(deque.peek_head(), Ok(&1));
        assert_eq!(deque.peek_tail(), Ok(&3));
        assert_eq!(deque.pop_nth(2), None);

        let backwards: Vec<_> = deque.iter().rev().copied().collect();
        assert_eq!(backwards, vec![3, 1]);
    }

    #[test]
    fn test_slots_are_reused() {
        let mut deque = Deque::with_capacity(4);
        let capacity = deque.capacity();

        for i in 0..100 {
            deque.push_tail(i);
            deque.push_head(i);
            assert_eq!(deque.pop_tail(), Ok(i));
            assert_eq!(deque.pop_head(), Ok(i));
        }

        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), capacity);
    }

    #[test]
    fn test_clear() {
        let mut deque: Deque<_> = (0..10).collect();
        deque.clear();

        assert!(deque.is_empty());
        assert!(deque.pop_head().is_err());

        deque.push_tail(7);
        assert_eq!(collect(&deque), vec![7]);
    }

    #[test]
    fn test_reverse() {
        let mut deque: Deque<_> = (1..=5).collect();
        deque.reverse();

        assert_eq!(collect(&deque), vec![5, 4, 3, 2, 1]);
        assert_eq!(deque.peek_head(), Ok(&5));
        assert_eq!(deque.peek_tail(), Ok(&1));

        deque.push_tail(0);
        deque.push_head(6);
        assert_eq!(collect(&deque), vec![6, 5, 4, 3, 2, 1, 0]);

        let mut empty: Deque<u8> = Deque::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_search() {
        let deque: Deque<_> = ["Alice", "Bob", "Fred"].into_iter().collect();

        assert_eq!(deque.position(|name| name.starts_with('B')), Some(1));
        assert_eq!(deque.position(|name| name.is_empty()), None);
        assert!(deque.contains(&"Fred"));
        assert!(!deque.contains(&"Big Jim"));
    }

    #[test]
    fn test_equality_ignores_layout() {
        let mut churned = Deque::new();
        churned.push_tail(9);
        churned.push_tail(1);
        churned.push_tail(2);
        let _ = churned.pop_head();
        churned.push_tail(3);

        let fresh: Deque<_> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(churned, fresh);
        assert_ne!(churned, Deque::new());
    }

    #[test]
    fn test_debug_lists_elements() {
        let deque: Deque<_> = ["x", "y"].into_iter().collect();
        assert_eq!(format!("{:?}", deque), r#"["x", "y"]"#);
    }

    /// Yields one element while claiming an enormous length
    struct InflatedLength(Option<u8>);

    impl Iterator for InflatedLength {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            self.0.take()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX / 4, Some(usize::MAX / 4))
        }
    }

    #[test]
    fn test_deserialize_ignores_inflated_length_hint() {
        use serde::de::value::{Error as ValueError, SeqDeserializer};

        let input = SeqDeserializer::<_, ValueError>::new(InflatedLength(Some(7)));
        let deque = Deque::<u8>::deserialize(input).unwrap();

        assert_eq!(deque.len(), 1);
        assert_eq!(deque.peek_head(), Ok(&7));
        assert!(deque.capacity() <= 1024 * 1024);
    }

    #[test]
    fn test_cautious_capacity() {
        assert_eq!(cautious_capacity::<u64>(None), 0);
        assert_eq!(cautious_capacity::<u64>(Some(10)), 10);

        let cap = cautious_capacity::<u64>(Some(usize::MAX));
        assert_eq!(cap, 1024 * 1024 / std::mem::size_of::<Node<u64>>());
    }

    #[test]
    fn test_serde_json_as_sequence() {
        let mut deque: Deque<String> = Deque::new();
        deque.push_tail("b".to_string());
        deque.push_head("a".to_string());

        let json = serde_json::to_string(&deque).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let decoded: Deque<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, deque);
    }

    #[test]
    fn test_destroy_leaves_borrowed_elements_alone() {
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        let mut deque = Deque::new();
        for name in &names {
            deque.push_tail(name.as_str());
        }
        deque.destroy();

        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
