//! Iterators over a [`Deque`]

use std::iter::FusedIterator;

use crate::deque::Deque;
use crate::storage::{NodeArena, SlotId};

/// Borrowing iterator from head to tail
pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a NodeArena<T>,
        front: Option<SlotId>,
        back: Option<SlotId>,
        remaining: usize,
    ) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator that drains the deque from either end
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(deque: Deque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_head().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_tail().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_meets_in_the_middle() {
        let deque: Deque<_> = (1..=5).collect();
        let mut iter = deque.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_drains_both_ends() {
        let deque: Deque<_> = vec!["a", "b", "c"].into_iter().collect();
        let mut iter = deque.into_iter();

        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_borrowed_into_iter() {
        let deque: Deque<_> = (0..3).collect();
        let mut sum = 0;
        for value in &deque {
            sum += value;
        }
        assert_eq!(sum, 3);
        assert_eq!(deque.len(), 3);
    }
}
