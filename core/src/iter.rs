//! Borrowing iteration over a list or view.
//!
//! [`Iter`] keeps one shared guard on the backing store and hands out a
//! cloned guard per element, so `for x in &list` reads `*x` without copying.
//! Mutating through a view while an iterator is alive fails with
//! [`ListError::Busy`](crate::ListError::Busy).

use core::cell::Ref;
use core::iter::FusedIterator;

pub struct Iter<'a, T> {
    slice: Ref<'a, [T]>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: Ref<'a, [T]>) -> Self {
        let back = slice.len();
        Self {
            slice,
            front: 0,
            back,
        }
    }

    fn element(&self, index: usize) -> Ref<'a, T> {
        Ref::map(Ref::clone(&self.slice), |slice| &slice[index])
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Ref<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.element(self.front);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.element(self.back))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{List, Sequence, Vec, vec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_loop_over_list() {
        let list = List::from([3, 1, 4]);
        let mut sum = 0;
        for value in &list {
            sum += *value;
        }
        assert_eq!(sum, 8);
    }

    #[test]
    fn test_both_ends_meet() {
        let list = List::from(['a', 'b', 'c', 'd']);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(*iter.next().unwrap(), 'a');
        assert_eq!(*iter.next_back().unwrap(), 'd');
        assert_eq!(iter.len(), 2);
        let rest: Vec<char> = iter.rev().map(|c| *c).collect();
        assert_eq!(rest, vec!['c', 'b']);
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let list: List<u8> = List::new();
        let mut iter = list.iter();
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_view_iter_is_windowed() {
        let list: List<i32> = (0..6).collect();
        let view = list.view(2, 5).unwrap();
        let seen: Vec<i32> = view.iter().unwrap().map(|v| *v).collect();
        assert_eq!(seen, vec![2, 3, 4]);
        assert_eq!(seen, view.to_vec());
    }
}
