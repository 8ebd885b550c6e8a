//! The sequence protocol shared by [`List`](crate::List) and [`View`](crate::View).
//!
//! Implementors supply the positional primitives (`get`, `set`, `insert`,
//! `remove`, ...). Everything else, including the bulk operations, is built on
//! top of those primitives so a list and any of its views behave identically.

use core::cell::Ref;

use crate::Vec;
use crate::cursor::Cursor;
use crate::error::{ListError, check_position_index};

pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    /// Borrows the element at `index`.
    ///
    /// The returned guard borrows the shared backing store. While it is
    /// alive, mutations through views of the same list fail with
    /// [`ListError::Busy`]; the list itself cannot be mutated at all.
    fn get(&self, index: usize) -> Result<Ref<'_, Self::Item>, ListError>;

    /// Overwrites the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, ListError>;

    /// Inserts at `index` (`0 ..= len`), shifting later elements toward the tail.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<(), ListError>;

    /// Removes and returns the element at `index`, shifting later elements toward the head.
    fn remove(&mut self, index: usize) -> Result<Self::Item, ListError>;

    /// Removes every element.
    fn clear(&mut self) -> Result<(), ListError>;

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;

    /// Inserts `values` in order starting at `index` (`0 ..= len`).
    ///
    /// Bulk operations funnel through here. The default inserts one element
    /// at a time; lists and views override it to run the growth policy once
    /// for the whole batch.
    fn insert_many(&mut self, index: usize, values: Vec<Self::Item>) -> Result<(), ListError> {
        check_position_index(index, self.len())?;
        for (at, value) in (index..).zip(values) {
            self.insert(at, value)?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, value: Self::Item) -> Result<(), ListError> {
        let len = self.len();
        self.insert(len, value)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    fn remove_item(&mut self, value: &Self::Item) -> Result<bool, ListError>
    where
        Self::Item: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v Self::Item>,
        Self::Item: PartialEq + 'v,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Appends every value in order. Returns `Ok(false)` if there was nothing to add.
    fn push_all<I>(&mut self, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let len = self.len();
        self.insert_all(len, values)
    }

    /// Inserts every value in order starting at `index`.
    ///
    /// An empty input is a no-op returning `Ok(false)`, whatever `index` is.
    fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let values: Vec<Self::Item> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(false);
        }
        self.insert_many(index, values)?;
        Ok(true)
    }

    /// Removes the first occurrence of each listed value. Returns whether anything changed.
    fn remove_all<'v, I>(&mut self, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = &'v Self::Item>,
        Self::Item: PartialEq + 'v,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove_item(value)?;
        }
        Ok(changed)
    }

    /// Copies the elements into a fresh `Vec`.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut out = Vec::new();
        self.copy_to(&mut out);
        out
    }

    /// Replaces the contents of `buf` with a copy of the elements, reusing
    /// its allocation.
    fn copy_to(&self, buf: &mut Vec<Self::Item>)
    where
        Self::Item: Clone,
    {
        buf.clear();
        buf.reserve(self.len());
        buf.extend((0..self.len()).filter_map(|index| self.get(index).ok().map(|v| (*v).clone())));
    }

    fn cursor(&mut self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }

    /// A cursor whose first `next()` yields the element at `start` (`0 ..= len`).
    fn cursor_at(&mut self, start: usize) -> Result<Cursor<'_, Self>, ListError>
    where
        Self: Sized,
    {
        Cursor::at(self, start)
    }
}
