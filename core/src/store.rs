//! Bounds-checked backing store shared by a list and all of its views.

use core::ops::Range;

use slotlist_slot_buf::SlotBuf;

use crate::Vec;
use crate::error::{ListError, check_element_index, check_position_index};
use crate::growth::grown_capacity;

/// The single owner of a list's elements.
///
/// `List` holds one of these behind a `RefCell`; every `View` of that list
/// reads and writes through the same instance using root-relative indices.
#[derive(Clone)]
pub(crate) struct Store<T> {
    slots: SlotBuf<T>,
}

impl<T> Store<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotBuf::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }

    /// Makes room for `additional` more elements according to the growth policy.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let capacity = self.capacity();
        if let Some(new_capacity) = grown_capacity(capacity, self.len(), additional) {
            tracing::debug!(
                from = capacity,
                to = new_capacity,
                len = self.len(),
                "growing backing store"
            );
            self.slots.grow(new_capacity);
        }
    }

    pub(crate) fn get(&self, index: usize) -> Result<&T, ListError> {
        check_element_index(index, self.len())?;
        Ok(&self.slots.as_slice()[index])
    }

    pub(crate) fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_element_index(index, self.len())?;
        Ok(self.slots.replace(index, value))
    }

    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position_index(index, self.len())?;
        self.reserve(1);
        self.slots.insert(index, value);
        Ok(())
    }

    /// Inserts a batch at `index`, growing at most once for the whole batch.
    pub(crate) fn insert_many(&mut self, index: usize, values: Vec<T>) -> Result<(), ListError> {
        check_position_index(index, self.len())?;
        self.reserve(values.len());
        for (at, value) in (index..).zip(values) {
            self.slots.insert(at, value);
        }
        Ok(())
    }

    /// Appends a batch, growing at most once for the whole batch.
    pub(crate) fn append(&mut self, values: Vec<T>) {
        self.reserve(values.len());
        for value in values {
            self.slots.push(value);
        }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.reserve(1);
        self.slots.push(value);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_element_index(index, self.len())?;
        Ok(self.slots.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        tracing::debug!(len = self.len(), "clearing backing store");
        self.slots.clear();
    }

    /// First index in `range` holding an element equal to `value`.
    ///
    /// The range is clamped to the live prefix so a stale view can never
    /// read past it.
    pub(crate) fn index_of_range(&self, value: &T, range: Range<usize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let range = self.clamp(range);
        let start = range.start;
        self.as_slice()[range]
            .iter()
            .position(|candidate| candidate == value)
            .map(|found| start + found)
    }

    /// Last index in `range` holding an element equal to `value`.
    pub(crate) fn last_index_of_range(&self, value: &T, range: Range<usize>) -> Option<usize>
    where
        T: PartialEq,
    {
        let range = self.clamp(range);
        let start = range.start;
        self.as_slice()[range]
            .iter()
            .rposition(|candidate| candidate == value)
            .map(|found| start + found)
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.len());
        range.start.min(end)..end
    }
}
