//! Bidirectional cursor with in-place mutation.
//!
//! A [`Cursor`] sits *between* elements: `next()` yields the element after it,
//! `previous()` the element before it. `remove()` and `set()` act on whichever
//! element the last `next()`/`previous()` returned, and are only legal while
//! that step is still the latest thing the cursor did.
//!
//! ```
//! use slotlist_core::{List, Sequence};
//!
//! let mut list = List::from([1, 2, 3, 4]);
//! let mut cursor = list.cursor();
//! while cursor.has_next() {
//!     let even = *cursor.next().unwrap() % 2 == 0;
//!     if even {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! ```

use core::cell::Ref;

use crate::error::{ListError, check_position_index};
use crate::sequence::Sequence;

/// Which step, if any, makes `remove()`/`set()` eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastStep {
    None,
    Forward,
    Backward,
}

pub struct Cursor<'a, S: Sequence + ?Sized> {
    seq: &'a mut S,
    /// Index of the element the next `next()` yields. Always `<= seq.len()`.
    cursor: usize,
    last_step: LastStep,
}

impl<'a, S: Sequence + ?Sized> Cursor<'a, S> {
    pub fn new(seq: &'a mut S) -> Self {
        Self {
            seq,
            cursor: 0,
            last_step: LastStep::None,
        }
    }

    pub fn at(seq: &'a mut S, start: usize) -> Result<Self, ListError> {
        check_position_index(start, seq.len())?;
        Ok(Self {
            seq,
            cursor: start,
            last_step: LastStep::None,
        })
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.seq.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Ref<'_, S::Item>, ListError> {
        if !self.has_next() {
            return Err(ListError::NoSuchElement);
        }
        let value = self.seq.get(self.cursor)?;
        self.cursor += 1;
        self.last_step = LastStep::Forward;
        Ok(value)
    }

    pub fn previous(&mut self) -> Result<Ref<'_, S::Item>, ListError> {
        if !self.has_previous() {
            return Err(ListError::NoSuchElement);
        }
        let value = self.seq.get(self.cursor - 1)?;
        self.cursor -= 1;
        self.last_step = LastStep::Backward;
        Ok(value)
    }

    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// `None` when the cursor is at the front.
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Index of the element the last step returned.
    fn last_returned(&self) -> Result<usize, ListError> {
        match self.last_step {
            LastStep::None => Err(ListError::IllegalState),
            LastStep::Forward => Ok(self.cursor - 1),
            LastStep::Backward => Ok(self.cursor),
        }
    }

    /// Removes the element most recently returned by `next()` or `previous()`.
    pub fn remove(&mut self) -> Result<S::Item, ListError> {
        let index = self.last_returned()?;
        let removed = self.seq.remove(index)?;
        if self.last_step == LastStep::Forward {
            self.cursor -= 1;
        }
        self.last_step = LastStep::None;
        Ok(removed)
    }

    /// Overwrites the element most recently returned by `next()` or
    /// `previous()`. The cursor stays eligible for another `set()` or `remove()`.
    pub fn set(&mut self, value: S::Item) -> Result<S::Item, ListError> {
        let index = self.last_returned()?;
        self.seq.set(index, value)
    }

    /// Inserts before the cursor, so the following `next()` is unaffected
    /// and `previous()` would return the new element.
    pub fn add(&mut self, value: S::Item) -> Result<(), ListError> {
        self.seq.insert(self.cursor, value)?;
        self.cursor += 1;
        self.last_step = LastStep::None;
        Ok(())
    }
}
