//! Live sub-range windows over a list.
//!
//! A [`View`] never holds elements. It is a root-relative `offset`, its own
//! length, and a link to the view it was cut from. Every read and write goes
//! straight to the root's store, translated by `offset`; every insertion or
//! removal adjusts the cached length of this view and of each ancestor view
//! by walking the parent chain:
//!
//! ```text
//! root store  [a b c d e f g]
//! view        [  b c d e    ]   offset 1, len 4, parent: none
//! sub_view    [    c d      ]   offset 2, len 2, parent: view
//!
//! sub_view.insert(1, x)  =>  store.insert(3, x); sub_view.len = 3; view.len = 5
//! ```
//!
//! Views cut from the same parent are siblings. A sibling's `set` is visible
//! immediately, but a sibling's structural change does not update the other
//! siblings' offsets: after it, their contents are unspecified until they are
//! recreated. Accesses through such a stale view stay memory-safe: reads fail
//! with bounds errors once they run past the root, and insertions or removals
//! are refused once the view no longer fits inside every enclosing window.
//!
//! Element guards returned by `get`, `as_slice` or `iter` share the root's
//! store. While one is alive, mutations through any view of the same list
//! fail with [`ListError::Busy`].

use core::cell::{Cell, Ref, RefCell, RefMut};
use core::fmt;

use crate::Vec;
use crate::error::{ListError, check_element_index, check_position_index, check_range};
use crate::iter::Iter;
use crate::sequence::Sequence;
use crate::store::Store;

pub struct View<'a, T> {
    store: &'a RefCell<Store<T>>,
    parent: Option<&'a View<'a, T>>,
    /// Start of this window in root coordinates.
    offset: usize,
    len: Cell<usize>,
}

#[derive(Clone, Copy)]
enum Resize {
    Grow(usize),
    Shrink(usize),
}

impl<'a, T> View<'a, T> {
    pub(crate) fn new(
        store: &'a RefCell<Store<T>>,
        from: usize,
        to: usize,
    ) -> Result<Self, ListError> {
        check_range(from, to, store.borrow().len())?;
        tracing::trace!(from, to, "creating root view");
        Ok(Self {
            store,
            parent: None,
            offset: from,
            len: Cell::new(to - from),
        })
    }

    /// A window over `[from, to)` of this view, in this view's coordinates.
    pub fn sub_view(&self, from: usize, to: usize) -> Result<View<'_, T>, ListError> {
        check_range(from, to, self.len.get())?;
        tracing::trace!(from, to, parent_offset = self.offset, "creating sub-view");
        Ok(View {
            store: self.store,
            parent: Some(self),
            offset: self.offset + from,
            len: Cell::new(to - from),
        })
    }

    /// Where this view starts in the root list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Borrows the window as a slice of the root's storage.
    ///
    /// Fails only for a stale view whose range now runs past the root.
    pub fn as_slice(&self) -> Result<Ref<'_, [T]>, ListError> {
        let store = self.store_ref()?;
        let range = self.offset..self.end();
        check_position_index(range.end, store.len())?;
        Ok(Ref::map(store, move |store| &store.as_slice()[range]))
    }

    /// Iterates over the window, yielding a guard per element.
    pub fn iter(&self) -> Result<Iter<'_, T>, ListError> {
        self.as_slice().map(Iter::new)
    }

    fn root_index(&self, index: usize) -> usize {
        self.offset + index
    }

    /// One past the last root index covered by this window.
    fn end(&self) -> usize {
        self.offset.saturating_add(self.len.get())
    }

    fn store_ref(&self) -> Result<Ref<'a, Store<T>>, ListError> {
        self.store.try_borrow().map_err(|_| ListError::Busy)
    }

    fn store_mut(&self) -> Result<RefMut<'a, Store<T>>, ListError> {
        self.store.try_borrow_mut().map_err(|_| ListError::Busy)
    }

    /// Checks that this window still lies inside its parent, the parent inside
    /// its own parent, and so on up to the root store.
    ///
    /// Insertions and removals resize every ancestor, so they must run this
    /// first: a sibling's structural change can leave this view reaching past
    /// an ancestor that has already shrunk.
    fn check_chain(&self, root_len: usize) -> Result<(), ListError> {
        let mut node = self;
        loop {
            let bound = match node.parent {
                Some(parent) => parent.end(),
                None => root_len,
            };
            let end = node.end();
            if end > bound {
                tracing::debug!(
                    offset = node.offset,
                    end,
                    bound,
                    "refusing change through stale view"
                );
                return Err(ListError::out_of_bounds(end, bound));
            }
            match node.parent {
                Some(parent) => node = parent,
                None => return Ok(()),
            }
        }
    }

    /// Applies a length change to this view and every ancestor.
    ///
    /// Callers run `check_chain` first, so no ancestor is shorter than a shrink.
    fn propagate(&self, resize: Resize) {
        let mut depth = 0usize;
        let mut node = Some(self);
        while let Some(view) = node {
            let len = view.len.get();
            view.len.set(match resize {
                Resize::Grow(n) => len.saturating_add(n),
                Resize::Shrink(n) => len.saturating_sub(n),
            });
            node = view.parent;
            depth += 1;
        }
        tracing::trace!(depth, "propagated view resize");
    }
}

impl<T> Sequence for View<'_, T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len.get()
    }

    fn get(&self, index: usize) -> Result<Ref<'_, T>, ListError> {
        check_element_index(index, self.len())?;
        let at = self.root_index(index);
        let store = self.store_ref()?;
        let len = store.len();
        Ref::filter_map(store, |store| store.get(at).ok())
            .map_err(|_| ListError::out_of_bounds(at, len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_element_index(index, self.len())?;
        self.store_mut()?.set(self.root_index(index), value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position_index(index, self.len())?;
        {
            let mut store = self.store_mut()?;
            self.check_chain(store.len())?;
            store.insert(self.root_index(index), value)?;
        }
        self.propagate(Resize::Grow(1));
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_element_index(index, self.len())?;
        let removed = {
            let mut store = self.store_mut()?;
            self.check_chain(store.len())?;
            store.remove(self.root_index(index))?
        };
        self.propagate(Resize::Shrink(1));
        Ok(removed)
    }

    /// Removes the whole window from the root.
    fn clear(&mut self) -> Result<(), ListError> {
        let len = self.len();
        {
            let mut store = self.store_mut()?;
            self.check_chain(store.len())?;
            for at in (self.offset..self.end()).rev() {
                store.remove(at)?;
            }
        }
        self.propagate(Resize::Shrink(len));
        Ok(())
    }

    /// `None` also when a live `RefMut` on the store makes it unreadable.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let range = self.offset..self.end();
        self.store_ref()
            .ok()?
            .index_of_range(value, range)
            .map(|found| found - self.offset)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let range = self.offset..self.end();
        self.store_ref()
            .ok()?
            .last_index_of_range(value, range)
            .map(|found| found - self.offset)
    }

    fn insert_many(&mut self, index: usize, values: Vec<T>) -> Result<(), ListError> {
        check_position_index(index, self.len())?;
        let count = values.len();
        {
            let mut store = self.store_mut()?;
            self.check_chain(store.len())?;
            store.insert_many(self.root_index(index), values)?;
        }
        self.propagate(Resize::Grow(count));
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("View");
        out.field("offset", &self.offset).field("size", &self.len());
        match self.as_slice() {
            Ok(elements) => out.field("elements", &&*elements),
            Err(_) => out.field("elements", &"<stale>"),
        };
        out.finish()
    }
}
