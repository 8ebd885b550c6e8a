//! The root container.

use core::cell::{Ref, RefCell};
use core::fmt;

use crate::Vec;
use crate::error::ListError;
use crate::growth::DEFAULT_CAPACITY;
use crate::iter::Iter;
use crate::options::ListOptions;
use crate::sequence::Sequence;
use crate::store::Store;
use crate::view::View;

/// A growable array list that owns its elements.
///
/// All positional operations come from the [`Sequence`] trait. Views created
/// with [`List::view`] borrow the list and share its storage; while any view
/// is alive the list itself can only be read, so a view can never be
/// invalidated by a mutation of its root.
///
/// # Example
///
/// ```
/// use slotlist_core::{List, Sequence};
///
/// let mut list = List::from(['a', 'b', 'c', 'd', 'e']);
/// {
///     let mut view = list.view(1, 3).unwrap();
///     view.insert(0, 'x').unwrap();
///     assert_eq!(view.to_vec(), vec!['x', 'b', 'c']);
/// }
/// assert_eq!(list.len(), 6);
/// assert_eq!(*list.get(1).unwrap(), 'x');
/// ```
pub struct List<T> {
    store: RefCell<Store<T>>,
}

impl<T> List<T> {
    /// An empty list with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RefCell::new(Store::with_capacity(capacity)),
        }
    }

    /// Like [`List::with_capacity`], for capacities coming from signed host values.
    ///
    /// Returns [`ListError::IllegalCapacity`] if `capacity` is negative.
    pub fn try_with_capacity(capacity: isize) -> Result<Self, ListError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ListError::IllegalCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn with_options(options: ListOptions) -> Self {
        Self::with_capacity(options.initial_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.store.borrow().capacity()
    }

    pub fn as_slice(&self) -> Ref<'_, [T]> {
        Ref::map(self.store.borrow(), |store| store.as_slice())
    }

    /// Iterates over the elements, yielding a guard per element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.store.into_inner().into_vec()
    }

    /// A live window over `[from, to)`.
    ///
    /// Fails with a bounds error if `to > len`, then with an argument error
    /// if `from > to`.
    pub fn view(&self, from: usize, to: usize) -> Result<View<'_, T>, ListError> {
        View::new(&self.store, from, to)
    }

    fn store_mut(&mut self) -> &mut Store<T> {
        self.store.get_mut()
    }
}

impl<T> Sequence for List<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.store.borrow().len()
    }

    fn get(&self, index: usize) -> Result<Ref<'_, T>, ListError> {
        let store = self.store.borrow();
        let len = store.len();
        Ref::filter_map(store, |store| store.get(index).ok())
            .map_err(|_| ListError::out_of_bounds(index, len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.store_mut().set(index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.store_mut().insert(index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.store_mut().remove(index)
    }

    fn clear(&mut self) -> Result<(), ListError> {
        self.store_mut().clear();
        Ok(())
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let store = self.store.borrow();
        store.index_of_range(value, 0..store.len())
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let store = self.store.borrow();
        store.last_index_of_range(value, 0..store.len())
    }

    fn insert_many(&mut self, index: usize, values: Vec<T>) -> Result<(), ListError> {
        self.store_mut().insert_many(index, values)
    }

    fn push(&mut self, value: T) -> Result<(), ListError> {
        self.store_mut().push(value);
        Ok(())
    }

    fn copy_to(&self, buf: &mut Vec<T>)
    where
        T: Clone,
    {
        buf.clear();
        buf.extend_from_slice(&self.as_slice());
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            store: RefCell::new(self.store.borrow().clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.as_slice() == *other.as_slice()
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store_mut().append(iter.into_iter().collect());
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = Ref<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        f.debug_struct("List")
            .field("size", &store.len())
            .field("capacity", &store.capacity())
            .field("elements", &store.as_slice())
            .finish()
    }
}
