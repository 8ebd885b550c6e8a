//! Construction options for [`List`](crate::List).

use crate::growth::DEFAULT_CAPACITY;

/// Options consumed by [`List::with_options`](crate::List::with_options).
///
/// # Example
///
/// ```
/// use slotlist_core::{List, ListOptions};
///
/// let list: List<u8> = List::with_options(ListOptions::default().with_initial_capacity(64));
/// assert_eq!(list.capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Slots allocated up front. Growth doubles from here.
    pub initial_capacity: usize,
}

impl ListOptions {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
