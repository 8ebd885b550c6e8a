//! Slotlist - a growable array list with live, nestable views
//!
//! # Overview
//!
//! A [`List`] stores its elements in one contiguous buffer that doubles when
//! it fills up. A [`View`] is a window over part of a list, or over part of
//! another view, that reads and writes the list's buffer directly: nothing is
//! copied, and inserting or removing through a view shifts the list's
//! elements and updates the length of every enclosing view.
//!
//! # Quick Start
//!
//! ```
//! use slotlist::{List, Sequence};
//!
//! let mut list: List<i32> = (1..=5).collect();
//! {
//!     let outer = list.view(1, 5).unwrap();
//!     let mut inner = outer.sub_view(1, 3).unwrap();
//!     inner.insert(1, 0).unwrap();
//!     assert_eq!(inner.to_vec(), vec![3, 0, 4]);
//!     drop(inner);
//!     assert_eq!(outer.len(), 5);
//! }
//! assert_eq!(list.to_vec(), vec![1, 2, 3, 0, 4, 5]);
//!
//! // Once the views are gone the list is mutable again.
//! list.push(6).unwrap();
//! assert_eq!(list.len(), 7);
//! ```
//!
//! # Cursors
//!
//! Both lists and views hand out a [`Cursor`] that walks in either direction
//! and can insert, overwrite or remove at its position:
//!
//! ```
//! use slotlist::{List, ListError, Sequence};
//!
//! let mut list = List::from(["a", "b", "c"]);
//! let mut cursor = list.cursor_at(3)?;
//! assert_eq!(*cursor.previous()?, "c");
//! cursor.set("z")?;
//! cursor.add("y")?;
//! drop(cursor);
//! assert_eq!(list.to_vec(), vec!["a", "b", "y", "z"]);
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Absent elements
//!
//! Store `Option<T>` to hold absent entries; searching for `None` matches
//! only absent slots.

pub use slotlist_core::{
    Cursor, DEFAULT_CAPACITY, ErrorKind, Iter, List, ListError, ListOptions, Sequence, View,
};
