#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! A growable array list with live, nestable sub-range views.
//!
//! - [`List`] owns a contiguous backing store that doubles when it fills up.
//! - [`View`] is a window over part of a list (or of another view) that reads
//!   and writes the list's storage directly. Inserting or removing through a
//!   view updates the list and every enclosing view.
//! - [`Cursor`] walks a list or view in both directions and can insert,
//!   overwrite or remove at its position.
//!
//! Positional operations live on the [`Sequence`] trait so they work the same
//! on lists and views.

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, string::ToString, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod cursor;
pub mod error;
pub mod growth;
pub mod iter;
pub mod list;
pub mod options;
pub mod sequence;
mod store;
pub mod view;

pub use cursor::Cursor;
pub use error::{ErrorKind, ListError};
pub use growth::DEFAULT_CAPACITY;
pub use iter::Iter;
pub use list::List;
pub use options::ListOptions;
pub use sequence::Sequence;
pub use view::View;

#[cfg(test)]
mod cursor_test;
