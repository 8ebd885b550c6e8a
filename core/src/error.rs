//! Error types for list, view and cursor operations.
//!
//! Every fallible primitive validates its arguments before touching storage,
//! so an `Err` from one means nothing was mutated. Bulk removals stop at the
//! first error and keep what they already removed.

use thiserror::Error;

/// The class of a [`ListError`].
///
/// Useful when a caller only cares whether it passed a bad argument, a bad
/// index, walked off the end, or misused a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad constructor or range argument.
    Argument,
    /// Index outside the legal range for the operation.
    Bounds,
    /// A cursor has no element in the requested direction.
    Exhaustion,
    /// A cursor mutation without an eligible preceding step, or a mutation
    /// while element guards are still borrowed.
    IllegalState,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A negative initial capacity was requested.
    #[error("Illegal Capacity: {0}")]
    IllegalCapacity(isize),

    /// A sub-range whose start lies after its end.
    #[error("Illegal range: from ({from}) > to ({to})")]
    IllegalRange { from: usize, to: usize },

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No such element")]
    NoSuchElement,

    /// `remove`/`set` on a cursor that has not stepped since creation or
    /// since its last structural change.
    #[error("Illegal state: no element to modify, call next() or previous() first")]
    IllegalState,

    /// A view mutation while a guard from `get`, `as_slice` or an iterator
    /// still borrows the same list.
    #[error("List is borrowed: drop element guards before modifying it")]
    Busy,
}

impl ListError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListError::IllegalCapacity(_) | ListError::IllegalRange { .. } => ErrorKind::Argument,
            ListError::IndexOutOfBounds { .. } => ErrorKind::Bounds,
            ListError::NoSuchElement => ErrorKind::Exhaustion,
            ListError::IllegalState | ListError::Busy => ErrorKind::IllegalState,
        }
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        ListError::IndexOutOfBounds { index, len }
    }
}

/// Checks `index < len`, the contract for reads, writes and removals.
pub(crate) fn check_element_index(index: usize, len: usize) -> Result<(), ListError> {
    if index < len {
        Ok(())
    } else {
        Err(ListError::out_of_bounds(index, len))
    }
}

/// Checks `index <= len`, the contract for insertion and cursor positioning.
pub(crate) fn check_position_index(index: usize, len: usize) -> Result<(), ListError> {
    if index <= len {
        Ok(())
    } else {
        Err(ListError::out_of_bounds(index, len))
    }
}

/// Checks a `[from, to)` window against a sequence of length `len`.
///
/// Bounds are checked before argument order.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), ListError> {
    if to > len {
        return Err(ListError::out_of_bounds(to, len));
    }
    if from > to {
        return Err(ListError::IllegalRange { from, to });
    }
    Ok(())
}
