//! Growth policy for the backing store.
//!
//! Capacity doubles whenever an insertion would fill the buffer. A bulk
//! insertion larger than the doubled capacity grows to exactly what it needs.

/// Capacity of a list built with [`List::new`](crate::List::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Returns the capacity to grow to before inserting `needed` more elements
/// into a store holding `len` of `capacity` slots, or `None` if no growth is
/// required.
///
/// Growth triggers once `len + needed` reaches `capacity`; the new capacity
/// is `max(capacity * 2, len + needed)`.
///
/// # Panics
///
/// Panics with "capacity overflow" if `len + needed` overflows `usize`.
pub fn grown_capacity(capacity: usize, len: usize, needed: usize) -> Option<usize> {
    if needed == 0 {
        return None;
    }
    let required = len.checked_add(needed).expect("capacity overflow");
    if required < capacity {
        return None;
    }
    Some(capacity.saturating_mul(2).max(required))
}
