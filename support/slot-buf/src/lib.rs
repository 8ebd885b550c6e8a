#![cfg_attr(not(test), no_std)]
#![allow(unsafe_code)]

//! SlotBuf: the contiguous slot buffer behind `slotlist`.
//!
//! SlotBuf is deliberately dumb:
//! - One allocation of exactly `capacity` slots (no rounding, no hidden growth)
//! - Slots `[0, len)` are live, slots `[len, capacity)` are uninitialised
//! - Insertion and removal shift the tail in place with `ptr::copy`
//! - Growth is requested explicitly by the caller; the buffer never decides it
//!
//! Index and capacity preconditions are checked with `assert!`. Callers that
//! want recoverable errors validate before calling in.

extern crate alloc;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    mem::{self, ManuallyDrop},
    ptr::{self, NonNull},
    slice,
};

pub struct SlotBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(SlotBuf<u64>, [usize; 3]);

// SAFETY: SlotBuf owns its elements exactly like `Vec<T>` does.
unsafe impl<T: Send> Send for SlotBuf<T> {}
unsafe impl<T: Sync> Sync for SlotBuf<T> {}

impl<T> SlotBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// An empty buffer with zero capacity. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// An empty buffer with room for exactly `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            ptr: Self::allocate(cap),
            cap,
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }

    fn allocate(cap: usize) -> NonNull<T> {
        if cap == 0 || Self::IS_ZST {
            return NonNull::dangling();
        }
        let layout = Self::layout(cap);
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    /// # Safety
    ///
    /// `ptr` must come from `allocate(cap)` and must not be used afterwards.
    unsafe fn deallocate(ptr: NonNull<T>, cap: usize) {
        if cap == 0 || Self::IS_ZST {
            return;
        }
        unsafe { dealloc(ptr.as_ptr().cast(), Self::layout(cap)) }
    }

    /// Reallocates to exactly `new_cap` slots, moving every live element.
    ///
    /// A request at or below the current capacity is a no-op: the buffer
    /// never shrinks.
    #[cold]
    pub fn grow(&mut self, new_cap: usize) {
        if new_cap <= self.cap {
            return;
        }
        let new_ptr = Self::allocate(new_cap);
        // SAFETY: both regions hold at least `len` slots and do not overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            Self::deallocate(self.ptr, self.cap);
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Shifts `[index, len)` one slot toward the tail and writes `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the buffer is full.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
        assert!(self.len < self.cap, "insert into a full buffer");
        // SAFETY: `index <= len < cap`, so `index + 1 + (len - index)` stays
        // inside the allocation. `ptr::copy` handles the overlap.
        unsafe {
            let at = self.ptr.as_ptr().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            ptr::write(at, value);
        }
        self.len += 1;
    }

    pub fn push(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Removes the element at `index`, shifting `(index, len)` one slot toward
    /// the head. The vacated trailing slot is left uninitialised.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );
        // SAFETY: `index < len`; the element is read out before its slot is
        // overwritten, so ownership moves exactly once.
        unsafe {
            let at = self.ptr.as_ptr().add(index);
            let value = ptr::read(at);
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    pub fn replace(&mut self, index: usize, value: T) -> T {
        mem::replace(&mut self.as_mut_slice()[index], value)
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialised; a dangling pointer is fine for len 0.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Drops every live element. Capacity is retained.
    pub fn clear(&mut self) {
        let live: *mut [T] = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // Length goes to zero first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // SAFETY: `live` covered the initialised prefix and is no longer reachable.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Moves the live elements into a `Vec` and frees the buffer.
    pub fn into_vec(self) -> Vec<T> {
        let this = ManuallyDrop::new(self);
        let mut out = Vec::with_capacity(this.len);
        // SAFETY: `out` has room for `len` elements; ownership moves to `out`
        // and `this` is never dropped.
        unsafe {
            ptr::copy_nonoverlapping(this.ptr.as_ptr(), out.as_mut_ptr(), this.len);
            out.set_len(this.len);
            Self::deallocate(this.ptr, this.cap);
        }
        out
    }
}

impl<T> Default for SlotBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SlotBuf<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.cap);
        for value in self.as_slice() {
            out.push(value.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Drop for SlotBuf<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the buffer is owned by `self` and dropped exactly once.
        unsafe { Self::deallocate(self.ptr, self.cap) }
    }
}
