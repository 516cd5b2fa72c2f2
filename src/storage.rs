//! Exclusively owned blocks of uninitialized memory.
//!
//! A [`RawBuf<T>`] is the only place in this crate that talks to the global
//! allocator. It knows how many slots it has room for, but not which of them
//! hold live values; that bookkeeping belongs to its owner.

use crate::AllocError;

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

/// A block of uninitialized memory with room for a fixed number of `T`s.
///
/// The buffer never reads its slots as `T`, and dropping it frees the memory
/// without dropping any values that may still be stored there.
///
/// Ownership of the block is exclusive. A `RawBuf` can be moved, swapped or
/// [taken](RawBuf::take), but not cloned, since duplicating memory whose
/// contents have unknown lifetimes is meaningless:
///
/// ```compile_fail
/// let buf = advec::RawBuf::<String>::with_capacity(4);
/// let copy = buf.clone();
/// //             ^^^^^ `RawBuf<String>` does not implement `Clone`
/// ```
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    elem: PhantomData<T>, // Indicates this buffer may own values of type T
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Constructs an empty buffer without allocating.
    ///
    /// # Examples
    /// ```
    /// let buf = advec::RawBuf::<u32>::new();
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            elem: PhantomData,
        }
    }

    /// Allocates a buffer with room for exactly `capacity` values, returning
    /// an error if the request is too large or the allocator fails.
    ///
    /// Requesting zero slots, or any number of zero-sized values, never
    /// allocates.
    ///
    /// # Examples
    /// ```
    /// use advec::{AllocError, RawBuf};
    ///
    /// let buf = RawBuf::<u64>::try_with_capacity(10).unwrap();
    /// assert_eq!(buf.capacity(), 10);
    ///
    /// let err = RawBuf::<u64>::try_with_capacity(usize::MAX).unwrap_err();
    /// assert_eq!(err, AllocError::CapacityOverflow);
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(RawBuf {
                ptr: NonNull::dangling(),
                cap: capacity,
                elem: PhantomData,
            });
        }

        let ptr = unsafe { alloc(layout) }.cast::<T>();
        match NonNull::new(ptr) {
            Some(ptr) => Ok(RawBuf {
                ptr,
                cap: capacity,
                elem: PhantomData,
            }),
            None => Err(AllocError::OutOfMemory { layout }),
        }
    }

    /// Allocates a buffer with room for exactly `capacity` values.
    ///
    /// # Panics
    /// Panics if `capacity` values of type `T` would exceed `isize::MAX`
    /// bytes. Aborts through [`handle_alloc_error`] if the allocator fails.
    /// See [`try_with_capacity`](RawBuf::try_with_capacity) for a checked
    /// version.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(buf) => buf,
            Err(AllocError::CapacityOverflow) => capacity_overflow(),
            Err(AllocError::OutOfMemory { layout }) => handle_alloc_error(layout),
        }
    }

    /// Returns the number of values the buffer has room for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is dangling (but well-aligned) if nothing was allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at position `index`.
    ///
    /// `index` may be equal to the capacity, yielding the one-past-the-end
    /// pointer. Going further is only caught in debug builds.
    ///
    /// Even when in bounds, the value it points to may not be initialized.
    #[inline]
    pub fn ptr_at(&self, index: usize) -> *const T {
        debug_assert!(index <= self.cap);
        self.as_ptr().wrapping_add(index)
    }

    /// Returns a mutable pointer to the slot at position `index`.
    ///
    /// Even when in bounds, the value it points to may not be initialized.
    #[inline]
    pub fn mut_ptr_at(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        self.as_mut_ptr().wrapping_add(index)
    }

    /// Extracts a slice over every slot of the buffer.
    #[inline]
    pub fn slots(&self) -> &[MaybeUninit<T>] {
        unsafe { core::slice::from_raw_parts(self.as_ptr().cast(), self.cap) }
    }

    /// Extracts a mutable slice over every slot of the buffer.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr().cast(), self.cap) }
    }

    /// Exchanges the memory blocks owned by `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// let mut a = advec::RawBuf::<u8>::with_capacity(4);
    /// let mut b = advec::RawBuf::<u8>::with_capacity(16);
    /// a.swap(&mut b);
    /// assert_eq!(a.capacity(), 16);
    /// assert_eq!(b.capacity(), 4);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Moves the memory block out of `self`, leaving an empty buffer behind.
    ///
    /// # Examples
    /// ```
    /// let mut buf = advec::RawBuf::<u8>::with_capacity(8);
    /// let taken = buf.take();
    /// assert_eq!(taken.capacity(), 8);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    fn current_layout(&self) -> Option<Layout> {
        let size = mem::size_of::<T>() * self.cap;
        if size == 0 {
            return None;
        }

        // the same layout was successfully computed in `try_with_capacity`
        unsafe { Some(Layout::from_size_align_unchecked(size, mem::align_of::<T>())) }
    }
}

impl<T> Default for RawBuf<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.current_layout() {
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Debug for RawBuf<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}
