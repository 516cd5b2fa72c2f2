//! A contiguous growable array type built on [`RawBuf`].
//!
//! A [`Vector<T>`] owns a single [`RawBuf<T>`] and a length. The slots
//! `[0, len)` hold live values and the slots `[len, capacity)` are
//! uninitialized memory. Appending doubles the capacity whenever it runs out,
//! so pushing `n` values costs O(n) in total.
//!
//! # Growth and panics
//!
//! Growing the vector never clones and never drops existing values; they are
//! relocated into the new buffer, which cannot fail. New values are always
//! constructed *before* the old buffer is given up. If their constructor
//! panics, whatever was built so far is dropped, the new buffer is freed, and
//! the vector is left exactly as it was. This holds for [`emplace_with`]
//! (and everything built on it), [`reserve`], and [`resize_with`].
//!
//! [`emplace_with`]: Vector::emplace_with
//! [`reserve`]: Vector::reserve
//! [`resize_with`]: Vector::resize_with

use crate::storage::{capacity_overflow, RawBuf};
use crate::{AllocError, Result};

use core::cmp::{self, Ordering};
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{self, FusedIterator};
use core::mem::{self, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;

/// Drops the values written so far into a run of slots if the code filling
/// them unwinds.
struct PartialRun<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> Drop for PartialRun<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}

/// Writes up to `count` values taken from `values` into consecutive slots
/// starting at `dst`, returning how many were written.
///
/// If producing a value panics, the values written so far are dropped before
/// the panic continues, leaving every slot uninitialized again.
///
/// # Safety
/// `dst` must be valid for writes of `count` values, and the slots must not
/// hold live values.
unsafe fn write_run<T, It: Iterator<Item = T>>(dst: *mut T, count: usize, values: It) -> usize {
    let mut run = PartialRun {
        start: dst,
        initialized: 0,
    };

    for value in values.take(count) {
        dst.add(run.initialized).write(value);
        run.initialized += 1;
    }

    let written = run.initialized;
    mem::forget(run);
    written
}

/// A contiguous growable array type that manages its own memory.
///
/// See the [module-level documentation](crate::vec) for more.
pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// Constructs a new, empty `Vector` without allocating.
    ///
    /// # Examples
    /// ```
    /// let vec = advec::Vector::<u32>::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `Vector` with room for exactly `capacity`
    /// values.
    ///
    /// # Panics
    /// Panics if the capacity overflows, or aborts if the allocator fails.
    /// See [`try_with_capacity`](Vector::try_with_capacity) for a checked
    /// version.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Constructs a new, empty `Vector` with room for exactly `capacity`
    /// values, returning an error if the allocation fails.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Vector {
            buf: RawBuf::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Returns the number of values the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of values in the vector, also referred to as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// * `new_len` must be less than or equal to `capacity()`.
    /// * All values at `old_len..new_len` must be fully initialized.
    /// * Values at `new_len..old_len` are forgotten, not dropped.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Returns a raw pointer to the vector's buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the vector's buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to `&s[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Extracts a mutable slice of the entire vector.
    ///
    /// Equivalent to `&mut s[..]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Returns the remaining empty space at the end of the vector as a slice
    /// of [`MaybeUninit<T>`].
    ///
    /// # Examples
    /// ```
    /// let mut v = advec::Vector::with_capacity(8);
    /// v.push(1);
    ///
    /// let uninit = v.spare_capacity_mut();
    /// uninit[0].write(2);
    /// uninit[1].write(3);
    /// unsafe { v.set_len(3); }
    ///
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.len;
        &mut self.buf.slots_mut()[len..]
    }

    /// Ensures the vector can hold at least `capacity` values in total.
    ///
    /// Does nothing if the current capacity already suffices. Otherwise the
    /// vector reallocates to exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics if the capacity overflows, or aborts if the allocator fails.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::new();
    /// vec.push(1);
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    #[track_caller]
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }

        self.relocate_into(RawBuf::with_capacity(capacity));
    }

    /// Ensures the vector can hold at least `capacity` values in total,
    /// returning an error if the allocation fails.
    ///
    /// The vector is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1u64, 2, 3]);
    /// assert!(vec.try_reserve(usize::MAX).is_err());
    /// assert_eq!(vec.capacity(), 3);
    /// assert!(vec.try_reserve(6).is_ok());
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.relocate_into(RawBuf::try_with_capacity(capacity)?);
        Ok(())
    }

    /// Moves every live value into `new_buf` and adopts it as storage.
    ///
    /// The previous buffer is freed without dropping anything, since its
    /// values now live in `new_buf`. Values already written past `len` in
    /// `new_buf` are left alone.
    fn relocate_into(&mut self, mut new_buf: RawBuf<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }
        self.buf.swap(&mut new_buf);
    }

    /// The capacity to grow to once the vector is full.
    fn grown_capacity(&self) -> Result<usize> {
        if self.len == 0 {
            Ok(1)
        } else {
            self.len.checked_mul(2).ok_or(AllocError::CapacityOverflow)
        }
    }

    /// Makes room for `additional` more values, keeping appends amortized.
    #[track_caller]
    fn reserve_for_append(&mut self, additional: usize) {
        let needed = match self.len.checked_add(additional) {
            Some(needed) => needed,
            None => capacity_overflow(),
        };

        if needed > self.capacity() {
            let grown = self.grown_capacity().unwrap_or(needed);
            self.reserve(cmp::max(needed, grown));
        }
    }

    /// Resizes the vector in place so that `len` is equal to `new_len`.
    ///
    /// If `new_len` is less than `len`, the vector is truncated. Otherwise the
    /// difference is filled with values returned by `f`. If `new_len` exceeds
    /// the capacity, the vector reallocates to exactly `new_len` slots.
    ///
    /// If `f` panics, the values it produced are dropped and the vector is
    /// left as it was.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 2, 3]);
    /// let mut next = 3;
    /// vec.resize_with(5, || { next += 1; next });
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// assert_eq!(vec.capacity(), 5);
    ///
    /// vec.resize_with(2, || unreachable!());
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[track_caller]
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        let count = new_len - len;
        if new_len <= self.capacity() {
            unsafe {
                write_run(self.buf.mut_ptr_at(len), count, iter::repeat_with(f));
            }
        } else {
            // the new values go in first, so a panic leaves the old buffer intact
            let mut new_buf = RawBuf::<T>::with_capacity(new_len);
            unsafe {
                write_run(new_buf.mut_ptr_at(len), count, iter::repeat_with(f));
            }
            self.relocate_into(new_buf);
        }

        self.len = new_len;
    }

    /// Shortens the vector, keeping the first `len` values and dropping the rest.
    ///
    /// If `len` is greater than the vector's current length, this has no effect.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 2, 3, 4]);
    /// vec.truncate(6);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// vec.truncate(2);
    /// assert_eq!(vec, [1, 2]);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        self.len = len;
        unsafe {
            let tail = self.buf.mut_ptr_at(len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, old_len - len));
        }
    }

    /// Clears the vector, dropping all values. The capacity is kept.
    ///
    /// Equivalent to `s.truncate(0)`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Constructs a value with `f` and inserts it at position `index`,
    /// shifting all values after it to the right. Returns a reference to the
    /// new value.
    ///
    /// When the vector is full, it reallocates to twice its length (or one
    /// slot, if empty) and constructs the value directly in the new buffer.
    /// If `f` panics, the vector is left exactly as it was.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 3]);
    /// let two = vec.emplace_with(1, || 2);
    /// *two *= 10;
    /// assert_eq!(vec, [1, 20, 3]);
    /// ```
    #[track_caller]
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "insertion index (is {}) should be <= len (is {})",
                index, len
            );
        }

        let len = self.len;
        if index > len {
            assert_failed(index, len);
        }

        if len == self.capacity() {
            self.grow_and_emplace(index, f);
        } else if index == len {
            unsafe {
                self.buf.mut_ptr_at(len).write(f());
            }
        } else {
            // construct before shifting, so a panic in `f` changes nothing
            let value = f();
            unsafe {
                let hole = self.buf.mut_ptr_at(index);
                ptr::copy(hole, hole.add(1), len - index);
                hole.write(value);
            }
        }

        self.len = len + 1;
        unsafe { &mut *self.buf.mut_ptr_at(index) }
    }

    #[track_caller]
    fn grow_and_emplace<F: FnOnce() -> T>(&mut self, index: usize, f: F) {
        let len = self.len;
        let new_cap = match self.grown_capacity() {
            Ok(cap) => cap,
            Err(_) => capacity_overflow(),
        };

        let mut new_buf = RawBuf::<T>::with_capacity(new_cap);
        unsafe {
            // if `f` panics here, only the unlinked `new_buf` is released
            new_buf.mut_ptr_at(index).write(f());

            let src = self.buf.as_ptr();
            let dst = new_buf.as_mut_ptr();
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
        }
        self.buf.swap(&mut new_buf);
    }

    /// Constructs a value with `f` and appends it to the back of the vector,
    /// returning a reference to it.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::new();
    /// vec.emplace_back_with(|| [0u8; 4])[2] = 9;
    /// assert_eq!(vec, [[0, 0, 9, 0]]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.emplace_with(self.len, f)
    }

    /// Inserts `value` at position `index`, shifting all values after it to
    /// the right. Returns a reference to the inserted value.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 2, 3]);
    /// vec.insert(1, 99);
    /// assert_eq!(vec, [1, 99, 2, 3]);
    /// vec.insert(4, 4);
    /// assert_eq!(vec, [1, 99, 2, 3, 4]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_with(index, move || value)
    }

    /// Appends `value` to the back of the vector.
    ///
    /// # Panics
    /// Panics if the new capacity overflows, or aborts if the allocator
    /// fails. See [`try_push`](Vector::try_push) for a checked version.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::new();
    /// let mut capacities = [0; 3];
    /// for (i, cap) in capacities.iter_mut().enumerate() {
    ///     vec.push(i);
    ///     *cap = vec.capacity();
    /// }
    /// assert_eq!(vec, [0, 1, 2]);
    /// assert_eq!(capacities, [1, 2, 4]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.emplace_back_with(move || value);
    }

    /// Appends `value` to the back of the vector, handing it back if the
    /// vector is full and cannot be grown.
    ///
    /// The vector is unchanged on error.
    pub fn try_push(&mut self, value: T) -> core::result::Result<(), T> {
        if self.len == self.capacity() {
            let new_buf = match self.grown_capacity().and_then(RawBuf::try_with_capacity) {
                Ok(buf) => buf,
                Err(_) => return Err(value),
            };
            self.relocate_into(new_buf);
        }

        unsafe {
            self.buf.mut_ptr_at(self.len).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the last value from the vector and returns it, or [`None`] if
    /// it is empty.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 2, 3]);
    /// assert_eq!(vec.pop(), Some(3));
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        unsafe { Some(self.buf.ptr_at(self.len).read()) }
    }

    /// Drops the last value of the vector.
    ///
    /// # Panics
    /// Panics if the vector is empty. See [`pop`](Vector::pop) for a checked
    /// version.
    #[track_caller]
    pub fn pop_back(&mut self) {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed() -> ! {
            panic!("cannot pop from an empty vector")
        }

        if self.len == 0 {
            assert_failed();
        }

        self.len -= 1;
        unsafe {
            ptr::drop_in_place(self.buf.mut_ptr_at(self.len));
        }
    }

    /// Removes and returns the value at position `index`, shifting all values
    /// after it to the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from(['a', 'b', 'c']);
    /// assert_eq!(vec.remove(0), 'a');
    /// assert_eq!(vec, ['b', 'c']);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("removal index (is {}) should be < len (is {})", index, len);
        }

        let len = self.len;
        if index >= len {
            assert_failed(index, len);
        }

        unsafe {
            let p = self.buf.mut_ptr_at(index);
            let ret = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            ret
        }
    }

    /// Drops the value at position `index`, shifting all values after it to
    /// the left.
    ///
    /// The vector's bookkeeping is settled before the value is dropped, so a
    /// panicking destructor leaves a consistent vector behind.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 99, 2, 3]);
    /// vec.erase(2);
    /// assert_eq!(vec, [1, 99, 3]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Exchanges the contents of `self` and `other` without moving any values.
    ///
    /// # Examples
    /// ```
    /// let mut a = advec::Vector::from([1, 2]);
    /// let mut b = advec::Vector::with_capacity(10);
    /// a.swap_with(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 10);
    /// assert_eq!(b, [1, 2]);
    /// ```
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the values and the buffer out of `self`, leaving an empty vector
    /// without capacity behind.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 2, 3]);
    /// let taken = vec.take();
    /// assert_eq!(taken, [1, 2, 3]);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        Vector {
            buf: self.buf.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }
}

impl<T: Default> Vector<T> {
    /// Constructs a vector of `len` default values, with a capacity of exactly
    /// `len`.
    ///
    /// If `T::default` panics, the values constructed so far are dropped and
    /// the buffer is freed before the panic propagates.
    ///
    /// # Examples
    /// ```
    /// let vec = advec::Vector::<String>::with_len(3);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.capacity(), 3);
    /// assert!(vec.iter().all(String::is_empty));
    /// ```
    #[track_caller]
    pub fn with_len(len: usize) -> Self {
        let mut buf = RawBuf::<T>::with_capacity(len);
        unsafe {
            write_run(buf.as_mut_ptr(), len, iter::repeat_with(T::default));
        }
        Vector { buf, len }
    }

    /// Resizes the vector in place so that `len` is equal to `new_len`,
    /// filling any new slots with default values.
    ///
    /// See [`resize_with`](Vector::resize_with) for the growth policy and
    /// panic behavior.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1, 99, 3]);
    /// vec.resize(5);
    /// assert_eq!(vec, [1, 99, 3, 0, 0]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T: Clone> Vector<T> {
    /// Clones and appends all values in a slice to the vector.
    ///
    /// If cloning panics, the clones made so far are dropped and the length
    /// is unchanged.
    ///
    /// # Examples
    /// ```
    /// let mut vec = advec::Vector::from([1]);
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve_for_append(other.len());
        unsafe {
            let dst = self.buf.mut_ptr_at(self.len);
            write_run(dst, other.len(), other.iter().cloned());
        }
        self.len += other.len();
    }
}

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones every value into a new buffer with a capacity of exactly
    /// `self.len()`.
    fn clone(&self) -> Self {
        let mut buf = RawBuf::<T>::with_capacity(self.len);
        unsafe {
            write_run(buf.as_mut_ptr(), self.len, self.iter().cloned());
        }
        Vector { buf, len: self.len }
    }

    /// Overwrites `self` with a clone of `source`, reusing the existing
    /// buffer if it is large enough.
    ///
    /// # Examples
    /// ```
    /// let mut dst = advec::Vector::from([1, 2, 3, 4, 5]);
    /// let src = advec::Vector::from([7, 8]);
    /// dst.clone_from(&src);
    /// assert_eq!(dst, [7, 8]);
    /// assert_eq!(dst.capacity(), 5);
    /// ```
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut fresh = source.clone();
            self.swap_with(&mut fresh);
            return;
        }

        let shared = cmp::min(self.len, source.len);
        self[..shared].clone_from_slice(&source[..shared]);

        if self.len > source.len {
            self.truncate(source.len);
        } else {
            let len = self.len;
            unsafe {
                let dst = self.buf.mut_ptr_at(len);
                write_run(dst, source.len - len, source[len..].iter().cloned());
            }
            self.len = source.len;
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            let ptr = self.buf.as_mut_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, self.len));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T: Hash> Hash for Vector<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&**self, state);
    }
}

impl<A, B> PartialEq<Vector<B>> for Vector<A>
where
    A: PartialEq<B>,
{
    #[inline]
    fn eq(&self, other: &Vector<B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<V, T: PartialEq<V>> PartialEq<&[V]> for Vector<T> {
    #[inline]
    fn eq(&self, other: &&[V]) -> bool {
        self.as_slice() == *other
    }
}

impl<V, T: PartialEq<V>> PartialEq<[V]> for Vector<T> {
    #[inline]
    fn eq(&self, other: &[V]) -> bool {
        self.as_slice() == other
    }
}

impl<V, T: PartialEq<V>, const N: usize> PartialEq<[V; N]> for Vector<T> {
    #[inline]
    fn eq(&self, other: &[V; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_for_append(lower);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for Vector<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        <Self as Extend<T>>::extend(self, iter.into_iter().cloned());
    }
}

impl<T> iter::FromIterator<T> for Vector<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut ret = Vector::new();
        ret.extend(iter);
        ret
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(source: [T; N]) -> Self {
        let mut ret = Vector::with_capacity(N);
        unsafe {
            write_run(ret.as_mut_ptr(), N, IntoIterator::into_iter(source));
            ret.set_len(N);
        }
        ret
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(source: &[T]) -> Self {
        let mut ret = Vector::with_capacity(source.len());
        ret.extend_from_slice(source);
        ret
    }
}

impl<T> From<alloc::vec::Vec<T>> for Vector<T> {
    fn from(source: alloc::vec::Vec<T>) -> Self {
        let mut ret = Vector::with_capacity(source.len());
        ret.extend(source);
        ret
    }
}

/// An iterator that moves out of a vector.
///
/// This `struct` is created by the `into_iter` method on [`Vector`] (provided
/// by the [`IntoIterator`] trait). Values that are not yielded are dropped
/// along with the iterator.
///
/// # Example
/// ```
/// let vec = advec::Vector::from([1, 2, 3]);
/// let mut iter: advec::vec::IntoIter<_> = vec.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.as_slice(), &[2]);
/// ```
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.buf.ptr_at(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.end - self.start;
        (size, Some(size))
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        let ret = unsafe { self.buf.ptr_at(self.start).read() };
        self.start += 1;
        Some(ret)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        unsafe { Some(self.buf.ptr_at(self.end).read()) }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.start;
        unsafe {
            let ptr = self.buf.mut_ptr_at(self.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, remaining));
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: self.buf.take(),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
