use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, trace};
use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};
use crate::policy::{
    grown_capacity, grown_to_fit, low_water_mark, should_shrink, shrunk_capacity,
    DEFAULT_CAPACITY,
};

mod iter;
mod traits;

pub use self::iter::IntoIter;

/// A growable contiguous array that grows by 1.5x when full and halves its capacity when it
/// becomes sparse.
///
/// - Growth happens exactly when an element is added to a full container.
/// - Shrinking happens at the start of a removal, when the length has dropped below the
///   _low-water mark_ (`capacity / 6`, or `0` for capacities below 384 which therefore never
///   shrink).
///
/// The capacity reported by [`Self::capacity`] is the one dictated by this policy; the allocator
/// may round the underlying allocation up.
///
/// ## Summary of supported operations
///
/// - Construct empty, pre-sized (default / cloned value / generated from index), from a slice
///   (copied) or from a [`Vec`] (ownership transferred).
/// - Unchecked indexing (`v[i]`, panics past the end) and checked signed indexing
///   ([`Self::at`], negative indices count from the back).
/// - Add at the end; remove by value or by index; clear.
/// - Linear search from either end.
/// - Append another container, whole or a sub-range.
/// - Deep copy ([`Clone`]) and move-out leaving an empty container ([`Self::take`]).
///
/// ## Iterator support
///
/// - [`Self::iter`] / [`Self::iter_mut`] borrow the container, so no reallocation can happen while
///   they are alive. The same holds for references returned by indexing and [`Self::as_raw`].
/// - By-value iteration via [`IntoIterator`]; [`FromIterator`] and [`Extend`] are implemented.
///
/// Example:
/// ```
/// use hystvec::HystVec;
/// let mut v = HystVec::new();
/// v.add(5);
/// v.add(10);
/// v.add(15);
/// assert_eq!(v.at(-1), Ok(&15));
/// assert!(v.remove(&10));
/// assert_eq!(v.to_string(), "[5,15]");
/// assert_eq!(v.capacity(), 64);
/// ```
///
pub struct HystVec<T> {
    /// Holds exactly the live elements; its allocation always covers `cap`.
    buf: Vec<T>,
    cap: usize,
    low_water: usize,
}

impl<T>
HystVec<T> {
    ////////////////////////////////////////////////////////////////////
    // construction

    /// Creates an empty container with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty container able to hold `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            cap: capacity,
            low_water: low_water_mark(capacity),
        }
    }

    /// Same as [`Self::with_capacity`], but reports allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| Error::AllocFailed { requested: capacity })?;
        Ok(Self {
            buf,
            cap: capacity,
            low_water: low_water_mark(capacity),
        })
    }

    /// Creates a container of `len` elements where element `i` is `f(i)`.
    /// `f` is invoked in ascending index order.
    ///
    /// Example:
    /// ```
    /// use hystvec::HystVec;
    /// let v = HystVec::from_fn(4, |i| i * i);
    /// assert_eq!(v, [0, 1, 4, 9]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, f: F) -> Self {
        let mut v = Self::with_capacity(len);
        v.buf.extend((0..len).map(f));
        v
    }

    /// Creates a container of `len` default-valued elements.
    pub fn with_len(len: usize) -> Self
        where T: Default {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates a container of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self
        where T: Clone {
        let mut v = Self::with_capacity(len);
        v.buf.resize(len, value);
        v
    }

    /// Creates a container holding a copy of `elems`, with 50% headroom on top of its length.
    pub fn from_slice(elems: &[T]) -> Self
        where T: Clone {
        let len = elems.len();
        let mut v = Self::with_capacity(len.saturating_add(len / 2));
        v.buf.extend_from_slice(elems);
        v
    }

    /// The state a container is left in after being moved out of: no buffer at all.
    const fn empty() -> Self {
        Self {
            buf: Vec::new(),
            cap: 0,
            low_water: 0,
        }
    }

    /// Moves the whole buffer (elements, capacity and low-water mark) into a new container,
    /// leaving this one empty with capacity `0`.
    /// This container remains usable; the next [`Self::add`] allocates [`DEFAULT_CAPACITY`].
    ///
    /// Example:
    /// ```
    /// use hystvec::HystVec;
    /// let mut a = HystVec::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// a.add(4);
    /// assert_eq!(a, [4]);
    /// ```
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::empty())
    }

    /// Consumes the container, returning its elements as a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    ////////////////////////////////////////////////////////////////////
    // size

    /// Returns the number of elements.
    pub fn len(&self) -> usize { self.buf.len() }

    /// Same as [`Self::len`].
    pub fn size(&self) -> usize { self.len() }

    /// Returns whether there are no elements.
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// Returns how many elements fit before the next growth step.
    pub fn capacity(&self) -> usize { self.cap }

    /// Returns the length below which the next removal halves the capacity.
    /// `0` means this container will not shrink at its current capacity.
    pub fn low_water_mark(&self) -> usize { self.low_water }

    ////////////////////////////////////////////////////////////////////
    // access

    /// Returns the element at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> { self.buf.get(index) }

    /// Returns the element at `index` mutably, or `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.buf.get_mut(index) }

    /// Returns the element at a signed offset: `0..len` counts from the front, `-len..=-1` from
    /// the back (`-1` is the last element).
    /// Fails with [`Error::OutOfRange`] for anything else.
    ///
    /// Example:
    /// ```
    /// use hystvec::{Error, HystVec};
    /// let v = HystVec::from([10, 20, 30]);
    /// assert_eq!(v.at(0), Ok(&10));
    /// assert_eq!(v.at(-1), Ok(&30));
    /// assert_eq!(v.at(-3), Ok(&10));
    /// assert_eq!(v.at(-4), Err(Error::OutOfRange { index: -4, len: 3 }));
    /// assert_eq!(v.at(3i64), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at<I: PrimInt + Signed>(&self, index: I) -> Result<&T> {
        let offset = self.resolve(index)?;
        Ok(&self.buf[offset])
    }

    /// Mutable version of [`Self::at`].
    pub fn at_mut<I: PrimInt + Signed>(&mut self, index: I) -> Result<&mut T> {
        let offset = self.resolve(index)?;
        Ok(&mut self.buf[offset])
    }

    /// Maps a signed index onto `0..len`.
    fn resolve<I: PrimInt + Signed>(&self, index: I) -> Result<usize> {
        let len = self.len();
        let Some(index) = index.to_isize() else {
            // Does not even fit `isize`; report the nearest representable index.
            let index = if index.is_negative() { isize::MIN } else { isize::MAX };
            return Err(Error::OutOfRange { index, len });
        };
        let offset = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize)
        };
        match offset {
            Some(offset) if offset < len => Ok(offset),
            _ => Err(Error::OutOfRange { index, len }),
        }
    }

    /// Returns a view of the live elements `[0, len)`.
    ///
    /// This exposes the storage directly for bulk algorithms. Any reallocation (growth, shrink,
    /// clear) moves the storage, which the borrow on `self` rules out while the view is alive.
    pub fn as_raw(&self) -> &[T] { &self.buf }

    /// Returns a mutable view of the live elements `[0, len)`, e.g. for in-place sorting.
    ///
    /// Example:
    /// ```
    /// use hystvec::HystVec;
    /// let mut v = HystVec::from([3, 1, 2]);
    /// v.as_raw_mut().sort_unstable();
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    pub fn as_raw_mut(&mut self) -> &mut [T] { &mut self.buf }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.buf.iter() }

    /// Returns an iterator over mutable references to the elements in index order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.buf.iter_mut() }

    ////////////////////////////////////////////////////////////////////
    // add

    /// Adds an element at the end, growing the capacity by 1.5x first if the container is full.
    /// Panics if the new capacity overflows `usize`.
    pub fn add(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Constructs an element at the end from `f`. Growth (if any) happens before `f` is invoked.
    pub fn add_with<F: FnOnce() -> T>(&mut self, f: F) {
        if self.is_full() {
            self.grow();
        }
        self.buf.push(f());
    }

    /// Same as [`Self::add`], but reports capacity overflow or allocation failure instead of
    /// panicking or aborting. On error, `value` is dropped and the container is unchanged.
    pub fn try_add(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            let new_cap = grown_capacity(self.cap).ok_or(Error::CapacityOverflow)?;
            self.try_relocate(new_cap, "grow")?;
        }
        self.buf.push(value);
        Ok(())
    }

    /// Ensures at least `additional` more elements can be added without growing, by applying
    /// as many 1.5x growth steps as needed (and reallocating once).
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        let new_cap = match self.len().checked_add(additional)
            .and_then(|required| grown_to_fit(self.cap, required)) {
            Some(c) => c,
            None => panic!("capacity overflow"),
        };
        if new_cap != self.cap {
            self.relocate(new_cap, "reserve");
        }
    }

    /// Same as [`Self::reserve`], but reports capacity overflow or allocation failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let new_cap = self.len().checked_add(additional)
            .and_then(|required| grown_to_fit(self.cap, required))
            .ok_or(Error::CapacityOverflow)?;
        if new_cap != self.cap {
            self.try_relocate(new_cap, "reserve")?;
        }
        Ok(())
    }

    /// Appends a copy of every element of `other`.
    ///
    /// Example:
    /// ```
    /// use hystvec::HystVec;
    /// let mut a = HystVec::from([1, 2]);
    /// a.append(&HystVec::from([3, 4, 5]));
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    /// ```
    pub fn append(&mut self, other: &Self)
        where T: Clone {
        self.reserve(other.len());
        self.buf.extend_from_slice(&other.buf);
    }

    /// Appends a copy of `other[range]`.
    /// Fails with [`Error::InvalidRange`] if the range is empty or reversed, or if it extends past
    /// the end of `other`.
    ///
    /// Example:
    /// ```
    /// use hystvec::{Error, HystVec};
    /// let mut a = HystVec::new();
    /// let b = HystVec::from([10, 20, 30]);
    /// a.append_range(&b, 1..2).unwrap();
    /// assert_eq!(a, [20]);
    /// assert_eq!(a.append_range(&b, 2..4), Err(Error::InvalidRange { start: 2, end: 4, len: 3 }));
    /// ```
    pub fn append_range(&mut self, other: &Self, range: Range<usize>) -> Result<()>
        where T: Clone {
        let Range { start, end } = range;
        if start >= end || end > other.len() {
            return Err(Error::InvalidRange { start, end, len: other.len() });
        }
        self.reserve(end - start);
        self.buf.extend_from_slice(&other.buf[start..end]);
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // remove

    /// Removes and returns the element at `index`, shifting everything after it one slot down.
    /// Panics if `index >= len`.
    ///
    /// May halve the capacity first if the container has become sparse.
    pub fn remove_at(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(index < len, "removal index {index} out of range for length {len}");
        self.shrink_if_sparse();
        self.buf.remove(index)
    }

    /// Removes the first element (scanning from the front) equal to `value`, shifting everything
    /// after it one slot down. Returns whether an element was removed.
    ///
    /// May halve the capacity first if the container has become sparse, even if nothing is
    /// removed.
    pub fn remove(&mut self, value: &T) -> bool
        where T: PartialEq {
        self.shrink_if_sparse();
        match self.buf.iter().position(|elem| elem == value) {
            Some(i) => {
                self.buf.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drops all elements and replaces the buffer with a fresh one of [`DEFAULT_CAPACITY`],
    /// forgetting any capacity accumulated before.
    pub fn clear(&mut self) {
        if self.cap != DEFAULT_CAPACITY {
            debug!("clear: capacity {} -> {} (len {})", self.cap, DEFAULT_CAPACITY, self.len());
        }
        self.buf = Vec::with_capacity(DEFAULT_CAPACITY);
        self.set_capacity(DEFAULT_CAPACITY);
    }

    ////////////////////////////////////////////////////////////////////
    // search

    /// Returns whether any element equals `value`, scanning from the front if `from_front`,
    /// otherwise from the back.
    pub fn contains(&self, value: &T, from_front: bool) -> bool
        where T: PartialEq {
        if from_front {
            self.buf.iter().any(|elem| elem == value)
        } else {
            self.buf.iter().rev().any(|elem| elem == value)
        }
    }

    ////////////////////////////////////////////////////////////////////
    // capacity management

    fn is_full(&self) -> bool {
        self.buf.len() >= self.cap
    }

    fn grow(&mut self) {
        let new_cap = match grown_capacity(self.cap) {
            Some(c) => c,
            None => panic!("capacity overflow"),
        };
        self.relocate(new_cap, "grow");
    }

    fn shrink_if_sparse(&mut self) {
        if should_shrink(self.len(), self.low_water) {
            let new_cap = shrunk_capacity(self.cap);
            self.relocate(new_cap, "shrink");
        }
    }

    /// Moves all elements into a new buffer of `new_cap` and releases the old one.
    /// The new buffer is allocated before anything is moved, so if the allocation panics the
    /// container is left untouched.
    fn relocate(&mut self, new_cap: usize, reason: &str) {
        let fresh = Vec::with_capacity(new_cap);
        self.adopt(fresh, new_cap, reason);
    }

    /// Same as [`Self::relocate`], but reports allocation failure instead of panicking.
    fn try_relocate(&mut self, new_cap: usize, reason: &str) -> Result<()> {
        let mut fresh = Vec::new();
        fresh.try_reserve_exact(new_cap)
            .map_err(|_| Error::AllocFailed { requested: new_cap })?;
        self.adopt(fresh, new_cap, reason);
        Ok(())
    }

    /// Moves the elements into `fresh` (already allocated for `new_cap`) and makes it the buffer.
    fn adopt(&mut self, mut fresh: Vec<T>, new_cap: usize, reason: &str) {
        debug_assert!(new_cap >= self.len());
        trace!("{}: capacity {} -> {} (len {}, low-water {})",
            reason, self.cap, new_cap, self.len(), self.low_water);
        fresh.append(&mut self.buf);
        self.buf = fresh;
        self.set_capacity(new_cap);
    }

    fn set_capacity(&mut self, cap: usize) {
        self.cap = cap;
        self.low_water = low_water_mark(cap);
    }
}
