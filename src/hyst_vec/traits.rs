//! Standard trait implementations for [`HystVec`].

use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::HystVec;

impl<T>
Default for HystVec<T> {
    fn default() -> Self { Self::new() }
}

/// Deep copy. The copy has its own buffer with the same capacity and low-water mark as the
/// original, so both containers grow and shrink at the same points afterwards.
impl<T: Clone>
Clone for HystVec<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            cap: self.cap,
            low_water: self.low_water,
        }
    }
}

/// Unchecked access: panics if `index >= len`. See [`HystVec::at`] for the checked version.
impl<T>
Index<usize> for HystVec<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T { &self.buf[index] }
}

impl<T>
IndexMut<usize> for HystVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.buf[index] }
}

impl<T>
AsRef<[T]> for HystVec<T> {
    fn as_ref(&self) -> &[T] { self.as_raw() }
}

impl<T>
AsMut<[T]> for HystVec<T> {
    fn as_mut(&mut self) -> &mut [T] { self.as_raw_mut() }
}

////////////////////////////////////////////////////////////////////
// comparison (elements only; capacity is not part of equality)

impl<T, U>
PartialEq<HystVec<U>> for HystVec<T>
    where
        T: PartialEq<U> {
    fn eq(&self, other: &HystVec<U>) -> bool { self.buf[..] == other.buf[..] }
}

impl<T: Eq> Eq for HystVec<T> {}

impl<T, U>
PartialEq<[U]> for HystVec<T>
    where
        T: PartialEq<U> {
    fn eq(&self, other: &[U]) -> bool { self.buf[..] == *other }
}

impl<T, U, const N: usize>
PartialEq<[U; N]> for HystVec<T>
    where
        T: PartialEq<U> {
    fn eq(&self, other: &[U; N]) -> bool { self.buf[..] == other[..] }
}

impl<T: Hash>
Hash for HystVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.buf[..].hash(state) }
}

////////////////////////////////////////////////////////////////////
// conversion

/// Takes over the buffer of `vec` without copying. The capacity is set to the length.
impl<T>
From<Vec<T>> for HystVec<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut v = Self::empty();
        let len = vec.len();
        v.buf = vec;
        v.set_capacity(len);
        v
    }
}

impl<T>
From<HystVec<T>> for Vec<T> {
    fn from(v: HystVec<T>) -> Self { v.into_vec() }
}

impl<T: Clone>
From<&[T]> for HystVec<T> {
    fn from(elems: &[T]) -> Self { Self::from_slice(elems) }
}

impl<T, const N: usize>
From<[T; N]> for HystVec<T> {
    fn from(elems: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        v.buf.extend(elems);
        v
    }
}

impl<T>
FromIterator<T> for HystVec<T> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T>
Extend<T> for HystVec<T> {
    fn extend<It: IntoIterator<Item=T>>(&mut self, iter: It) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<'a, T: Copy + 'a>
Extend<&'a T> for HystVec<T> {
    fn extend<It: IntoIterator<Item=&'a T>>(&mut self, iter: It) {
        self.extend(iter.into_iter().copied())
    }
}

////////////////////////////////////////////////////////////////////
// formatting

/// Renders `[a,b,c]` (no spaces), or `[]` when empty.
impl<T>
Display for HystVec<T>
    where
        T: Display {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", elem)?;
            } else {
                write!(f, ",{}", elem)?;
            }
        }
        write!(f, "]")
    }
}

impl<T>
Debug for HystVec<T>
    where
        T: Debug {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", elem)?;
            } else {
                write!(f, ", {:?}", elem)?;
            }
        }
        write!(f, "]")
    }
}
