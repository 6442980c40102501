use alloc::vec;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

use super::HystVec;

/// An iterator that moves elements out of a [`HystVec`] in index order.
///
/// Created by [`HystVec::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T>
IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] { self.0.as_slice() }
}

impl<T>
Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T>
DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T>
Debug for IntoIter<T>
    where
        T: Debug {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T>
IntoIterator for HystVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> { IntoIter(self.buf.into_iter()) }
}

impl<'a, T>
IntoIterator for &'a HystVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T>
IntoIterator for &'a mut HystVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}
