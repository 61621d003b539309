use core::{
    iter::{Enumerate, FusedIterator},
    slice,
};

/// Yields `(index, &element)` pairs of a [`Collection`](super::Collection) in order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Enumerate<slice::Iter<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter().enumerate(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
