//! Iterators over the errors of a validation.

use crate::validation::core::Validation;

/// Borrowing iterator over the errors of a [`Validation`], in order.
///
/// Created by [`Validation::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, E> {
    inner: std::slice::Iter<'a, E>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(errors: &'a [E]) -> Self {
        Self {
            inner: errors.iter(),
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

/// Owning iterator over the errors of a [`Validation`], in order.
#[derive(Debug)]
pub struct IntoIter<E> {
    inner: std::vec::IntoIter<E>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for IntoIter<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> IntoIterator for Validation<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_errors().into_iter(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Validation<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
