use std::iter::FusedIterator;

use crate::option::Option;

/// Iterator over a borrowed payload; yields at most one item.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
  inner: std::option::IntoIter<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(option: Option<&'a T>) -> Self {
    Self { inner: option.into_std().into_iter() }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;
  #[inline]
  fn next(&mut self) -> std::option::Option<Self::Item> { self.inner.next() }
  #[inline]
  fn size_hint(&self) -> (usize, std::option::Option<usize>) { self.inner.size_hint() }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
  #[inline]
  fn next_back(&mut self) -> std::option::Option<Self::Item> { self.inner.next_back() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}


/// Iterator over an owned payload; yields at most one item.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: std::option::IntoIter<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(option: Option<T>) -> Self {
    Self { inner: option.into_std().into_iter() }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;
  #[inline]
  fn next(&mut self) -> std::option::Option<Self::Item> { self.inner.next() }
  #[inline]
  fn size_hint(&self) -> (usize, std::option::Option<usize>) { self.inner.size_hint() }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> std::option::Option<Self::Item> { self.inner.next_back() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
