use std::ptr::NonNull;

use crate::option::Option;

/// A host value that may be an absence sentinel.
///
/// Only the sentinel converts to `None`. Values that are merely "falsy", like `0`, `false`, or `""`, are present.
pub trait Nullable {
  type Value;

  fn into_option(self) -> Option<Self::Value>;
}

/// The sentinel is [`std::option::Option::None`].
impl<T> Nullable for std::option::Option<T> {
  type Value = T;
  #[inline]
  fn into_option(self) -> Option<T> { self.into() }
}

/// The sentinel is the null pointer.
impl<T: ?Sized> Nullable for *const T {
  type Value = NonNull<T>;
  #[inline]
  fn into_option(self) -> Option<NonNull<T>> { NonNull::new(self.cast_mut()).into() }
}

/// The sentinel is the null pointer.
impl<T: ?Sized> Nullable for *mut T {
  type Value = NonNull<T>;
  #[inline]
  fn into_option(self) -> Option<NonNull<T>> { NonNull::new(self).into() }
}

#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> {
  value.into_option()
}
