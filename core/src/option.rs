use std::borrow::Cow;

use crate::error::OptionError;
use crate::iter::{IntoIter, Iter};

use self::Option::{None, Some};

/// A value that is either present ([`Some`]) or absent ([`None`]).
///
/// Combinators consume their input and return a new container; the payload of a `Some` is never modified in place.
/// Absence is data: every operation except [forced extraction](Self::unwrap) is total.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Option<T> {
  /// Definite absence. Carries no payload; all `None`s are indistinguishable.
  None,
  /// Presence of exactly one payload.
  Some(T),
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { None }
}

impl<T> Option<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Some(value) }
  #[inline]
  pub const fn none() -> Self { None }


  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Some(value) => Some(value),
      None => None,
    }
  }


  /// Applies `f` to the payload, wrapping the result. `f` is not called on `None`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Some(value) => Some(f(value)),
      None => None,
    }
  }

  /// Applies `f` to the payload and returns its result as-is, without wrapping it again.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Some(value) => f(value),
      None => None,
    }
  }

  /// Keeps `self` if the payload satisfies `predicate`, otherwise returns `None`. The passing container is returned
  /// itself, not rebuilt from its payload.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    let keep = match &self {
      Some(value) => predicate(value),
      None => false,
    };
    if keep { self } else { None }
  }

  /// Combines the payloads of `self` and `other` with `f` if both are present.
  #[inline]
  pub fn zip_with<U, V>(self, other: Option<U>, f: impl FnOnce(T, U) -> V) -> Option<V> {
    match (self, other) {
      (Some(a), Some(b)) => Some(f(a, b)),
      _ => None,
    }
  }

  /// Case analysis: calls exactly one of `on_some` or `on_none`, exactly once.
  #[inline]
  pub fn fold<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
    match self {
      Some(value) => on_some(value),
      None => on_none(),
    }
  }

  /// [Case analysis](Self::fold) where both branches produce an option.
  #[inline]
  pub fn match_option<U>(self, on_some: impl FnOnce(T) -> Option<U>, on_none: impl FnOnce() -> Option<U>) -> Option<U> {
    self.fold(on_some, on_none)
  }

  /// Pairs the payloads of `self` and `other` if both are present.
  #[inline]
  pub fn and<U>(self, other: Option<U>) -> Option<(T, U)> {
    self.zip_with(other, |a, b| (a, b))
  }

  /// Returns `self` if present, otherwise `other`. `other` is already evaluated; use [or_else](Self::or_else) to
  /// defer computing the alternative.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Some(_) => self,
      None => other,
    }
  }

  /// Returns `self` if present, otherwise calls `alternative` and returns its result.
  #[inline]
  pub fn or_else(self, alternative: impl FnOnce() -> Self) -> Self {
    match self {
      Some(_) => self,
      None => alternative(),
    }
  }


  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Some(value) => value,
      None => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Some(value) => value,
      None => default(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }

  /// Extracts the payload, or fails with an [`OptionError`] carrying the default message when absent.
  #[inline]
  pub fn unwrap(self) -> Result<T, OptionError> {
    match self {
      Some(value) => Ok(value),
      None => Err(OptionError::new()),
    }
  }

  /// Extracts the payload, or fails with an [`OptionError`] carrying `message` when absent.
  #[inline]
  pub fn unwrap_with_message(self, message: impl Into<Cow<'static, str>>) -> Result<T, OptionError> {
    match self {
      Some(value) => Ok(value),
      None => Err(OptionError::with_message(message)),
    }
  }


  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.as_ref()) }

  #[inline]
  pub fn into_std(self) -> std::option::Option<T> { self.into() }
}


impl<T> From<std::option::Option<T>> for Option<T> {
  #[inline]
  fn from(option: std::option::Option<T>) -> Self {
    match option {
      std::option::Option::Some(value) => Some(value),
      std::option::Option::None => None,
    }
  }
}

impl<T> From<Option<T>> for std::option::Option<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => std::option::Option::Some(value),
      None => std::option::Option::None,
    }
  }
}

impl<T> IntoIterator for Option<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self) }
}

impl<'a, T> IntoIterator for &'a Option<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use super::Option::{None, Some};

  #[test]
  fn predicates() {
    assert!(Option::some(1).is_some());
    assert!(!Option::some(1).is_none());
    assert!(!Option::<i32>::none().is_some());
    assert!(Option::<i32>::none().is_none());
  }

  #[test]
  fn default_is_none() {
    struct NoDefault;
    assert!(Option::<NoDefault>::default().is_none());
  }

  #[test]
  fn none_ordering_matches_std() {
    assert!(None < Some(0));
    assert!(Some(1) < Some(2));
  }

  #[test]
  fn map_skips_none() {
    let calls = Cell::new(0);
    let mapped = Option::<i32>::none().map(|x| {
      calls.set(calls.get() + 1);
      x + 1
    });
    assert_eq!(mapped, None);
    assert_eq!(calls.get(), 0);

    assert_eq!(Some(2).map(|x| x.to_string()), Some("2".to_string()));
  }

  #[test]
  fn filter_returns_the_same_container() {
    let boxed = Some(Box::new(7));
    let address = boxed.as_ref().map(|b| &**b as *const i32);
    let kept = boxed.filter(|b| **b == 7);
    assert_eq!(kept.as_ref().map(|b| &**b as *const i32), address);

    assert_eq!(Some(7).filter(|x| *x < 0), None);
    assert_eq!(None.filter(|_: &i32| true), None);
  }

  #[test]
  fn match_option_calls_exactly_one_branch() {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);
    let on_some = |x: i32| {
      some_calls.set(some_calls.get() + 1);
      Some(x * 3)
    };
    let on_none = || {
      none_calls.set(none_calls.get() + 1);
      Some(-1)
    };
    assert_eq!(Some(2).match_option(on_some, on_none), Some(6));
    assert_eq!((some_calls.get(), none_calls.get()), (1, 0));
    assert_eq!(None.match_option(on_some, on_none), Some(-1));
    assert_eq!((some_calls.get(), none_calls.get()), (1, 1));
  }

  #[test]
  fn fold_produces_any_type() {
    assert_eq!(Some(4).fold(|x| x.to_string(), || "absent".to_string()), "4");
    assert_eq!(None::<i32>.fold(|x| x.to_string(), || "absent".to_string()), "absent");
  }

  #[test]
  fn or_else_is_lazy() {
    let calls = Cell::new(0);
    let alternative = || {
      calls.set(calls.get() + 1);
      Some(9)
    };
    assert_eq!(Some(1).or_else(alternative), Some(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(None.or_else(alternative), Some(9));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn unwrap_or_variants() {
    assert_eq!(Some(3).unwrap_or(0), 3);
    assert_eq!(None.unwrap_or(0), 0);
    assert_eq!(None.unwrap_or_else(|| 5), 5);
    assert_eq!(None::<String>.unwrap_or_default(), "");
  }

  #[test]
  fn unwrap_reports_absence() {
    assert_eq!(Some("x").unwrap(), Ok("x"));

    let error = None::<i32>.unwrap().unwrap_err();
    assert!(error.is_default_message());
    assert_eq!(error.message(), OptionError::DEFAULT_MESSAGE);

    let error = None::<i32>.unwrap_with_message("no port configured").unwrap_err();
    assert!(!error.is_default_message());
    assert_eq!(error.to_string(), "no port configured");
  }

  #[test]
  fn std_conversions() {
    assert_eq!(Option::from(std::option::Option::Some(1)), Some(1));
    assert_eq!(Option::<i32>::from(std::option::Option::None), None);
    assert_eq!(Some(1).into_std(), std::option::Option::Some(1));
    assert_eq!(None::<i32>.into_std(), std::option::Option::None);
  }

  #[test]
  fn iterates_zero_or_one_items() {
    assert_eq!(Some(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(None::<i32>.into_iter().count(), 0);
    let option = Some(String::from("a"));
    let borrowed: Vec<&String> = (&option).into_iter().collect();
    assert_eq!(borrowed, vec![&String::from("a")]);
    assert_eq!(option.iter().len(), 1);
  }
}
