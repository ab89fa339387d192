//! Free-function forms of the [`Option`] operations, taking the option as their first argument (except
//! [`lift_a2`], which takes the function first).
//!
//! Each delegates to the method of the same name; use whichever reads better at the call site.

use std::borrow::Cow;

use crate::error::OptionError;
use crate::option::Option;

pub use crate::nullable::from_nullable;

#[inline]
pub const fn some<T>(value: T) -> Option<T> { Option::some(value) }
#[inline]
pub const fn none<T>() -> Option<T> { Option::none() }

#[inline]
pub fn is_some<T>(option: &Option<T>) -> bool { option.is_some() }
#[inline]
pub fn is_none<T>(option: &Option<T>) -> bool { option.is_none() }


#[inline]
pub fn map<T, U>(option: Option<T>, f: impl FnOnce(T) -> U) -> Option<U> { option.map(f) }
#[inline]
pub fn flat_map<T, U>(option: Option<T>, f: impl FnOnce(T) -> Option<U>) -> Option<U> { option.flat_map(f) }
#[inline]
pub fn filter<T>(option: Option<T>, predicate: impl FnOnce(&T) -> bool) -> Option<T> { option.filter(predicate) }

/// Lifts binary `f` over two options: `Some(f(a, b))` if both are present, `None` otherwise.
#[inline]
pub fn lift_a2<T, U, V>(f: impl FnOnce(T, U) -> V, option1: Option<T>, option2: Option<U>) -> Option<V> {
  option1.zip_with(option2, f)
}

#[inline]
pub fn match_option<T, U>(
  option: Option<T>,
  on_some: impl FnOnce(T) -> Option<U>,
  on_none: impl FnOnce() -> Option<U>,
) -> Option<U> {
  option.match_option(on_some, on_none)
}

#[inline]
pub fn and<T, U>(option1: Option<T>, option2: Option<U>) -> Option<(T, U)> { option1.and(option2) }
#[inline]
pub fn or<T>(option1: Option<T>, option2: Option<T>) -> Option<T> { option1.or(option2) }


#[inline]
pub fn unwrap_or<T>(option: Option<T>, default: T) -> T { option.unwrap_or(default) }
#[inline]
pub fn unwrap<T>(option: Option<T>) -> Result<T, OptionError> { option.unwrap() }
#[inline]
pub fn unwrap_with_message<T>(option: Option<T>, message: impl Into<Cow<'static, str>>) -> Result<T, OptionError> {
  option.unwrap_with_message(message)
}
#[inline]
pub fn or_else<T>(option: Option<T>, alternative: impl FnOnce() -> Option<T>) -> Option<T> {
  option.or_else(alternative)
}
