use std::borrow::Cow;

use thiserror::Error;

/// Forced extraction was attempted on an absent value.
///
/// Only produced by [`Option::unwrap`](crate::Option::unwrap) and
/// [`Option::unwrap_with_message`](crate::Option::unwrap_with_message), at the moment a `None` is observed.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct OptionError {
  message: Cow<'static, str>,
}

impl OptionError {
  pub const DEFAULT_MESSAGE: &'static str = "attempted to extract from an absent value";

  #[inline]
  pub(crate) fn new() -> Self {
    Self::from_cow(Cow::Borrowed(Self::DEFAULT_MESSAGE))
  }

  #[inline]
  pub(crate) fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
    Self::from_cow(message.into())
  }

  fn from_cow(message: Cow<'static, str>) -> Self {
    #[cfg(feature = "tracing")]
    tracing::debug!(reason = %message, "forced extraction on an absent value");
    Self { message }
  }


  #[inline]
  pub fn message(&self) -> &str { &self.message }

  #[inline]
  pub fn is_default_message(&self) -> bool { self.message == Self::DEFAULT_MESSAGE }
}
