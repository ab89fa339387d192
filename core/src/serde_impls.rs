use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::Option;

/// Serializes exactly like [`std::option::Option`]: the payload itself, or a unit/`null` when absent.
impl<T: Serialize> Serialize for Option<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_ref().into_std().serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    std::option::Option::<T>::deserialize(deserializer).map(Into::into)
  }
}
