pub mod option;
pub mod combinator;
pub mod nullable;
pub mod error;
pub mod iter;

#[cfg(feature = "serde")]
mod serde_impls;

pub mod app;

pub use combinator::*;
pub use error::OptionError;
pub use nullable::Nullable;
pub use option::Option;
