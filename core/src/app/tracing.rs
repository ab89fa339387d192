use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console log filter, in [`EnvFilter`] syntax.
pub const CONSOLE_LOG_ENV: &str = "CONSOLE_LOG";
/// Filter used when [`CONSOLE_LOG_ENV`] is unset or cannot be parsed.
pub const DEFAULT_CONSOLE_FILTER: &str = "info";

pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  ansi: bool,
}
impl Default for AppTracingBuilder {
  #[inline]
  fn default() -> Self {
    Self { console_filter: None, ansi: true }
  }
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  pub fn with_console_filter_opt(mut self, console_filter: Option<EnvFilter>) -> Self {
    self.console_filter = console_filter;
    self
  }
  pub fn with_ansi(mut self, ansi: bool) -> Self {
    self.ansi = ansi;
    self
  }

  /// Resolves the console filter: the explicit one if given, else [`CONSOLE_LOG_ENV`], else
  /// [`DEFAULT_CONSOLE_FILTER`].
  fn resolve_console_filter(console_filter: Option<EnvFilter>) -> EnvFilter {
    console_filter.unwrap_or_else(|| {
      EnvFilter::try_from_env(CONSOLE_LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER))
    })
  }

  /// Installs a stderr subscriber as the global default. Returns an error if a global default was already set.
  pub fn build(self) -> Result<(), TryInitError> {
    let console_filter = Self::resolve_console_filter(self.console_filter);
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(io::stderr)
          .with_ansi(self.ansi)
          .with_filter(console_filter)
      )
      .try_init()
  }
}
