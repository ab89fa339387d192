use std::error::Error;

use tracing::{info, warn};

use maybe_core::app::tracing::AppTracingBuilder;
use maybe_core::{filter, flat_map, from_nullable, lift_a2, map, none, or, or_else, some, unwrap, unwrap_or, Option};

fn main() -> Result<(), Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
  AppTracingBuilder::default().build()?;

  let doubled = map(from_nullable(Some(5)), |x| x * 2);
  info!(?doubled, "doubled a nullable number");

  let positive = flat_map(some(5), |x| if x > 0 { some(x) } else { none() });
  info!(?positive, "kept a positive number");

  let sum = lift_a2(|a: i32, b: i32| a + b, some(2), some(3));
  info!(?sum, "added two present numbers");

  let port = or(parse_port(std::env::var("PORT").ok()), some(8080));
  info!(?port, "resolved port");

  let host = or_else(from_nullable(std::env::var("HOST").ok()), || {
    info!("HOST not set; falling back to localhost");
    some("localhost".to_string())
  });
  info!(host = %unwrap_or(host, String::new()), "resolved host");

  match unwrap(filter(some(5), |x| *x < 0)) {
    Ok(value) => info!(value, "negative number found"),
    Err(cause) => warn!(%cause, "no negative number"),
  }

  Ok(())
}

fn parse_port(value: std::option::Option<String>) -> Option<u16> {
  from_nullable(value).flat_map(|value| from_nullable(value.parse::<u16>().ok()))
}
