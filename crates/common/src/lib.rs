//! Modular common utilities shared across Rewatch crates.
//!
//! # Feature Tiers
//!
//! - always built: clock abstraction (`time`), secret masking (`privacy`)
//! - `observability`: tracing subscriber initialisation
//! - `test-utils`: deterministic clocks for tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod privacy;
pub mod time;

#[cfg(feature = "observability")]
pub mod observability;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "observability")]
pub use observability::{init_tracing, LogSettings, LoggingError};
pub use privacy::mask_secret;
pub use time::{Clock, SystemClock};
