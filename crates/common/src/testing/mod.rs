//! Testing utilities
//!
//! Enabled through the `test-utils` feature for downstream crates' tests.

pub mod time;

pub use time::MockClock;
