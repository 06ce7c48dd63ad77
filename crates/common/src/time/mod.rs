//! Time abstraction
//!
//! The digest pipeline never reads the wall clock itself; callers pass the
//! reference instant in. `Clock` is how the binary obtains it, and how tests
//! pin it.

pub mod clock;

pub use clock::{Clock, SystemClock};
