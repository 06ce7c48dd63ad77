//! Observability setup
//!
//! Libraries only emit `tracing` events; installing the subscriber is the
//! binary's job and goes through [`init_tracing`].

pub mod logging;

pub use logging::{build_filter, init_tracing, LogSettings, LoggingError};
