//! # Rewatch App
//!
//! Application layer - wiring and the `rewatch-digest` entry point.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Logging setup from configuration
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires the bundled adapters into the digest service

pub mod context;
pub mod logging;

// Re-export for convenience
pub use context::*;
pub use logging::log_settings;
