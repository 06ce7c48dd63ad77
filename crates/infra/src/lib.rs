//! # Rewatch Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (files, environment, secrets)
//! - In-memory publication registry
//! - Fixture-file results and video sources, configured rules source
//! - Writer-backed publisher
//!
//! ## Architecture
//! - Implements traits defined in `rewatch-core`
//! - Contains all "impure" code (file and stream I/O, environment access)

pub mod config;
pub mod integrations;
pub mod registry;

// Re-export commonly used items
pub use integrations::*;
pub use registry::InMemoryPublicationRegistry;
