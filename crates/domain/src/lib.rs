//! # Rewatch Domain
//!
//! Business domain types for the daily rewatch digest.
//!
//! This crate contains:
//! - Scoring inputs (matches, player stats, scoring rules)
//! - Scoring outputs (contributions, match scores, ranked matches)
//! - Video link results and the spoiler-free public post
//! - Structured issues, fatal error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other Rewatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
