//! Privacy helpers for keeping secrets out of logs

pub mod redact;

pub use redact::{mask_secret, DEFAULT_VISIBLE_TAIL};
