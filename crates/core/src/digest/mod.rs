//! Daily digest domain
//!
//! Data flows strictly forward:
//! window -> results/rules -> scored -> ranked -> (+ video links) -> public
//! post -> rendered text -> publish -> record.

pub mod ports;
pub mod public_view;
pub mod ranker;
pub mod render;
pub mod scorer;
pub mod service;
pub mod window;

pub use ports::*;
pub use service::*;
