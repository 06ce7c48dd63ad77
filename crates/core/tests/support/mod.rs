//! Shared test helpers for `rewatch-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight port mocks so
//! digest tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;
