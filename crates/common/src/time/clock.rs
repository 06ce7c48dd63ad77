//! Wall-clock source

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Trait for reading the current instant
///
/// Implementations must be cheap to call and safe to share between threads.
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Real system clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Implement Clock for Arc<T> where T: Clock for convenient cloning
impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}
