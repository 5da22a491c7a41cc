//! Clock port
//!
//! Replaces direct `Utc::now()` calls so tests can pin the current instant.

use chrono::{DateTime, FixedOffset};

pub trait Clock: Send + Sync {
    /// Current instant, expressed in the store's business offset
    fn now(&self) -> DateTime<FixedOffset>;
}
