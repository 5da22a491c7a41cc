//! Adapters
//!
//! Concrete implementations of the domain ports that live in this crate.
//! Persistence, blacklist lookups and email delivery are supplied by the host.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
