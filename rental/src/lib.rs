//! Movie rental core
//!
//! Rents movies to users and notifies users whose rentals are overdue.
//! Uses hexagonal (ports & adapters) architecture: the service depends on
//! repository, blacklist, notification and clock traits supplied by the host.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;


pub use app::RentalService;
pub use config::Config;
pub use error::{ConfigError, DomainError, RentalError};
