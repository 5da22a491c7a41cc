//! Repository port traits
//!
//! These traits define the interface for rental persistence.
//! Implementations are provided by adapters outside this crate.

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::RentalRecord;
use crate::error::DomainError;

/// Repository for rental records
#[cfg_attr(test, automock)]
pub trait RentalRepository: Send + Sync {
    /// Persist a newly created rental
    fn save(&self, record: &RentalRecord) -> Result<(), DomainError>;

    /// Fetch every rental that has not been returned yet
    fn fetch_pending_rentals(&self) -> Result<Vec<RentalRecord>, DomainError>;
}
