//! Blacklist port
//!
//! Credit-check style lookup answering whether a user may rent at all.

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::User;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
pub trait BlacklistChecker: Send + Sync {
    /// Returns true when the user is denylisted
    fn is_blacklisted(&self, user: &User) -> Result<bool, DomainError>;
}
