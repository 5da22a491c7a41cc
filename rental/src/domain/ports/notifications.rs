//! Notification port
//!
//! Outbound channel for telling users about late returns (email in practice).

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::User;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
pub trait NotificationSender: Send + Sync {
    /// Send an overdue notice to a user
    fn notify_overdue(&self, user: &User) -> Result<(), DomainError>;
}
