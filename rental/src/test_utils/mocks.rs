//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{RentalRecord, User, UserId};
use crate::domain::ports::{BlacklistChecker, NotificationSender, RentalRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Rental Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRentalRepository {
    pending: Arc<RwLock<Vec<RentalRecord>>>,
    saved: Arc<RwLock<Vec<RentalRecord>>>,
    should_fail: bool,
}

impl InMemoryRentalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a pending rental
    pub fn with_pending(self, record: RentalRecord) -> Self {
        self.pending.write().unwrap().push(record);
        self
    }

    pub fn saved(&self) -> Vec<RentalRecord> {
        self.saved.read().unwrap().clone()
    }
}

impl RentalRepository for InMemoryRentalRepository {
    fn save(&self, record: &RentalRecord) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("write rejected".to_string()));
        }
        self.saved.write().unwrap().push(record.clone());
        self.pending.write().unwrap().push(record.clone());
        Ok(())
    }

    fn fetch_pending_rentals(&self) -> Result<Vec<RentalRecord>, DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("read rejected".to_string()));
        }
        Ok(self.pending.read().unwrap().clone())
    }
}

// ============================================================================
// Stub Blacklist Checker
// ============================================================================

/// Answers from a fixed denylist and records who was checked
#[derive(Default)]
pub struct StubBlacklistChecker {
    denied: HashSet<UserId>,
    checked: Arc<RwLock<Vec<UserId>>>,
}

impl StubBlacklistChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying(mut self, user: &User) -> Self {
        self.denied.insert(user.id);
        self
    }

    pub fn checked(&self) -> Vec<UserId> {
        self.checked.read().unwrap().clone()
    }
}

impl BlacklistChecker for StubBlacklistChecker {
    fn is_blacklisted(&self, user: &User) -> Result<bool, DomainError> {
        self.checked.write().unwrap().push(user.id);
        Ok(self.denied.contains(&user.id))
    }
}

// ============================================================================
// Recording Notification Sender
// ============================================================================

/// Records every user it was asked to notify
#[derive(Default)]
pub struct RecordingNotificationSender {
    notified: Arc<RwLock<Vec<User>>>,
    should_fail: bool,
}

impl RecordingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn notified(&self) -> Vec<User> {
        self.notified.read().unwrap().clone()
    }

    /// How many notices went to `user`
    pub fn count_for(&self, user: &User) -> usize {
        self.notified
            .read()
            .unwrap()
            .iter()
            .filter(|u| u.id == user.id)
            .count()
    }
}

impl NotificationSender for RecordingNotificationSender {
    fn notify_overdue(&self, user: &User) -> Result<(), DomainError> {
        if self.should_fail {
            return Err(DomainError::Notification("smtp unavailable".to_string()));
        }
        self.notified.write().unwrap().push(user.clone());
        Ok(())
    }
}
