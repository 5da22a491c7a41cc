//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod blacklist;
pub mod clock;
pub mod notifications;
pub mod repositories;

pub use blacklist::BlacklistChecker;
pub use clock::Clock;
pub use notifications::NotificationSender;
pub use repositories::RentalRepository;

#[cfg(test)]
pub use blacklist::MockBlacklistChecker;
#[cfg(test)]
pub use notifications::MockNotificationSender;
#[cfg(test)]
pub use repositories::MockRentalRepository;
