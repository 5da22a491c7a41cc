//! Rental service
//!
//! Rents movies to users and chases late returns.
//!
//! Renting runs a fixed pipeline: user present, movies present, every movie
//! in stock, user not blacklisted, then the record is priced, dated and saved.
//! The overdue sweep notifies each late user once no matter how many of their
//! rentals are overdue.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Movie, RentalRecord, User};
use crate::domain::ports::{BlacklistChecker, Clock, NotificationSender, RentalRepository};
use crate::error::RentalError;

/// Service for renting movies and notifying overdue users
pub struct RentalService<RR, BC, NS, C>
where
    RR: RentalRepository,
    BC: BlacklistChecker,
    NS: NotificationSender,
    C: Clock,
{
    rentals: Arc<RR>,
    blacklist: Arc<BC>,
    notifier: Arc<NS>,
    clock: Arc<C>,
}

impl<RR, BC, NS, C> RentalService<RR, BC, NS, C>
where
    RR: RentalRepository,
    BC: BlacklistChecker,
    NS: NotificationSender,
    C: Clock,
{
    pub fn new(rentals: Arc<RR>, blacklist: Arc<BC>, notifier: Arc<NS>, clock: Arc<C>) -> Self {
        Self {
            rentals,
            blacklist,
            notifier,
            clock,
        }
    }

    /// Rent `movies` to `user`
    ///
    /// Rejections before the blacklist lookup touch no collaborator. The
    /// blacklist is consulted exactly once, and a rejected user is never saved.
    pub fn rent_movies(
        &self,
        user: Option<&User>,
        movies: Option<&[Movie]>,
    ) -> Result<RentalRecord, RentalError> {
        let user = user.ok_or(RentalError::EmptyUser)?;

        let movies = match movies {
            Some(movies) if !movies.is_empty() => movies,
            _ => return Err(RentalError::EmptyMovieList),
        };

        if let Some(movie) = movies.iter().find(|m| m.is_out_of_stock()) {
            tracing::debug!(
                user_id = %user.id,
                movie_id = %movie.id,
                "Rental rejected: movie out of stock"
            );
            return Err(RentalError::OutOfStock {
                title: movie.title.clone(),
            });
        }

        if self.blacklist.is_blacklisted(user)? {
            tracing::warn!(user_id = %user.id, "Rental rejected: user is blacklisted");
            return Err(RentalError::BlacklistedUser);
        }

        let record = RentalRecord::new(user.clone(), movies.to_vec(), self.clock.now())?;
        self.rentals.save(&record)?;

        tracing::info!(
            rental_id = %record.id,
            user_id = %user.id,
            movies = record.movies.len(),
            price = record.price,
            due_at = %record.due_at.format("%Y-%m-%d"),
            "Rental created"
        );

        Ok(record)
    }

    /// Send one overdue notice per user with at least one overdue rental.
    /// Returns how many users were notified.
    pub fn notify_overdue_rentals(&self) -> Result<usize, RentalError> {
        let pending = self.rentals.fetch_pending_rentals()?;
        let today = self.clock.now();

        let mut notified = HashSet::new();
        for record in pending.iter().filter(|r| r.is_overdue(today)) {
            if notified.insert(record.user.id) {
                self.notifier.notify_overdue(&record.user)?;
            }
        }

        if !notified.is_empty() {
            tracing::info!(
                pending = pending.len(),
                notified = notified.len(),
                "Sent overdue notices"
            );
        }

        Ok(notified.len())
    }
}
