//! Rental domain entity
//!
//! A rental record ties a user to the movies they took home, when they took
//! them, when they are due back and how much was charged.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::movie::Movie;
use super::user::User;
use crate::domain::calendar;
use crate::error::DomainError;

/// Unique identifier for a rental record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalId(pub Uuid);

impl RentalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RentalId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RentalId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub id: RentalId,
    pub user: User,
    pub movies: Vec<Movie>,
    pub rented_at: DateTime<FixedOffset>,
    pub due_at: DateTime<FixedOffset>,
    /// Total charged, the sum of every movie's price
    pub price: f64,
}

impl RentalRecord {
    /// Build a record for movies rented at `rented_at`, deriving price and due date
    pub fn new(
        user: User,
        movies: Vec<Movie>,
        rented_at: DateTime<FixedOffset>,
    ) -> Result<Self, DomainError> {
        let price = total_price(&movies);
        let due_at = calendar::due_date_for(rented_at).ok_or_else(|| {
            DomainError::Internal(format!("due date out of range for rental at {}", rented_at))
        })?;
        Ok(Self {
            id: RentalId::new(),
            user,
            movies,
            rented_at,
            due_at,
            price,
        })
    }

    /// Whether the due date falls on a calendar day before `today`, judged in
    /// `today`'s offset whatever offset the record was stored with
    pub fn is_overdue(&self, today: DateTime<FixedOffset>) -> bool {
        calendar::is_before_day(self.due_at, today)
    }
}

/// Sum of unit prices; no promotional discount applies
pub fn total_price(movies: &[Movie]) -> f64 {
    movies.iter().map(|m| m.price).sum()
}
