//! Movie domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MovieId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A title in the store's catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Price charged per rental
    pub price: f64,
    /// Copies available to rent
    pub stock: u32,
}

impl Movie {
    pub fn new(title: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: MovieId::new(),
            title: title.into(),
            price,
            stock,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
