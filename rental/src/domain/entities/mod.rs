//! Domain entities
//!
//! Plain data types for the rental store.

pub mod movie;
pub mod rental;
pub mod user;

pub use movie::{Movie, MovieId};
pub use rental::{total_price, RentalId, RentalRecord};
pub use user::{User, UserId};
