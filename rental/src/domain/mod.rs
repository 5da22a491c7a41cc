//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for users, movies and rentals
//! - `ports`: Trait definitions for the collaborators the service needs
//! - `calendar`: Date rules for due dates and overdue checks

pub mod calendar;
pub mod entities;
pub mod ports;
