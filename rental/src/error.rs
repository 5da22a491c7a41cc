//! Error types for the rental core
//!
//! This module defines error types for each layer:
//! - `DomainError`: Failures reported by collaborators behind the ports
//! - `RentalError`: Rejections and failures surfaced by the rental service
//! - `ConfigError`: Invalid configuration values

use thiserror::Error;

/// Collaborator errors - raised by port implementations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Blacklist service error: {0}")]
    Blacklist(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Service layer errors - returned to callers of `RentalService`
#[derive(Debug, Error)]
pub enum RentalError {
    #[error("Usuario vazio")]
    EmptyUser,

    #[error("Filme vazio")]
    EmptyMovieList,

    #[error("Filme sem estoque: {title}")]
    OutOfStock { title: String },

    #[error("Usuário Negativado")]
    BlacklistedUser,

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
