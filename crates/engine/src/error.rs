//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidInput`] thrown when a request carries malformed or missing fields.
//! - [`ExistingKey`] thrown when a unique key (username) is already taken.
//! - [`InvalidCredentials`] thrown when a password check fails.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidCredentials`]: EngineError::InvalidCredentials
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid credentials")]
    InvalidCredentials(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidCredentials(a), Self::InvalidCredentials(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
