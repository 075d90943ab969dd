//! Error types raised by the domain services and form validation.

use thiserror::Error;

/// Failures with a domain meaning. Services return them wrapped in
/// `anyhow::Error`; callers that care use `downcast_ref::<DomainError>()`.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Username already exists.")]
    UsernameTaken,

    #[error("Animal {0} not found")]
    AnimalNotFound(i64),

    #[error("Animal {id} is no longer available")]
    NotAvailable { id: i64 },

    #[error("No animals selected")]
    EmptySelection,
}

/// Form validation failures; the display text is the inline UI message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill all fields correctly.")]
    InvalidAnimalFields,

    #[error("Please enter username and password")]
    MissingCredentials,

    #[error("All fields are required")]
    MissingRegistrationFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
