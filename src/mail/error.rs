//! Error types for address validation

use thiserror::Error;

/// Reasons an email address string is rejected at construction time.
///
/// These are hard failures: an [`EmailAddress`](crate::EmailAddress)
/// never exists in an invalid state. Content problems on a whole
/// message (empty subject and so on) are not errors; they surface as
/// [`Status::Invalid`](crate::Status::Invalid) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("email address must not be empty")]
    Empty,

    #[error("invalid email address '{0}': missing @ symbol")]
    MissingAtSymbol(String),

    #[error("invalid email address '{0}': must end with .com, .ru or .net")]
    UnsupportedDomain(String),
}
