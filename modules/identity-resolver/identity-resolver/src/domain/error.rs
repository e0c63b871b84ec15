//! Domain errors for the identity resolver.

use identity_resolver_sdk::{IdentityResolverError, UserDirectoryError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("malformed principal: {0}")]
    MalformedPrincipal(String),

    #[error("user directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("no directory record for identity key '{key}'")]
    UnknownUser { key: String },

    #[error("identity resolution required but no usable identity claim found")]
    IdentityRequired,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<UserDirectoryError> for DomainError {
    fn from(e: UserDirectoryError) -> Self {
        match e {
            UserDirectoryError::Unavailable(reason) => Self::DirectoryUnavailable(reason),
            UserDirectoryError::UserNotFound { key } => Self::UnknownUser { key },
            UserDirectoryError::Internal(reason) => Self::Internal(reason),
        }
    }
}

impl From<DomainError> for IdentityResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MalformedPrincipal(reason) => Self::MalformedPrincipal(reason),
            DomainError::DirectoryUnavailable(reason) => Self::DirectoryUnavailable(reason),
            DomainError::UnknownUser { key } => Self::UnknownUser { key },
            DomainError::IdentityRequired => Self::IdentityRequired,
            DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}
