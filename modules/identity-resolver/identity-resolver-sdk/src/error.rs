//! Error types for the identity resolver module.

use thiserror::Error;

/// Errors that can occur when running the token-validated hook.
///
/// An unresolved identity is deliberately NOT represented here: it is a soft
/// outcome modeled by [`crate::EnrichmentOutcome::Unresolved`]. Every variant
/// below aborts the current sign-in attempt.
#[derive(Debug, Error)]
pub enum IdentityResolverError {
    /// The external pipeline handed the hook a principal that violates its
    /// contract (e.g. not marked authenticated). A configuration-level
    /// integration error, not a per-user condition.
    #[error("malformed principal: {0}")]
    MalformedPrincipal(String),

    /// The user directory could not complete the lookup. The user cannot be
    /// let in without a durable identity.
    #[error("user directory unavailable: {0}")]
    DirectoryUnavailable(String),

    /// The directory recognizes the key but refuses to provision a record
    /// for it (auto-provisioning disabled and no existing record).
    #[error("no directory record for identity key '{key}'")]
    UnknownUser { key: String },

    /// Resolution found no usable identity claim and the module is
    /// configured with `require_resolved_identity = true`.
    #[error("identity resolution required but no usable identity claim found")]
    IdentityRequired,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors surfaced by user directory implementations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// The backing store could not be reached or failed mid-operation.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// No record exists for the key and the directory does not provision
    /// new records.
    #[error("no record for identity key '{key}'")]
    UserNotFound { key: String },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
