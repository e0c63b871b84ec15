//! Outbound contract for user directory implementations.
//!
//! The directory is a black box to the resolver: schema, storage, and
//! transport are implementation concerns. The resolver only requires
//! deterministic, side-effect-free resolution of already-known keys.

use async_trait::async_trait;

use crate::error::UserDirectoryError;
use crate::models::UserRecord;

/// Maps identity keys to durable internal user records.
///
/// Implementations may auto-provision a record on first sight of a key.
/// Under concurrent first-time provisioning of the same key, at most one
/// record may be created; every caller must observe the same record
/// (create-if-absent with uniqueness on the key).
#[async_trait]
pub trait UserDirectoryClient: Send + Sync {
    /// Resolve an identity key to its directory record, provisioning one if
    /// the implementation allows it.
    ///
    /// Idempotent: repeated calls with the same key return the same record.
    ///
    /// # Errors
    ///
    /// - [`UserDirectoryError::Unavailable`] if the backing store cannot be
    ///   reached
    /// - [`UserDirectoryError::UserNotFound`] if the key has no record and
    ///   the directory does not provision
    /// - [`UserDirectoryError::Internal`] for unexpected errors
    async fn resolve_user(&self, key: &str) -> Result<UserRecord, UserDirectoryError>;
}
