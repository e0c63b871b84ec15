//! Configuration for the in-memory user directory plugin.

use serde::Deserialize;
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryDirectoryPluginConfig {
    /// Provision a fresh record on first sight of an unknown key. When
    /// disabled, unknown keys fail with `UserNotFound`.
    pub auto_provision: bool,

    /// Report the directory as unavailable. Lets hosts and tests exercise
    /// the fatal `DirectoryUnavailable` sign-in path.
    pub available: bool,

    /// Records present before the first lookup.
    pub users: Vec<UserSeed>,
}

impl Default for MemoryDirectoryPluginConfig {
    fn default() -> Self {
        Self {
            auto_provision: true,
            available: true,
            users: Vec::new(),
        }
    }
}

/// A pre-provisioned directory record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    /// Identity key the record is filed under (email-like).
    pub identity_key: String,
    /// Durable internal user id for the key.
    pub internal_user_id: Uuid,
}
