//! Client implementation for the in-memory directory plugin.
//!
//! Implements `UserDirectoryClient` using the domain service.

use async_trait::async_trait;
use identity_resolver_sdk::{UserDirectoryClient, UserDirectoryError, UserRecord};

use super::service::Service;

#[async_trait]
impl UserDirectoryClient for Service {
    async fn resolve_user(&self, key: &str) -> Result<UserRecord, UserDirectoryError> {
        self.resolve(key)
    }
}
