//! Local (in-process) client for the identity resolver.

use std::sync::Arc;

use async_trait::async_trait;
use identity_resolver_sdk::{
    EnrichmentOutcome, IdentityEnrichmentClient, IdentityResolverError,
};
use idgate_principal::Principal;

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// This is the object hosts hand to their authentication pipeline as the
/// token-validated hook.
pub struct IdentityResolverLocalClient {
    svc: Arc<Service>,
}

impl IdentityResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> IdentityResolverError {
    tracing::error!(operation = op, error = ?e, "identity_resolver call failed");
    e.into()
}

#[async_trait]
impl IdentityEnrichmentClient for IdentityResolverLocalClient {
    async fn on_token_validated(
        &self,
        principal: &Principal,
    ) -> Result<EnrichmentOutcome, IdentityResolverError> {
        self.svc
            .enrich(principal)
            .await
            .map_err(|e| log_and_convert("on_token_validated", e))
    }
}
