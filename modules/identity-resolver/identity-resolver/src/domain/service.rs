//! Enrichment service: orchestrates probe, directory lookup, and
//! augmentation inside the token-validated hook.

use std::sync::Arc;

use identity_resolver_sdk::{EnrichmentOutcome, UserDirectoryClient};
use idgate_principal::Principal;

use super::error::DomainError;
use super::{augment, resolver};
use crate::config::IdentityResolverConfig;

/// Identity enrichment service.
///
/// Runs synchronously within the handling of one inbound request; touches no
/// cross-request state of its own. Concurrency guarantees for first-time
/// provisioning live behind the [`UserDirectoryClient`].
pub struct Service {
    directory: Arc<dyn UserDirectoryClient>,
    config: IdentityResolverConfig,
}

impl Service {
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectoryClient>, config: IdentityResolverConfig) -> Self {
        Self { directory, config }
    }

    /// Run the post-validation enrichment sequence for one sign-in.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MalformedPrincipal`] if the pipeline handed over a
    ///   principal that is not marked authenticated
    /// - [`DomainError::DirectoryUnavailable`] / [`DomainError::UnknownUser`]
    ///   / [`DomainError::Internal`] from the directory lookup
    /// - [`DomainError::IdentityRequired`] when resolution fails and the
    ///   module is configured to require a resolved identity
    #[tracing::instrument(skip_all, fields(claim_count = principal.claims().len()))]
    pub async fn enrich(&self, principal: &Principal) -> Result<EnrichmentOutcome, DomainError> {
        if !principal.is_authenticated() {
            // Contract violation by the pipeline: the hook is defined to run
            // after successful token validation only.
            return Err(DomainError::MalformedPrincipal(
                "token-validated hook invoked with an unauthenticated principal".to_owned(),
            ));
        }

        let Some(key) = resolver::resolve_identity_key(principal.claims(), &self.config) else {
            if self.config.require_resolved_identity {
                return Err(DomainError::IdentityRequired);
            }
            tracing::warn!("no usable identity claim; continuing without internal identity");
            return Ok(EnrichmentOutcome::Unresolved {
                principal: principal.clone(),
            });
        };

        let record = self.directory.resolve_user(key).await?;
        tracing::debug!(internal_user_id = %record.internal_user_id, "identity key mapped");

        let claims = augment::with_internal_user_id(
            principal.claims().clone(),
            record.internal_user_id,
        );

        Ok(EnrichmentOutcome::Enriched {
            principal: principal.with_claims(claims),
            internal_user_id: record.internal_user_id,
        })
    }
}
