//! Public API trait for the identity resolver.
//!
//! This trait is the single extension point the external authentication
//! pipeline composes in: it runs after token validation and before the
//! request is treated as authenticated.

use async_trait::async_trait;
use idgate_principal::Principal;

use crate::error::IdentityResolverError;
use crate::models::EnrichmentOutcome;

/// The token-validated hook contract.
///
/// Hosts call this once per completed federated sign-in:
///
/// ```ignore
/// let outcome = enrichment.on_token_validated(&principal).await?;
/// let principal = outcome.into_principal();
/// ```
///
/// The input principal is never mutated; the outcome carries a new principal
/// with the internal-identity claim appended when resolution succeeded.
#[async_trait]
pub trait IdentityEnrichmentClient: Send + Sync {
    /// Resolve the principal's identity key, map it through the user
    /// directory, and return an enriched copy of the principal.
    ///
    /// # Errors
    ///
    /// - [`IdentityResolverError::MalformedPrincipal`] if the pipeline broke
    ///   its contract (principal not authenticated)
    /// - [`IdentityResolverError::DirectoryUnavailable`] if the directory
    ///   lookup could not complete
    /// - [`IdentityResolverError::UnknownUser`] if the directory refuses to
    ///   provision the resolved key
    /// - [`IdentityResolverError::IdentityRequired`] if no identity claim was
    ///   found and the module requires one
    /// - [`IdentityResolverError::Internal`] for unexpected errors
    async fn on_token_validated(
        &self,
        principal: &Principal,
    ) -> Result<EnrichmentOutcome, IdentityResolverError>;
}
