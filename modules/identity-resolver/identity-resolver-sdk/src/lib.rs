//! Identity Resolver SDK
//!
//! This crate provides the public API for the `identity_resolver` module:
//!
//! - [`IdentityEnrichmentClient`] - the token-validated hook contract for hosts
//! - [`UserDirectoryClient`] - outbound contract implemented by directory plugins
//! - [`EnrichmentOutcome`] / [`UserRecord`] - result models
//! - [`IdentityResolverError`] / [`UserDirectoryError`] - error types
//!
//! ## Usage
//!
//! The external authentication pipeline invokes the hook once per sign-in,
//! after cryptographic and protocol validation:
//!
//! ```ignore
//! use identity_resolver_sdk::{EnrichmentOutcome, IdentityEnrichmentClient};
//!
//! let outcome = enrichment.on_token_validated(&principal).await?;
//! let principal = match outcome {
//!     EnrichmentOutcome::Enriched { principal, .. } => principal,
//!     EnrichmentOutcome::Unresolved { principal } => principal,
//! };
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod directory;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::IdentityEnrichmentClient;
pub use directory::UserDirectoryClient;
pub use error::{IdentityResolverError, UserDirectoryError};
pub use models::{EnrichmentOutcome, UserRecord};
