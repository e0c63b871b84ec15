//! Identity Resolver Module
//!
//! Runs once a federated token has been cryptographically validated: picks
//! the claim that represents the user's durable identifier (ordered fallback
//! probe), maps it to an internal user record through a
//! [`identity_resolver_sdk::UserDirectoryClient`], and returns a principal
//! enriched with the internal-identity claim.
//!
//! Provides the [`identity_resolver_sdk::IdentityEnrichmentClient`]
//! implementation hosts compose into their authentication pipeline.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
