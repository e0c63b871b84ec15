//! In-Memory User Directory Plugin
//!
//! A [`identity_resolver_sdk::UserDirectoryClient`] backed by a concurrent
//! in-process map. Records can be seeded from configuration; unknown keys
//! are auto-provisioned unless disabled. Useful for development hosts and
//! for tests that need deterministic directory behavior.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::MemoryDirectoryPluginConfig;
pub use domain::Service;
