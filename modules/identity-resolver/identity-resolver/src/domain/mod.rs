//! Domain layer for the identity resolver.

pub mod augment;
pub mod error;
pub mod local_client;
pub mod resolver;
pub mod service;

pub use error::DomainError;
pub use local_client::IdentityResolverLocalClient;
pub use service::Service;
