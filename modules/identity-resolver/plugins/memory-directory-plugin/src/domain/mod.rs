//! Domain layer for the in-memory directory plugin.

pub mod client;
pub mod service;

pub use service::Service;
