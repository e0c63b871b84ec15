#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod axum_ext;
pub mod errors;

pub use axum_ext::{CurrentPrincipal, PrincipalGateLayer, PrincipalGateService};
pub use errors::GateError;
