#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod claim;
pub mod claim_types;
pub mod principal;

pub use claim::{Claim, ClaimSet};
pub use principal::{AuthState, Principal, PrincipalBuilder};
