//! Well-known claim type names.
//!
//! Claim types form an open, provider-controlled vocabulary; the constants
//! here are only the ones idgate itself probes or writes.

/// Standard OIDC email claim.
pub const EMAIL: &str = "email";

/// Directory-service mail attribute. Some providers put the address here
/// instead of (or in addition to) [`EMAIL`].
pub const MAIL: &str = "mail";

/// OIDC `preferred_username` claim, last-resort identity key.
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// The distinguished internal-identity claim written by the enrichment step.
///
/// Never supplied by a provider; carries the durable user id issued by the
/// user directory. Downstream authorization reads it by this name.
pub const INTERNAL_USER_ID: &str = "internal_user_id";
