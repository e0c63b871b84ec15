//! Domain models for the identity resolver module.

use chrono::{DateTime, Utc};
use idgate_principal::Principal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A durable user directory record.
///
/// `internal_user_id` is one-to-one with the record and stable across
/// repeated resolution of the same identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Durable application-level user identifier.
    pub internal_user_id: Uuid,
    /// The identity key the record was provisioned under (email-like).
    pub identity_key: String,
    /// Provisioning time, set by the directory on first sight of the key.
    pub created_at: DateTime<Utc>,
}

/// Result of running the token-validated hook on a principal.
#[derive(Debug, Clone)]
pub enum EnrichmentOutcome {
    /// A usable identity key was found and mapped; `principal` carries
    /// exactly one internal-identity claim with `internal_user_id`.
    Enriched {
        principal: Principal,
        internal_user_id: Uuid,
    },
    /// No usable identity claim was present. The principal is returned
    /// unchanged and the request proceeds authenticated but unidentified,
    /// unless the module's `require_resolved_identity` switch turns this
    /// into a hard failure.
    Unresolved { principal: Principal },
}

impl EnrichmentOutcome {
    /// The principal to continue the request with, enriched or not.
    #[must_use]
    pub fn into_principal(self) -> Principal {
        match self {
            Self::Enriched { principal, .. } | Self::Unresolved { principal } => principal,
        }
    }

    /// The resolved internal user id, when resolution succeeded.
    #[must_use]
    pub fn internal_user_id(&self) -> Option<Uuid> {
        match self {
            Self::Enriched {
                internal_user_id, ..
            } => Some(*internal_user_id),
            Self::Unresolved { .. } => None,
        }
    }
}
