//! Claims augmentation: writing the resolved internal id back into the
//! claim set.

use idgate_principal::{Claim, ClaimSet, claim_types};
use uuid::Uuid;

/// Pure augmentation: returns a copy of `claims` carrying exactly one
/// internal-identity claim with `internal_user_id`.
///
/// The internal-identity type is provider-foreign, so any claims of that
/// type already present violate the pipeline contract; they are stripped
/// (and logged) rather than duplicated, keeping the single-claim invariant
/// even for misbehaving inputs. All other claims keep their order.
#[must_use]
pub fn with_internal_user_id(claims: ClaimSet, internal_user_id: Uuid) -> ClaimSet {
    let foreign = claims.count_of(claim_types::INTERNAL_USER_ID);
    if foreign > 0 {
        tracing::warn!(
            count = foreign,
            "stripping provider-supplied internal-identity claims before augmentation"
        );
    }

    let mut augmented: ClaimSet = claims
        .into_iter()
        .filter(|c| c.claim_type() != claim_types::INTERNAL_USER_ID)
        .collect();
    augmented.push(Claim::new(
        claim_types::INTERNAL_USER_ID,
        internal_user_id.to_string(),
    ));
    augmented
}
