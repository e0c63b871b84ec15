//! Ordered fallback probe for the identity key.

use idgate_principal::ClaimSet;

use crate::config::IdentityResolverConfig;

/// Probe the claim set for a canonical identity key.
///
/// Claim types are tried in configured priority order; the first type with a
/// usable claim wins and candidates are never merged. Within a type only the
/// first claim counts, so a later duplicate cannot resurrect a type whose
/// first claim was rejected.
///
/// Returns `None` when no probed type yields a usable claim — the soft
/// "identity unresolved" outcome.
#[must_use]
pub fn resolve_identity_key<'a>(
    claims: &'a ClaimSet,
    config: &IdentityResolverConfig,
) -> Option<&'a str> {
    for claim_type in &config.probe_order {
        if let Some(claim) = claims.first_of(claim_type) {
            if config.treat_empty_as_absent && claim.value().is_empty() {
                continue;
            }
            return Some(claim.value());
        }
    }
    None
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use idgate_principal::claim_types;

    use super::*;

    fn cfg() -> IdentityResolverConfig {
        IdentityResolverConfig::default()
    }

    #[test]
    fn email_wins_regardless_of_other_claims() {
        let claims = ClaimSet::new()
            .with(claim_types::PREFERRED_USERNAME, "auser")
            .with(claim_types::MAIL, "mail@x.com")
            .with(claim_types::EMAIL, "email@x.com")
            .with("oid", "12345");

        assert_eq!(resolve_identity_key(&claims, &cfg()), Some("email@x.com"));
    }

    #[test]
    fn mail_wins_over_preferred_username() {
        let claims = ClaimSet::new()
            .with(claim_types::MAIL, "a@x.com")
            .with(claim_types::PREFERRED_USERNAME, "auser");

        assert_eq!(resolve_identity_key(&claims, &cfg()), Some("a@x.com"));
    }

    #[test]
    fn preferred_username_is_last_resort() {
        let claims = ClaimSet::new().with(claim_types::PREFERRED_USERNAME, "auser");

        assert_eq!(resolve_identity_key(&claims, &cfg()), Some("auser"));
    }

    #[test]
    fn no_usable_claims_resolves_to_none() {
        let claims = ClaimSet::new().with("oid", "12345").with("tid", "67890");

        assert_eq!(resolve_identity_key(&claims, &cfg()), None);
    }

    #[test]
    fn empty_claim_set_resolves_to_none() {
        assert_eq!(resolve_identity_key(&ClaimSet::new(), &cfg()), None);
    }

    #[test]
    fn first_duplicate_of_a_type_wins() {
        let claims = ClaimSet::new()
            .with(claim_types::EMAIL, "first@x.com")
            .with(claim_types::EMAIL, "second@x.com");

        assert_eq!(resolve_identity_key(&claims, &cfg()), Some("first@x.com"));
    }

    #[test]
    fn empty_first_claim_falls_through_to_next_type() {
        // The later email duplicate is NOT consulted; the probe falls to the
        // next type instead.
        let claims = ClaimSet::new()
            .with(claim_types::EMAIL, "")
            .with(claim_types::EMAIL, "second@x.com")
            .with(claim_types::MAIL, "mail@x.com");

        assert_eq!(resolve_identity_key(&claims, &cfg()), Some("mail@x.com"));
    }

    #[test]
    fn empty_values_win_when_normalization_disabled() {
        // Without normalization an empty claim counts as "present".
        let config = IdentityResolverConfig {
            treat_empty_as_absent: false,
            ..IdentityResolverConfig::default()
        };
        let claims = ClaimSet::new()
            .with(claim_types::EMAIL, "")
            .with(claim_types::MAIL, "mail@x.com");

        assert_eq!(resolve_identity_key(&claims, &config), Some(""));
    }

    #[test]
    fn custom_probe_order_is_honored() {
        let config = IdentityResolverConfig {
            probe_order: vec!["upn".to_owned(), claim_types::EMAIL.to_owned()],
            ..IdentityResolverConfig::default()
        };
        let claims = ClaimSet::new()
            .with(claim_types::EMAIL, "email@x.com")
            .with("upn", "user@corp.example");

        assert_eq!(
            resolve_identity_key(&claims, &config),
            Some("user@corp.example"),
        );
    }
}
