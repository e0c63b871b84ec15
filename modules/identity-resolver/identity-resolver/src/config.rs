//! Configuration for the identity resolver.
//!
//! All policy lives here and is passed explicitly to the service by the host
//! that builds the pipeline; there is no ambient or process-global state.

use idgate_principal::claim_types;
use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityResolverConfig {
    /// Claim types probed for the identity key, in priority order. The first
    /// type yielding a usable claim wins; no merging of candidates.
    pub probe_order: Vec<String>,

    /// Treat an empty-string claim value as absent, falling through to the
    /// next probed type. Disable to take a provider's empty claim at face
    /// value ("present") instead of normalizing it away.
    pub treat_empty_as_absent: bool,

    /// Fail the sign-in when no usable identity claim is found, instead of
    /// letting the request proceed authenticated but unidentified.
    ///
    /// Defaults to `false`. Note the risk: with the default,
    /// authenticated-but-unidentified sessions pass the authorization gate
    /// and reach protected resources.
    pub require_resolved_identity: bool,
}

impl Default for IdentityResolverConfig {
    fn default() -> Self {
        Self {
            probe_order: vec![
                claim_types::EMAIL.to_owned(),
                claim_types::MAIL.to_owned(),
                claim_types::PREFERRED_USERNAME.to_owned(),
            ],
            treat_empty_as_absent: true,
            require_resolved_identity: false,
        }
    }
}
