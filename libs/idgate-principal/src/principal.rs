//! The authenticated actor for the current request.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::claim::ClaimSet;

/// Authentication state of a [`Principal`].
///
/// The transition from `Unauthenticated` to `Authenticated` happens exactly
/// once per request and is driven by the external authentication pipeline;
/// there are no further transitions within a request's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// The authenticated actor and its claim set for the current sign-in.
///
/// Built once by the external authentication pipeline after token validation.
/// The enrichment step never mutates a principal in place; it produces an
/// augmented copy via [`Principal::with_claims`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    state: AuthState,
    claims: ClaimSet,
    /// Raw ID token for downstream forwarding. Never serialized; wrapped in
    /// `SecretString` so `Debug` redacts the value automatically.
    #[serde(skip)]
    id_token: Option<SecretString>,
}

impl Principal {
    /// Create a new `Principal` builder.
    #[must_use]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    /// An unauthenticated principal with no claims.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            state: AuthState::Unauthenticated,
            claims: ClaimSet::new(),
            id_token: None,
        }
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    #[must_use]
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Raw ID token captured at sign-in, if the pipeline provided one.
    #[must_use]
    pub fn id_token(&self) -> Option<&SecretString> {
        self.id_token.as_ref()
    }

    /// Copy of this principal carrying a replacement claim set.
    ///
    /// Auth state and ID token are preserved; this is how the claims
    /// augmenter returns an enriched principal without touching the input.
    #[must_use]
    pub fn with_claims(&self, claims: ClaimSet) -> Self {
        Self {
            state: self.state,
            claims,
            id_token: self.id_token.clone(),
        }
    }
}

#[derive(Default)]
pub struct PrincipalBuilder {
    authenticated: bool,
    claims: ClaimSet,
    id_token: Option<SecretString>,
}

impl PrincipalBuilder {
    /// Mark the principal authenticated. Only the external pipeline should
    /// call this, after cryptographic and protocol validation.
    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    #[must_use]
    pub fn claims(mut self, claims: ClaimSet) -> Self {
        self.claims = claims;
        self
    }

    #[must_use]
    pub fn id_token(mut self, token: impl Into<SecretString>) -> Self {
        self.id_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            state: if self.authenticated {
                AuthState::Authenticated
            } else {
                AuthState::Unauthenticated
            },
            claims: self.claims,
            id_token: self.id_token,
        }
    }
}
