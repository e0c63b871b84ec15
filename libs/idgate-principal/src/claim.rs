//! Claims and the ordered claim collection attached to a principal.

use serde::{Deserialize, Serialize};

/// A single typed fact about a principal, supplied by the identity provider.
///
/// The type is a string from an open vocabulary (no fixed schema) and the
/// value is opaque. Multiple claims of the same type may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    claim_type: String,
    value: String,
}

impl Claim {
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn claim_type(&self) -> &str {
        &self.claim_type
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered, duplicate-tolerant collection of claims.
///
/// Order is the order the provider (or the enrichment step) appended claims
/// in; lookups that care about duplicates take the first claim of a type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a claim, preserving insertion order.
    pub fn push(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    /// Convenience for `push(Claim::new(..))` in builder chains.
    #[must_use]
    pub fn with(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Claim::new(claim_type, value));
        self
    }

    /// First claim of the given type, if any. Later duplicates are ignored.
    #[must_use]
    pub fn first_of(&self, claim_type: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    /// All claims of the given type, in insertion order.
    pub fn all_of<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> {
        self.claims.iter().filter(move |c| c.claim_type == claim_type)
    }

    /// Number of claims of the given type.
    #[must_use]
    pub fn count_of(&self, claim_type: &str) -> usize {
        self.all_of(claim_type).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.claims.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl FromIterator<Claim> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        Self {
            claims: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ClaimSet {
    type Item = Claim;
    type IntoIter = std::vec::IntoIter<Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}
