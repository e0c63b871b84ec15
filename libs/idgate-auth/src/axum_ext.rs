//! Axum extractors and middleware for the authorization gate.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    extract::{FromRequestParts, Request},
    http::{HeaderMap, Method, request::Parts},
    response::{IntoResponse, Response},
};
use idgate_principal::Principal;
use tower::{Layer, Service};

use crate::errors::GateError;

/// Extractor for the current [`Principal`] - validates that the
/// authentication pipeline has run.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = GateError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentPrincipal)
            .ok_or(GateError::Internal(
                "Principal not found - authentication pipeline not configured".to_owned(),
            ))
    }
}

/// Route predicate deciding which paths bypass the gate.
///
/// The gate applies uniformly to every handler behind it; exemptions exist
/// only for endpoints the pipeline itself owns (sign-in, callback, error
/// page). An empty exemption list gates everything.
#[derive(Debug, Clone, Default)]
struct GatePolicy {
    exempt_paths: Arc<[String]>,
}

impl GatePolicy {
    fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.iter().any(|p| p == path)
    }
}

/// Layer that requires an authenticated [`Principal`] on every request.
///
/// The principal is inserted into request extensions by the external
/// authentication pipeline after token validation and enrichment. Requests
/// without one, or with an unauthenticated one, are rejected with 401
/// regardless of whether identity resolution produced an internal-identity
/// claim.
///
/// # Example
/// ```ignore
/// router = router.layer(PrincipalGateLayer::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrincipalGateLayer {
    policy: GatePolicy,
}

impl PrincipalGateLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exempt a pipeline-owned path (e.g. the OIDC callback) from the gate.
    #[must_use]
    pub fn exempt_path(mut self, path: impl Into<String>) -> Self {
        let mut paths = self.policy.exempt_paths.to_vec();
        paths.push(path.into());
        self.policy.exempt_paths = paths.into();
        self
    }
}

impl<S> Layer<S> for PrincipalGateLayer {
    type Service = PrincipalGateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PrincipalGateService {
            inner,
            policy: self.policy.clone(),
        }
    }
}

/// Service that applies the authentication requirement to requests.
#[derive(Debug, Clone)]
pub struct PrincipalGateService<S> {
    inner: S,
    policy: GatePolicy,
}

impl<S> Service<Request<Body>> for PrincipalGateService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let policy = self.policy.clone();
        let not_ready_inner = self.inner.clone();
        let mut ready_inner = std::mem::replace(&mut self.inner, not_ready_inner);

        Box::pin(async move {
            // CORS preflight requests never carry credentials
            if is_preflight_request(request.method(), request.headers()) {
                return ready_inner.call(request).await;
            }

            if policy.is_exempt(request.uri().path()) {
                return ready_inner.call(request).await;
            }

            let authenticated = request
                .extensions()
                .get::<Principal>()
                .is_some_and(Principal::is_authenticated);

            if authenticated {
                ready_inner.call(request).await
            } else {
                tracing::debug!(path = %request.uri().path(), "request rejected by principal gate");
                Ok(GateError::Unauthenticated.into_response())
            }
        })
    }
}

/// Check if this is a CORS preflight request
///
/// Preflight requests are OPTIONS requests with:
/// - Origin header present
/// - Access-Control-Request-Method header present
fn is_preflight_request(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(axum::http::header::ORIGIN)
        && headers.contains_key(axum::http::header::ACCESS_CONTROL_REQUEST_METHOD)
}
