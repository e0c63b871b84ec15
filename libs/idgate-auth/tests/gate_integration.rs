//! Integration tests for the principal gate middleware.
//!
//! The gate is exercised through a real axum router; a plain `Extension`
//! layer stands in for the external authentication pipeline that inserts
//! the principal.

use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::{any, get},
};
use http_body_util::BodyExt;
use idgate_auth::{CurrentPrincipal, PrincipalGateLayer};
use idgate_principal::{ClaimSet, Principal, claim_types};
use tower::ServiceExt;

async fn whoami(CurrentPrincipal(principal): CurrentPrincipal) -> String {
    principal
        .claims()
        .first_of(claim_types::EMAIL)
        .map(|c| c.value().to_owned())
        .unwrap_or_default()
}

async fn plain() -> &'static str {
    "ok"
}

fn gated_app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/plain", any(plain))
        .route("/signin-oidc", any(plain))
        .layer(PrincipalGateLayer::new().exempt_path("/signin-oidc"))
}

fn authenticated_principal() -> Principal {
    Principal::builder()
        .authenticated()
        .claims(ClaimSet::new().with(claim_types::EMAIL, "a@x.com"))
        .build()
}

#[tokio::test]
async fn request_without_principal_is_rejected() {
    let app = gated_app();

    let response = app
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "authentication required");
}

#[tokio::test]
async fn authenticated_principal_reaches_handler() {
    let app = gated_app().layer(Extension(authenticated_principal()));

    let response = app
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"a@x.com");
}

#[tokio::test]
async fn unauthenticated_principal_is_rejected() {
    let app = gated_app().layer(Extension(Principal::unauthenticated()));

    let response = app
        .oneshot(Request::get("/plain").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn cors_preflight_bypasses_the_gate() {
    let app = gated_app();

    let response = app
        .oneshot(
            Request::options("/plain")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn exempt_path_bypasses_the_gate() {
    let app = gated_app();

    let response = app
        .oneshot(Request::get("/signin-oidc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn extractor_without_pipeline_is_an_internal_error() {
    // Handler asks for the principal but neither gate nor pipeline ran.
    let app = Router::new().route("/whoami", get(whoami));

    let response = app
        .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
