//! Integration tests for BOLES Smart Home.
//!
//! The tests drive the storefront router in-process, in mock mode (no
//! backend credentials): reads fall back to the demo catalog, writes are
//! acknowledged without persisting, and email is simulated. Requests are
//! dispatched with `tower::ServiceExt::oneshot`, so no server or network
//! is involved.
//!
//! Run with: `cargo test -p boles-integration-tests`

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use boles_storefront::config::StorefrontConfig;
use boles_storefront::routes;
use boles_storefront::state::AppState;

/// Identity headers for an ordinary signed-in customer.
pub const CUSTOMER_HEADERS: &[(&str, &str)] = &[
    ("x-clerk-user-id", "user_customer"),
    ("x-clerk-user-email", "ada@example.com"),
    ("x-clerk-user-first-name", "Ada"),
    ("x-clerk-user-last-name", "Obi"),
];

/// Identity headers for an admin.
pub const ADMIN_HEADERS: &[(&str, &str)] = &[
    ("x-clerk-user-id", "user_admin"),
    ("x-clerk-user-email", "root@bolesenterprise.io"),
    ("x-clerk-user-role", "admin"),
];

/// Build the application in mock mode.
#[must_use]
pub fn test_app() -> Router {
    routes::app(AppState::new(StorefrontConfig::unconfigured()))
}

/// Dispatch one request and return the response.
///
/// # Panics
///
/// Panics when the request cannot be constructed or routed.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    identity: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    for (name, value) in identity {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    app.clone().oneshot(request).await.expect("request routes")
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics when the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}
