//! HTTP Handlers
//!
//! The checkout endpoint dispatches on method itself so that every
//! response, including preflight and 405, carries the same CORS headers.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
        },
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use donation_payments::{DonationPayload, OriginDecision, OriginPolicy, locale};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.stripe_configured,
    })
}

/// CORS headers for the checkout endpoint, derived from the origin policy
fn cors_headers(policy: &OriginPolicy, origin: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    match policy.decide(origin) {
        OriginDecision::Allowed(origin) => {
            if let Ok(value) = HeaderValue::from_str(&origin) {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
        }
        OriginDecision::Wildcard => {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
        OriginDecision::Disallowed => {}
    }

    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    headers
}

/// Create a donation checkout session.
///
/// `POST` with a JSON body; `OPTIONS` short-circuits after the CORS
/// headers are set, without touching the body.
pub async fn checkout_session(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let origin = headers.get(ORIGIN).and_then(|v| v.to_str().ok());
    let cors = cors_headers(&state.policy, origin);

    if method == Method::OPTIONS {
        return (StatusCode::OK, cors).into_response();
    }

    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            cors,
            Json(json!({ "error": "Method not allowed" })),
        )
            .into_response();
    }

    // An absent or unparseable body falls through to validation, which
    // rejects it as a missing amount.
    let payload: DonationPayload = serde_json::from_slice(&body).unwrap_or_default();
    let content = locale::resolve(payload.locale.as_deref());

    match state.orchestrator.create_session(origin, payload).await {
        Ok(url) => (StatusCode::OK, cors, Json(json!({ "url": url }))).into_response(),
        Err(err) => {
            let status = if err.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                tracing::error!(error = %err, "Checkout session failed");
                StatusCode::INTERNAL_SERVER_ERROR
            };

            let mut response = json!({ "error": content.error_message(&err) });
            if !err.is_client_error() && state.runtime_mode.is_development() {
                response["details"] = json!(err.to_string());
            }

            (status, cors, Json(response)).into_response()
        }
    }
}
