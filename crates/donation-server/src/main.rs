//! Donation Checkout Server
//!
//! Axum-based server exposing a single endpoint that turns a donation
//! request into a Stripe-hosted checkout session.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_payments::{
    CheckoutConfig, CheckoutGateway, CheckoutOrchestrator, OriginPolicy, RuntimeMode, StripeClient,
};

use crate::handlers::{checkout_session, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = CheckoutConfig::from_env();

    // Allowed-origin set, fixed for the process lifetime
    let policy = Arc::new(OriginPolicy::from_frontend_url(config.frontend_url.as_deref()));
    match policy.as_ref() {
        OriginPolicy::Wildcard => {
            tracing::warn!("⚠ FRONTEND_URL not set - allowing all origins");
        }
        OriginPolicy::Exact(origins) => {
            for origin in origins {
                tracing::info!("  Allowed origin: {}", origin);
            }
        }
    }

    // Stripe client (None leaves the endpoint up but refusing payments)
    let stripe = config
        .stripe_secret_key
        .as_deref()
        .map(|key| Arc::new(StripeClient::new(key)) as Arc<dyn CheckoutGateway>);

    if stripe.is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!("⚠ Stripe not configured - checkout will fail");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    if config.runtime_mode == RuntimeMode::Development {
        tracing::info!("Running in development mode - error details exposed");
    }

    // Build application state
    let state = AppState {
        policy: policy.clone(),
        orchestrator: Arc::new(CheckoutOrchestrator::new(
            policy,
            config.frontend_url.clone(),
            stripe.clone(),
        )),
        runtime_mode: config.runtime_mode,
        stripe_configured: stripe.is_some(),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/checkout/session", any(checkout_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 donation-server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET          /health               - Health check");
    tracing::info!("  POST|OPTIONS /api/checkout/session - Create checkout session");

    axum::serve(listener, app).await?;

    Ok(())
}
