//! Application State

use std::sync::Arc;

use donation_payments::{CheckoutOrchestrator, OriginPolicy, RuntimeMode};

/// Shared application state; read-only after startup
#[derive(Clone)]
pub struct AppState {
    /// Startup-computed allowed-origin policy
    pub policy: Arc<OriginPolicy>,

    /// Sequences validation, redirect derivation, and the Stripe call
    pub orchestrator: Arc<CheckoutOrchestrator>,

    /// Gates whether provider error detail reaches the caller
    pub runtime_mode: RuntimeMode,

    /// Whether a Stripe credential was configured (for /health)
    pub stripe_configured: bool,
}
