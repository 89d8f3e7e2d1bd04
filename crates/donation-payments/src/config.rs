//! Environment Configuration
//!
//! All configuration is read once at startup; nothing here is consulted
//! again during request handling.

/// Runtime mode, gating how much error detail reaches the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Provider error messages are included in responses
    Development,
    /// Callers only see generic error messages
    Production,
}

impl RuntimeMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("development") => RuntimeMode::Development,
            _ => RuntimeMode::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }
}

/// Startup configuration for the checkout service
#[derive(Clone, Debug)]
pub struct CheckoutConfig {
    /// Stripe secret key (None leaves the service up but refusing payments)
    pub stripe_secret_key: Option<String>,

    /// Base frontend URL; None switches the origin policy to wildcard
    pub frontend_url: Option<String>,

    /// Production vs. development behavior
    pub runtime_mode: RuntimeMode,
}

impl CheckoutConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self {
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY").ok(),
            frontend_url: std::env::var("FRONTEND_URL").ok(),
            runtime_mode: RuntimeMode::from_env(),
        }
    }
}
