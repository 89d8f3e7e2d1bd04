//! Checkout Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors produced while turning a donation request into a checkout session
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Amount missing or below the 1-unit minimum
    #[error("invalid donation amount")]
    InvalidAmount,

    /// Email missing or without an `@`
    #[error("invalid donor email")]
    InvalidEmail,

    /// Cadence not one of `monthly` / `one-time`
    #[error("invalid payment cadence: {0:?}")]
    InvalidCadence(String),

    /// Neither an allowed origin nor a configured frontend URL to build redirects from
    #[error("no redirect base available")]
    NoRedirectBase,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Payment provider error
    #[error("payment gateway error: {0}")]
    Gateway(String),
}

impl CheckoutError {
    /// Whether the error is the caller's fault (maps to a 400-class response)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CheckoutError::InvalidAmount
                | CheckoutError::InvalidEmail
                | CheckoutError::InvalidCadence(_)
        )
    }
}
