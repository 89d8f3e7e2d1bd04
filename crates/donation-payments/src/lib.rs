//! # donation-payments
//!
//! Turns a donation request (amount, donor email, payment cadence,
//! return destination, locale) into a Stripe-hosted checkout session,
//! handing back the redirect URL.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Donate     │────▶│  Stripe Hosted  │────▶│  Thank-you  │
//! │  page       │     │  Checkout Page  │     │  page       │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! The orchestrator sequences validation, locale resolution, redirect
//! derivation, and session building; the Stripe call itself sits behind
//! the [`CheckoutGateway`] trait so tests can substitute a fake.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use donation_payments::{CheckoutOrchestrator, DonationPayload, OriginPolicy, StripeClient};
//! use std::sync::Arc;
//!
//! let policy = Arc::new(OriginPolicy::from_frontend_url(Some("https://give.org")));
//! let stripe = Arc::new(StripeClient::from_env()?);
//! let orchestrator = CheckoutOrchestrator::new(
//!     policy,
//!     Some("https://give.org".into()),
//!     Some(stripe),
//! );
//!
//! let url = orchestrator.create_session(None, payload).await?;
//! // Redirect the donor to: url
//! ```

mod config;
mod error;
mod gateway;
pub mod locale;
mod orchestrator;
mod origin;
mod redirect;
mod request;
mod session;

pub use config::{CheckoutConfig, RuntimeMode};
pub use error::{CheckoutError, Result};
pub use gateway::{CheckoutGateway, StripeClient};
pub use orchestrator::CheckoutOrchestrator;
pub use origin::{OriginDecision, OriginPolicy};
pub use redirect::{RedirectUrls, SESSION_ID_PLACEHOLDER};
pub use request::{Cadence, DonationPayload, DonationRequest};
pub use session::{CheckoutSessionSpec, RecurringInterval, SessionMode, DONATION_CURRENCY};
