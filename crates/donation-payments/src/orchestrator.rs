//! Checkout Orchestrator
//!
//! Sequences validation, localization, redirect derivation, and session
//! building, then hands the session spec to the injected gateway. All
//! state here is read-only after construction; every call is independent.

use std::sync::Arc;

use crate::error::{CheckoutError, Result};
use crate::gateway::CheckoutGateway;
use crate::locale;
use crate::origin::OriginPolicy;
use crate::redirect::{self, RedirectUrls};
use crate::request::{self, DonationPayload};
use crate::session;

pub struct CheckoutOrchestrator {
    policy: Arc<OriginPolicy>,
    frontend_url: Option<String>,
    /// None when no Stripe credential is configured; requests then fail
    /// with a configuration error instead of reaching an unauthenticated
    /// client.
    gateway: Option<Arc<dyn CheckoutGateway>>,
}

impl CheckoutOrchestrator {
    pub fn new(
        policy: Arc<OriginPolicy>,
        frontend_url: Option<String>,
        gateway: Option<Arc<dyn CheckoutGateway>>,
    ) -> Self {
        Self {
            policy,
            frontend_url,
            gateway,
        }
    }

    /// Turn a raw donation payload into a hosted checkout redirect URL.
    ///
    /// `origin` is the request's `Origin` header value, already classified
    /// for CORS by the caller; here it only influences redirect bases.
    pub async fn create_session(
        &self,
        origin: Option<&str>,
        payload: DonationPayload,
    ) -> Result<String> {
        let request = request::validate(payload)?;
        let content = locale::resolve(request.locale.as_deref());

        let base = redirect::resolve_base(&self.policy, self.frontend_url.as_deref(), origin)?;
        let urls = RedirectUrls::derive(&base, request.return_url.as_deref());

        let spec = session::build_spec(&request, content, urls);

        let gateway = self
            .gateway
            .as_ref()
            .ok_or_else(|| CheckoutError::Config("payment gateway not configured".into()))?;

        tracing::info!(
            cadence = request.cadence.as_str(),
            amount = request.amount,
            locale = content.code,
            "Creating checkout session"
        );

        gateway.create_session(spec).await
    }
}
