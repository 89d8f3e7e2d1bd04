//! Stripe Checkout Integration
//!
//! Maps the provider-agnostic [`CheckoutSessionSpec`] onto Stripe's
//! hosted checkout ("Stripe Checkout") session-creation API.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionLocale, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionLineItemsPriceDataRecurring,
    CreateCheckoutSessionLineItemsPriceDataRecurringInterval, Currency,
};

use crate::error::{CheckoutError, Result};
use crate::session::{CheckoutSessionSpec, RecurringInterval, SessionMode};

/// External collaborator that turns a session spec into a hosted
/// redirect URL. Injected so tests can substitute a fake.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(&self, spec: CheckoutSessionSpec) -> Result<String>;
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from the `STRIPE_SECRET_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| CheckoutError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }
}

#[async_trait]
impl CheckoutGateway for StripeClient {
    async fn create_session(&self, spec: CheckoutSessionSpec) -> Result<String> {
        let currency = match spec.currency {
            "eur" => Currency::EUR,
            other => {
                return Err(CheckoutError::Config(format!(
                    "unsupported currency: {other}"
                )));
            }
        };

        let mut params = CreateCheckoutSession::new();
        params.customer_email = Some(&spec.customer_email);
        params.success_url = Some(&spec.success_url);
        params.cancel_url = Some(&spec.cancel_url);
        params.mode = Some(match spec.mode {
            SessionMode::Payment => CheckoutSessionMode::Payment,
            SessionMode::Subscription => CheckoutSessionMode::Subscription,
        });
        params.locale = Some(match spec.provider_locale {
            "en" => CheckoutSessionLocale::En,
            _ => CheckoutSessionLocale::Auto,
        });
        params.metadata = Some(spec.metadata.clone());

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(spec.unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: spec.product_name.clone(),
                    ..Default::default()
                }),
                recurring: spec.recurring.map(|interval| {
                    CreateCheckoutSessionLineItemsPriceDataRecurring {
                        interval: match interval {
                            RecurringInterval::Month => {
                                CreateCheckoutSessionLineItemsPriceDataRecurringInterval::Month
                            }
                        },
                        interval_count: Some(1),
                    }
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| CheckoutError::Gateway(e.to_string()))?;

        session
            .url
            .ok_or_else(|| CheckoutError::Gateway("no checkout URL returned".into()))
    }
}
