//! Session Request Builder
//!
//! Assembles the provider-agnostic checkout session specification from a
//! validated donation request. Pure; the provider call happens elsewhere.

use std::collections::HashMap;

use crate::locale::LocaleContent;
use crate::redirect::RedirectUrls;
use crate::request::{Cadence, DonationRequest};

/// Donations are charged in a single fixed currency
pub const DONATION_CURRENCY: &str = "eur";

/// Provider session mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// One-off charge
    Payment,
    /// Recurring charge
    Subscription,
}

/// Recurrence interval, present iff the mode is `Subscription`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecurringInterval {
    Month,
}

/// Provider-facing checkout session specification
#[derive(Clone, Debug)]
pub struct CheckoutSessionSpec {
    pub mode: SessionMode,
    pub customer_email: String,
    /// Lowercase ISO currency code
    pub currency: &'static str,
    /// Amount in minor units (cents)
    pub unit_amount: i64,
    pub recurring: Option<RecurringInterval>,
    pub success_url: String,
    pub cancel_url: String,
    /// Localized product name shown on the hosted page
    pub product_name: String,
    /// Locale tag for the hosted page
    pub provider_locale: &'static str,
    /// Audit trail only; nothing in this crate reads it back
    pub metadata: HashMap<String, String>,
}

/// Build the session spec.
///
/// The amount arrives in major units and Stripe wants integer minor
/// units; rounding (not truncation) avoids undercharging on fractional
/// cents.
pub fn build_spec(
    request: &DonationRequest,
    content: &LocaleContent,
    urls: RedirectUrls,
) -> CheckoutSessionSpec {
    let mode = match request.cadence {
        Cadence::Monthly => SessionMode::Subscription,
        Cadence::OneTime => SessionMode::Payment,
    };

    let recurring = match mode {
        SessionMode::Subscription => Some(RecurringInterval::Month),
        SessionMode::Payment => None,
    };

    let mut metadata = HashMap::new();
    metadata.insert("cadence".to_string(), request.cadence.as_str().to_string());
    metadata.insert("amount".to_string(), format!("{}", request.amount));

    CheckoutSessionSpec {
        mode,
        customer_email: request.email.clone(),
        currency: DONATION_CURRENCY,
        unit_amount: (request.amount * 100.0).round() as i64,
        recurring,
        success_url: urls.success_url,
        cancel_url: urls.cancel_url,
        product_name: content.product_name(request.cadence).to_string(),
        provider_locale: content.provider_locale,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn request(amount: f64, cadence: Cadence) -> DonationRequest {
        DonationRequest {
            amount,
            email: "a@b.com".into(),
            cadence,
            return_url: None,
            locale: None,
        }
    }

    fn urls() -> RedirectUrls {
        RedirectUrls::derive("https://give.org", None)
    }

    #[test]
    fn test_one_time_builds_payment_mode() {
        let spec = build_spec(&request(10.0, Cadence::OneTime), locale::resolve(None), urls());
        assert_eq!(spec.mode, SessionMode::Payment);
        assert_eq!(spec.recurring, None);
        assert_eq!(spec.unit_amount, 1000);
        assert_eq!(spec.currency, "eur");
    }

    #[test]
    fn test_monthly_builds_subscription_with_recurrence() {
        let spec = build_spec(&request(5.0, Cadence::Monthly), locale::resolve(None), urls());
        assert_eq!(spec.mode, SessionMode::Subscription);
        assert_eq!(spec.recurring, Some(RecurringInterval::Month));
    }

    #[test]
    fn test_fractional_amounts_round_to_cents() {
        let spec = build_spec(&request(10.999, Cadence::OneTime), locale::resolve(None), urls());
        assert_eq!(spec.unit_amount, 1100);
        let spec = build_spec(&request(10.994, Cadence::OneTime), locale::resolve(None), urls());
        assert_eq!(spec.unit_amount, 1099);
    }

    #[test]
    fn test_metadata_carries_cadence_and_amount() {
        let spec = build_spec(&request(25.0, Cadence::Monthly), locale::resolve(None), urls());
        assert_eq!(spec.metadata.get("cadence").map(String::as_str), Some("monthly"));
        assert_eq!(spec.metadata.get("amount").map(String::as_str), Some("25"));
    }

    #[test]
    fn test_localized_product_name_and_locale_tag() {
        let spec = build_spec(
            &request(10.0, Cadence::OneTime),
            locale::resolve(Some("en")),
            urls(),
        );
        assert_eq!(spec.product_name, "One-time donation");
        assert_eq!(spec.provider_locale, "en");

        let spec = build_spec(&request(10.0, Cadence::OneTime), locale::resolve(None), urls());
        assert_eq!(spec.product_name, "Разовое пожертвование");
        assert_eq!(spec.provider_locale, "auto");
    }
}
