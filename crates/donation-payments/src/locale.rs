//! Content Localizer
//!
//! A closed two-entry lookup table: the base locale and English. Any
//! other requested locale falls back to the base locale. Extending the
//! table means adding rows, not logic.

use crate::error::CheckoutError;
use crate::request::Cadence;

/// Locale code of the base (fallback) locale
pub const BASE_LOCALE: &str = "be";

/// Display strings and provider locale tag for one supported locale
#[derive(Debug)]
pub struct LocaleContent {
    pub code: &'static str,
    /// Locale tag passed to the payment provider's hosted page
    pub provider_locale: &'static str,
    monthly_name: &'static str,
    one_time_name: &'static str,
    msg_invalid_amount: &'static str,
    msg_invalid_email: &'static str,
    msg_invalid_cadence: &'static str,
    msg_payment_failed: &'static str,
    msg_server_config: &'static str,
}

static BASE: LocaleContent = LocaleContent {
    code: BASE_LOCALE,
    provider_locale: "auto",
    monthly_name: "Ежемесячное пожертвование",
    one_time_name: "Разовое пожертвование",
    msg_invalid_amount: "Некорректная сумма",
    msg_invalid_email: "Некорректный email",
    msg_invalid_cadence: "Некорректный тип платежа",
    msg_payment_failed: "Ошибка обработки платежа",
    msg_server_config: "Ошибка конфигурации сервера",
};

static EN: LocaleContent = LocaleContent {
    code: "en",
    provider_locale: "en",
    monthly_name: "Monthly donation",
    one_time_name: "One-time donation",
    msg_invalid_amount: "Invalid amount",
    msg_invalid_email: "Invalid email",
    msg_invalid_cadence: "Invalid payment type",
    msg_payment_failed: "Payment processing failed",
    msg_server_config: "Server configuration error",
};

/// Resolve a requested locale code; anything but the literal `en` maps to
/// the base locale.
pub fn resolve(locale: Option<&str>) -> &'static LocaleContent {
    match locale {
        Some("en") => &EN,
        _ => &BASE,
    }
}

impl LocaleContent {
    /// Product name shown on the provider's checkout page
    pub fn product_name(&self, cadence: Cadence) -> &'static str {
        match cadence {
            Cadence::Monthly => self.monthly_name,
            Cadence::OneTime => self.one_time_name,
        }
    }

    /// Client-facing message for an orchestration error
    pub fn error_message(&self, error: &CheckoutError) -> &'static str {
        match error {
            CheckoutError::InvalidAmount => self.msg_invalid_amount,
            CheckoutError::InvalidEmail => self.msg_invalid_email,
            CheckoutError::InvalidCadence(_) => self.msg_invalid_cadence,
            CheckoutError::NoRedirectBase | CheckoutError::Config(_) => self.msg_server_config,
            CheckoutError::Gateway(_) => self.msg_payment_failed,
        }
    }
}
