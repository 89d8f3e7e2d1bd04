//! Donation Request Validation

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Payment cadence for a donation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "monthly")]
    Monthly,
}

impl Cadence {
    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::OneTime => "one-time",
            Cadence::Monthly => "monthly",
        }
    }
}

/// Raw request body as received from the frontend.
///
/// Every field is optional so that a missing or unparseable body degrades
/// into ordinary validation failures instead of a framework-level reject.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DonationPayload {
    pub amount: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub cadence: Option<String>,
    #[serde(rename = "returnUrl")]
    pub return_url: Option<String>,
    pub locale: Option<String>,
}

/// A donation request that passed validation
#[derive(Clone, Debug)]
pub struct DonationRequest {
    /// Amount in major currency units, `>= 1`
    pub amount: f64,
    /// Donor email; checked only for a literal `@`
    pub email: String,
    pub cadence: Cadence,
    /// Caller-supplied cancel destination, not yet checked for URL shape
    pub return_url: Option<String>,
    /// Requested locale code as sent by the caller
    pub locale: Option<String>,
}

/// Validate the raw payload, reporting the first violation in fixed order:
/// amount, then email, then cadence.
///
/// The email check is intentionally minimal (a single `@`), matching what
/// the frontend promises; Stripe re-validates on its own checkout page.
pub fn validate(payload: DonationPayload) -> Result<DonationRequest> {
    let amount = match payload.amount {
        Some(a) if a >= 1.0 => a,
        _ => return Err(CheckoutError::InvalidAmount),
    };

    let email = match payload.email {
        Some(e) if e.contains('@') => e,
        _ => return Err(CheckoutError::InvalidEmail),
    };

    let cadence = match payload.cadence.as_deref() {
        Some("monthly") => Cadence::Monthly,
        Some("one-time") => Cadence::OneTime,
        other => return Err(CheckoutError::InvalidCadence(other.unwrap_or("").to_string())),
    };

    Ok(DonationRequest {
        amount,
        email,
        cadence,
        return_url: payload.return_url,
        locale: payload.locale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(amount: Option<f64>, email: Option<&str>, cadence: Option<&str>) -> DonationPayload {
        DonationPayload {
            amount,
            email: email.map(str::to_string),
            cadence: cadence.map(str::to_string),
            return_url: None,
            locale: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let request = validate(payload(Some(10.0), Some("a@b.com"), Some("one-time"))).unwrap();
        assert_eq!(request.amount, 10.0);
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.cadence, Cadence::OneTime);
    }

    #[test]
    fn test_amount_below_minimum_rejected() {
        assert!(matches!(
            validate(payload(Some(0.0), Some("a@b.com"), Some("one-time"))),
            Err(CheckoutError::InvalidAmount)
        ));
        assert!(matches!(
            validate(payload(Some(0.99), Some("a@b.com"), Some("one-time"))),
            Err(CheckoutError::InvalidAmount)
        ));
        assert!(matches!(
            validate(payload(None, Some("a@b.com"), Some("one-time"))),
            Err(CheckoutError::InvalidAmount)
        ));
    }

    #[test]
    fn test_email_without_at_rejected() {
        assert!(matches!(
            validate(payload(Some(5.0), Some("not-an-email"), Some("monthly"))),
            Err(CheckoutError::InvalidEmail)
        ));
        assert!(matches!(
            validate(payload(Some(5.0), None, Some("monthly"))),
            Err(CheckoutError::InvalidEmail)
        ));
    }

    #[test]
    fn test_malformed_email_with_at_passes() {
        // Documented limitation: any `@` is enough at this layer.
        let request = validate(payload(Some(5.0), Some("@"), Some("monthly"))).unwrap();
        assert_eq!(request.email, "@");
    }

    #[test]
    fn test_unknown_cadence_rejected() {
        assert!(matches!(
            validate(payload(Some(5.0), Some("a@b.com"), Some("weekly"))),
            Err(CheckoutError::InvalidCadence(_))
        ));
        assert!(matches!(
            validate(payload(Some(5.0), Some("a@b.com"), None)),
            Err(CheckoutError::InvalidCadence(_))
        ));
    }

    #[test]
    fn test_violation_order_amount_first() {
        // Everything wrong: amount must win.
        assert!(matches!(
            validate(payload(None, None, None)),
            Err(CheckoutError::InvalidAmount)
        ));
        // Amount fine, email and cadence wrong: email wins.
        assert!(matches!(
            validate(payload(Some(2.0), None, None)),
            Err(CheckoutError::InvalidEmail)
        ));
    }

    #[test]
    fn test_empty_body_degrades_to_invalid_amount() {
        assert!(matches!(
            validate(DonationPayload::default()),
            Err(CheckoutError::InvalidAmount)
        ));
    }
}
