//! Redirect URL Resolver
//!
//! Derives the success and cancel URLs the provider redirects back to.
//! The base is never built from untrusted input alone: a request origin
//! is only used when the origin policy vouches for it.

use url::Url;

use crate::error::{CheckoutError, Result};
use crate::origin::OriginPolicy;

/// Provider-side template token, substituted by Stripe at redirect time
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// The derived pair of redirect targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

/// Pick the base URL for redirects.
///
/// An allowed request origin wins, so multi-environment frontends land
/// back where they came from; otherwise the configured frontend URL.
/// Under wildcard mode any present origin serves as base. With neither
/// available this fails closed rather than emitting a malformed base.
pub fn resolve_base(
    policy: &OriginPolicy,
    frontend_url: Option<&str>,
    origin: Option<&str>,
) -> Result<String> {
    match origin {
        Some(o) if policy.allows(o) => Ok(o.to_string()),
        _ => frontend_url
            .map(str::to_string)
            .ok_or(CheckoutError::NoRedirectBase),
    }
}

impl RedirectUrls {
    /// Build both URLs from the resolved base and the caller's optional
    /// return destination. A `return_url` that does not parse as an
    /// absolute URL is ignored in favor of the default cancel page.
    pub fn derive(base: &str, return_url: Option<&str>) -> Self {
        let cancel_url = return_url
            .filter(|u| Url::parse(u).is_ok())
            .map_or_else(|| format!("{base}/donate"), str::to_string);

        Self {
            success_url: format!("{base}/thank-you?session_id={SESSION_ID_PLACEHOLDER}"),
            cancel_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origin_preferred_as_base() {
        let policy = OriginPolicy::from_frontend_url(Some("https://give.org"));
        let base = resolve_base(&policy, Some("https://give.org"), Some("https://www.give.org"));
        assert_eq!(base.unwrap(), "https://www.give.org");
    }

    #[test]
    fn test_disallowed_origin_falls_back_to_frontend_url() {
        let policy = OriginPolicy::from_frontend_url(Some("https://give.org"));
        let base = resolve_base(&policy, Some("https://give.org"), Some("https://evil.org"));
        assert_eq!(base.unwrap(), "https://give.org");
    }

    #[test]
    fn test_wildcard_mode_uses_present_origin() {
        let policy = OriginPolicy::from_frontend_url(None);
        let base = resolve_base(&policy, None, Some("https://dev.local:3000"));
        assert_eq!(base.unwrap(), "https://dev.local:3000");
    }

    #[test]
    fn test_no_base_fails_closed() {
        let policy = OriginPolicy::from_frontend_url(None);
        assert!(matches!(
            resolve_base(&policy, None, None),
            Err(CheckoutError::NoRedirectBase)
        ));
    }

    #[test]
    fn test_success_url_carries_session_placeholder() {
        let urls = RedirectUrls::derive("https://give.org", None);
        assert_eq!(
            urls.success_url,
            "https://give.org/thank-you?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url, "https://give.org/donate");
    }

    #[test]
    fn test_return_url_used_verbatim() {
        let urls = RedirectUrls::derive("https://give.org", Some("https://other.org/custom"));
        assert_eq!(urls.cancel_url, "https://other.org/custom");
    }

    #[test]
    fn test_non_url_return_url_ignored() {
        let urls = RedirectUrls::derive("https://give.org", Some("not a url"));
        assert_eq!(urls.cancel_url, "https://give.org/donate");
    }
}
