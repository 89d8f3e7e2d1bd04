//! Origin Policy Resolver
//!
//! Computes the set of origins allowed to call the checkout endpoint and
//! classifies request origins against it. The policy is built once at
//! startup from the configured frontend URL and never mutated.

/// Allowed-origin policy, fixed for the process lifetime
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginPolicy {
    /// No frontend URL configured: any origin may call
    Wildcard,
    /// Finite set of canonical allowed origins
    Exact(Vec<String>),
}

/// Classification of a single request origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OriginDecision {
    /// Origin is in the allowed set; echo it back verbatim
    Allowed(String),
    /// Wildcard mode; emit `*`
    Wildcard,
    /// Not allowed; emit no allow-origin header. The request is still
    /// processed (permissive policy) and only the browser-side read of
    /// the response is blocked.
    Disallowed,
}

impl OriginPolicy {
    /// Build the policy from the configured frontend base URL.
    ///
    /// The configured URL is allowed as-is, plus its sibling: the
    /// `www.`-stripped form when the host carries `www.`, the
    /// `www.`-qualified form otherwise. Operators reachable under both
    /// spellings then need to configure only one.
    pub fn from_frontend_url(frontend_url: Option<&str>) -> Self {
        let Some(url) = frontend_url else {
            return OriginPolicy::Wildcard;
        };

        let sibling = if url.contains("www.") {
            url.replacen("www.", "", 1)
        } else {
            url.replacen("https://", "https://www.", 1)
        };

        OriginPolicy::Exact(vec![url.to_string(), sibling])
    }

    /// Membership test, pure over the startup-computed set
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::Wildcard => true,
            OriginPolicy::Exact(origins) => origins.iter().any(|o| o == origin),
        }
    }

    /// Classify the request's `Origin` header value
    pub fn decide(&self, origin: Option<&str>) -> OriginDecision {
        match (self, origin) {
            (OriginPolicy::Exact(origins), Some(o)) if origins.iter().any(|a| a == o) => {
                OriginDecision::Allowed(o.to_string())
            }
            (OriginPolicy::Wildcard, _) => OriginDecision::Wildcard,
            _ => OriginDecision::Disallowed,
        }
    }
}
