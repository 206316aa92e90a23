use serde_json::json;
use thiserror::Error;

/// Rejection of an inbound redirect request.
///
/// Every failure in the resolution core is a deterministic function of the
/// request and maps to HTTP 400 at the boundary. Anything else escaping the
/// core is the host layer's problem and becomes a generic 500 there.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Host header is required")]
    MissingHostHeader,

    #[error("Host header is not a valid authority")]
    InvalidHostHeader,

    #[error("Query parameter \"target\" is required")]
    MissingTarget,

    #[error("Query parameter \"target\" must be a valid absolute URL")]
    InvalidTargetUrl,

    #[error("Only \"http\" and \"https\" target URLs are supported")]
    UnsupportedTargetScheme,

    #[error("Redirect host is not allowed")]
    DisallowedHost { hostname: String },

    #[error("Query parameter \"status\" must be one of: 301, 302, 303, 307, 308")]
    InvalidRedirectStatus,

    #[error("Query parameter \"{parameter}\" must be boolean: true/false/1/0")]
    InvalidBooleanFlag { parameter: &'static str },
}

impl ValidationError {
    /// Machine-readable error code reported in response bodies.
    pub fn code(&self) -> &'static str {
        "BAD_REQUEST"
    }

    /// Structured details for clients, when the rejection carries any.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::DisallowedHost { hostname } => Some(json!({ "hostname": hostname })),
            _ => None,
        }
    }
}
