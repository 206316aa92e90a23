use crate::redirect::allowlist::HostAllowlist;
use crate::redirect::error::ValidationError;
use crate::redirect::flags::{parse_boolean_flag, parse_redirect_status};
use crate::redirect::query::{append_passthrough, first_value};
use crate::redirect::request_url::parse_request_url;
use crate::redirect::target::parse_target_url;
use http::StatusCode;

/// Inbound request metadata, decoupled from the transport session.
/// This makes the resolution core directly testable without a socket.
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    /// Declared protocol of the inbound request, `http` or `https`.
    pub scheme: &'a str,

    /// `Host` header / `:authority`, if the request carried one.
    pub authority: Option<&'a str>,

    /// Exact original path plus query string, e.g. `/redirect?target=...`.
    pub path_and_query: &'a str,
}

/// Outcome of resolving a redirect request. Built once per request,
/// immutable, and consumed by the HTTP layer to pick a response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResult {
    /// Status to use if a redirect is emitted. Defaults to 302.
    pub status: StatusCode,

    /// Whether a HEAD request should itself redirect instead of
    /// answering with a preview.
    pub head_redirect: bool,

    /// Caller-declared intent to hold the redirect until passthrough
    /// parameters arrive.
    pub await_params: bool,

    /// Whether any non-control query key was present inbound.
    pub has_passthrough_params: bool,

    /// Fully resolved destination, merged query included.
    pub redirect_url: String,
}

impl RedirectResult {
    /// The caller asked to wait for passthrough parameters and none came:
    /// answer with a preview instead of a redirect.
    pub fn awaiting_params(&self) -> bool {
        self.await_params && !self.has_passthrough_params
    }
}

/// Resolve an inbound request into a [`RedirectResult`].
///
/// Fails with the first validation error encountered, in a fixed order:
/// host-header presence, target presence/parse/scheme, host allowlist,
/// `status` validity, `head_redirect` validity, `await_params` validity.
pub fn resolve(
    request: &InboundRequest<'_>,
    allowlist: &HostAllowlist,
) -> Result<RedirectResult, ValidationError> {
    let request_url = parse_request_url(request)?;

    let pairs: Vec<(String, String)> = request_url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut target_url = parse_target_url(first_value(&pairs, "target"), allowlist)?;
    let status = parse_redirect_status(first_value(&pairs, "status"))?;
    let head_redirect = parse_boolean_flag("head_redirect", first_value(&pairs, "head_redirect"))?;
    let await_params = parse_boolean_flag("await_params", first_value(&pairs, "await_params"))?;

    let has_passthrough_params = append_passthrough(&mut target_url, &pairs);

    Ok(RedirectResult {
        status,
        head_redirect,
        await_params,
        has_passthrough_params,
        redirect_url: String::from(target_url),
    })
}
