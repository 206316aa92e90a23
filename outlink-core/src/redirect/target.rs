use crate::redirect::allowlist::HostAllowlist;
use crate::redirect::error::ValidationError;
use url::Url;

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Validate the raw `target` parameter into an absolute URL.
///
/// Restricting the scheme to http/https blocks `javascript:`, `data:`,
/// `file:` and friends from ever becoming a `Location` header. The host
/// allowlist is consulted before the URL is accepted; the target's own
/// query parameters are preserved as-is.
pub(crate) fn parse_target_url(
    raw_target: Option<&str>,
    allowlist: &HostAllowlist,
) -> Result<Url, ValidationError> {
    let raw_target = raw_target
        .filter(|raw| !raw.is_empty())
        .ok_or(ValidationError::MissingTarget)?;

    let target_url = Url::parse(raw_target).map_err(|_| ValidationError::InvalidTargetUrl)?;

    if !SUPPORTED_SCHEMES.contains(&target_url.scheme()) {
        return Err(ValidationError::UnsupportedTargetScheme);
    }

    let hostname = target_url
        .host_str()
        .ok_or(ValidationError::InvalidTargetUrl)?;

    allowlist.assert_allowed(hostname)?;

    Ok(target_url)
}
