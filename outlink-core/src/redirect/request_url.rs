use crate::redirect::error::ValidationError;
use crate::redirect::resolver::InboundRequest;
use url::Url;

/// Reconstruct the absolute inbound URL from the request's scheme, `Host`
/// authority and original path+query.
pub(crate) fn parse_request_url(request: &InboundRequest<'_>) -> Result<Url, ValidationError> {
    let authority = request
        .authority
        .filter(|authority| !authority.is_empty())
        .ok_or(ValidationError::MissingHostHeader)?;

    Url::parse(&format!(
        "{}://{}{}",
        request.scheme, authority, request.path_and_query
    ))
    .map_err(|_| ValidationError::InvalidHostHeader)
}
