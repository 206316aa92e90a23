use crate::redirect::error::ValidationError;
use http::StatusCode;

const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];
const TRUE_BOOLEAN_VALUES: [&str; 4] = ["1", "true", "yes", "on"];
const FALSE_BOOLEAN_VALUES: [&str; 4] = ["0", "false", "no", "off"];

pub(crate) const DEFAULT_REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Parse the `status` control flag. Absent means 302.
pub(crate) fn parse_redirect_status(raw: Option<&str>) -> Result<StatusCode, ValidationError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_REDIRECT_STATUS);
    };

    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|code| REDIRECT_STATUS_CODES.contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or(ValidationError::InvalidRedirectStatus)
}

/// Parse a boolean control flag. Absent means `false`; anything outside the
/// recognized token sets is rejected, naming the offending parameter.
pub(crate) fn parse_boolean_flag(
    parameter: &'static str,
    raw: Option<&str>,
) -> Result<bool, ValidationError> {
    let Some(raw) = raw else {
        return Ok(false);
    };

    let normalized = raw.trim().to_lowercase();
    if TRUE_BOOLEAN_VALUES.contains(&normalized.as_str()) {
        return Ok(true);
    }

    if FALSE_BOOLEAN_VALUES.contains(&normalized.as_str()) {
        return Ok(false);
    }

    Err(ValidationError::InvalidBooleanFlag { parameter })
}
