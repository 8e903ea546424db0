use crate::error::FetchError;
use reqwest::StatusCode;

/// Markers that only appear on bot challenge pages served by CDNs.
const CHALLENGE_MARKERS: [&str; 6] = [
    "cf-browser-verification",
    "cf-captcha-container",
    "cf-challenge",
    "px-captcha",
    "g-recaptcha",
    "h-captcha",
];

/// Map a non-success status to a `FetchError` with a readable reason.
pub(super) fn validate_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    let reason = match status.as_u16() {
        429 => "rate limited",
        403 => "forbidden",
        404 => "not found",
        410 => "gone",
        401 => "unauthorized",
        400 => "bad request",
        _ if status.is_server_error() => "server error",
        _ if status.is_redirection() => "too many redirects",
        _ => "unknown error",
    };
    Err(FetchError::Status {
        status: status.as_u16(),
        reason,
    })
}

/// Statuses a challenge page is served with.
pub(super) fn may_be_challenge(status: StatusCode) -> bool {
    matches!(status.as_u16(), 403 | 429 | 503)
}

/// Marker found in the body of a refused response, if it is a bot challenge.
///
/// Successful responses are never inspected; their content is judged by the
/// locator.
pub(super) fn challenge_marker(body: &str) -> Option<&'static str> {
    let lower = body.to_ascii_lowercase();
    CHALLENGE_MARKERS
        .iter()
        .copied()
        .find(|marker| lower.contains(marker))
}
