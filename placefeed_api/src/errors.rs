//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Every failure mode is reported through this one shape: a numeric code
/// from [`Error::code`], a human-readable message from `Display`, and the
/// underlying cause (when one exists) from `std::error::Error::source`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The call exceeded its configured timeout.
    #[error("request timed out")]
    Timeout,
    /// No response was received (DNS failure, connection refused, abort).
    #[error("network request failed")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-2xx status. Carries a body snippet.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// A response arrived but its body could not be decoded.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
    /// The base URL and path did not combine into a valid URL.
    #[error("invalid request URL")]
    InvalidUrl(#[source] url::ParseError),
}

/// Code reported when no usable response was received at all.
pub const TRANSPORT_FAILURE_CODE: i32 = -1;

/// Code reported for calls that exceeded their timeout.
pub const TIMEOUT_CODE: i32 = 408;

impl Error {
    /// Numeric error code: the HTTP status for rejected responses, 408 for
    /// timeouts, and -1 for everything where no usable response arrived.
    pub fn code(&self) -> i32 {
        match self {
            Error::Timeout => TIMEOUT_CODE,
            Error::Status { status, .. } => i32::from(*status),
            Error::Transport(_) | Error::Decode(_) | Error::InvalidUrl(_) => {
                TRANSPORT_FAILURE_CODE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_code_and_message() {
        let err = Error::Timeout;
        assert_eq!(err.code(), 408);
        assert_eq!(err.to_string(), "request timed out");
    }

    #[test]
    fn status_code_matches_http_status() {
        let err = Error::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.code(), 404);
        assert_eq!(err.to_string(), "request failed with status 404");
    }

    #[test]
    fn decode_failure_reports_transport_code() {
        let source = serde_json::from_str::<i64>("{").unwrap_err();
        let err = Error::Decode(source);
        assert_eq!(err.code(), TRANSPORT_FAILURE_CODE);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_url_reports_transport_code() {
        let source = url::Url::parse("not a url").unwrap_err();
        assert_eq!(Error::InvalidUrl(source).code(), -1);
    }
}
