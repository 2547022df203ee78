use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failures surfaced by [`ApiClient`](crate::ApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable session: the provider did not finish loading in time, no
    /// user is signed in, or token retrieval came back empty. Raised before
    /// any network I/O happens.
    #[error("not authenticated: {reason}")]
    Unauthenticated { reason: &'static str },

    /// The backend answered with a non-success status.
    #[error("{message}")]
    RequestFailed {
        status: StatusCode,
        message: String,
    },

    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("invalid response body: {source}")]
    ParseFailed {
        #[source]
        source: serde_json::Error,
    },

    /// The request never completed at the transport level.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error payload returned by the backend. `detail` is either a plain message
/// or a validation-style array of `{msg}` objects.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

impl ApiError {
    pub(crate) fn unauthenticated(reason: &'static str) -> Self {
        ApiError::Unauthenticated { reason }
    }

    /// Build a [`RequestFailed`](ApiError::RequestFailed) from a non-success
    /// response body, best effort. A body that does not match the backend's
    /// error shape degrades to `fallback` rather than masking the failure.
    pub(crate) fn from_error_body(status: StatusCode, body: &[u8], fallback: &str) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .and_then(|detail| match detail {
                ErrorDetail::Message(message) => Some(message),
                ErrorDetail::Validation(issues) => {
                    issues.into_iter().next().map(|issue| issue.msg)
                }
            })
            .unwrap_or_else(|| fallback.to_string());

        ApiError::RequestFailed { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(body: &str) -> String {
        ApiError::from_error_body(StatusCode::BAD_REQUEST, body.as_bytes(), "generic failure")
            .to_string()
    }

    #[test]
    fn string_detail_becomes_the_message() {
        assert_eq!(message_of(r#"{"detail":"document not found"}"#), "document not found");
    }

    #[test]
    fn validation_detail_uses_the_first_issue() {
        let body = r#"{"detail":[{"msg":"content is required","loc":["body","content"]},{"msg":"second"}]}"#;
        assert_eq!(message_of(body), "content is required");
    }

    #[test]
    fn empty_validation_array_falls_back() {
        assert_eq!(message_of(r#"{"detail":[]}"#), "generic failure");
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(message_of(r#"{"error":"nope"}"#), "generic failure");
    }

    #[test]
    fn unparseable_body_falls_back() {
        assert_eq!(message_of("<html>502 Bad Gateway</html>"), "generic failure");
    }

    #[test]
    fn display_of_request_failed_is_the_message_alone() {
        let err = ApiError::RequestFailed {
            status: StatusCode::NOT_FOUND,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
    }
}
