use thiserror::Error;

/// Errors surfaced by [`ApiClient`](crate::api::ApiClient).
///
/// Every request failure flattens into one of these variants; nothing else
/// crosses the client boundary. None of them are retried automatically -
/// the caller decides whether to re-issue the call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured request timeout elapsed before the server responded.
    /// The underlying connection is torn down, not left running.
    #[error("Request timeout")]
    Timeout,

    /// Transport failure: DNS, connection refused/reset, TLS.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status. The response body is embedded verbatim,
    /// truncated past 500 bytes.
    #[error("HTTP error! status: {status}, message: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body could not be decoded into the expected
    /// shape, or a request payload that could not be encoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }

    /// True for HTTP 401 responses - the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Result type for all API client operations.
pub type ApiResult<T> = Result<T, ApiError>;
