//! Error taxonomy for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend call produced no result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No session token is stored; no request was sent.
    #[error("authentication required")]
    NotAuthenticated,
    /// The endpoint needs the stored API key and there is none.
    #[error("api key missing")]
    MissingApiKey,
    /// The server answered 401; the session has been cleared.
    #[error("session expired or unauthorized")]
    Unauthorized,
    /// The server could not be reached.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Non-success HTTP status other than 401.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response carried an explicit `error` field or `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// A request of the same kind is still in flight; nothing was sent.
    #[error("a request of this kind is already in flight")]
    Busy,
}

impl ApiError {
    /// Server-provided message, when the failure came with one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }

    /// True for failures already reported to the user by the gateway.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::MissingApiKey | Self::Unauthorized | Self::Network(_) | Self::Decode(_)
        )
    }
}
