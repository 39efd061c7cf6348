//! Error types for octoid.

use thiserror::Error;

/// Primary error type for all octoid operations.
///
/// Nothing here is retried internally: every failure is surfaced to the
/// immediate caller with enough structured context (status code, drained
/// body, provider-reported error text) to log or display without
/// re-fetching.
#[derive(Error, Debug)]
pub enum OctoidError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connection, DNS, TLS, or timeout failure below the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a status other than 200 or 201. The body is
    /// fully drained and carried for diagnostics.
    #[error("Request failed with status {status}: {body}")]
    RemoteRequestFailed { status: u16, body: String },

    /// A 2xx token-exchange response whose JSON payload itself reports an
    /// OAuth error. GitHub signals bad or expired authorization codes this
    /// way, so a 200 status alone does not mean the exchange succeeded.
    #[error("Provider rejected the request: {error}")]
    ProviderRejected {
        error: String,
        description: Option<String>,
    },

    /// A 2xx, non-error response whose JSON does not have the expected
    /// shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A user lookup was requested for a name that resolves as an
    /// organization.
    #[error("Name {0:?} belongs to an organization, not a user")]
    AmbiguousNamePreferOrg(String),

    /// A pagination sweep followed more `next` links than the configured
    /// ceiling allows.
    #[error("Pagination exceeded {limit} pages")]
    PageLimitExceeded { limit: usize },
}

impl OctoidError {
    /// Build a `RemoteRequestFailed` from a drained response.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteRequestFailed {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status carried by this error, if the request reached the
    /// remote at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OctoidError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse(error.to_string())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, OctoidError>;
