//! Client configuration (explicit builder or environment).

use bon::Builder;

use crate::error::{OctoidError, Result};

/// Connection parameters for one GitHub instance.
///
/// Immutable for the lifetime of a client. With no `hostname` the client
/// talks to public github.com; with one it talks to a self-hosted
/// (Enterprise) instance, whose API lives under `/api/v3`.
///
/// # Example
/// ```
/// use octoid::config::GithubConfig;
///
/// let config = GithubConfig::builder()
///     .client_id("Iv1.0123456789abcdef")
///     .client_secret("shhh")
///     .build();
/// assert_eq!(config.scheme, "https://");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GithubConfig {
    /// OAuth application client ID.
    pub client_id: String,
    /// OAuth application client secret.
    pub client_secret: String,
    /// Hostname of a self-hosted instance, e.g. `github.example.com`.
    pub hostname: Option<String>,
    /// Scheme prepended to `hostname`; unused without one.
    #[builder(default = "https://".to_owned())]
    pub scheme: String,
}

impl GithubConfig {
    /// Load from environment variables, honoring a `.env` file if present.
    ///
    /// `GITHUB_CLIENT_ID` and `GITHUB_CLIENT_SECRET` are required;
    /// `GITHUB_HOSTNAME` and `GITHUB_SCHEME` are optional.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let client_id = require_env("GITHUB_CLIENT_ID")?;
        let client_secret = require_env("GITHUB_CLIENT_SECRET")?;

        Ok(Self::builder()
            .client_id(client_id)
            .client_secret(client_secret)
            .maybe_hostname(std::env::var("GITHUB_HOSTNAME").ok())
            .maybe_scheme(std::env::var("GITHUB_SCHEME").ok())
            .build())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| OctoidError::Configuration(format!("{name} is not set")))
}
