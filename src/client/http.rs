//! Shared HTTP plumbing: client construction, headers, response draining.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::client::pagination;
use crate::error::{OctoidError, Result};

/// User agent sent on every request. GitHub rejects requests without one.
pub const CRATE_USER_AGENT: &str = concat!("octoid/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client every request goes through.
pub(crate) fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
}

/// Headers common to every request.
pub(crate) fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CRATE_USER_AGENT));
    headers
}

/// Base headers plus the `token`-scheme authorization GitHub's REST API
/// expects.
pub(crate) fn token_headers(token: &str) -> HeaderMap {
    let mut headers = base_headers();
    if let Ok(val) = HeaderValue::from_str(&format!("token {token}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Whether GitHub considers the request successful.
pub(crate) fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// One fully-drained response.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
    /// Absolute URL from the `link` header's `rel="next"` entry, if any.
    pub next_url: Option<String>,
}

impl Page {
    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Drain a response into a [`Page`], surfacing non-success statuses as
/// [`OctoidError::RemoteRequestFailed`] with the full body attached.
pub(crate) async fn drain_response(response: reqwest::Response) -> Result<Page> {
    let status = response.status().as_u16();
    let next_url = pagination::next_page_url(response.headers());
    let body = response.bytes().await?.to_vec();

    if !is_success(status) {
        let body = String::from_utf8_lossy(&body).into_owned();
        error!(status, body = %body, "github request failed");
        return Err(OctoidError::remote(status, body));
    }

    Ok(Page {
        status,
        body,
        next_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_and_201_count_as_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(!is_success(204));
        assert!(!is_success(302));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn base_headers_carry_accept_and_user_agent() {
        let headers = base_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), CRATE_USER_AGENT);
    }

    #[test]
    fn token_headers_use_the_token_scheme() {
        let headers = token_headers("gho_abc123");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "token gho_abc123");
        assert!(headers.get(ACCEPT).is_some());
    }

    #[test]
    fn page_json_reports_malformed_bodies() {
        let page = Page {
            status: 200,
            body: b"not json".to_vec(),
            next_url: None,
        };
        let err = page.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, OctoidError::MalformedResponse(_)));
    }
}
