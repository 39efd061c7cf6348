//! The GitHub client: token exchange, authenticated fetches, pagination,
//! and identity lookups.

pub mod http;
pub(crate) mod pagination;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::account::{Account, AccountKind, RawAccount, RawTeam};
use crate::client::http::Page;
use crate::config::GithubConfig;
use crate::endpoint::{Endpoint, EndpointResolver};
use crate::error::{OctoidError, Result};

/// Request timeout applied unless overridden with
/// [`GithubClient::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pagination ceiling applied unless overridden with
/// [`GithubClient::with_max_pages`].
pub const DEFAULT_MAX_PAGES: usize = 100;

/// An OAuth access token for the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything learned about the caller from one authorization code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitySet {
    pub access_token: AccessToken,
    /// The authenticated user.
    pub user: Account,
    /// The user's organizations and teams.
    pub memberships: Vec<Account>,
}

impl IdentitySet {
    /// The user followed by every membership, as one flat list.
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts = Vec::with_capacity(1 + self.memberships.len());
        accounts.push(self.user.clone());
        accounts.extend(self.memberships.iter().cloned());
        accounts
    }
}

#[derive(Debug, Deserialize)]
struct TokenExchangeReply {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client for one GitHub instance (public or self-hosted).
///
/// # Example
/// ```no_run
/// use octoid::prelude::*;
///
/// # async fn run() -> octoid::Result<()> {
/// let config = GithubConfig::from_env()?;
/// let client = GithubClient::new(config);
/// let identity = client.resolve_identity("the-authorization-code").await?;
/// println!("logged in as {}", identity.user.login);
/// # Ok(())
/// # }
/// ```
pub struct GithubClient {
    http: reqwest::Client,
    config: GithubConfig,
    resolver: EndpointResolver,
    max_pages: usize,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        let resolver = EndpointResolver::new(&config);
        Self {
            http: http::build_http_client(DEFAULT_TIMEOUT),
            config,
            resolver,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = http::build_http_client(timeout);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Exchange an OAuth authorization code for an access token.
    ///
    /// GitHub reports a bad or expired code inside a 200 body, so the
    /// payload's `error` field is checked before the token is accepted.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let url = self.resolver.url(Endpoint::Token);
        debug!(%url, "exchanging authorization code");
        let response = self
            .http
            .post(&url)
            .headers(http::base_headers())
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await?;
        let page = http::drain_response(response).await?;

        let reply: TokenExchangeReply = page.json()?;
        if let Some(err) = reply.error {
            error!(error = %err, "github rejected the authorization code");
            return Err(OctoidError::ProviderRejected {
                error: err,
                description: reply.error_description,
            });
        }
        reply.access_token.map(AccessToken::new).ok_or_else(|| {
            OctoidError::MalformedResponse(
                "token exchange response carried neither a token nor an error".to_string(),
            )
        })
    }

    /// Authenticated GET of one URL, drained into a [`Page`].
    pub async fn get_raw(&self, url: &str, token: &AccessToken) -> Result<Page> {
        debug!(%url, "github GET");
        let response = self
            .http
            .get(url)
            .headers(http::token_headers(token.as_str()))
            .send()
            .await?;
        http::drain_response(response).await
    }

    /// Fetch `url` and every `rel="next"` successor, in order.
    ///
    /// All-or-nothing: a failed page fails the whole sweep. A sweep that
    /// would exceed the page ceiling fails with
    /// [`OctoidError::PageLimitExceeded`] instead of silently truncating.
    pub async fn paginate(&self, url: &str, token: &AccessToken) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut next = Some(url.to_string());
        while let Some(url) = next {
            if pages.len() >= self.max_pages {
                warn!(limit = self.max_pages, %url, "pagination ceiling hit");
                return Err(OctoidError::PageLimitExceeded {
                    limit: self.max_pages,
                });
            }
            let page = self.get_raw(&url, token).await?;
            next = page.next_url.clone();
            pages.push(page);
        }
        Ok(pages)
    }

    /// The authenticated user's profile.
    pub async fn user(&self, token: &AccessToken) -> Result<Account> {
        let url = self.resolver.url(Endpoint::UserInfo);
        let page = self.get_raw(&url, token).await?;
        let raw: RawAccount = page.json()?;
        Ok(raw.into_account(AccountKind::User))
    }

    /// Every organization the authenticated user belongs to.
    pub async fn orgs(&self, token: &AccessToken) -> Result<Vec<Account>> {
        let url = self.resolver.url(Endpoint::OrgInfo);
        let mut orgs = Vec::new();
        for page in self.paginate(&url, token).await? {
            let raw: Vec<RawAccount> = page.json()?;
            orgs.extend(raw.into_iter().map(|r| r.into_account(AccountKind::Org)));
        }
        Ok(orgs)
    }

    /// Every team the authenticated user belongs to.
    pub async fn teams(&self, token: &AccessToken) -> Result<Vec<Account>> {
        let url = self.resolver.url(Endpoint::Teams);
        let mut teams = Vec::new();
        for page in self.paginate(&url, token).await? {
            let raw: Vec<RawTeam> = page.json()?;
            teams.extend(raw.into_iter().map(|t| t.into_account(&self.resolver)));
        }
        Ok(teams)
    }

    /// One team by its numeric ID.
    pub async fn team_by_id(&self, token: &AccessToken, id: u64) -> Result<Account> {
        let url = format!("{}{id}", self.resolver.url(Endpoint::Team));
        let page = self.get_raw(&url, token).await?;
        let raw: RawTeam = page.json()?;
        Ok(raw.into_account(&self.resolver))
    }

    /// One account by its stable numeric ID.
    ///
    /// GitHub serves users and organizations from the same ID-keyed path;
    /// the payload's `type` label decides the kind, defaulting to a user.
    pub async fn account_by_id(&self, token: &AccessToken, id: u64) -> Result<Account> {
        let url = format!("{}/user/{id}", self.resolver.url(Endpoint::Api));
        let page = self.get_raw(&url, token).await?;
        let raw: RawAccount = page.json()?;
        let kind = raw.reported_kind().unwrap_or(AccountKind::User);
        Ok(raw.into_account(kind))
    }

    /// One organization by login name.
    pub async fn org_by_name(&self, token: &AccessToken, name: &str) -> Result<Account> {
        let url = format!(
            "{}{}",
            self.resolver.url(Endpoint::Orgs),
            urlencoding::encode(name)
        );
        let page = self.get_raw(&url, token).await?;
        let raw: RawAccount = page.json()?;
        Ok(raw.into_account(AccountKind::Org))
    }

    /// One user by login name.
    ///
    /// The name is probed as an organization first: GitHub keeps users
    /// and organizations in one namespace, and a name that resolves as an
    /// org fails with [`OctoidError::AmbiguousNamePreferOrg`] rather than
    /// being served as the shadowing user.
    pub async fn user_by_name(&self, token: &AccessToken, name: &str) -> Result<Account> {
        if self.org_by_name(token, name).await.is_ok() {
            return Err(OctoidError::AmbiguousNamePreferOrg(name.to_string()));
        }
        self.fetch_user_by_name(token, name).await
    }

    /// Resolve a bare name to whichever account it denotes, organizations
    /// first.
    pub async fn account_by_name(&self, token: &AccessToken, name: &str) -> Result<Account> {
        match self.org_by_name(token, name).await {
            Ok(org) => Ok(org),
            Err(err) => {
                debug!(name, error = %err, "not an organization, trying user lookup");
                self.fetch_user_by_name(token, name).await
            }
        }
    }

    async fn fetch_user_by_name(&self, token: &AccessToken, name: &str) -> Result<Account> {
        let url = format!(
            "{}{}",
            self.resolver.url(Endpoint::Users),
            urlencoding::encode(name)
        );
        let page = self.get_raw(&url, token).await?;
        let raw: RawAccount = page.json()?;
        Ok(raw.into_account(AccountKind::User))
    }

    /// Full login flow: exchange `code`, then gather the user's profile
    /// and memberships with the resulting token.
    pub async fn resolve_identity(&self, code: &str) -> Result<IdentitySet> {
        let access_token = self.exchange_code(code).await?;
        let user = self.user(&access_token).await?;
        let mut memberships = self.orgs(&access_token).await?;
        memberships.extend(self.teams(&access_token).await?);
        Ok(IdentitySet {
            access_token,
            user,
            memberships,
        })
    }
}
