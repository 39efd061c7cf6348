//! Logical GitHub endpoints and their URL resolution.

use strum::{Display, EnumString};

use crate::config::GithubConfig;

/// Public API origin.
const GITHUB_API: &str = "https://api.github.com";
/// Public site origin.
const GITHUB_SITE: &str = "https://github.com";
/// API path prefix on self-hosted (Enterprise) instances.
const ENTERPRISE_API_SUFFIX: &str = "/api/v3";

/// The endpoints this client resolves.
///
/// A closed set: there is no "unknown endpoint" case to mis-handle at
/// runtime. Lookup-style endpoints (`Users`, `Orgs`, `Team`) resolve to a
/// prefix the caller appends an encoded name or ID to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
    /// Bare API base, the prefix for ID-relative paths.
    Api,
    /// OAuth code-for-token exchange (site base).
    Token,
    /// User lookup by login name.
    Users,
    /// Organization lookup by login name.
    Orgs,
    /// The authenticated user's profile.
    UserInfo,
    /// The authenticated user's organizations (paginated).
    OrgInfo,
    /// Team lookup by numeric ID.
    Team,
    /// The authenticated user's teams (paginated).
    Teams,
    /// Template for a team's human-navigable profile page (site base).
    TeamProfile,
}

/// Resolves [`Endpoint`]s to absolute URLs for one GitHub instance.
///
/// A pure function of the configuration: with a custom hostname the API
/// base is `<scheme><hostname>/api/v3` and the site base is
/// `<scheme><hostname>`; otherwise the fixed public origins are used.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    api_base: String,
    site_base: String,
}

impl EndpointResolver {
    pub fn new(config: &GithubConfig) -> Self {
        match config.hostname {
            Some(ref hostname) => Self {
                api_base: format!("{}{}{}", config.scheme, hostname, ENTERPRISE_API_SUFFIX),
                site_base: format!("{}{}", config.scheme, hostname),
            },
            None => Self {
                api_base: GITHUB_API.to_string(),
                site_base: GITHUB_SITE.to_string(),
            },
        }
    }

    /// Absolute URL (or URL template, for [`Endpoint::TeamProfile`]) for a
    /// logical endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        match endpoint {
            Endpoint::Api => self.api_base.clone(),
            Endpoint::Token => format!("{}/login/oauth/access_token", self.site_base),
            Endpoint::Users => format!("{}/users/", self.api_base),
            Endpoint::Orgs => format!("{}/orgs/", self.api_base),
            Endpoint::UserInfo => format!("{}/user", self.api_base),
            Endpoint::OrgInfo => format!("{}/user/orgs?per_page=1", self.api_base),
            Endpoint::Team => format!("{}/teams/", self.api_base),
            Endpoint::Teams => format!("{}/user/teams?per_page=100", self.api_base),
            Endpoint::TeamProfile => format!("{}/orgs/{{org}}/teams/{{team}}", self.site_base),
        }
    }

    /// The [`Endpoint::TeamProfile`] template with the organization login
    /// and team slug substituted.
    pub fn team_profile_url(&self, org: &str, team: &str) -> String {
        format!("{}/orgs/{org}/teams/{team}", self.site_base)
    }
}
