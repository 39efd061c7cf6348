//! Normalized identity entities.
//!
//! GitHub reports users, organizations, and teams with different payload
//! shapes. Everything this crate returns is folded into one [`Account`]
//! type so callers handle a single shape regardless of where an identity
//! came from.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::endpoint::EndpointResolver;

/// What kind of GitHub entity an [`Account`] was normalized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountKind {
    User,
    Org,
    Team,
}

/// One GitHub identity, normalized from a user, organization, or team
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable numeric ID. This is the durable reference; login names can
    /// be reassigned.
    pub id: u64,
    /// Login name for users and organizations, slug for teams.
    pub login: String,
    /// Display name, absent when the entity has none.
    pub name: Option<String>,
    /// Human-navigable profile page.
    pub profile_url: Option<String>,
    /// Avatar image, absent for teams.
    pub avatar_url: Option<String>,
    pub kind: AccountKind,
}

/// Wire shape shared by user and organization payloads.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAccount {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// GitHub labels the entity itself: "User" or "Organization".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RawAccount {
    /// Normalize with the kind fixed by the endpoint that produced the
    /// payload.
    pub(crate) fn into_account(self, kind: AccountKind) -> Account {
        Account {
            id: self.id,
            login: self.login,
            name: self.name,
            profile_url: self.html_url,
            avatar_url: self.avatar_url,
            kind,
        }
    }

    /// The kind the payload labels itself with, when it carries a
    /// recognizable `type` field.
    pub(crate) fn reported_kind(&self) -> Option<AccountKind> {
        match self.kind.as_deref() {
            Some("User") => Some(AccountKind::User),
            Some("Organization") => Some(AccountKind::Org),
            _ => None,
        }
    }
}

/// Wire shape of a team payload.
///
/// Teams carry no `html_url` or avatar; the profile URL is synthesized
/// from the owning organization and the team slug.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTeam {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub organization: Option<RawTeamOrg>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawTeamOrg {
    pub login: String,
}

impl RawTeam {
    pub(crate) fn into_account(self, resolver: &EndpointResolver) -> Account {
        let profile_url = self
            .organization
            .as_ref()
            .map(|org| resolver.team_profile_url(&org.login, &self.slug));
        Account {
            id: self.id,
            login: self.slug,
            name: Some(self.name),
            profile_url,
            avatar_url: None,
            kind: AccountKind::Team,
        }
    }
}
