#![allow(dead_code)]

//! Shared helpers for wiremock-backed client tests.

use octoid::config::GithubConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Config pointing the client at a mock server as a self-hosted instance,
/// so API paths land under `/api/v3` and the token exchange under
/// `/login/oauth/access_token`.
pub fn config_for(server: &MockServer) -> GithubConfig {
    let hostname = server.uri().trim_start_matches("http://").to_string();
    GithubConfig::builder()
        .client_id("client-id")
        .client_secret("client-secret")
        .hostname(hostname)
        .scheme("http://")
        .build()
}

pub fn user_payload(id: u64, login: &str) -> Value {
    json!({
        "id": id,
        "login": login,
        "name": format!("{login} display"),
        "html_url": format!("https://github.example.com/{login}"),
        "avatar_url": format!("https://github.example.com/avatars/{id}"),
        "type": "User"
    })
}

pub fn org_payload(id: u64, login: &str) -> Value {
    json!({
        "id": id,
        "login": login,
        "html_url": format!("https://github.example.com/{login}"),
        "avatar_url": format!("https://github.example.com/avatars/{id}"),
        "type": "Organization"
    })
}

pub fn team_payload(id: u64, slug: &str, org: &str) -> Value {
    json!({
        "id": id,
        "name": format!("{slug} team"),
        "slug": slug,
        "organization": { "login": org }
    })
}
