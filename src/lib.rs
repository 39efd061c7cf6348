//! Octoid: GitHub identity resolution over OAuth
//!
//! Exchanges an OAuth authorization code for an access token, then walks
//! GitHub's REST API (public github.com or a self-hosted instance) to
//! resolve who the caller is: their profile, their organizations, and
//! their teams, all normalized into one [`account::Account`] shape.
//!
//! # Quick Start
//!
//! ```no_run
//! use octoid::prelude::*;
//!
//! # async fn example() -> octoid::Result<()> {
//! let config = GithubConfig::builder()
//!     .client_id("Iv1.0123456789abcdef")
//!     .client_secret("shhh")
//!     .build();
//! let client = GithubClient::new(config);
//!
//! let identity = client.resolve_identity("the-authorization-code").await?;
//! println!("logged in as {}", identity.user.login);
//! for membership in &identity.memberships {
//!     println!("  member of {} ({})", membership.login, membership.kind);
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod prelude;

pub use crate::error::{OctoidError, Result};
