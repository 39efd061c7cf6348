//! Convenience re-exports for common use.

pub use crate::account::{Account, AccountKind};
pub use crate::client::{AccessToken, GithubClient, IdentitySet};
pub use crate::config::GithubConfig;
pub use crate::endpoint::{Endpoint, EndpointResolver};
pub use crate::error::{OctoidError, Result};
