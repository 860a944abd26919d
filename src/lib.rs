//! Authdomains - Identity Platform authorized-domain manager
//!
//! A small administrative CLI that ensures a domain is present in a cloud
//! identity project's authorized-domain list, authenticating with a local
//! service-account key file.
//!
//! # Architecture
//!
//! - **Service Layer** (`services`): the idempotent ensure-domain operation
//! - **Infrastructure Layer** (`infrastructure`): credential loading, token
//!   issuance, the Identity Platform HTTP client and configuration
//! - **CLI Layer** (`cli`): command-line interface
//!
//! Control flow is strictly sequential: authenticate, fetch the config,
//! compute the diff, conditionally update, report. Each run is stateless
//! aside from the remote configuration it reads and writes.

pub mod cli;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use infrastructure::auth::{AccessToken, ServiceAccountTokenProvider, TokenError};
pub use infrastructure::config::{Config, ConfigError, ConfigLoader};
pub use infrastructure::credentials::{CredentialError, ServiceAccountKey};
pub use infrastructure::identity::{
    IdentityApiError, IdentityConfig, IdentityPlatformClient, IdentityPlatformClientConfig,
};
pub use services::{AuthorizeError, DomainAuthorizer, EnsureOutcome, ProjectConfigApi};
