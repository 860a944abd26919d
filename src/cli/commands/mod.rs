//! CLI command implementations.

pub mod authorize;
pub mod list;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::infrastructure::auth::ServiceAccountTokenProvider;
use crate::infrastructure::config::Config;
use crate::infrastructure::credentials::ServiceAccountKey;
use crate::infrastructure::identity::{IdentityPlatformClient, IdentityPlatformClientConfig};

/// Resolve credentials, mint a token and build an authenticated client.
///
/// CLI overrides win over file configuration; the project id falls back to
/// the key file's `project_id`.
pub(crate) async fn connect(
    config: &Config,
    credentials_override: Option<&PathBuf>,
    project_override: Option<&str>,
) -> Result<(IdentityPlatformClient, String)> {
    let credentials_path = credentials_override.map_or_else(
        || PathBuf::from(&config.credentials_path),
        Clone::clone,
    );

    let key = ServiceAccountKey::from_file(&credentials_path)
        .context("Failed to load service-account credentials")?;

    let project_id = project_override
        .map(ToString::to_string)
        .or_else(|| config.project_id.clone())
        .unwrap_or_else(|| key.project_id.clone());

    let provider = ServiceAccountTokenProvider::new(
        config.auth.scope.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to build token provider")?;

    let token = provider
        .fetch_token(&key, config.auth.token_url.as_deref())
        .await
        .context("Failed to obtain access token")?;

    let client = IdentityPlatformClient::new(
        IdentityPlatformClientConfig {
            base_url: config.api.base_url.clone(),
            timeout_secs: config.api.timeout_secs,
        },
        &token,
    )
    .context("Failed to build Identity Platform client")?;

    Ok((client, project_id))
}
