//! HTTP client for the Identity Platform project-config endpoints.

use std::time::Duration;

use reqwest::{header, Client as ReqwestClient, Response};
use tracing::{debug, warn};

use super::error::IdentityApiError;
use super::types::{AuthorizedDomainsPatch, IdentityConfig};
use crate::infrastructure::auth::AccessToken;

/// Configuration for the Identity Platform client
#[derive(Debug, Clone)]
pub struct IdentityPlatformClientConfig {
    /// Base URL for the Identity Platform API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for IdentityPlatformClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the Identity Platform project-config resource.
///
/// Holds a reusable `reqwest` client with the bearer token installed as a
/// default header. Every call is a single blocking-style request with no
/// retry; failures surface immediately.
pub struct IdentityPlatformClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl IdentityPlatformClient {
    pub fn new(
        config: IdentityPlatformClientConfig,
        token: &AccessToken,
    ) -> Result<Self, IdentityApiError> {
        let mut headers = header::HeaderMap::new();
        let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {}", token.secret()))
            .map_err(|_| IdentityApiError::InvalidToken)?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
        })
    }

    fn config_url(&self, project_id: &str) -> String {
        format!("{}/v2/projects/{}/config", self.base_url, project_id)
    }

    /// Fetch the project's current identity configuration.
    pub async fn get_config(&self, project_id: &str) -> Result<IdentityConfig, IdentityApiError> {
        let url = self.config_url(project_id);
        debug!("GET {url}");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = read_error_body(response).await;
            warn!(%status, "config fetch failed");
            return Err(IdentityApiError::Fetch { status, body });
        }

        let config: IdentityConfig = response.json().await?;
        Ok(config)
    }

    /// Replace the `authorizedDomains` field, leaving all others untouched.
    ///
    /// The update mask restricts the PATCH to the single field being
    /// changed; callers pass the full desired list.
    pub async fn update_authorized_domains(
        &self,
        project_id: &str,
        domains: Vec<String>,
    ) -> Result<IdentityConfig, IdentityApiError> {
        let url = self.config_url(project_id);
        debug!("PATCH {url}?updateMask=authorizedDomains");

        let response = self
            .http_client
            .patch(&url)
            .query(&[("updateMask", "authorizedDomains")])
            .json(&AuthorizedDomainsPatch {
                authorized_domains: domains,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            warn!(%status, "config update failed");
            return Err(IdentityApiError::Update { status, body });
        }

        let config: IdentityConfig = response.json().await?;
        Ok(config)
    }
}

async fn read_error_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string())
}
