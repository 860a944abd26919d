//! Idempotent "ensure domain is authorized" operation.
//!
//! Fetches the project's identity configuration, checks whether the target
//! domain is already in `authorizedDomains`, and appends it with a masked
//! partial update only when absent. Existing entries are never removed or
//! reordered; the target domain is always appended last.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

use crate::infrastructure::identity::{IdentityApiError, IdentityConfig, IdentityPlatformClient};

/// Errors raised by the ensure-domain operation
#[derive(Error, Debug)]
pub enum AuthorizeError {
    #[error("project id must not be empty")]
    EmptyProjectId,

    #[error("domain must not be empty")]
    EmptyDomain,

    /// The config payload has no `authorizedDomains` field; the list may be
    /// managed exclusively through the out-of-band console
    #[error("project config has no authorizedDomains field; it may only be managed through the console")]
    UnsupportedConfig,

    #[error(transparent)]
    Api(#[from] IdentityApiError),
}

/// Outcome of a successful ensure-domain call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The domain was appended and the update committed
    Added { domains: Vec<String> },

    /// The domain was already authorized; no write was performed
    AlreadyPresent { domains: Vec<String> },
}

/// Seam between the authorizer and the HTTP client.
///
/// Lets unit tests drive the operation against an in-memory fake instead
/// of a live endpoint.
#[async_trait]
pub trait ProjectConfigApi {
    async fn get_config(&self, project_id: &str) -> Result<IdentityConfig, IdentityApiError>;

    async fn update_authorized_domains(
        &self,
        project_id: &str,
        domains: Vec<String>,
    ) -> Result<IdentityConfig, IdentityApiError>;
}

#[async_trait]
impl ProjectConfigApi for IdentityPlatformClient {
    async fn get_config(&self, project_id: &str) -> Result<IdentityConfig, IdentityApiError> {
        IdentityPlatformClient::get_config(self, project_id).await
    }

    async fn update_authorized_domains(
        &self,
        project_id: &str,
        domains: Vec<String>,
    ) -> Result<IdentityConfig, IdentityApiError> {
        IdentityPlatformClient::update_authorized_domains(self, project_id, domains).await
    }
}

/// Ensures a domain is present in a project's authorized-domain list.
pub struct DomainAuthorizer<A> {
    api: A,
}

impl<A: ProjectConfigApi> DomainAuthorizer<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Ensure `domain` appears in the project's `authorizedDomains`.
    ///
    /// Issues one read and, only when the domain is absent, one masked
    /// write. Safe to invoke repeatedly: a second call after a successful
    /// `Added` yields `AlreadyPresent`.
    #[instrument(skip(self))]
    pub async fn ensure_domain_authorized(
        &self,
        project_id: &str,
        domain: &str,
    ) -> Result<EnsureOutcome, AuthorizeError> {
        if project_id.is_empty() {
            return Err(AuthorizeError::EmptyProjectId);
        }
        if domain.is_empty() {
            return Err(AuthorizeError::EmptyDomain);
        }

        let config = self.api.get_config(project_id).await?;

        let Some(domains) = config.authorized_domains else {
            return Err(AuthorizeError::UnsupportedConfig);
        };

        if domains.iter().any(|existing| existing == domain) {
            info!(%domain, "domain already authorized");
            return Ok(EnsureOutcome::AlreadyPresent { domains });
        }

        let mut updated = domains;
        updated.push(domain.to_string());

        let committed = self
            .api
            .update_authorized_domains(project_id, updated.clone())
            .await?;

        info!(%domain, "domain added to authorized list");

        // Prefer the list the server committed; fall back to what we sent
        let domains = committed.authorized_domains.unwrap_or(updated);

        Ok(EnsureOutcome::Added { domains })
    }
}
