//! Access-token issuance via the OAuth2 JWT-bearer grant.
//!
//! A service-account key cannot call the Identity Platform API directly;
//! it signs a short-lived JWT assertion which the token endpoint exchanges
//! for a scoped bearer token. The token lives only for the duration of one
//! run and is never persisted.

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::credentials::ServiceAccountKey;

/// Assertion lifetime requested from the token endpoint, in seconds.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Errors raised while obtaining an access token
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token endpoint rejected the assertion ({status}): {body}")]
    Exchange {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("network error reaching token endpoint: {0}")]
    Network(#[from] reqwest::Error),
}

/// A scoped, time-limited bearer token.
///
/// The secret is redacted from `Debug` output so it cannot leak through
/// logs or error chains.
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    secret: String,
    #[serde(default)]
    pub expires_in: u64,
}

impl AccessToken {
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.secret.chars().take(8).collect();
        f.debug_struct("AccessToken")
            .field("secret", &format!("{prefix}...[REDACTED]"))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Exchanges a signed service-account assertion for a bearer token.
pub struct ServiceAccountTokenProvider {
    http_client: reqwest::Client,
    scope: String,
}

impl ServiceAccountTokenProvider {
    pub fn new(scope: impl Into<String>, timeout: Duration) -> Result<Self, TokenError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            scope: scope.into(),
        })
    }

    /// Obtain an access token for the given service account.
    ///
    /// `token_url` overrides the key file's `token_uri` when set; tests
    /// point it at a mock server.
    pub async fn fetch_token(
        &self,
        key: &ServiceAccountKey,
        token_url: Option<&str>,
    ) -> Result<AccessToken, TokenError> {
        let token_url = token_url.unwrap_or(&key.token_uri);
        let assertion = self.sign_assertion(key, token_url)?;

        debug!(%token_url, client_email = %key.client_email, "exchanging assertion for access token");

        let response = self
            .http_client
            .post(token_url)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            return Err(TokenError::Exchange { status, body });
        }

        let token: AccessToken = response.json().await?;

        info!(expires_in = token.expires_in, "access token obtained");

        Ok(token)
    }

    fn sign_assertion(&self, key: &ServiceAccountKey, audience: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &key.client_email,
            scope: &self.scope,
            aud: audience,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?;

        Ok(assertion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_key(private_key: &str) -> ServiceAccountKey {
        serde_json::from_value(serde_json::json!({
            "project_id": "demo-project",
            "client_email": "svc@demo-project.iam.gserviceaccount.com",
            "private_key": private_key,
            "token_uri": "https://oauth2.googleapis.com/token"
        }))
        .unwrap()
    }

    #[test]
    fn test_access_token_debug_redacts_secret() {
        let token: AccessToken = serde_json::from_value(serde_json::json!({
            "access_token": "ya29.supersecretvalue",
            "expires_in": 3599
        }))
        .unwrap();

        let rendered = format!("{token:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("[REDACTED]"));
        assert_eq!(token.secret(), "ya29.supersecretvalue");
    }

    #[test]
    fn test_sign_assertion_rejects_invalid_pem() {
        let provider = ServiceAccountTokenProvider::new(
            "https://www.googleapis.com/auth/cloud-platform",
            Duration::from_secs(5),
        )
        .unwrap();

        let key = dummy_key("not a pem");
        let result = provider.sign_assertion(&key, "https://oauth2.googleapis.com/token");
        assert!(matches!(result.unwrap_err(), TokenError::Signing(_)));
    }
}
