//! Runtime configuration model.
//!
//! The credential path, project and endpoint values are injected
//! configuration rather than embedded constants, so the same binary works
//! across projects and tests can point it at fake servers.

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the service-account key file
    pub credentials_path: String,

    /// Project identifier; defaults to the key file's `project_id`
    pub project_id: Option<String>,

    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for the Identity Platform API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// OAuth scope requested for the access token
    pub scope: String,

    /// Token endpoint override; defaults to the key file's `token_uri`
    pub token_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: "service-account.json".to_string(),
            project_id: None,
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            scope: "https://www.googleapis.com/auth/cloud-platform".to_string(),
            token_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
