//! Wire types for the Identity Platform project-config resource.

use serde::{Deserialize, Serialize};

/// A project's identity configuration.
///
/// Only `authorizedDomains` is typed; every other field the API returns is
/// preserved verbatim in `rest` so nothing is lost across a read. The field
/// is optional because some projects expose the list only through the
/// out-of-band console, not this API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_domains: Option<Vec<String>>,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Partial-update body for the masked `authorizedDomains` write.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedDomainsPatch {
    pub authorized_domains: Vec<String>,
}
