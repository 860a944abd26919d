use thiserror::Error;

/// Errors that can occur when talking to the Identity Platform API
#[derive(Error, Debug)]
pub enum IdentityApiError {
    /// The config read returned a non-success status
    #[error("failed to fetch project config ({status}): {body}")]
    Fetch {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The config update returned a non-success status
    #[error("failed to update project config ({status}): {body}")]
    Update {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Network error occurred during request
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The bearer token cannot be carried in an Authorization header
    #[error("access token is not a valid header value")]
    InvalidToken,
}
