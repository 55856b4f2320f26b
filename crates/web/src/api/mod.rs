// =============================================================================
// Forsaj Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. API Client
// =============================================================================

pub mod content;

pub use content::*;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Not found")]
    NotFound,
}

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// HTTP client for the content backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        match status {
            200..=299 => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Deserialize(e.to_string())),
            404 => Err(ApiError::NotFound),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Server { status, message })
            }
        }
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("https://api.forsaj.az/");
        assert_eq!(client.base_url(), "https://api.forsaj.az");
        assert_eq!(
            client.url("/api/site-content/termsofservicepage"),
            "https://api.forsaj.az/api/site-content/termsofservicepage"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
        assert_eq!(
            ApiError::Server { status: 502, message: "bad gateway".into() }.to_string(),
            "Server error: 502 - bad gateway"
        );
    }
}
