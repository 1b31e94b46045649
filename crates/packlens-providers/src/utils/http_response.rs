//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from remote model
//! services. These are shared utilities, not ports.

use packlens_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Constructor of the provider-specific error variant
pub type ErrorFactory = fn(String) -> Error;

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by remote providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `error` - Builds the error variant of the calling provider
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        error: ErrorFactory,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            let context = match code {
                401 => "authentication failed".to_string(),
                413 => "image too large".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };
            return Err(error(format!("{provider_name} {context}: {error_text}")));
        }

        response
            .json()
            .await
            .map_err(|e| error(format!("{provider_name} response parse failed: {e}")))
    }

    /// Map a transport failure into the provider error variant
    pub fn request_error(provider_name: &str, e: &reqwest::Error, error: ErrorFactory) -> Error {
        if e.is_timeout() {
            error(format!("{provider_name} request timed out"))
        } else {
            error(format!("{provider_name} HTTP request failed: {e}"))
        }
    }
}
