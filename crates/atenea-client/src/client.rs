//! Atenea HTTP client implementation.

use atenea_core::{LicenseValidation, ValidationPayload};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{self, ApiResponse};
use crate::error::{ApiError, ConfigError};

/// Endpoint that validates a license.
pub const VALIDATE_ENDPOINT: &str = "/api/client";

/// HTTP methods supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// Atenea API client.
///
/// Cheap to clone; clones share the connection pool. Holds no per-call state,
/// so concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct AteneaClient {
    client: Client,
    config: ClientConfig,
}

impl AteneaClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, config })
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validate a license.
    ///
    /// Rejections the service answers with a `data` envelope (not found,
    /// expired, rate limited, ...) are reported through
    /// [`LicenseValidation::status`], not as errors. The shape of `data` never
    /// fails the call; it is returned verbatim in [`LicenseValidation::data`].
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, an undecodable body, a
    /// schema-validation failure, or a body without a `data` envelope.
    pub async fn validate_license(
        &self,
        payload: &ValidationPayload,
    ) -> Result<LicenseValidation, ApiError> {
        let response = self
            .request::<Value, _>(HttpMethod::Post, VALIDATE_ENDPOINT, Some(payload))
            .await?;

        let validation = LicenseValidation::from_response(response.status_code, response.data);
        tracing::debug!(
            http_status = response.status_code,
            status = %validation.status,
            typed = validation.license.is_some(),
            "License validated"
        );

        Ok(validation)
    }

    /// Send one authenticated request and classify the response.
    ///
    /// `endpoint` is appended verbatim to the base URL. The body, if any, is
    /// sent as JSON. The call is bounded by the configured timeout; on expiry
    /// the in-flight request is dropped.
    ///
    /// # Errors
    ///
    /// See [`ApiError`] for the possible failure kinds.
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url(), endpoint);
        tracing::debug!(method = ?method, url = %url, "Sending request");

        let mut request = self
            .client
            .request(method.into(), &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key()))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| self.transport_error(&e))?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let decoded: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(status, error = %e, "Response body is not JSON");
            ApiError::from(e)
        })?;

        tracing::debug!(status, "Received response");
        envelope::classify(status, decoded)
    }

    fn transport_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            let timeout = self.config.timeout();
            tracing::debug!(timeout = ?timeout, "Request timed out");
            let timeout_ms = timeout.as_millis();
            return ApiError::transport(format!("request timed out after {timeout_ms}ms"));
        }

        tracing::debug!(error = %err, "Request failed");
        ApiError::transport(err.to_string())
    }
}
