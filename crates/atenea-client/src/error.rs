//! Client error types.

use atenea_core::ValidationIssue;
use serde_json::Value;

/// Message used when a transport failure carries no description.
pub(crate) const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Status reported for every schema-validation failure, whatever the
/// transport status was.
pub(crate) const SCHEMA_VALIDATION_STATUS: u16 = 400;

/// Status reported for transport and decode failures.
pub(crate) const TRANSPORT_STATUS: u16 = 500;

/// Which path produced an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The service rejected the request body. `data` holds the issues array.
    SchemaValidation,
    /// The body had no `data` envelope. `data` holds the whole body.
    UnclassifiedResponse,
    /// Network failure, timeout, or an undecodable body. `data` holds the message.
    Transport,
}

/// Error returned by every client call.
///
/// Domain outcomes such as an expired license are not errors; they come back
/// as a [`LicenseStatus`](atenea_core::LicenseStatus).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API error {status}: {data}")]
pub struct ApiError {
    status: u16,
    data: Value,
    kind: ApiErrorKind,
}

impl ApiError {
    /// Service-side input validation failed. Always status 400.
    #[must_use]
    pub fn schema_validation(issues: Value) -> Self {
        Self {
            status: SCHEMA_VALIDATION_STATUS,
            data: issues,
            kind: ApiErrorKind::SchemaValidation,
        }
    }

    /// The response body had no `data` envelope.
    #[must_use]
    pub fn unclassified(status: u16, body: Value) -> Self {
        Self {
            status,
            data: body,
            kind: ApiErrorKind::UnclassifiedResponse,
        }
    }

    /// The request never produced a usable body. Always status 500.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };

        Self {
            status: TRANSPORT_STATUS,
            data: Value::String(message),
            kind: ApiErrorKind::Transport,
        }
    }

    /// HTTP-like status code of the failure.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Payload carried by the failure.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Consume the error, returning its payload.
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }

    /// Which path produced the error.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Typed view of a schema-validation failure.
    ///
    /// Returns `None` for other kinds, or if the service sent issues in an
    /// unexpected shape.
    #[must_use]
    pub fn issues(&self) -> Option<Vec<ValidationIssue>> {
        if self.kind != ApiErrorKind::SchemaValidation {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(err.to_string())
    }
}

/// Errors building a client or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
