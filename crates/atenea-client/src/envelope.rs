//! Response envelope classification.
//!
//! The service wraps every usable answer in `{ "data": ... }`, whatever the
//! HTTP status. Input validation failures come back as
//! `{ "error": { "issues": [...], "name": "ZodError" } }`. Anything else is
//! an error the client cannot interpret.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// A decoded `data` envelope and the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// HTTP status code as reported by the transport.
    pub status_code: u16,
    /// Contents of the `data` property.
    pub data: T,
}

/// Classify a decoded body.
///
/// Checked in order: validation failure (always 400), missing `data`
/// (actual status, whole body), then success.
pub(crate) fn classify<T: DeserializeOwned>(
    status: u16,
    body: Value,
) -> Result<ApiResponse<T>, ApiError> {
    if let Some(issues) = body.get("error").and_then(|error| error.get("issues")) {
        return Err(ApiError::schema_validation(issues.clone()));
    }

    let Value::Object(mut fields) = body else {
        return Err(ApiError::unclassified(status, body));
    };

    let Some(data) = fields.remove("data") else {
        return Err(ApiError::unclassified(status, Value::Object(fields)));
    };

    Ok(ApiResponse {
        status_code: status,
        data: serde_json::from_value(data)?,
    })
}
