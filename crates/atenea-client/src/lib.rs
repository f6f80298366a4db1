//! Atenea Client SDK.
//!
//! Validates software licenses against the Atenea licensing service and
//! reduces the answer to a [`LicenseStatus`].
//!
//! # Example
//!
//! ```no_run
//! use atenea_client::{AteneaClient, ClientConfig, ValidationPayload};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AteneaClient::new(
//!     ClientConfig::new("https://licenses.example.com", "your-api-key").with_timeout_ms(5000),
//! )?;
//!
//! let payload = ValidationPayload::new(
//!     "XXXX-XXXX-XXXX",
//!     "0b6f3c2e-8f4a-4d7b-9c1e-2a3b4c5d6e7f".parse::<atenea_client::ApplicationId>()?,
//! )
//! .with_hwid("machine-fingerprint");
//!
//! let result = client.validate_license(&payload).await?;
//! if !result.is_valid() {
//!     println!("License rejected: {}", result.status);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod envelope;
mod error;

pub use atenea_core::{
    ApplicationId, IdError, License, LicenseStatus, LicenseValidation, ValidationIssue,
    ValidationPayload,
};
pub use client::{AteneaClient, HttpMethod, VALIDATE_ENDPOINT};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS, ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_MS};
pub use envelope::ApiResponse;
pub use error::{ApiError, ApiErrorKind, ConfigError};
