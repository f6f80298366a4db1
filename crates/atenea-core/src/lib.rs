//! Core types for the Atenea licensing service.
//!
//! This crate holds the transport-free vocabulary shared by clients:
//!
//! - **Identifiers**: `ApplicationId`
//! - **Requests**: `ValidationPayload`
//! - **Records**: `License`, `LicenseValidation`
//! - **Outcomes**: `LicenseStatus`, derived from the service's HTTP status
//! - **Rejections**: `ValidationIssue`, one entry of a schema-validation failure
//!
//! Nothing here performs I/O; see `atenea-client` for the HTTP side.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;
pub mod issue;
pub mod license;
pub mod payload;
pub mod status;

pub use ids::{ApplicationId, IdError};
pub use issue::ValidationIssue;
pub use license::{License, LicenseValidation};
pub use payload::ValidationPayload;
pub use status::LicenseStatus;
