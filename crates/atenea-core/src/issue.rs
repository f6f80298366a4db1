//! Schema-validation issues reported by the service.

use serde::{Deserialize, Serialize};

/// One rejected field from the service's input validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Machine-readable issue code (e.g. `invalid_type`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Path to the offending field, outermost first.
    #[serde(default)]
    pub path: Vec<String>,
}
