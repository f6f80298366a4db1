//! Validation request body.

use serde::{Deserialize, Serialize};

use crate::ids::ApplicationId;

/// Identifies which license, application and (optionally) machine to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPayload {
    /// The license key to validate.
    pub license: String,
    /// The application the license is being used with.
    pub application: ApplicationId,
    /// Hardware ID of the calling machine (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hwid: Option<String>,
}

impl ValidationPayload {
    /// Create a payload without a hardware ID.
    #[must_use]
    pub fn new(license: impl Into<String>, application: ApplicationId) -> Self {
        Self {
            license: license.into(),
            application,
            hwid: None,
        }
    }

    /// Attach a hardware ID.
    #[must_use]
    pub fn with_hwid(mut self, hwid: impl Into<String>) -> Self {
        self.hwid = Some(hwid.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP: &str = "0b6f3c2e-8f4a-4d7b-9c1e-2a3b4c5d6e7f";

    #[test]
    fn omits_missing_hwid() {
        let payload = ValidationPayload::new("ABC-123", APP.parse().unwrap());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "license": "ABC-123", "application": APP })
        );
    }

    #[test]
    fn includes_hwid_when_set() {
        let payload = ValidationPayload::new("ABC-123", APP.parse().unwrap()).with_hwid("hw-1");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["hwid"], "hw-1");
    }
}
