//! License records as returned by the licensing service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::LicenseStatus;

/// A license record, one activation of a software product.
///
/// The service returns a license-shaped body for rejections too (revoked,
/// expired, rate limited), often with only some fields set. Missing fields
/// fall back to their defaults rather than failing the decode, and a null
/// `createdAt` is kept as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct License {
    /// The license key.
    pub license: String,
    /// Service-side record ID.
    pub id: String,
    /// Owning user.
    pub user: String,
    /// When the license was issued.
    pub created_at: Option<DateTime<Utc>>,
    /// Application the license belongs to.
    pub app_id: String,
    /// Maximum number of distinct IPs (unlimited when `None`).
    pub ip_cap: Option<u64>,
    /// IPs seen so far.
    pub ip_list: Option<Vec<String>>,
    /// Maximum number of distinct hardware IDs (unlimited when `None`).
    pub hwid_cap: Option<u64>,
    /// Hardware IDs seen so far.
    pub hwid_list: Option<Vec<String>>,
    /// Expiry as sent by the service (`None` for perpetual licenses).
    pub expires_at: Option<String>,
}

/// Result of validating a license.
///
/// `data` is exactly what the service placed in its `data` envelope, whatever
/// the status. Rejections frequently carry bodies that are not license
/// records (`null`, a message string), so the typed view is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseValidation {
    /// Raw contents of the service's `data` envelope.
    pub data: Value,
    /// `data` decoded as a license record, if it has that shape.
    pub license: Option<License>,
    /// Status derived from the HTTP status code.
    pub status: LicenseStatus,
}

impl LicenseValidation {
    /// Build a result from the HTTP status and the raw `data` envelope.
    ///
    /// Never fails: a `data` value that is not license-shaped leaves
    /// `license` as `None`.
    #[must_use]
    pub fn from_response(http_status: u16, data: Value) -> Self {
        let license = serde_json::from_value(data.clone()).ok();

        Self {
            data,
            license,
            status: LicenseStatus::from_http_status(http_status),
        }
    }

    /// Whether the license may be used.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserializes_full_record() {
        let license: License = serde_json::from_value(serde_json::json!({
            "license": "ABC-123",
            "id": "1",
            "user": "user_42",
            "createdAt": "2024-05-01T10:00:00Z",
            "appId": "0b6f3c2e-8f4a-4d7b-9c1e-2a3b4c5d6e7f",
            "ipCap": 3,
            "ipList": ["10.0.0.1"],
            "hwidCap": null,
            "hwidList": null,
            "expiresAt": "2025-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(license.license, "ABC-123");
        assert_eq!(license.id, "1");
        assert_eq!(
            license.created_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(license.ip_cap, Some(3));
        assert_eq!(license.ip_list, Some(vec!["10.0.0.1".to_string()]));
        assert_eq!(license.hwid_cap, None);
        assert_eq!(license.expires_at.as_deref(), Some("2025-05-01T10:00:00Z"));
    }

    #[test]
    fn tolerates_partial_record() {
        let license: License =
            serde_json::from_value(serde_json::json!({ "license": "ABC-123" })).unwrap();
        assert_eq!(license.license, "ABC-123");
        assert!(license.id.is_empty());
        assert_eq!(license.ip_list, None);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(License::default()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("hwidList").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn tolerates_null_created_at() {
        let license: License = serde_json::from_value(serde_json::json!({
            "license": "ABC-123",
            "createdAt": null
        }))
        .unwrap();
        assert_eq!(license.created_at, None);
    }

    #[test]
    fn validation_keeps_raw_data_for_non_license_bodies() {
        for data in [
            serde_json::Value::Null,
            serde_json::json!("Unauthorized"),
            serde_json::json!({ "id": 7 }),
        ] {
            let result = LicenseValidation::from_response(401, data.clone());
            assert_eq!(result.status, LicenseStatus::Invalid);
            assert_eq!(result.data, data);
            assert_eq!(result.license, None);
        }
    }

    #[test]
    fn validation_decodes_license_records() {
        let data = serde_json::json!({ "license": "ABC-123", "id": "1" });
        let result = LicenseValidation::from_response(200, data.clone());
        assert!(result.is_valid());
        assert_eq!(result.data, data);
        assert_eq!(result.license.unwrap().id, "1");
    }
}
