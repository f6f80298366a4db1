//! License status taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a license validation.
///
/// Derived solely from the HTTP status the service answered with; see
/// [`LicenseStatus::from_http_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// The license is usable.
    Valid,
    /// The license was rejected (revoked, wrong application, bad HWID).
    Invalid,
    /// The license has expired or payment lapsed.
    Expired,
    /// An IP or HWID cap, or the request rate, was exceeded.
    LimitReached,
    /// No such license.
    NotFound,
    /// The service failed while validating.
    InternalServerError,
}

impl LicenseStatus {
    /// Map an HTTP status code onto a license status.
    ///
    /// Every code not listed below, 2xx included, is `Valid`.
    ///
    /// | HTTP     | Status                |
    /// |----------|-----------------------|
    /// | 400, 404 | `NotFound`            |
    /// | 401      | `Invalid`             |
    /// | 402, 410 | `Expired`             |
    /// | 429      | `LimitReached`        |
    /// | 500      | `InternalServerError` |
    #[must_use]
    pub const fn from_http_status(code: u16) -> Self {
        match code {
            400 | 404 => Self::NotFound,
            401 => Self::Invalid,
            402 | 410 => Self::Expired,
            429 => Self::LimitReached,
            500 => Self::InternalServerError,
            _ => Self::Valid,
        }
    }

    /// Whether the license may be used.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Expired => "expired",
            Self::LimitReached => "limit_reached",
            Self::NotFound => "not_found",
            Self::InternalServerError => "internal_server_error",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_listed_codes() {
        assert_eq!(LicenseStatus::from_http_status(400), LicenseStatus::NotFound);
        assert_eq!(LicenseStatus::from_http_status(404), LicenseStatus::NotFound);
        assert_eq!(LicenseStatus::from_http_status(401), LicenseStatus::Invalid);
        assert_eq!(LicenseStatus::from_http_status(402), LicenseStatus::Expired);
        assert_eq!(LicenseStatus::from_http_status(410), LicenseStatus::Expired);
        assert_eq!(
            LicenseStatus::from_http_status(429),
            LicenseStatus::LimitReached
        );
        assert_eq!(
            LicenseStatus::from_http_status(500),
            LicenseStatus::InternalServerError
        );
    }

    #[test]
    fn unlisted_codes_are_valid() {
        for code in [200, 201, 204, 302, 403, 418, 502, 503] {
            assert_eq!(
                LicenseStatus::from_http_status(code),
                LicenseStatus::Valid,
                "code {code}"
            );
        }
    }

    #[test]
    fn display_matches_serde() {
        for status in [
            LicenseStatus::Valid,
            LicenseStatus::Invalid,
            LicenseStatus::Expired,
            LicenseStatus::LimitReached,
            LicenseStatus::NotFound,
            LicenseStatus::InternalServerError,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
    }

    #[test]
    fn only_valid_is_valid() {
        assert!(LicenseStatus::Valid.is_valid());
        assert!(!LicenseStatus::Expired.is_valid());
        assert!(!LicenseStatus::InternalServerError.is_valid());
    }
}
