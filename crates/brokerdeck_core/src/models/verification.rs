//! Verification request/response payloads for the filter debugging endpoint.

use super::filter::MessageFilter;
use serde::{Deserialize, Serialize};

/// Local sentinel status used when verification itself failed.
pub const VERIFICATION_ERROR_STATUS: &str = "ERROR";

/// Wire payload sent to the management verification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationRequest<'a> {
    pub message: &'a str,
    #[serde(rename = "messageFilters")]
    pub message_filters: &'a [MessageFilter],
}

/// Verification outcome returned by the management API.
///
/// `status` is opaque to the console beyond the well-known values it styles
/// specially; anything else renders neutrally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub status: String,
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
}

/// Error payload shape returned by the management API on failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
