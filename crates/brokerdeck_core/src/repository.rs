//! Remote filters repository backed by the management REST API.

use crate::config::Config;
use crate::error::ConsoleError;
use crate::models::filter::MessageFilter;
use crate::models::verification::{ApiErrorBody, VerificationRequest, VerificationResponse};
use std::time::Duration;
use tracing::debug;

/// Dry-run evaluation of subscription filters against a sample message.
///
/// Calls block; the GUI only invokes them from its backend worker thread.
/// Trait-object injection lets tests substitute scripted doubles.
pub trait FiltersRepository: Send + Sync {
    /// Ask the management API to evaluate `filters` against `message` on the
    /// given topic.
    fn verify(
        &self,
        topic: &str,
        filters: &[MessageFilter],
        message: &str,
    ) -> Result<VerificationResponse, ConsoleError>;
}

/// [`FiltersRepository`] implementation talking to the management API over
/// HTTP.
pub struct HttpFiltersRepository {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFiltersRepository {
    /// Build a repository for the given management base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConsoleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build a repository from console configuration.
    ///
    /// # Errors
    /// Returns [`ConsoleError::InvalidConfig`] when the management URL is
    /// empty, or an HTTP client construction error.
    pub fn from_config(config: &Config) -> Result<Self, ConsoleError> {
        if config.management_url.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "management URL is empty".to_string(),
            ));
        }
        Self::new(config.management_url.clone(), config.verify_timeout)
    }

    fn verify_url(&self, topic: &str) -> String {
        format!("{}/filters/{}", self.base_url.trim_end_matches('/'), topic)
    }
}

/// Extract a display message from a failed management response body.
///
/// The API reports failures as `{"message": "..."}`; anything else falls back
/// to the raw body, or to the status code when the body is empty.
fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        return payload.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("management API returned status {status}")
    } else {
        trimmed.to_string()
    }
}

impl FiltersRepository for HttpFiltersRepository {
    fn verify(
        &self,
        topic: &str,
        filters: &[MessageFilter],
        message: &str,
    ) -> Result<VerificationResponse, ConsoleError> {
        let url = self.verify_url(topic);
        debug!(topic, filters = filters.len(), url = url.as_str(), "verifying filters");

        let response = self
            .client
            .post(&url)
            .json(&VerificationRequest {
                message,
                message_filters: filters,
            })
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<VerificationResponse>()?);
        }

        let body = response.text().unwrap_or_default();
        Err(ConsoleError::Api {
            status: status.as_u16(),
            message: error_message_from_body(status.as_u16(), &body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{error_message_from_body, HttpFiltersRepository};
    use std::time::Duration;

    #[test]
    fn verify_url_joins_base_and_topic() {
        let repo = HttpFiltersRepository::new("http://broker.internal:8090", Duration::from_secs(5))
            .expect("client");
        assert_eq!(
            repo.verify_url("orders.created"),
            "http://broker.internal:8090/filters/orders.created"
        );
    }

    #[test]
    fn verify_url_tolerates_trailing_slash_in_base() {
        let repo = HttpFiltersRepository::new("http://broker.internal:8090/", Duration::from_secs(5))
            .expect("client");
        assert_eq!(
            repo.verify_url("orders.created"),
            "http://broker.internal:8090/filters/orders.created"
        );
    }

    #[test]
    fn error_message_prefers_the_api_payload() {
        assert_eq!(
            error_message_from_body(400, r#"{"message":"invalid filter syntax"}"#),
            "invalid filter syntax"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body_then_status() {
        assert_eq!(
            error_message_from_body(502, "upstream unavailable"),
            "upstream unavailable"
        );
        assert_eq!(
            error_message_from_body(500, "  "),
            "management API returned status 500"
        );
    }
}
