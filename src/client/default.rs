// ABOUTME: Default submission client over reqwest with response validation and tracing
// ABOUTME: Serializes credentials plus message into form parameters and parses the JSON reply

use crate::client::error::{SmsError, SmsResult};
use crate::client::traits::SmsSubmitter;
use crate::client::types::ApiCredentials;
use crate::messages::Message;
use crate::params::ToParams;
use crate::response::SubmissionResponse;
use std::time::Duration;
use tracing::{debug, warn};

/// Request timeout applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default submission client implementation.
///
/// Holds the endpoint URL, account credentials, and a configured HTTP
/// client. Cloning is cheap (the underlying connection handle is shared), so
/// one client can serve many tasks; `submit` takes `&self`.
#[derive(Debug, Clone)]
pub struct DefaultClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: ApiCredentials,
}

impl DefaultClient {
    /// Create a client for the given endpoint with the default timeout.
    pub fn new(endpoint: impl Into<String>, credentials: ApiCredentials) -> SmsResult<Self> {
        Self::with_timeout(endpoint, credentials, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        credentials: ApiCredentials,
        timeout: Duration,
    ) -> SmsResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    /// Returns the endpoint URL this client submits to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SmsSubmitter for DefaultClient {
    async fn submit(&self, message: &Message) -> SmsResult<SubmissionResponse> {
        let mut form = self.credentials.to_params();
        form.extend(message.to_params());

        debug!(
            to = %message.to(),
            message_type = %message.message_type(),
            "submitting message"
        );

        let response = self.http.post(&self.endpoint).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SmsError::HttpStatus(status));
        }

        let body = response.text().await?;
        let parsed = SubmissionResponse::from_json(&body)?;

        if parsed.all_succeeded() {
            debug!(parts = parsed.message_count, "message accepted");
        } else {
            for result in parsed.messages.iter().filter(|r| !r.is_success()) {
                warn!(
                    status = %result.status,
                    error_text = result.error_text.as_deref().unwrap_or(""),
                    "message part rejected"
                );
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_construction_and_endpoint() {
        let client = DefaultClient::new(
            "https://rest.example.com/sms/json",
            ApiCredentials::new("key", "secret"),
        )
        .unwrap();

        assert_eq!(client.endpoint(), "https://rest.example.com/sms/json");
    }

    #[test]
    fn client_is_cloneable_for_task_sharing() {
        let client = DefaultClient::new(
            "https://rest.example.com/sms/json",
            ApiCredentials::new("key", "secret"),
        )
        .unwrap();

        let clone = client.clone();
        assert_eq!(clone.endpoint(), client.endpoint());
    }
}
