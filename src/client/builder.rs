// ABOUTME: Client factory and options for easy client creation
// ABOUTME: Quick constructors for the common case, ClientOptions for timeout configuration

use crate::client::default::DefaultClient;
use crate::client::error::SmsResult;
use crate::client::traits::SmsSubmitter;
use crate::client::types::ApiCredentials;
use std::time::Duration;

/// Factory for creating submission clients
///
/// Provides convenient constructors that return the client behind its trait,
/// keeping call sites independent of the concrete implementation.
pub struct ClientBuilder;

impl ClientBuilder {
    /// Create a client for an endpoint with explicit credentials.
    pub fn client(
        endpoint: impl Into<String>,
        credentials: ApiCredentials,
    ) -> SmsResult<impl SmsSubmitter> {
        DefaultClient::new(endpoint, credentials)
    }

    /// Quick client creation with minimal parameters.
    ///
    /// Equivalent to `client(endpoint, ApiCredentials::new(api_key, api_secret))`.
    pub fn quick_client(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> SmsResult<impl SmsSubmitter> {
        DefaultClient::new(endpoint, ApiCredentials::new(api_key, api_secret))
    }
}

/// Builder for clients that need non-default settings.
///
/// Retry and pooling policy are deliberately absent; the only knob is the
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    timeout: Duration,
}

impl ClientOptions {
    /// Create new client options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a client with these options
    pub fn build_client(
        self,
        endpoint: impl Into<String>,
        credentials: ApiCredentials,
    ) -> SmsResult<DefaultClient> {
        DefaultClient::with_timeout(endpoint, credentials, self.timeout)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: crate::client::default::DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_build_client_with_custom_timeout() {
        let client = ClientOptions::new()
            .timeout(Duration::from_secs(5))
            .build_client(
                "https://rest.example.com/sms/json",
                ApiCredentials::new("key", "secret"),
            )
            .unwrap();

        assert_eq!(client.endpoint(), "https://rest.example.com/sms/json");
    }
}
