// ABOUTME: Supporting types for client operations, chiefly the account credential pair
// ABOUTME: Credentials serialize into the leading form parameters of every request

use crate::params::{Param, ToParams};

/// Account credentials for the REST endpoint.
///
/// Every submission carries the api key / secret pair as form parameters;
/// there is no session or bind step.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// Account api key
    pub api_key: String,
    /// Account api secret
    pub api_secret: String,
}

impl ApiCredentials {
    /// Create a new credential pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl ToParams for ApiCredentials {
    fn to_params(&self) -> Vec<Param> {
        vec![
            ("api_key", self.api_key.clone()),
            ("api_secret", self.api_secret.clone()),
        ]
    }
}
