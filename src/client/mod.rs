// ABOUTME: Client module providing trait-based submission over the vendor REST endpoint
// ABOUTME: Exports the submitter trait, factory, options, error types, and default implementation

//! Submission client module
//!
//! This module provides a trait-based submission client with the following
//! features:
//!
//! * **Native async traits** - Uses Rust 1.75+ async fn in traits (no async_trait dependency)
//! * **One seam** - [`SmsSubmitter`] is the only surface callers depend on
//! * **Builder patterns** - Easy client creation with sensible defaults
//! * **No hidden policy** - No retries, pooling, or batching; one request per submit
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smsrest::client::{ClientBuilder, SmsSubmitter};
//! use smsrest::messages::Message;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientBuilder::quick_client(
//!     "https://rest.example.com/sms/json",
//!     "api_key",
//!     "api_secret",
//! )?;
//!
//! let message = Message::text("AcmeAlerts", "447700900001", "Hello!")?;
//! let response = client.submit(&message).await?;
//!
//! for result in &response.messages {
//!     println!("part {:?}: {}", result.message_id, result.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuring the client
//!
//! ```rust,no_run
//! # use smsrest::client::{ApiCredentials, ClientOptions};
//! # use std::time::Duration;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientOptions::new()
//!     .timeout(Duration::from_secs(5))
//!     .build_client(
//!         "https://rest.example.com/sms/json",
//!         ApiCredentials::new("api_key", "api_secret"),
//!     )?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod default;
pub mod error;
pub mod traits;
pub mod types;

// Re-export the main types for easy access
pub use builder::{ClientBuilder, ClientOptions};
pub use default::{DEFAULT_TIMEOUT, DefaultClient};
pub use error::{SmsError, SmsResult};
pub use traits::SmsSubmitter;
pub use types::ApiCredentials;
