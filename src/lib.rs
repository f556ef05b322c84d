//! An async client SDK for a vendor SMS REST API.
//!
//! The crate has two halves: immutable message value objects
//! ([`messages::Message`] and its constructors for text, unicode, binary, and
//! WAP push shapes) and a small submission client
//! ([`client::DefaultClient`]) that serializes a message into form
//! parameters, POSTs it with account credentials, and parses the vendor's
//! JSON reply into typed per-part results.
//!
//! # Examples
//!
//! ## Sending a unicode message
//!
//! ```rust,no_run
//! use smsrest::client::{ClientBuilder, SmsSubmitter};
//! use smsrest::messages::Message;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::quick_client(
//!         "https://rest.example.com/sms/json",
//!         "api_key",
//!         "api_secret",
//!     )?;
//!
//!     let message = Message::unicode("AcmeAlerts", "447700900001", "こんにちは")?;
//!     let response = client.submit(&message).await?;
//!
//!     if response.all_succeeded() {
//!         for id in response.message_ids() {
//!             println!("accepted part {id}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Building a message with the full parameter set
//!
//! ```rust
//! use smsrest::messages::Message;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let message = Message::builder()
//!     .from("AcmeAlerts")
//!     .to("447700900001")
//!     .wap_push("https://example.com/promo", "This week's offers")
//!     .validity(86400)
//!     .client_reference("campaign-7")
//!     .with_delivery_report()
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod messages;
pub mod params;
pub mod response;

#[cfg(test)]
mod tests;

// Re-export the encoding trait for direct access
pub use params::{Param, ToParams};

// Re-export the main message and client API for easy access
pub use client::{
    ApiCredentials, ClientBuilder, ClientOptions, DefaultClient, SmsError, SmsResult, SmsSubmitter,
};
pub use messages::{
    Message, MessageBuilder, MessageClass, MessageContent, MessageError, MessageType,
};
pub use response::{SubmissionResponse, SubmissionResult, SubmitStatus};
