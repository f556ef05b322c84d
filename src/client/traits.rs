// ABOUTME: Client trait seam using native async functions, for swapping out the HTTP implementation
// ABOUTME: Carries a convenience default method for the bare text-message case

use crate::client::error::SmsResult;
use crate::messages::Message;
use crate::response::SubmissionResponse;

/// Message submission operations.
///
/// Implemented by [`DefaultClient`](crate::client::DefaultClient); callers
/// that want to stub out the network in their own tests can implement it
/// over a canned response instead.
pub trait SmsSubmitter {
    /// Submit one message to the endpoint.
    ///
    /// Returns the parsed per-part results. A response whose parts carry
    /// failure statuses is still `Ok`; inspect the results to react to
    /// rejections.
    async fn submit(&self, message: &Message) -> SmsResult<SubmissionResponse>;

    /// Construct and submit a plain text message in one call.
    ///
    /// Equivalent to `submit(&Message::text(from, to, body)?)`.
    async fn send_text(&self, from: &str, to: &str, body: &str) -> SmsResult<SubmissionResponse> {
        let message = Message::text(from, to, body)?;
        self.submit(&message).await
    }
}
