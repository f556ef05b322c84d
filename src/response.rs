// ABOUTME: Typed model of the vendor's JSON submission response
// ABOUTME: One result per delivered SMS part, with the numeric status codes the endpoint documents

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use std::fmt;

/// Per-part result code returned by the endpoint.
///
/// A code is returned for every part the vendor split the message into; 0 is
/// success and everything else names the rejection. Codes this crate does not
/// know yet are preserved in [`SubmitStatus::Unknown`] rather than dropped.
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SubmitStatus {
    /// Message accepted for delivery
    Ok = 0,

    /// Sending faster than the account's allowed throughput
    Throttled = 1,

    /// A required parameter was absent
    MissingParams = 2,

    /// A parameter value was unusable
    InvalidParams = 3,

    /// The api key / secret pair was not accepted
    InvalidCredentials = 4,

    /// The vendor platform failed processing the request
    InternalError = 5,

    /// The platform could not construct a deliverable message
    InvalidMessage = 6,

    /// The recipient number is blacklisted
    NumberBarred = 7,

    /// The account has been barred from sending
    PartnerAccountBarred = 8,

    /// The account balance does not cover the message
    PartnerQuotaExceeded = 9,

    /// The account is not provisioned for the REST API
    RestNotEnabled = 11,

    /// The message body exceeds the maximum concatenated length
    MessageTooLong = 12,

    /// Downstream communication with the carrier failed
    CommunicationFailed = 13,

    /// The request signature did not verify
    InvalidSignature = 14,

    /// The sender address is not permitted for this account or destination
    IllegalSenderAddress = 15,

    /// The requested time-to-live was out of range
    InvalidTtl = 16,

    /// The requested facility is not enabled on this account
    FacilityNotAllowed = 19,

    /// The requested message class was rejected
    InvalidMessageClass = 20,

    /// A code this crate does not recognize, preserved verbatim
    #[num_enum(catch_all)]
    Unknown(u16),
}

impl SubmitStatus {
    /// Returns true if the part was accepted for delivery.
    pub fn is_success(self) -> bool {
        self == SubmitStatus::Ok
    }

    /// Returns true for conditions the vendor documents as transient.
    ///
    /// The caller owns any resubmission decision; this crate does not retry.
    pub fn is_temporary(self) -> bool {
        matches!(
            self,
            SubmitStatus::Throttled | SubmitStatus::InternalError | SubmitStatus::CommunicationFailed
        )
    }

    /// Returns the numeric code as sent by the endpoint.
    pub fn code(self) -> u16 {
        self.into()
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Unknown(code) => write!(f, "unknown status {code}"),
            other => write!(f, "{:?} ({})", other, other.code()),
        }
    }
}

/// The result for a single SMS part.
///
/// Long bodies are split by the vendor; each part gets its own result with
/// its own message id and price. Optional fields are absent on rejected
/// parts (and `error_text` on accepted ones).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionResult {
    /// Outcome code for this part
    #[serde(deserialize_with = "status_code")]
    pub status: SubmitStatus,

    /// Vendor-assigned id for the part, present on success
    #[serde(rename = "message-id", default)]
    pub message_id: Option<String>,

    /// The recipient number the part was routed to
    #[serde(default)]
    pub to: Option<String>,

    /// The client reference echoed back, when one was submitted
    #[serde(rename = "client-ref", default)]
    pub client_ref: Option<String>,

    /// Account balance after this part, as the vendor's decimal string
    #[serde(rename = "remaining-balance", default)]
    pub remaining_balance: Option<String>,

    /// Price charged for this part, as the vendor's decimal string
    #[serde(rename = "message-price", default)]
    pub message_price: Option<String>,

    /// Carrier network code the part was routed through
    #[serde(default)]
    pub network: Option<String>,

    /// Vendor explanation, present on rejected parts
    #[serde(rename = "error-text", default)]
    pub error_text: Option<String>,
}

impl SubmissionResult {
    /// Returns true if this part was accepted for delivery.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// The full response to one submission request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionResponse {
    /// Number of SMS parts the message was split into
    #[serde(rename = "message-count", deserialize_with = "count")]
    pub message_count: usize,

    /// One result per part, in delivery order
    pub messages: Vec<SubmissionResult>,
}

impl SubmissionResponse {
    /// Parses a response from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns true if every part was accepted for delivery.
    pub fn all_succeeded(&self) -> bool {
        self.messages.iter().all(SubmissionResult::is_success)
    }

    /// Returns the vendor message ids of the accepted parts.
    pub fn message_ids(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter_map(|result| result.message_id.as_deref())
    }
}

// The endpoint stringifies its numbers ("status": "0"); accept both forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(u64),
    Text(String),
}

impl NumberRepr {
    fn into_u64<E: DeError>(self, field: &str) -> Result<u64, E> {
        match self {
            NumberRepr::Number(value) => Ok(value),
            NumberRepr::Text(text) => text
                .parse()
                .map_err(|_| E::custom(format!("non-numeric {field}: {text:?}"))),
        }
    }
}

fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SubmitStatus, D::Error> {
    let raw = NumberRepr::deserialize(deserializer)?.into_u64::<D::Error>("status")?;
    let code = u16::try_from(raw)
        .map_err(|_| D::Error::custom(format!("status code {raw} out of range")))?;
    Ok(SubmitStatus::from(code))
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let raw = NumberRepr::deserialize(deserializer)?.into_u64::<D::Error>("message-count")?;
    usize::try_from(raw)
        .map_err(|_| D::Error::custom(format!("message count {raw} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_two_part_response() {
        let json = r#"{
            "message-count": "2",
            "messages": [
                {
                    "to": "447700900001",
                    "message-id": "0A0000000123ABCD1",
                    "status": "0",
                    "remaining-balance": "3.14159",
                    "message-price": "0.03330000",
                    "network": "23410"
                },
                {
                    "to": "447700900001",
                    "message-id": "0A0000000123ABCD2",
                    "status": "0",
                    "remaining-balance": "3.10829",
                    "message-price": "0.03330000",
                    "network": "23410"
                }
            ]
        }"#;

        let response = SubmissionResponse::from_json(json).unwrap();

        assert_eq!(response.message_count, 2);
        assert_eq!(response.messages.len(), 2);
        assert!(response.all_succeeded());
        assert_eq!(
            response.message_ids().collect::<Vec<_>>(),
            vec!["0A0000000123ABCD1", "0A0000000123ABCD2"]
        );
        assert_eq!(
            response.messages[0].remaining_balance.as_deref(),
            Some("3.14159")
        );
    }

    #[test]
    fn parses_rejected_part_with_error_text() {
        let json = r#"{
            "message-count": "1",
            "messages": [
                { "status": "4", "error-text": "Bad Credentials" }
            ]
        }"#;

        let response = SubmissionResponse::from_json(json).unwrap();
        let result = &response.messages[0];

        assert!(!response.all_succeeded());
        assert_eq!(result.status, SubmitStatus::InvalidCredentials);
        assert_eq!(result.error_text.as_deref(), Some("Bad Credentials"));
        assert_eq!(result.message_id, None);
        assert_eq!(response.message_ids().count(), 0);
    }

    #[test]
    fn unknown_status_codes_are_preserved() {
        let json = r#"{
            "message-count": "1",
            "messages": [ { "status": "42" } ]
        }"#;

        let response = SubmissionResponse::from_json(json).unwrap();
        assert_eq!(response.messages[0].status, SubmitStatus::Unknown(42));
        assert_eq!(response.messages[0].status.code(), 42);
    }

    #[test]
    fn accepts_bare_numeric_fields() {
        let json = r#"{
            "message-count": 1,
            "messages": [ { "status": 1 } ]
        }"#;

        let response = SubmissionResponse::from_json(json).unwrap();
        assert_eq!(response.message_count, 1);
        assert_eq!(response.messages[0].status, SubmitStatus::Throttled);
        assert!(response.messages[0].status.is_temporary());
    }

    #[test]
    fn rejects_non_numeric_status() {
        let json = r#"{
            "message-count": "1",
            "messages": [ { "status": "accepted" } ]
        }"#;

        assert!(SubmissionResponse::from_json(json).is_err());
    }

    #[test]
    fn status_roundtrip_through_code() {
        for code in [0u16, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 19, 20] {
            let status = SubmitStatus::from(code);
            assert_ne!(status, SubmitStatus::Unknown(code));
            assert_eq!(status.code(), code);
        }
        // Gaps in the code space are unknown, not misassigned
        assert_eq!(SubmitStatus::from(10u16), SubmitStatus::Unknown(10));
        assert_eq!(SubmitStatus::from(17u16), SubmitStatus::Unknown(17));
    }

    #[test]
    fn success_and_temporary_predicates() {
        assert!(SubmitStatus::Ok.is_success());
        assert!(!SubmitStatus::Ok.is_temporary());
        assert!(!SubmitStatus::NumberBarred.is_success());
        assert!(SubmitStatus::CommunicationFailed.is_temporary());
        assert!(!SubmitStatus::Unknown(99).is_success());
    }
}
