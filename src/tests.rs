//! Integration tests covering message construction through form encoding and response parsing

use crate::messages::{Message, MessageClass, MessageContent, MessageType};
use crate::params::ToParams;
use crate::response::{SubmissionResponse, SubmitStatus};

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn params_map(message: &Message) -> Vec<(&'static str, String)> {
        message.to_params()
    }

    fn value_of<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn unicode_message_end_to_end() {
        let message = Message::builder()
            .from("AcmeAlerts")
            .to("+447700900001")
            .unicode_text("Привет, мир")
            .client_reference("batch-12")
            .with_delivery_report()
            .message_class(MessageClass::Flash)
            .protocol_id(0)
            .build()
            .unwrap();

        assert_eq!(message.message_type(), MessageType::Unicode);
        assert!(message.is_unicode());

        let params = params_map(&message);
        assert_eq!(value_of(&params, "from"), Some("AcmeAlerts"));
        assert_eq!(value_of(&params, "to"), Some("+447700900001"));
        assert_eq!(value_of(&params, "type"), Some("unicode"));
        assert_eq!(value_of(&params, "text"), Some("Привет, мир"));
        assert_eq!(value_of(&params, "client-ref"), Some("batch-12"));
        assert_eq!(value_of(&params, "status-report-req"), Some("1"));
        assert_eq!(value_of(&params, "message-class"), Some("0"));
        assert_eq!(value_of(&params, "protocol-id"), Some("0"));
    }

    #[test]
    fn wap_push_minimal_end_to_end() {
        let message =
            Message::wap_push("12345", "447700900001", "https://example.com/w", "Weather")
                .unwrap();

        // Minimal constructor leaves validity at the vendor default and no report
        assert!(!message.status_report_required());
        match message.content() {
            MessageContent::WapPush { validity, .. } => assert_eq!(*validity, 0),
            other => panic!("unexpected content: {other:?}"),
        }

        let params = params_map(&message);
        assert_eq!(value_of(&params, "type"), Some("wappush"));
        assert_eq!(value_of(&params, "url"), Some("https://example.com/w"));
        assert_eq!(value_of(&params, "title"), Some("Weather"));
        assert_eq!(value_of(&params, "validity"), None);
        assert_eq!(value_of(&params, "status-report-req"), None);
    }

    #[test]
    fn binary_message_end_to_end() {
        let udh = vec![0x06, 0x05, 0x04, 0x15, 0x81, 0x00, 0x00];
        let body = vec![0x01, 0x06, 0x2C, 0x1F, 0x2A];
        let message = Message::builder()
            .from("12345")
            .to("447700900001")
            .binary(body, udh)
            .client_reference("ota-cfg-1")
            .build()
            .unwrap();

        let params = params_map(&message);
        assert_eq!(value_of(&params, "type"), Some("binary"));
        assert_eq!(value_of(&params, "body"), Some("01062c1f2a"));
        assert_eq!(value_of(&params, "udh"), Some("06050415810000"));
        assert_eq!(value_of(&params, "client-ref"), Some("ota-cfg-1"));
    }

    #[test]
    fn submission_response_for_partial_failure() {
        let json = r#"{
            "message-count": "2",
            "messages": [
                {
                    "to": "447700900001",
                    "message-id": "0B00000045BF2D01",
                    "status": "0",
                    "remaining-balance": "11.50",
                    "message-price": "0.04",
                    "network": "23420",
                    "client-ref": "batch-12"
                },
                {
                    "to": "447700900001",
                    "status": "9",
                    "error-text": "Quota Exceeded"
                }
            ]
        }"#;

        let response = SubmissionResponse::from_json(json).unwrap();

        assert_eq!(response.message_count, 2);
        assert!(!response.all_succeeded());

        let accepted = &response.messages[0];
        assert_eq!(accepted.status, SubmitStatus::Ok);
        assert_eq!(accepted.client_ref.as_deref(), Some("batch-12"));

        let rejected = &response.messages[1];
        assert_eq!(rejected.status, SubmitStatus::PartnerQuotaExceeded);
        assert!(!rejected.status.is_temporary());
        assert_eq!(rejected.error_text.as_deref(), Some("Quota Exceeded"));

        assert_eq!(
            response.message_ids().collect::<Vec<_>>(),
            vec!["0B00000045BF2D01"]
        );
    }

    #[test]
    fn constructors_share_base_validation() {
        // The same sender rules apply regardless of content shape
        for result in [
            Message::text("this sender is too long", "447700900001", "hi").err(),
            Message::unicode("this sender is too long", "447700900001", "hi").err(),
            Message::wap_push(
                "this sender is too long",
                "447700900001",
                "https://example.com",
                "t",
            )
            .err(),
        ] {
            assert!(result.is_some());
        }
    }
}
