// ABOUTME: Fluent builder exposing the full message parameter set with required-field checks
// ABOUTME: Covers the extended constructor forms: client reference, delivery report, class, protocol id, validity

use crate::messages::content::MessageContent;
use crate::messages::message::{validate_client_reference, Message, MessageError};
use crate::messages::message_class::MessageClass;
use bytes::Bytes;

/// Builder for constructing messages with the full parameter set.
///
/// The minimal constructors on [`Message`] cover the common case; use the
/// builder when a message needs a client reference, a delivery report, a
/// message class, a protocol id, or a WAP push validity period.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    from: Option<String>,
    to: Option<String>,
    content: Option<MessageContent>,
    client_reference: Option<String>,
    status_report_required: bool,
    message_class: Option<MessageClass>,
    protocol_id: Option<u8>,
    validity: Option<u32>,
}

impl MessageBuilder {
    /// Set the sender id shown on the handset
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the recipient phone number
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set a plain GSM-alphabet text body
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.content = Some(MessageContent::Text {
            body: body.into(),
            unicode: false,
        });
        self
    }

    /// Set a UCS-2 text body
    pub fn unicode_text(mut self, body: impl Into<String>) -> Self {
        self.content = Some(MessageContent::Text {
            body: body.into(),
            unicode: true,
        });
        self
    }

    /// Set a binary payload and user-data header
    pub fn binary(mut self, body: impl Into<Bytes>, udh: impl Into<Bytes>) -> Self {
        self.content = Some(MessageContent::Binary {
            body: body.into(),
            udh: udh.into(),
        });
        self
    }

    /// Set a WAP push URL and title
    pub fn wap_push(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.content = Some(MessageContent::WapPush {
            url: url.into(),
            title: title.into(),
            validity: 0,
        });
        self
    }

    /// Attach a caller-defined reference stored with the message for reconciliation
    pub fn client_reference(mut self, reference: impl Into<String>) -> Self {
        self.client_reference = Some(reference.into());
        self
    }

    /// Request a delivery report for this message
    pub fn with_delivery_report(mut self) -> Self {
        self.status_report_required = true;
        self
    }

    /// Set the GSM message class
    pub fn message_class(mut self, class: MessageClass) -> Self {
        self.message_class = Some(class);
        self
    }

    /// Set the GSM protocol id (ordinarily left unset, meaning 0)
    pub fn protocol_id(mut self, protocol_id: u8) -> Self {
        self.protocol_id = Some(protocol_id);
        self
    }

    /// Set how long, in seconds, a pushed link stays available on the handset.
    ///
    /// Only valid together with [`MessageBuilder::wap_push`]; `build` rejects
    /// it for any other content shape.
    pub fn validity(mut self, seconds: u32) -> Self {
        self.validity = Some(seconds);
        self
    }

    /// Build the message, performing the same validation as the minimal constructors
    pub fn build(self) -> Result<Message, MessageError> {
        let from = self.from.ok_or(MessageError::MissingField("from"))?;
        let to = self.to.ok_or(MessageError::MissingField("to"))?;
        let mut content = self.content.ok_or(MessageError::MissingField("body"))?;

        if let Some(seconds) = self.validity {
            match &mut content {
                MessageContent::WapPush { validity, .. } => *validity = seconds,
                _ => return Err(MessageError::ValidityNotApplicable),
            }
        }

        if let Some(reference) = &self.client_reference {
            validate_client_reference(reference)?;
        }

        let mut message = Message::with_content(&from, &to, content)?;
        message.client_reference = self.client_reference;
        message.status_report_required = self.status_report_required;
        message.message_class = self.message_class;
        message.protocol_id = self.protocol_id;
        Ok(message)
    }
}
