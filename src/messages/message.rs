// ABOUTME: The Message value object submitted to the REST endpoint, with constructor-time validation
// ABOUTME: Convenience constructors cover each wire shape; the builder exposes the full parameter set

use crate::messages::address::{AddressError, Recipient, SenderId};
use crate::messages::builder::MessageBuilder;
use crate::messages::content::{MAX_BINARY_LEN, MessageContent, MessageType, fits_gsm_alphabet};
use crate::messages::message_class::MessageClass;
use bytes::Bytes;

/// Maximum length of a client reference accepted by the endpoint.
pub const MAX_CLIENT_REF_LEN: usize = 40;

/// An outbound message request.
///
/// Constructed once, immutable, serialized into form parameters by the
/// submission client, then discarded. All field validation happens at
/// construction; a `Message` that exists is submittable.
///
/// The four convenience constructors ([`Message::text`], [`Message::unicode`],
/// [`Message::binary`], [`Message::wap_push`]) cover the minimal parameter
/// sets; use [`Message::builder`] for client references, delivery reports,
/// message class and protocol id.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub(crate) from: SenderId,
    pub(crate) to: Recipient,
    pub(crate) content: MessageContent,
    pub(crate) client_reference: Option<String>,
    pub(crate) status_report_required: bool,
    pub(crate) message_class: Option<MessageClass>,
    pub(crate) protocol_id: Option<u8>,
}

impl Message {
    /// Creates a plain text message in the GSM 7-bit alphabet.
    ///
    /// Fails if the body contains characters the GSM alphabet cannot carry;
    /// such bodies must be sent with [`Message::unicode`] instead.
    pub fn text(
        from: &str,
        to: &str,
        body: impl Into<String>,
    ) -> Result<Self, MessageError> {
        Self::with_content(
            from,
            to,
            MessageContent::Text {
                body: body.into(),
                unicode: false,
            },
        )
    }

    /// Creates a unicode text message.
    ///
    /// The body is submitted as UCS-2, so any text a handset can render is
    /// accepted. Note that a single unicode SMS carries at most 70 characters
    /// before the vendor splits it into parts.
    pub fn unicode(
        from: &str,
        to: &str,
        body: impl Into<String>,
    ) -> Result<Self, MessageError> {
        Self::with_content(
            from,
            to,
            MessageContent::Text {
                body: body.into(),
                unicode: true,
            },
        )
    }

    /// Creates a binary message from a raw payload and user-data header.
    pub fn binary(
        from: &str,
        to: &str,
        body: impl Into<Bytes>,
        udh: impl Into<Bytes>,
    ) -> Result<Self, MessageError> {
        Self::with_content(
            from,
            to,
            MessageContent::Binary {
                body: body.into(),
                udh: udh.into(),
            },
        )
    }

    /// Creates a WAP push message carrying a browsable URL and title.
    ///
    /// The report flag defaults to false and the validity to 0 (vendor
    /// default lifetime); use the builder to set either.
    pub fn wap_push(
        from: &str,
        to: &str,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, MessageError> {
        Self::with_content(
            from,
            to,
            MessageContent::WapPush {
                url: url.into(),
                title: title.into(),
                validity: 0,
            },
        )
    }

    /// Creates a builder exposing the full parameter set.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    pub(crate) fn with_content(
        from: &str,
        to: &str,
        content: MessageContent,
    ) -> Result<Self, MessageError> {
        validate_content(&content)?;
        Ok(Self {
            from: SenderId::new(from)?,
            to: Recipient::new(to)?,
            content,
            client_reference: None,
            status_report_required: false,
            message_class: None,
            protocol_id: None,
        })
    }

    /// Returns the sender id.
    pub fn from(&self) -> &SenderId {
        &self.from
    }

    /// Returns the recipient number.
    pub fn to(&self) -> &Recipient {
        &self.to
    }

    /// Returns the message content.
    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    /// Returns the wire type tag derived from the content shape.
    pub fn message_type(&self) -> MessageType {
        self.content.message_type()
    }

    /// Returns true if the message is submitted with UCS-2 encoding.
    pub fn is_unicode(&self) -> bool {
        self.content.is_unicode()
    }

    /// Returns the client reference, if one was set.
    pub fn client_reference(&self) -> Option<&str> {
        self.client_reference.as_deref()
    }

    /// Returns true if a delivery report was requested for this message.
    pub fn status_report_required(&self) -> bool {
        self.status_report_required
    }

    /// Returns the message class, if one was set.
    pub fn message_class(&self) -> Option<MessageClass> {
        self.message_class
    }

    /// Returns the GSM protocol id, if one was set.
    pub fn protocol_id(&self) -> Option<u8> {
        self.protocol_id
    }
}

pub(crate) fn validate_content(content: &MessageContent) -> Result<(), MessageError> {
    match content {
        MessageContent::Text { body, unicode } => {
            if body.is_empty() {
                return Err(MessageError::EmptyBody);
            }
            if !unicode && !fits_gsm_alphabet(body) {
                return Err(MessageError::NotGsmCompatible);
            }
        }
        MessageContent::Binary { body, udh } => {
            if body.is_empty() {
                return Err(MessageError::EmptyBody);
            }
            let total = body.len() + udh.len();
            if total > MAX_BINARY_LEN {
                return Err(MessageError::BinaryTooLong {
                    actual: total,
                    max: MAX_BINARY_LEN,
                });
            }
        }
        MessageContent::WapPush { url, title, .. } => {
            if url.is_empty() {
                return Err(MessageError::EmptyField("url"));
            }
            if title.is_empty() {
                return Err(MessageError::EmptyField("title"));
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_client_reference(reference: &str) -> Result<(), MessageError> {
    if reference.len() > MAX_CLIENT_REF_LEN {
        return Err(MessageError::ClientReferenceTooLong {
            actual: reference.len(),
            max: MAX_CLIENT_REF_LEN,
        });
    }
    Ok(())
}

/// Errors that reject a message at construction time
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("message body must not be empty")]
    EmptyBody,

    #[error("text contains characters outside the GSM alphabet; submit it as a unicode message")]
    NotGsmCompatible,

    #[error("binary payload of {actual} octets exceeds the {max}-octet single-SMS limit")]
    BinaryTooLong { actual: usize, max: usize },

    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("client reference of {actual} characters exceeds maximum of {max}")]
    ClientReferenceTooLong { actual: usize, max: usize },

    #[error("message is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("validity applies only to wap-push messages")]
    ValidityNotApplicable,
}
