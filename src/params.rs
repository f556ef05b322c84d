// ABOUTME: Form-parameter encoding, separated from the domain models like a wire codec
// ABOUTME: Turns a Message into the ordered urlencoded pairs the REST endpoint accepts

use crate::messages::{Message, MessageContent};

/// A single form parameter as a name/value pair.
pub type Param = (&'static str, String);

/// Types that serialize themselves into REST form parameters.
///
/// Implementations emit only parameters that carry a value; unset optionals
/// are omitted entirely rather than sent empty.
pub trait ToParams {
    fn to_params(&self) -> Vec<Param>;
}

impl ToParams for Message {
    fn to_params(&self) -> Vec<Param> {
        let mut params: Vec<Param> = Vec::with_capacity(8);

        params.push(("from", self.from().as_str().to_string()));
        params.push(("to", self.to().as_str().to_string()));
        params.push(("type", self.message_type().as_param().to_string()));

        match self.content() {
            MessageContent::Text { body, .. } => {
                params.push(("text", body.clone()));
            }
            MessageContent::Binary { body, udh } => {
                params.push(("body", hex::encode(body)));
                params.push(("udh", hex::encode(udh)));
            }
            MessageContent::WapPush {
                url,
                title,
                validity,
            } => {
                params.push(("url", url.clone()));
                params.push(("title", title.clone()));
                // 0 means the vendor default lifetime
                if *validity > 0 {
                    params.push(("validity", validity.to_string()));
                }
            }
        }

        if self.status_report_required() {
            params.push(("status-report-req", "1".to_string()));
        }
        if let Some(reference) = self.client_reference() {
            params.push(("client-ref", reference.to_string()));
        }
        if let Some(class) = self.message_class() {
            params.push(("message-class", class.value().to_string()));
        }
        if let Some(protocol_id) = self.protocol_id() {
            params.push(("protocol-id", protocol_id.to_string()));
        }

        params
    }
}
