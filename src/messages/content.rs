// ABOUTME: Tagged message content variants and the wire type tag derived from them
// ABOUTME: Holding per-shape fields inside the variant keeps mismatched field/type combinations unrepresentable

use bytes::Bytes;
use std::fmt;

/// Maximum octets of a single binary SMS, user-data header included.
pub const MAX_BINARY_LEN: usize = 140;

/// The body of an outbound message, one variant per wire shape.
///
/// WAP-push-only fields exist only on the `WapPush` variant and binary-only
/// fields only on `Binary`, so a message can never carry fields that do not
/// belong to its type.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageContent {
    /// Textual message body; `unicode` selects UCS-2 transport encoding
    Text { body: String, unicode: bool },

    /// Raw 8-bit payload with a user-data header
    Binary { body: Bytes, udh: Bytes },

    /// Browsable URL pushed to the handset inbox
    WapPush {
        url: String,
        title: String,
        /// Seconds the pushed link stays available on the handset; 0 requests
        /// the vendor default.
        validity: u32,
    },
}

impl MessageContent {
    /// Returns the wire type tag for this content shape.
    pub fn message_type(&self) -> MessageType {
        match self {
            MessageContent::Text { unicode: false, .. } => MessageType::Text,
            MessageContent::Text { unicode: true, .. } => MessageType::Unicode,
            MessageContent::Binary { .. } => MessageType::Binary,
            MessageContent::WapPush { .. } => MessageType::WapPush,
        }
    }

    /// Returns true if this content is submitted with UCS-2 encoding.
    pub fn is_unicode(&self) -> bool {
        matches!(self, MessageContent::Text { unicode: true, .. })
    }
}

/// Wire type tag of an outbound message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// GSM 7-bit text message
    Text,
    /// UCS-2 (16-bit) text message
    Unicode,
    /// 8-bit binary message
    Binary,
    /// WAP push message
    WapPush,
}

impl MessageType {
    /// Returns the value sent in the `type` form parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Unicode => "unicode",
            MessageType::Binary => "binary",
            MessageType::WapPush => "wappush",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

/// Checks if a character is valid in the GSM 7-bit default alphabet
pub(crate) fn is_gsm_alphabet_char(c: char) -> bool {
    // Basic character set plus the extension table escapes; the uncommon
    // national-language shift tables are not considered.
    match c {
        'A'..='Z' | 'a'..='z' | '0'..='9' => true,
        ' ' | '!' | '"' | '#' | '$' | '%' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-'
        | '.' | '/' => true,
        ':' | ';' | '<' | '=' | '>' | '?' | '@' => true,
        '[' | '\\' | ']' | '^' | '_' | '{' | '|' | '}' | '~' => true,
        '\n' | '\r' => true,
        '£' | '¥' | '§' | '¤' | '¡' | '¿' | '€' => true,
        'Ä' | 'Å' | 'Æ' | 'Ç' | 'É' | 'Ñ' | 'Ö' | 'Ø' | 'Ü' | 'ß' => true,
        'à' | 'ä' | 'å' | 'æ' | 'è' | 'é' | 'ì' | 'ñ' | 'ò' | 'ö' | 'ø' | 'ù' | 'ü' => true,
        'Δ' | 'Φ' | 'Γ' | 'Λ' | 'Ω' | 'Π' | 'Ψ' | 'Σ' | 'Θ' | 'Ξ' => true,
        _ => false,
    }
}

/// Returns true if every character of `text` fits the GSM 7-bit alphabet.
pub fn fits_gsm_alphabet(text: &str) -> bool {
    text.chars().all(is_gsm_alphabet_char)
}
