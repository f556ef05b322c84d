// ABOUTME: Validated sender-id and recipient address types for outbound message requests
// ABOUTME: Enforces GSM length and charset rules at construction so bad addresses never reach the wire

use std::fmt;
use std::str::FromStr;

/// The originator shown on the recipient handset.
///
/// Two kinds are accepted: numeric senders (a short code or long code the
/// handset can reply to, up to 15 digits) and alphanumeric senders (a short
/// textual label, up to 11 characters, not replyable).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SenderId(String);

impl SenderId {
    /// Maximum length of an alphanumeric sender id.
    pub const MAX_ALPHANUMERIC_LEN: usize = 11;

    /// Maximum length of a numeric sender id.
    pub const MAX_NUMERIC_LEN: usize = 15;

    /// Creates a sender id, classifying it as numeric or alphanumeric and
    /// applying the matching length limit.
    pub fn new(sender: &str) -> Result<Self, AddressError> {
        if sender.is_empty() {
            return Err(AddressError::Empty { field: "from" });
        }

        if sender.chars().all(|c| c.is_ascii_digit()) {
            if sender.len() > Self::MAX_NUMERIC_LEN {
                return Err(AddressError::TooLong {
                    field: "from",
                    max_len: Self::MAX_NUMERIC_LEN,
                    actual_len: sender.len(),
                });
            }
        } else {
            if !sender.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(AddressError::InvalidFormat {
                    field: "from",
                    reason: "alphanumeric sender ids must contain only letters and digits"
                        .to_string(),
                });
            }
            if sender.len() > Self::MAX_ALPHANUMERIC_LEN {
                return Err(AddressError::TooLong {
                    field: "from",
                    max_len: Self::MAX_ALPHANUMERIC_LEN,
                    actual_len: sender.len(),
                });
            }
        }

        Ok(Self(sender.to_string()))
    }

    /// Returns the sender id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is a numeric (replyable) sender id.
    pub fn is_numeric(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SenderId(\"{}\")", self.0)
    }
}

impl FromStr for SenderId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The phone number of the handset a message is sent to.
///
/// Accepts international format with an optional leading `+`; the digits are
/// limited to the 15 of an E.164 number.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Recipient(String);

impl Recipient {
    /// Maximum number of digits in a recipient number.
    pub const MAX_DIGITS: usize = 15;

    /// Creates a recipient number, accepting digits with an optional leading `+`.
    pub fn new(number: &str) -> Result<Self, AddressError> {
        let digits = number.strip_prefix('+').unwrap_or(number);

        if digits.is_empty() {
            return Err(AddressError::Empty { field: "to" });
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddressError::InvalidFormat {
                field: "to",
                reason: "recipient numbers must contain only digits and an optional leading +"
                    .to_string(),
            });
        }
        if digits.len() > Self::MAX_DIGITS {
            return Err(AddressError::TooLong {
                field: "to",
                max_len: Self::MAX_DIGITS,
                actual_len: digits.len(),
            });
        }

        Ok(Self(number.to_string()))
    }

    /// Returns the recipient number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipient(\"{}\")", self.0)
    }
}

impl FromStr for Recipient {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Errors that can occur when validating addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The address field was empty
    Empty { field: &'static str },
    /// The address exceeds the limit for its kind
    TooLong {
        field: &'static str,
        max_len: usize,
        actual_len: usize,
    },
    /// The address contains characters not allowed for its kind
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty { field } => {
                write!(f, "'{field}' must not be empty")
            }
            AddressError::TooLong {
                field,
                max_len,
                actual_len,
            } => {
                write!(
                    f,
                    "'{field}' too long: {actual_len} characters exceeds maximum of {max_len}"
                )
            }
            AddressError::InvalidFormat { field, reason } => {
                write!(f, "'{field}' has invalid format: {reason}")
            }
        }
    }
}

impl std::error::Error for AddressError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_sender_accepts_long_codes() {
        let sender = SenderId::new("447700900001").unwrap();
        assert!(sender.is_numeric());
        assert_eq!(sender.as_str(), "447700900001");
    }

    #[test]
    fn numeric_sender_rejects_more_than_fifteen_digits() {
        let result = SenderId::new("4477009000011234");
        assert!(matches!(
            result,
            Err(AddressError::TooLong {
                field: "from",
                max_len: 15,
                actual_len: 16,
            })
        ));
    }

    #[test]
    fn alphanumeric_sender_accepts_short_labels() {
        let sender = SenderId::new("AcmeAlerts").unwrap();
        assert!(!sender.is_numeric());
    }

    #[test]
    fn alphanumeric_sender_rejects_more_than_eleven_chars() {
        let result = SenderId::new("AcmeAlerting");
        assert!(matches!(
            result,
            Err(AddressError::TooLong {
                field: "from",
                max_len: 11,
                ..
            })
        ));
    }

    #[test]
    fn alphanumeric_sender_rejects_punctuation() {
        assert!(matches!(
            SenderId::new("Acme Alerts"),
            Err(AddressError::InvalidFormat { field: "from", .. })
        ));
    }

    #[test]
    fn empty_sender_rejected() {
        assert!(matches!(
            SenderId::new(""),
            Err(AddressError::Empty { field: "from" })
        ));
    }

    #[test]
    fn recipient_accepts_plus_prefix() {
        let to = Recipient::new("+447700900002").unwrap();
        assert_eq!(to.as_str(), "+447700900002");
    }

    #[test]
    fn recipient_rejects_letters() {
        assert!(matches!(
            Recipient::new("44FREE"),
            Err(AddressError::InvalidFormat { field: "to", .. })
        ));
    }

    #[test]
    fn recipient_rejects_bare_plus() {
        assert!(matches!(
            Recipient::new("+"),
            Err(AddressError::Empty { field: "to" })
        ));
    }

    #[test]
    fn recipient_parses_from_str() {
        let to: Recipient = "447700900003".parse().unwrap();
        assert_eq!(to.as_str(), "447700900003");
    }
}
