// ABOUTME: GSM message class parameter controlling how the handset presents a message
// ABOUTME: Maps the four GSM 03.38 classes to the numeric values the REST endpoint expects

use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// GSM message class for SMS delivery.
///
/// The message class tells the handset how to handle a message once it
/// arrives. Most messages leave it unset and let the handset apply its
/// default behaviour.
#[derive(TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageClass {
    /// Class 0: flash SMS, displayed immediately and not stored
    Flash = 0,

    /// Class 1: stored in the mobile equipment's memory
    MobileEquipment = 1,

    /// Class 2: stored on the SIM card
    SimSpecific = 2,

    /// Class 3: forwarded to attached terminal equipment
    TerminalEquipment = 3,
}

impl MessageClass {
    /// Returns the numeric value sent in the `message-class` form parameter.
    pub fn value(self) -> u8 {
        self.into()
    }

    /// Returns a human-readable description of the message class
    pub fn description(&self) -> &'static str {
        match self {
            MessageClass::Flash => "Flash SMS (immediate display)",
            MessageClass::MobileEquipment => "Mobile Equipment storage",
            MessageClass::SimSpecific => "SIM card storage",
            MessageClass::TerminalEquipment => "Terminal Equipment forwarding",
        }
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} ({})", self.value(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_class_values() {
        assert_eq!(MessageClass::Flash.value(), 0);
        assert_eq!(MessageClass::MobileEquipment.value(), 1);
        assert_eq!(MessageClass::SimSpecific.value(), 2);
        assert_eq!(MessageClass::TerminalEquipment.value(), 3);
    }

    #[test]
    fn message_class_roundtrip() {
        for value in 0u8..=3 {
            let class = MessageClass::try_from(value).unwrap();
            assert_eq!(class.value(), value);
        }
    }

    #[test]
    fn message_class_rejects_out_of_range() {
        assert!(MessageClass::try_from(4u8).is_err());
    }

    #[test]
    fn message_class_display() {
        assert_eq!(
            format!("{}", MessageClass::Flash),
            "class 0 (Flash SMS (immediate display))"
        );
    }
}
