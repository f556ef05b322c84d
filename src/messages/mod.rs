// ABOUTME: Message value objects: validated addresses, content shapes, and the Message base type
// ABOUTME: Everything here is immutable once constructed and carries no submission logic

mod address;
mod builder;
mod content;
mod message;
mod message_class;

pub use address::{AddressError, Recipient, SenderId};
pub use builder::MessageBuilder;
pub use content::{MAX_BINARY_LEN, MessageContent, MessageType, fits_gsm_alphabet};
pub use message::{MAX_CLIENT_REF_LEN, Message, MessageError};
pub use message_class::MessageClass;
