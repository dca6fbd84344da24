/// Pending alert records and queue operations
pub mod alert;
/// Channel directory with lazy chat-id resolution
pub mod channel;

pub use alert::Alert;
pub use channel::{Channel, ChannelRole};
