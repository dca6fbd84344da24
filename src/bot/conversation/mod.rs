/// State machine driving the guided alert submission
pub mod engine;
/// Shared map of in-progress conversations, keyed by user id
pub mod store;

pub use engine::{Advance, AlertDraft};
pub use store::{ConversationState, ConversationStore};
