/// Command definitions and per-command handlers
pub mod commands;
/// Conversation state machine and per-user state store
pub mod conversation;
/// Update routing: command dispatch and plain-message handling
pub mod handlers;
