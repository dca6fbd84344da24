/// Consistent-format log helpers
pub mod logging;
/// Telegram MarkdownV2 escaping
pub mod markdown;
/// Advisory input checks
pub mod validation;
