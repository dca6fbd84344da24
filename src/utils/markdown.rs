/// Escapes text for Telegram's MarkdownV2 parse mode.
///
/// Every character with special meaning in MarkdownV2 is backslash-escaped
/// so user-supplied alert fields render as literal text.
///
/// # Example
/// ```
/// use alert_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("02-10-2021"), "02\\-10\\-2021");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|'
                | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
