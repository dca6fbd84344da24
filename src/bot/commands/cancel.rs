use teloxide::prelude::*;

use crate::bot::conversation::ConversationStore;
use crate::utils::logging::log_command_start;

/// Destroys the sender's in-progress alert, whatever step it reached.
/// A no-op (with a short notice) when nothing is active.
pub async fn handle_cancel(
    bot: Bot,
    msg: Message,
    store: &ConversationStore,
) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;

    log_command_start("cancel", &user.full_name(), user_id, msg.chat.id.0, None);

    if store.remove(user_id) {
        bot.send_message(ChatId(user_id), "Your in-progress alert has been cancelled.")
            .await?;
    } else {
        bot.send_message(ChatId(user_id), "You have no alert in progress.")
            .await?;
    }

    Ok(())
}
