use teloxide::prelude::*;

use crate::bot::conversation::{engine, ConversationStore};
use crate::bot::handlers::resolve_channels_from;
use crate::database::{connection::DatabaseManager, models::{Channel, ChannelRole}};
use crate::utils::logging::{log_command_start, log_command_success};
use crate::utils::validation::validate_telegram_chat_id;

pub async fn handle_new_alert(
    bot: Bot,
    msg: Message,
    db: &DatabaseManager,
    store: &ConversationStore,
) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }

    let chat_id = msg.chat.id.0;
    let user_id = user.id.0 as i64;
    let display_name = user.full_name();

    log_command_start("new_alert", &display_name, user_id, chat_id, None);

    if let Err(e) = validate_telegram_chat_id(chat_id) {
        tracing::warn!("new_alert from chat {} rejected: {}", chat_id, e);
        return Ok(());
    }

    // The command message itself may be the first chance to learn the input
    // channel's chat id.
    resolve_channels_from(db, &msg).await;

    // Wrong channel is silent: the user gets no reply, only a log line.
    match Channel::find(&db.pool, ChannelRole::Input).await {
        Ok(Some(input)) if input.chat_id == Some(chat_id) => {}
        Ok(_) => {
            tracing::debug!(
                "Ignoring new_alert from user {} outside the input channel (chat {})",
                user_id,
                chat_id
            );
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Failed to look up input channel: {}", e);
            return Ok(());
        }
    }

    if !store.begin(user_id, &display_name) {
        bot.send_message(msg.chat.id, "You are already creating an alert.")
            .await?;
        return Ok(());
    }

    // Welcome + subject prompt, delivered privately so the transcript stays
    // out of the shared channel.
    if let Some(opening) = store.with_state(user_id, engine::begin) {
        bot.send_message(ChatId(user_id), opening).await?;
    }

    log_command_success("new_alert", &display_name, user_id, chat_id, Some("conversation started"));
    Ok(())
}
