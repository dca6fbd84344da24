use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::HandlerResult;
use crate::bot::commands::Command;
use crate::bot::conversation::ConversationStore;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
    store: ConversationStore,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "📢 Welcome to Alert Bot!\n\nUse /new_alert in the input channel to schedule an alert.\nUse /help to see all commands.",
            )
            .await?;
        }
        Command::NewAlert => {
            crate::bot::commands::new_alert::handle_new_alert(bot, msg, &db, &store).await?;
        }
        Command::Cancel => {
            crate::bot::commands::cancel::handle_cancel(bot, msg, &store).await?;
        }
    }
    Ok(())
}
