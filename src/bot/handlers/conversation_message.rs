use teloxide::prelude::*;

use super::{resolve_channels_from, HandlerResult};
use crate::bot::conversation::{engine, Advance, ConversationStore};
use crate::database::{connection::DatabaseManager, models::Alert};
use crate::utils::logging::log_conversation_step;
use crate::utils::validation::{looks_like_date, looks_like_time};

/// Routes plain (non-command) messages.
///
/// Every message is an opportunity to resolve channel names to chat ids.
/// Beyond that, text is fed into the conversation engine only when the
/// author owns an active conversation; messages from bots (including this
/// one) are always dropped to prevent self-triggering.
pub async fn handle_plain_message(
    bot: Bot,
    msg: Message,
    db: DatabaseManager,
    store: ConversationStore,
) -> HandlerResult {
    resolve_channels_from(&db, &msg).await;

    let Some(user) = msg.from() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }
    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Unknown slash commands fall through the command branch; they are not
    // conversation answers.
    if text.starts_with('/') {
        tracing::debug!("Ignoring unrecognized command: {}", text);
        return Ok(());
    }

    let user_id = user.id.0 as i64;
    let Some(outcome) = store.with_state(user_id, |state| {
        let outcome = engine::advance(state, text);
        log_conversation_step(&state.display_name, user_id, state.step);
        outcome
    }) else {
        return Ok(());
    };

    let dm = ChatId(user_id);
    match outcome {
        Advance::Next(prompt) => {
            bot.send_message(dm, prompt).await?;
        }
        Advance::Review(draft_summary) => {
            bot.send_message(dm, draft_summary).await?;
        }
        Advance::Submitted { draft, ack } => {
            store.remove(user_id);

            // Shape problems are tolerated: the record is stored as-is but
            // will never compare as due, so leave a trace for the operator.
            if !looks_like_date(&draft.date) || !looks_like_time(&draft.time) {
                tracing::warn!(
                    "Alert from {} has malformed date/time ('{}', '{}') and may never fire",
                    draft.author,
                    draft.date,
                    draft.time
                );
            }

            match Alert::enqueue(
                &db.pool,
                &draft.author,
                &draft.subject,
                &draft.description,
                &draft.date,
                &draft.time,
            )
            .await
            {
                Ok(alert) => {
                    tracing::info!(
                        "Alert {} ('{}') queued by {}",
                        alert.id,
                        alert.subject,
                        alert.author
                    );
                    bot.send_message(dm, ack).await?;
                }
                Err(e) => {
                    tracing::error!("Failed to enqueue alert from {}: {}", draft.author, e);
                    bot.send_message(dm, "Something went wrong saving your alert. Please try again.")
                        .await?;
                }
            }
        }
        Advance::Abandoned => {
            store.remove(user_id);
            tracing::debug!("User {} declined the draft; conversation discarded", user_id);
        }
    }

    Ok(())
}
