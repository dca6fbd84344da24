pub mod conversation_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::conversation::ConversationStore;
use crate::database::{connection::DatabaseManager, models::Channel};

/// Error type shared by every handler endpoint.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Lazily fills in the channel directory from whatever chat this message
/// arrived in. Failures are logged, never surfaced.
pub async fn resolve_channels_from(db: &DatabaseManager, msg: &Message) {
    let labels: Vec<&str> = [msg.chat.title(), msg.chat.username()]
        .into_iter()
        .flatten()
        .collect();

    if labels.is_empty() {
        return;
    }

    if let Err(e) = Channel::resolve_matching(&db.pool, msg.chat.id.0, &labels).await {
        tracing::error!("Channel resolution failed: {}", e);
    }
}

pub struct BotHandler {
    pub db: DatabaseManager,
    pub store: ConversationStore,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, store: ConversationStore) -> Self {
        Self { db, store }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let db = self.db.clone();
        let store = self.store.clone();
        let db_plain = self.db.clone();
        let store_plain = self.store.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let db = db.clone();
                        let store = store.clone();
                        async move { message::command_handler(bot, msg, cmd, db, store).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(move |bot, msg| {
                let db = db_plain.clone();
                let store = store_plain.clone();
                async move {
                    conversation_message::handle_plain_message(bot, msg, db, store).await
                }
            }))
    }
}
