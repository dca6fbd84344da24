use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tracing::info;

/// The three well-known channel roles the bot communicates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    /// Where /new_alert is accepted
    Input,
    /// Where due alerts are broadcast
    Alert,
    /// Reserved for alert review
    Review,
}

impl ChannelRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelRole::Input => "input",
            ChannelRole::Alert => "alert",
            ChannelRole::Review => "review",
        }
    }
}

/// One row of the channel directory. `chat_id` is NULL until the bot
/// observes a message from a chat whose title or username matches `name`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Channel {
    pub role: String,
    pub name: String,
    pub chat_id: Option<i64>,
}

impl Channel {
    /// (Re)initializes the directory from configured names. Runs at startup;
    /// any previously resolved chat ids are cleared so stale handles from a
    /// prior run are re-learned.
    pub async fn seed(
        pool: &sqlx::SqlitePool,
        input_name: &str,
        alert_name: &str,
        review_name: &str,
    ) -> Result<(), sqlx::Error> {
        let entries = [
            (ChannelRole::Input, input_name),
            (ChannelRole::Alert, alert_name),
            (ChannelRole::Review, review_name),
        ];

        for (role, name) in entries {
            sqlx::query(
                "INSERT INTO channels (role, name, chat_id) VALUES (?, ?, NULL) \
                 ON CONFLICT(role) DO UPDATE SET name = excluded.name, chat_id = NULL",
            )
            .bind(role.as_str())
            .bind(name)
            .execute(pool)
            .await?;
        }

        Ok(())
    }

    pub async fn find(
        pool: &sqlx::SqlitePool,
        role: ChannelRole,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Channel>(
            "SELECT role, name, chat_id FROM channels WHERE role = ?",
        )
        .bind(role.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Fills in the chat id for every unresolved role whose configured name
    /// matches one of the observed chat labels. Called on each inbound
    /// message until the whole directory is resolved.
    pub async fn resolve_matching(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        labels: &[&str],
    ) -> Result<(), sqlx::Error> {
        if labels.is_empty() {
            return Ok(());
        }

        let unresolved = sqlx::query_as::<_, Channel>(
            "SELECT role, name, chat_id FROM channels WHERE chat_id IS NULL",
        )
        .fetch_all(pool)
        .await?;

        for channel in unresolved {
            if labels.contains(&channel.name.as_str()) {
                sqlx::query("UPDATE channels SET chat_id = ? WHERE role = ?")
                    .bind(chat_id)
                    .bind(&channel.role)
                    .execute(pool)
                    .await?;
                info!(
                    "Resolved {} channel '{}' to chat {}",
                    channel.role, channel.name, chat_id
                );
            }
        }

        Ok(())
    }

    pub async fn all_resolved(pool: &sqlx::SqlitePool) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM channels WHERE chat_id IS NULL",
        )
        .fetch_one(pool)
        .await?;

        Ok(count == 0)
    }
}
