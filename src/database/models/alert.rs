use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One scheduled alert awaiting broadcast. Immutable after insert; the
/// scheduler removes the row once it has been delivered.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub author: String,
    pub subject: String,
    /// A literal "." means the author skipped the description.
    pub description: String,
    /// Expected shape mm-dd-yyyy; compared as text, never parsed.
    pub date: String,
    /// Expected shape HH:MM, 24-hour; compared as text, never parsed.
    pub time: String,
    pub created_at: String,
}

impl Alert {
    /// Appends a new record to the tail of the pending queue.
    pub async fn enqueue(
        pool: &sqlx::SqlitePool,
        author: &str,
        subject: &str,
        description: &str,
        date: &str,
        time: &str,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO alerts (id, author, subject, description, date, time, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(author)
        .bind(subject)
        .bind(description)
        .bind(date)
        .bind(time)
        .bind(&created_at)
        .execute(pool)
        .await?;

        Ok(Alert {
            id,
            author: author.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            created_at,
        })
    }

    /// Returns the head of the queue (oldest submission) without removing it.
    pub async fn peek_oldest(pool: &sqlx::SqlitePool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Alert>(
            "SELECT id, author, subject, description, date, time, created_at \
             FROM alerts ORDER BY created_at ASC, id ASC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Alert>(
            "SELECT id, author, subject, description, date, time, created_at \
             FROM alerts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Removes a broadcast alert from the queue.
    pub async fn remove(pool: &sqlx::SqlitePool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM alerts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM alerts")
            .fetch_one(pool)
            .await
    }
}
