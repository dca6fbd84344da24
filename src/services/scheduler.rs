use chrono::Utc;
use chrono_tz::Tz;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode, Bot};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::database::{
    connection::DatabaseManager,
    models::{Alert, Channel, ChannelRole},
};
use crate::utils::logging::log_broadcast;
use crate::utils::markdown::escape_markdown;

/// Polls the head of the pending-alert queue every five seconds and
/// broadcasts it once its scheduled moment has passed.
pub struct AlertScheduler {
    bot: Bot,
    db: Arc<DatabaseManager>,
    timezone: Tz,
    scheduler: JobScheduler,
}

impl AlertScheduler {
    pub async fn new(
        bot: Bot,
        db: Arc<DatabaseManager>,
        timezone: Tz,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            db,
            timezone,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bot = self.bot.clone();
        let db = self.db.clone();
        let timezone = self.timezone;

        let tick_job = Job::new_async("*/5 * * * * *", move |_uuid, _l| {
            let bot = bot.clone();
            let db = db.clone();
            Box::pin(async move {
                if let Err(e) = check_due_alerts(&bot, &db, timezone).await {
                    tracing::error!("Alert check failed: {}", e);
                }
            })
        })?;

        self.scheduler.add(tick_job).await?;
        self.scheduler.start().await?;

        tracing::info!(
            "Alert scheduler started - polling every 5 seconds in zone {}",
            self.timezone
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn check_now(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        check_due_alerts(&self.bot, &self.db, self.timezone).await
    }
}

/// One scheduler tick: inspect only the queue head and broadcast-and-pop it
/// when due. An empty queue or an unresolved alert channel is a no-op.
pub async fn check_due_alerts(
    bot: &Bot,
    db: &DatabaseManager,
    timezone: Tz,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Some(alert) = Alert::peek_oldest(&db.pool).await? else {
        return Ok(());
    };

    let now = Utc::now().with_timezone(&timezone);
    let today = now.format("%m-%d-%Y").to_string();
    let now_time = now.format("%H:%M").to_string();

    if !is_due(&alert.date, &alert.time, &today, &now_time) {
        return Ok(());
    }

    let channel = Channel::find(&db.pool, ChannelRole::Alert).await?;
    let Some(chat_id) = channel.and_then(|c| c.chat_id) else {
        tracing::warn!(
            "Alert {} is due but the alert channel is not resolved yet",
            alert.id
        );
        return Ok(());
    };

    match bot
        .send_message(ChatId(chat_id), format_broadcast(&alert))
        .parse_mode(ParseMode::MarkdownV2)
        .await
    {
        Ok(_) => {
            // Pop only after a successful send so a transient failure
            // retries on the next tick instead of losing the record.
            Alert::remove(&db.pool, &alert.id).await?;
            log_broadcast(&alert.subject, &alert.id);
        }
        Err(e) => {
            tracing::error!("Failed to broadcast alert {}: {}", alert.id, e);
        }
    }

    Ok(())
}

/// The due test, exactly as the records store it: plain string comparison on
/// mm-dd-yyyy and HH:MM text. A date in the (string-ordered) past fires
/// regardless of time; today's date fires once the time has been reached.
pub fn is_due(alert_date: &str, alert_time: &str, today: &str, now_time: &str) -> bool {
    alert_date < today || (alert_date == today && alert_time <= now_time)
}

/// Fixed-format broadcast block sent to the alert channel.
pub fn format_broadcast(alert: &Alert) -> String {
    format!(
        "*AUTHOR:* {}\n\n*SUBJECT:* {}\n\n*DESCRIPTION:* {}\n\n*DATE & TIME:* {}, {}",
        escape_markdown(&alert.author),
        escape_markdown(&alert.subject),
        escape_markdown(&alert.description),
        escape_markdown(&alert.date),
        escape_markdown(&alert.time),
    )
}
