//! # Alert Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the database and the
//! channel directory, starts the alert scheduler, and runs the Telegram bot.

use anyhow::Result;
use chrono::Utc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alert_bot::bot::commands::Command;
use alert_bot::bot::conversation::ConversationStore;
use alert_bot::bot::handlers::BotHandler;
use alert_bot::config::Config;
use alert_bot::database::connection::DatabaseManager;
use alert_bot::database::models::Channel;
use alert_bot::services::scheduler::AlertScheduler;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alert_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Alert Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}, Timezone: {}",
        config.database_url, config.timezone
    );

    // Initialize database
    info!("Initializing database connection...");
    let db_manager = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db_manager.run_migrations().await?;
    let db_arc = Arc::new(db_manager);
    info!("Database initialized successfully");

    // (Re)seed the channel directory; chat ids are learned lazily from the
    // first messages observed after startup.
    Channel::seed(
        &db_arc.pool,
        &config.input_channel,
        &config.alert_channel,
        &config.review_channel,
    )
    .await?;
    info!(
        "Channel directory seeded: input='{}', alert='{}', review='{}'",
        config.input_channel, config.alert_channel, config.review_channel
    );

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;
    info!("Online: connected on {}", Utc::now().with_timezone(&config.timezone));

    let store = ConversationStore::new();
    let handler = BotHandler::new(db_arc.as_ref().clone(), store);

    // Initialize and start the alert scheduler
    info!("Initializing alert scheduler...");
    let mut scheduler = match AlertScheduler::new(bot.clone(), db_arc.clone(), config.timezone).await
    {
        Ok(service) => {
            info!("Alert scheduler initialized successfully");
            service
        }
        Err(e) => {
            tracing::error!("Failed to create alert scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create alert scheduler: {}", e));
        }
    };

    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start alert scheduler: {}", e);
    } else {
        info!("Alert scheduler started successfully");
    }

    // Run the dispatcher until shutdown
    Dispatcher::builder(bot, handler.schema())
        .dependencies(dptree::deps![])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Stop the scheduler on shutdown
    if let Err(e) = scheduler.stop().await {
        tracing::warn!("Error stopping alert scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
