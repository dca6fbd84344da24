use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    /// Fixed zone used for all scheduling comparisons. Not per-user configurable.
    pub timezone: Tz,
    pub input_channel: String,
    pub alert_channel: String,
    pub review_channel: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/alerts.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/alerts.db".to_string()
        } else {
            database_url
        };

        let tz_name = env::var("BOT_TIMEZONE")
            .unwrap_or_else(|_| "US/Central".to_string());
        let timezone: Tz = tz_name.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BOT_TIMEZONE: {}", tz_name))?;

        let input_channel = env::var("INPUT_CHANNEL")
            .unwrap_or_else(|_| "bot-commands".to_string());
        let alert_channel = env::var("ALERT_CHANNEL")
            .unwrap_or_else(|_| "test-channel-1".to_string());
        let review_channel = env::var("REVIEW_CHANNEL")
            .unwrap_or_else(|_| "test-channel-2".to_string());

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            timezone,
            input_channel,
            alert_channel,
            review_channel,
        })
    }
}
