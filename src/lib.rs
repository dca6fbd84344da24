//! # Alert Bot
//!
//! A Telegram bot that walks users through creating scheduled alerts and
//! broadcasts them to a channel once their date/time arrives.
//!
//! ## Features
//! - Guided multi-step alert creation over private messages
//! - Cancellation of in-progress submissions at any step
//! - Durable pending-alert queue backed by SQLite
//! - Periodic scheduler that fires queue-head alerts at their scheduled moment
//! - Lazy resolution of the input/alert/review channels

/// Bot command handlers, message routing, and the conversation engine
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Background services like the alert scheduler
pub mod services;
/// Utility functions for validation, formatting, and logging
pub mod utils;
