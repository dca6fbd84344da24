#![allow(clippy::unwrap_used)]

use alert_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

const BOT_NAME: &str = "alertbot";

#[test]
fn test_parse_new_alert() {
    let cmd = Command::parse("/new_alert", BOT_NAME).unwrap();
    assert_eq!(cmd, Command::NewAlert);
}

#[test]
fn test_parse_new_alert_with_bot_mention() {
    let cmd = Command::parse("/new_alert@alertbot", BOT_NAME).unwrap();
    assert_eq!(cmd, Command::NewAlert);
}

#[test]
fn test_parse_cancel() {
    let cmd = Command::parse("/cancel", BOT_NAME).unwrap();
    assert_eq!(cmd, Command::Cancel);
}

#[test]
fn test_parse_help_and_start() {
    assert_eq!(Command::parse("/help", BOT_NAME).unwrap(), Command::Help);
    assert_eq!(Command::parse("/start", BOT_NAME).unwrap(), Command::Start);
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Command::parse("/schedule", BOT_NAME).is_err());
    assert!(Command::parse("/newalert", BOT_NAME).is_err());
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert!(Command::parse("new_alert", BOT_NAME).is_err());
    assert!(Command::parse("y", BOT_NAME).is_err());
}

#[test]
fn test_descriptions_mention_every_command() {
    let descriptions = Command::descriptions().to_string();
    assert!(descriptions.contains("/help"));
    assert!(descriptions.contains("/start"));
    assert!(descriptions.contains("/new_alert"));
    assert!(descriptions.contains("/cancel"));
}
