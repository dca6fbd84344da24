pub mod cancel;
pub mod new_alert;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Alert Bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(rename = "new_alert", description = "Create a new scheduled alert")]
    NewAlert,
    #[command(description = "Cancel your in-progress alert")]
    Cancel,
}
