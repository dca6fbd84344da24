use tracing::{debug, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs one conversation transition with consistent format
pub fn log_conversation_step(user: &str, user_id: i64, step: u8) {
    debug!("CONV_STEP: {}({}) advanced to step {}", user, user_id, step);
}

/// Logs a completed broadcast with consistent format
pub fn log_broadcast(subject: &str, alert_id: &str) {
    info!("BROADCAST: '{}' delivered (alert {})", subject, alert_id);
}
