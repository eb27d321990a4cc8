use tracing::{error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
