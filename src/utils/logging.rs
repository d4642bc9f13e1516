use teloxide::types::ChatId;
use tracing::{debug, error, info};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: u64, chat_id: ChatId) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, chat_id: ChatId, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} in chat {} - {}", command, chat_id, d),
        None => info!("CMD_SUCCESS: {} in chat {}", command, chat_id),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, error: &str) {
    error!("CMD_ERROR: {} - {}", command, error);
}

/// Logs scheduler ticks with consistent format
pub fn log_job_event(job: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("JOB: {} - {}", job, d),
        None => debug!("JOB: {}", job),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
