use teloxide::prelude::*;

use crate::bot::commands::Command;
use crate::bot::handlers::HandlerResult;
use crate::services::queue::{BotEvent, EventSender};
use crate::utils::logging::log_command_start;

pub async fn command_handler(msg: Message, cmd: Command, events: EventSender) -> HandlerResult {
    let (user, user_id) = msg
        .from()
        .map(|u| (u.username.clone().unwrap_or_else(|| "unknown".to_string()), u.id.0))
        .unwrap_or_else(|| ("unknown".to_string(), 0));

    match cmd {
        Command::Start => {
            log_command_start("/start", &user, user_id, msg.chat.id);
            if let Err(e) = events.push(BotEvent::Start { chat_id: msg.chat.id }).await {
                tracing::error!("Failed to queue /start from chat {}: {}", msg.chat.id, e);
            }
        }
    }
    Ok(())
}
