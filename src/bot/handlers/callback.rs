use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;
use crate::bot::messages::CallbackAction;
use crate::services::queue::{BotEvent, EventSender};

/// Turns a button press into a queued event for the worker.
pub fn callback_event(q: &CallbackQuery) -> BotEvent {
    BotEvent::Callback {
        query_id: q.id.clone(),
        chat_id: q.message.as_ref().map(|m| m.chat.id),
        action: q.data.as_deref().and_then(CallbackAction::parse),
    }
}

pub async fn callback_handler(q: CallbackQuery, events: EventSender) -> HandlerResult {
    let username = q.from.username.as_deref().unwrap_or("unknown");
    let chat_id = q.message.as_ref().map(|m| m.chat.id.0).unwrap_or(0);
    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        q.data.as_deref().unwrap_or(""),
        username,
        q.from.id.0,
        chat_id
    );

    if let Err(e) = events.push(callback_event(&q)).await {
        tracing::error!("Failed to queue callback {}: {}", q.id, e);
    }
    Ok(())
}
