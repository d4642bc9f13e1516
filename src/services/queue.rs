use std::fmt;
use teloxide::types::ChatId;
use tokio::sync::mpsc;

use crate::bot::messages::CallbackAction;

pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// Work items produced by the chat dispatcher and the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// `/start` received in a chat.
    Start { chat_id: ChatId },
    /// Inline button pressed. `chat_id` is missing when the message is no longer accessible.
    Callback {
        query_id: String,
        chat_id: Option<ChatId>,
        action: Option<CallbackAction>,
    },
    /// A reminder trigger fired.
    ReminderTick,
    /// The midnight trigger fired.
    DailyReset,
}

impl BotEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BotEvent::Start { .. } => "start",
            BotEvent::Callback { .. } => "callback",
            BotEvent::ReminderTick => "reminder_tick",
            BotEvent::DailyReset => "daily_reset",
        }
    }
}

/// Returned when the worker has stopped accepting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueClosed;

impl fmt::Display for QueueClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event queue is closed")
    }
}

impl std::error::Error for QueueClosed {}

#[derive(Debug, Clone)]
pub struct EventSender(mpsc::Sender<BotEvent>);

impl EventSender {
    /// Waits for room in the queue, so a busy worker slows the producers down.
    pub async fn push(&self, event: BotEvent) -> Result<(), QueueClosed> {
        self.0.send(event).await.map_err(|_| QueueClosed)
    }
}

pub fn event_queue(capacity: usize) -> (EventSender, mpsc::Receiver<BotEvent>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender(tx), rx)
}
