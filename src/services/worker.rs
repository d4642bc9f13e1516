//! Single consumer of the event queue.
//!
//! The worker owns the [`StatusStore`], so every read and write of the
//! acknowledgement flags happens on this one task in the order events were
//! queued.

use teloxide::prelude::*;
use tokio::sync::{mpsc, oneshot};

use crate::bot::messages::{
    acknowledgement_keyboard, CallbackAction, CONFIRMATION_TEXT, REMINDER_TEXT, WELCOME_TEXT,
};
use crate::services::notifier::Notifier;
use crate::services::queue::BotEvent;
use crate::services::status::StatusStore;
use crate::utils::logging::{log_command_error, log_command_success, log_system_event};

/// What a reminder tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    Sent(ChatId),
    AlreadyAcknowledged(ChatId),
    NoActiveChat,
}

/// What a button press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Recorded(ChatId),
    Ignored,
}

pub struct EventWorker<N> {
    notifier: N,
    store: StatusStore,
}

impl<N: Notifier> EventWorker<N> {
    pub fn new(notifier: N, store: StatusStore) -> Self {
        Self { notifier, store }
    }

    pub fn store(&self) -> &StatusStore {
        &self.store
    }

    /// Consumes events until the queue closes or `shutdown` fires.
    ///
    /// On shutdown the queue is closed to new events and whatever is already
    /// queued is still handled before returning the final store.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<BotEvent>,
        mut shutdown: oneshot::Receiver<()>,
    ) -> StatusStore {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event).await,
                    None => break,
                },
                _ = &mut shutdown => {
                    events.close();
                    let mut drained = 0usize;
                    while let Some(event) = events.recv().await {
                        self.handle(event).await;
                        drained += 1;
                    }
                    log_system_event("Worker stopping", Some(&format!("drained {drained} queued events")));
                    break;
                }
            }
        }
        self.store
    }

    /// Routes one event. Transport failures are logged and the event is dropped.
    pub async fn handle(&mut self, event: BotEvent) {
        let name = event.name();
        let result = match event {
            BotEvent::Start { chat_id } => self.register_chat(chat_id).await,
            BotEvent::Callback {
                query_id,
                chat_id,
                action,
            } => self.acknowledge(&query_id, chat_id, action).await.map(|_| ()),
            BotEvent::ReminderTick => self.dispatch_reminder().await.map(|_| ()),
            BotEvent::DailyReset => {
                self.reset_daily();
                Ok(())
            }
        };

        if let Err(e) = result {
            log_command_error(name, &e.to_string());
        }
    }

    pub async fn register_chat(&mut self, chat_id: ChatId) -> ResponseResult<()> {
        self.store.register(chat_id);
        self.notifier.send_text(chat_id, WELCOME_TEXT).await?;
        log_command_success("/start", chat_id, Some("registered as reminder target"));
        Ok(())
    }

    pub async fn dispatch_reminder(&mut self) -> ResponseResult<ReminderOutcome> {
        let Some(chat_id) = self.store.active_chat() else {
            tracing::warn!("Reminder skipped: no chat has sent /start yet");
            return Ok(ReminderOutcome::NoActiveChat);
        };

        if self.store.get(chat_id) {
            tracing::debug!("Reminder skipped: chat {} already acknowledged today", chat_id);
            return Ok(ReminderOutcome::AlreadyAcknowledged(chat_id));
        }

        self.notifier
            .send_prompt(chat_id, REMINDER_TEXT, acknowledgement_keyboard())
            .await?;
        tracing::info!("Sent reminder to chat {}", chat_id);
        Ok(ReminderOutcome::Sent(chat_id))
    }

    pub async fn acknowledge(
        &mut self,
        query_id: &str,
        chat_id: Option<ChatId>,
        action: Option<CallbackAction>,
    ) -> ResponseResult<Acknowledgement> {
        if let Err(e) = self.notifier.answer_callback(query_id).await {
            tracing::warn!("Failed to answer callback query {}: {}", query_id, e);
        }

        let Some(CallbackAction::TookPills) = action else {
            return Ok(Acknowledgement::Ignored);
        };
        let Some(chat_id) = chat_id else {
            tracing::warn!("Callback {} has no originating chat, ignoring", query_id);
            return Ok(Acknowledgement::Ignored);
        };

        self.store.set(chat_id, true);
        self.notifier.send_text(chat_id, CONFIRMATION_TEXT).await?;
        log_command_success("took_pills", chat_id, None);
        Ok(Acknowledgement::Recorded(chat_id))
    }

    pub fn reset_daily(&mut self) -> usize {
        let count = self.store.reset_all();
        log_system_event("Daily reset", Some(&format!("{count} chat statuses cleared")));
        count
    }
}
