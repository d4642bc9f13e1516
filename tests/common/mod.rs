#![allow(dead_code)]

use async_trait::async_trait;
use pill_reminder_bot::services::notifier::Notifier;
use std::sync::{Arc, Mutex};
use teloxide::types::{ChatId, InlineKeyboardButtonKind, InlineKeyboardMarkup};
use teloxide::{ApiError, RequestError};

/// One outbound call made through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: ChatId, text: String },
    Prompt { chat_id: ChatId, text: String, payloads: Vec<String> },
    CallbackAnswer(String),
}

/// Records every call instead of talking to Telegram.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Sent>>>,
    fail_messages: bool,
    fail_answers: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose message sends fail as if the user blocked the bot.
    pub fn failing() -> Self {
        Self {
            fail_messages: true,
            ..Self::default()
        }
    }

    /// A notifier whose callback answers fail, e.g. for an expired query.
    pub fn failing_answers() -> Self {
        Self {
            fail_answers: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.log.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Prompt { .. }))
            .collect()
    }

    pub fn texts_to(&self, chat_id: ChatId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id: c, text } if c == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }

    fn record(&self, sent: Sent) -> Result<(), RequestError> {
        self.log.lock().unwrap().push(sent);
        if self.fail_messages {
            Err(RequestError::Api(ApiError::BotBlocked))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError> {
        self.record(Sent::Text {
            chat_id,
            text: text.to_string(),
        })
    }

    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> Result<(), RequestError> {
        let payloads = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect();
        self.record(Sent::Prompt {
            chat_id,
            text: text.to_string(),
            payloads,
        })
    }

    async fn answer_callback(&self, query_id: &str) -> Result<(), RequestError> {
        self.log
            .lock()
            .unwrap()
            .push(Sent::CallbackAnswer(query_id.to_string()));
        if self.fail_answers {
            Err(RequestError::Api(ApiError::InvalidQueryId))
        } else {
            Ok(())
        }
    }
}
