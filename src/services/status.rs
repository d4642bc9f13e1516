use std::collections::HashMap;
use teloxide::types::ChatId;

/// Per-chat "pills taken today" flags plus the chat that receives reminders.
///
/// Reminders only ever go to the most recently started chat, while the daily
/// reset clears every chat that has a flag.
#[derive(Debug, Default, Clone)]
pub struct StatusStore {
    acknowledged: HashMap<ChatId, bool>,
    active_chat: Option<ChatId>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the chat's flag and makes it the reminder target.
    pub fn register(&mut self, chat_id: ChatId) {
        self.acknowledged.insert(chat_id, false);
        self.active_chat = Some(chat_id);
    }

    /// Unknown chats count as not acknowledged.
    pub fn get(&self, chat_id: ChatId) -> bool {
        self.acknowledged.get(&chat_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, chat_id: ChatId, acknowledged: bool) {
        self.acknowledged.insert(chat_id, acknowledged);
    }

    pub fn active_chat(&self) -> Option<ChatId> {
        self.active_chat
    }

    pub fn chats(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.acknowledged.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.acknowledged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acknowledged.is_empty()
    }

    /// Sets every known flag back to false and returns how many chats were touched.
    pub fn reset_all(&mut self) -> usize {
        for flag in self.acknowledged.values_mut() {
            *flag = false;
        }
        self.acknowledged.len()
    }
}
