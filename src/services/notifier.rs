use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::InlineKeyboardMarkup;

/// Outbound side of the chat transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a plain text message.
    async fn send_text(&self, chat_id: ChatId, text: &str) -> ResponseResult<()>;

    /// Send a message with an inline keyboard attached.
    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> ResponseResult<()>;

    /// Answer a callback query so the client stops showing a spinner.
    async fn answer_callback(&self, query_id: &str) -> ResponseResult<()>;
}

#[async_trait]
impl Notifier for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> ResponseResult<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_prompt(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> ResponseResult<()> {
        self.send_message(chat_id, text)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> ResponseResult<()> {
        self.answer_callback_query(query_id).await?;
        Ok(())
    }
}
