pub mod callback;
pub mod message;

use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::Command;
use crate::services::queue::EventSender;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

pub struct BotHandler {
    pub events: EventSender,
}

impl BotHandler {
    pub fn new(events: EventSender) -> Self {
        Self { events }
    }

    /// Update tree: `/start` commands and callback queries, everything else falls through.
    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let events = self.events.clone();
        let events_callback = self.events.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |msg: Message, cmd: Command| {
                        let events = events.clone();
                        async move { message::command_handler(msg, cmd, events).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(move |q: CallbackQuery| {
                let events = events_callback.clone();
                async move { callback::callback_handler(q, events).await }
            }))
    }
}
