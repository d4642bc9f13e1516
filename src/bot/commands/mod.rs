use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Pill Reminder Bot commands:")]
pub enum Command {
    #[command(description = "Start receiving pill reminders in this chat")]
    Start,
}
