use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const WELCOME_TEXT: &str =
    "Привет! Я буду напоминать тебе про таблетки. Нажми '✅Да, выпила', когда примешь таблетки.";
pub const REMINDER_TEXT: &str = "Привет, ты выпила таблетки?";
pub const CONFIRMATION_TEXT: &str = "Отлично, ты выпила таблетки! Напомню завтра.";

pub const TOOK_PILLS_BUTTON: &str = "✅Да, выпила";
/// Callback payload carried by the acknowledgement button.
pub const TOOK_PILLS_PAYLOAD: &str = "took_pills";

/// Actions a button press can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    TookPills,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            TOOK_PILLS_PAYLOAD => Some(CallbackAction::TookPills),
            _ => None,
        }
    }
}

/// Single-button keyboard attached to every reminder.
pub fn acknowledgement_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        TOOK_PILLS_BUTTON,
        TOOK_PILLS_PAYLOAD,
    )]])
}
