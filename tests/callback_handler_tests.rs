#![allow(clippy::unwrap_used)]

use pill_reminder_bot::bot::commands::Command;
use pill_reminder_bot::bot::handlers::callback::callback_event;
use pill_reminder_bot::bot::handlers::message::command_handler;
use pill_reminder_bot::bot::messages::{CallbackAction, TOOK_PILLS_PAYLOAD};
use pill_reminder_bot::services::queue::{event_queue, BotEvent};
use serde_json::{json, Value};
use teloxide::types::{CallbackQuery, ChatId, Message};
use teloxide::utils::command::BotCommands;

fn message_json(chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": 10,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Anna" },
        "from": { "id": 7, "is_bot": false, "first_name": "Anna", "username": "anna" },
        "text": text
    })
}

fn callback_query(data: Option<&str>, message_chat: Option<i64>) -> CallbackQuery {
    let mut query = json!({
        "id": "42",
        "from": { "id": 7, "is_bot": false, "first_name": "Anna", "username": "anna" },
        "chat_instance": "instance-1"
    });
    if let Some(data) = data {
        query["data"] = json!(data);
    }
    if let Some(chat_id) = message_chat {
        query["message"] = message_json(chat_id, "Привет, ты выпила таблетки?");
    }
    serde_json::from_value(query).unwrap()
}

#[test]
fn test_took_pills_payload_is_recognized() {
    assert_eq!(CallbackAction::parse(TOOK_PILLS_PAYLOAD), Some(CallbackAction::TookPills));
    assert_eq!(CallbackAction::parse("took_pills"), Some(CallbackAction::TookPills));
}

#[test]
fn test_unknown_payloads_are_ignored() {
    assert_eq!(CallbackAction::parse(""), None);
    assert_eq!(CallbackAction::parse("TOOK_PILLS"), None);
    assert_eq!(CallbackAction::parse("took_pills "), None);
    assert_eq!(CallbackAction::parse("session:1:yes"), None);
}

#[test]
fn test_start_command_parsing() {
    assert_eq!(Command::parse("/start", "pill_bot").ok(), Some(Command::Start));
    assert_eq!(Command::parse("/start@pill_bot", "pill_bot").ok(), Some(Command::Start));
    assert!(Command::parse("/stop", "pill_bot").is_err());
    assert!(Command::parse("hello", "pill_bot").is_err());
}

#[test]
fn test_button_press_takes_chat_from_its_message() {
    let q = callback_query(Some(TOOK_PILLS_PAYLOAD), Some(555));

    assert_eq!(
        callback_event(&q),
        BotEvent::Callback {
            query_id: "42".to_string(),
            chat_id: Some(ChatId(555)),
            action: Some(CallbackAction::TookPills),
        }
    );
}

#[test]
fn test_button_press_with_unknown_payload() {
    let q = callback_query(Some("snooze"), Some(555));

    assert_eq!(
        callback_event(&q),
        BotEvent::Callback {
            query_id: "42".to_string(),
            chat_id: Some(ChatId(555)),
            action: None,
        }
    );
}

#[test]
fn test_button_press_without_message_has_no_chat() {
    let q = callback_query(Some(TOOK_PILLS_PAYLOAD), None);

    assert_eq!(
        callback_event(&q),
        BotEvent::Callback {
            query_id: "42".to_string(),
            chat_id: None,
            action: Some(CallbackAction::TookPills),
        }
    );
}

#[test]
fn test_button_press_without_data() {
    let q = callback_query(None, Some(-100123));

    assert_eq!(
        callback_event(&q),
        BotEvent::Callback {
            query_id: "42".to_string(),
            chat_id: Some(ChatId(-100123)),
            action: None,
        }
    );
}

#[tokio::test]
async fn test_start_command_queues_start_event() {
    let (events, mut rx) = event_queue(4);
    let msg: Message = serde_json::from_value(message_json(555, "/start")).unwrap();

    command_handler(msg, Command::Start, events).await.unwrap();

    assert_eq!(rx.recv().await, Some(BotEvent::Start { chat_id: ChatId(555) }));
}

#[tokio::test]
async fn test_start_command_with_closed_queue_is_not_an_error() {
    let (events, rx) = event_queue(1);
    drop(rx);
    let msg: Message = serde_json::from_value(message_json(555, "/start")).unwrap();

    assert!(command_handler(msg, Command::Start, events).await.is_ok());
}
