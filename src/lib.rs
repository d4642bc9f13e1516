//! # Pill Reminder Bot
//!
//! A Telegram bot that asks, a few times a day, whether the daily pills have been taken.
//!
//! ## Features
//! - `/start` registers the chat that receives reminders
//! - Scheduled reminders with a one-tap "taken" button
//! - Reminders stop once acknowledged and resume after the midnight reset
//! - Chat events and timer ticks are handled by a single worker in arrival order

/// Bot command handlers, message texts and keyboards
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Status store, event queue, worker and the reminder scheduler
pub mod services;
/// Logging helpers
pub mod utils;
