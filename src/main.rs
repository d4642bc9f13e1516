//! # Pill Reminder Bot Main Entry Point
//!
//! Initializes logging, loads configuration, starts the event worker and the
//! reminder scheduler, then long-polls Telegram until Ctrl-C.

use anyhow::Result;
use teloxide::prelude::*;
use tokio::sync::oneshot;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pill_reminder_bot::bot::handlers::BotHandler;
use pill_reminder_bot::config::Config;
use pill_reminder_bot::services::queue::{event_queue, EVENT_QUEUE_CAPACITY};
use pill_reminder_bot::services::reminder::ReminderService;
use pill_reminder_bot::services::status::StatusStore;
use pill_reminder_bot::services::worker::EventWorker;
use pill_reminder_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pill_reminder_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Pill Reminder Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Timezone: {}, Schedule: {}",
        config.timezone, config.reminder_schedule
    );

    let bot = Bot::new(&config.telegram_token);

    // Both the dispatcher and the scheduler feed this queue; only the worker reads it
    let (events, receiver) = event_queue(EVENT_QUEUE_CAPACITY);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let worker = EventWorker::new(bot.clone(), StatusStore::new());
    let worker_task = tokio::spawn(worker.run(receiver, shutdown_rx));

    info!("Initializing reminder service...");
    let mut reminder_service =
        match ReminderService::new(events.clone(), config.timezone, config.reminder_schedule).await {
            Ok(service) => service,
            Err(e) => {
                tracing::error!("Failed to create reminder service: {}", e);
                return Err(anyhow::anyhow!("Failed to create reminder service: {}", e));
            }
        };

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
        return Err(anyhow::anyhow!("Failed to start reminder service: {}", e));
    }

    log_system_event("Bot started", Some("polling for updates"));
    let handler = BotHandler::new(events);
    Dispatcher::builder(bot, handler.schema())
        .default_handler(|upd| async move {
            tracing::trace!("Unhandled update: {:?}", upd.id);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Stop producers first, then let the worker drain what is already queued
    if let Err(e) = reminder_service.stop().await {
        tracing::warn!("Error stopping reminder service: {}", e);
    }
    drop(handler);
    let _ = shutdown_tx.send(());

    match worker_task.await {
        Ok(store) => log_system_event(
            "Worker stopped",
            Some(&format!("{} chats known at shutdown", store.len())),
        ),
        Err(e) => tracing::error!("Worker task error: {}", e),
    }

    info!("Application stopped");
    Ok(())
}
