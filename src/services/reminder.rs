use chrono::Utc;
use chrono_tz::Tz;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::config::ReminderSchedule;
use crate::services::queue::{BotEvent, EventSender};
use crate::utils::logging::log_job_event;

/// Midnight, every day.
pub const DAILY_RESET_CRON: &str = "0 0 0 * * *";

pub struct ReminderService {
    events: EventSender,
    timezone: Tz,
    schedule: ReminderSchedule,
    scheduler: JobScheduler,
    job_ids: Vec<Uuid>,
}

impl ReminderService {
    pub async fn new(
        events: EventSender,
        timezone: Tz,
        schedule: ReminderSchedule,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            events,
            timezone,
            schedule,
            scheduler,
            job_ids: Vec::new(),
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for expression in self.schedule.cron_expressions() {
            let job = tick_job(expression, self.timezone, self.events.clone(), BotEvent::ReminderTick)?;
            self.job_ids.push(self.scheduler.add(job).await?);
        }

        let reset_job = tick_job(DAILY_RESET_CRON, self.timezone, self.events.clone(), BotEvent::DailyReset)?;
        self.job_ids.push(self.scheduler.add(reset_job).await?);

        self.scheduler.start().await?;

        tracing::info!(
            "Reminder service started - {} schedule {:?}, daily reset at 00:00, zone {}",
            self.schedule,
            self.schedule.cron_expressions(),
            self.timezone
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        tracing::info!("Reminder service stopped ({} jobs)", self.job_ids.len());
        Ok(())
    }
}

/// Builds a job that pushes `event` onto the queue each time `expression` fires in `timezone`.
pub fn tick_job(
    expression: &str,
    timezone: Tz,
    events: EventSender,
    event: BotEvent,
) -> Result<Job, Box<dyn std::error::Error + Send + Sync>> {
    let job = Job::new_async_tz(expression, timezone, move |_uuid, _l| {
        let events = events.clone();
        let event = event.clone();
        Box::pin(async move {
            let name = event.name();
            let local_time = Utc::now()
                .with_timezone(&timezone)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            log_job_event(name, Some(&format!("fired at {local_time}")));
            if let Err(e) = events.push(event).await {
                tracing::error!("Failed to queue {}: {}", name, e);
            }
        })
    })?;
    Ok(job)
}
