use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Zone used for every trigger when `BOT_TIMEZONE` is not set.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Moscow;

/// Which set of reminder triggers to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderSchedule {
    /// Every minute, for trying the bot out.
    Testing,
    /// 06:30, 17:30 and 21:30 local time.
    #[default]
    Production,
}

impl ReminderSchedule {
    /// Six-field cron expressions (`sec min hour dom mon dow`) for the reminder job.
    pub fn cron_expressions(&self) -> &'static [&'static str] {
        match self {
            ReminderSchedule::Testing => &["0 * * * * *"],
            ReminderSchedule::Production => &["0 30 6,17,21 * * *"],
        }
    }
}

impl FromStr for ReminderSchedule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "testing" | "test" => Ok(ReminderSchedule::Testing),
            "production" | "prod" => Ok(ReminderSchedule::Production),
            other => Err(anyhow!("Invalid REMINDER_SCHEDULE '{}'", other)),
        }
    }
}

impl fmt::Display for ReminderSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderSchedule::Testing => write!(f, "testing"),
            ReminderSchedule::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub timezone: Tz,
    pub reminder_schedule: ReminderSchedule,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_TOKEN must be set"));
        }

        let timezone = match env::var("BOT_TIMEZONE") {
            Ok(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid BOT_TIMEZONE '{}': {}", value, e))?,
            _ => DEFAULT_TIMEZONE,
        };

        let reminder_schedule = match env::var("REMINDER_SCHEDULE") {
            Ok(value) if !value.trim().is_empty() => value.parse()?,
            _ => ReminderSchedule::default(),
        };

        Ok(Config {
            telegram_token: token,
            timezone,
            reminder_schedule,
        })
    }
}
