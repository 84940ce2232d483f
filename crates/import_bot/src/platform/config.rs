//! Startup configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use bot_logging::LogDestination;
use log::LevelFilter;
use telegram_transport::{BotSettings, ChatId};

pub const BOT_TOKEN: &str = "BOT_TOKEN";
pub const ADMIN_CHAT_ID: &str = "ADMIN_CHAT_ID";
pub const TELEGRAM_API_URL: &str = "TELEGRAM_API_URL";
pub const POLL_TIMEOUT_SECS: &str = "POLL_TIMEOUT_SECS";
pub const RETRY_BACKOFF_SECS: &str = "RETRY_BACKOFF_SECS";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_DESTINATION: &str = "LOG_DESTINATION";

const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RETRY_BACKOFF_SECS: u64 = 5;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot: BotSettings,
    pub admin_chat: ChatId,
    pub retry_backoff: Duration,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any key/value source; empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = get(BOT_TOKEN).ok_or(ConfigError::Missing(BOT_TOKEN))?;
        let admin_raw = get(ADMIN_CHAT_ID).ok_or(ConfigError::Missing(ADMIN_CHAT_ID))?;
        let admin_chat = ChatId(parse_value(ADMIN_CHAT_ID, &admin_raw)?);

        let mut bot = BotSettings::new(token);
        if let Some(api_base) = get(TELEGRAM_API_URL) {
            bot.api_base = api_base;
        }
        let poll_secs = match get(POLL_TIMEOUT_SECS) {
            Some(raw) => parse_value(POLL_TIMEOUT_SECS, &raw)?,
            None => DEFAULT_POLL_TIMEOUT_SECS,
        };
        bot.poll_timeout = Duration::from_secs(poll_secs);

        let backoff_secs = match get(RETRY_BACKOFF_SECS) {
            Some(raw) => parse_value(RETRY_BACKOFF_SECS, &raw)?,
            None => DEFAULT_RETRY_BACKOFF_SECS,
        };

        let log_level = match get(LOG_LEVEL) {
            Some(raw) => parse_value(LOG_LEVEL, &raw)?,
            None => LevelFilter::Info,
        };

        let log_destination = match get(LOG_DESTINATION) {
            Some(raw) => LogDestination::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                name: LOG_DESTINATION,
                reason: format!("expected terminal, file or both, got {raw:?}"),
            })?,
            None => LogDestination::Terminal,
        };

        Ok(Self {
            bot,
            admin_chat,
            retry_backoff: Duration::from_secs(backoff_secs),
            log_level,
            log_destination,
        })
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
        name,
        reason: err.to_string(),
    })
}
