use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_COC_API_BASE_URL: &str = "https://api.clashofclans.com/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Every minute, on the minute.
const DEFAULT_INGESTION_SCHEDULE: &str = "0 * * * * *";
/// Upper bound for every configured interval: 100 days.
const MAX_INTERVAL: Duration = Duration::from_secs(100 * 24 * 60 * 60);

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    pub coc_api_token: String,
    pub coc_api_base_url: String,

    pub ingestion: IngestionConfig,
}

/// Tuning for the scheduler, job queue, and worker pool.
#[derive(Clone, Debug)]
pub struct IngestionConfig {
    /// Six-field cron expression driving the enqueue tick.
    pub schedule: String,
    pub workers: usize,
    pub max_attempts: i32,
    pub backoff_base: Duration,
    pub backoff_max: Duration,
    /// How long an idle worker sleeps before polling the queue again.
    pub poll_interval: Duration,
    /// A running job locked for longer than this is returned to pending.
    pub stall_timeout: Duration,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            schedule: DEFAULT_INGESTION_SCHEDULE.to_string(),
            workers: 4,
            max_attempts: 3,
            backoff_base: Duration::from_secs(5),
            backoff_max: Duration::from_secs(300),
            poll_interval: Duration::from_millis(1000),
            stall_timeout: Duration::from_secs(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = IngestionConfig::default();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: parsed("BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?,
            coc_api_token: required("COC_API_TOKEN")?,
            coc_api_base_url: std::env::var("COC_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COC_API_BASE_URL.to_string()),
            ingestion: IngestionConfig {
                schedule: std::env::var("INGESTION_SCHEDULE").unwrap_or(defaults.schedule),
                workers: parsed("INGESTION_WORKERS", Some(defaults.workers))?,
                max_attempts: at_least(
                    "INGESTION_MAX_ATTEMPTS",
                    parsed("INGESTION_MAX_ATTEMPTS", Some(defaults.max_attempts))?,
                    1,
                )?,
                backoff_base: interval(
                    "INGESTION_BACKOFF_BASE_SECS",
                    Duration::from_secs(parsed(
                        "INGESTION_BACKOFF_BASE_SECS",
                        Some(defaults.backoff_base.as_secs()),
                    )?),
                )?,
                backoff_max: interval(
                    "INGESTION_BACKOFF_MAX_SECS",
                    Duration::from_secs(parsed(
                        "INGESTION_BACKOFF_MAX_SECS",
                        Some(defaults.backoff_max.as_secs()),
                    )?),
                )?,
                poll_interval: interval(
                    "INGESTION_POLL_INTERVAL_MS",
                    Duration::from_millis(parsed(
                        "INGESTION_POLL_INTERVAL_MS",
                        Some(defaults.poll_interval.as_millis() as u64),
                    )?),
                )?,
                stall_timeout: interval(
                    "INGESTION_STALL_TIMEOUT_SECS",
                    Duration::from_secs(parsed(
                        "INGESTION_STALL_TIMEOUT_SECS",
                        Some(defaults.stall_timeout.as_secs()),
                    )?),
                )?,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads and parses `name`, falling back to `default` when unset.
fn parsed<T: FromStr>(name: &str, default: Option<T>) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Rejects intervals longer than [`MAX_INTERVAL`].
fn interval(name: &str, value: Duration) -> Result<Duration, ConfigError> {
    if value > MAX_INTERVAL {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: format!("{:?}", value),
        });
    }

    Ok(value)
}

fn at_least(name: &str, value: i32, min: i32) -> Result<i32, ConfigError> {
    if value < min {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}
