use std::time::Duration;

use crate::server::config::IngestionConfig;

/// Attempt budget and exponential retry delay for ingestion jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: i32,
    pub base: Duration,
    pub max: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &IngestionConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            base: config.backoff_base,
            max: config.backoff_max,
        }
    }

    /// Delay before the attempt following `attempt`: `base * 2^(attempt - 1)`, capped.
    ///
    /// # Arguments
    /// - `attempt` - Attempt number that just failed, starting at 1
    pub fn delay_for(&self, attempt: i32) -> Duration {
        let exponent = (attempt.max(1) - 1).min(31) as u32;
        self.base.saturating_mul(1u32 << exponent).min(self.max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&IngestionConfig::default())
    }
}
