use std::env;

use chrono::{FixedOffset, Offset, Utc};

use crate::adapters::SystemClock;
use crate::error::ConfigError;

const UTC_OFFSET_KEY: &str = "RENTAL_UTC_OFFSET_HOURS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Offset of the store's business calendar; weekdays and due dates are judged in it
    pub utc_offset: FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let utc_offset = match env::var(UTC_OFFSET_KEY) {
            Ok(raw) => parse_offset_hours(&raw)?,
            Err(_) => Self::default().utc_offset,
        };

        Ok(Self { utc_offset })
    }

    /// System clock running on the configured business offset
    pub fn clock(&self) -> SystemClock {
        SystemClock::new(self.utc_offset)
    }
}

fn parse_offset_hours(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: UTC_OFFSET_KEY,
        value: raw.to_string(),
    };

    let hours: i32 = raw.trim().parse().map_err(|_| invalid())?;
    if !(-23..=23).contains(&hours) {
        return Err(invalid());
    }
    FixedOffset::east_opt(hours * 3600).ok_or_else(invalid)
}
