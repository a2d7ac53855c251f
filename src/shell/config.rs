// Settings read from the environment, with `.env` support through dotenvy.
//
// GAMETIME_DEFAULT_INITIAL_TIME_SECS  initial time for clocks created without one (default 300)
// GAMETIME_DEFAULT_INCREMENT_SECS     increment for clocks created without one (default 0)
// GAMETIME_STORE_APPEND_DELAY_MS      artificial delay on every store append (default 0)

use crate::modules::clocks::use_cases::create_clock::command::ClockDefaults;
use anyhow::{Context, bail};
use chrono::TimeDelta;

pub const INITIAL_TIME_KEY: &str = "GAMETIME_DEFAULT_INITIAL_TIME_SECS";
pub const INCREMENT_KEY: &str = "GAMETIME_DEFAULT_INCREMENT_SECS";
pub const APPEND_DELAY_KEY: &str = "GAMETIME_STORE_APPEND_DELAY_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub defaults: ClockDefaults,
    pub store_append_delay_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            defaults: ClockDefaults::default(),
            store_append_delay_ms: 0,
        }
    }
}

impl ClockConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let fallback = Self::default();
        let initial_secs = read_number(&lookup, INITIAL_TIME_KEY)?
            .unwrap_or(fallback.defaults.initial_time.num_seconds() as u64);
        let increment_secs = read_number(&lookup, INCREMENT_KEY)?
            .unwrap_or(fallback.defaults.increment.num_seconds() as u64);
        let store_append_delay_ms =
            read_number(&lookup, APPEND_DELAY_KEY)?.unwrap_or(fallback.store_append_delay_ms);

        if initial_secs == 0 {
            bail!("{INITIAL_TIME_KEY} must be greater than zero");
        }
        Ok(Self {
            defaults: ClockDefaults {
                initial_time: seconds(initial_secs, INITIAL_TIME_KEY)?,
                increment: seconds(increment_secs, INCREMENT_KEY)?,
            },
            store_append_delay_ms,
        })
    }
}

fn read_number(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<u64>> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}"))
        })
        .transpose()
}

fn seconds(value: u64, key: &str) -> anyhow::Result<TimeDelta> {
    i64::try_from(value)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .with_context(|| format!("{key} is out of range"))
}
