use std::fmt::Display;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

pub const RECENT_WINDOW_DAYS_RANGE: RangeInclusive<u32> = 0..=36_500;
pub const TIMELINE_MONTHS_RANGE: RangeInclusive<u32> = 1..=120;

/// Tunables for the dashboard aggregation and startup seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub seed_demo_data: bool,
    pub recent_window_days: u32,
    pub top_tag_limit: usize,
    pub timeline_months: u32,
    /// At or below this many incidents the timeline shows the demo series.
    pub sparse_data_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            recent_window_days: 30,
            top_tag_limit: 5,
            timeline_months: 6,
            sparse_data_threshold: 5,
        }
    }
}

impl AppConfig {
    /// Build a config from `SAFETYWATCH_*` environment variables, falling
    /// back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            seed_demo_data: parse_or(&lookup, "SAFETYWATCH_SEED_DEMO", defaults.seed_demo_data),
            recent_window_days: parse_in_range(
                &lookup,
                "SAFETYWATCH_RECENT_DAYS",
                defaults.recent_window_days,
                RECENT_WINDOW_DAYS_RANGE,
            ),
            top_tag_limit: parse_or(&lookup, "SAFETYWATCH_TOP_TAGS", defaults.top_tag_limit),
            timeline_months: parse_in_range(
                &lookup,
                "SAFETYWATCH_TIMELINE_MONTHS",
                defaults.timeline_months,
                TIMELINE_MONTHS_RANGE,
            ),
            sparse_data_threshold: parse_or(
                &lookup,
                "SAFETYWATCH_SPARSE_THRESHOLD",
                defaults.sparse_data_threshold,
            ),
        }
    }

    /// Fields that feed date arithmetic must stay within these bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("recentWindowDays", self.recent_window_days, RECENT_WINDOW_DAYS_RANGE)?;
        check_range("timelineMonths", self.timeline_months, TIMELINE_MONTHS_RANGE)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            min: u64::from(*range.start()),
            max: u64::from(*range.end()),
            value: u64::from(value),
        })
    }
}

fn parse_in_range<F, T>(lookup: &F, key: &str, default: T, range: RangeInclusive<T>) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Display + Copy,
{
    let value = parse_or(lookup, key, default);
    if range.contains(&value) {
        value
    } else {
        warn!(
            key,
            value = %value,
            min = %range.start(),
            max = %range.end(),
            "Ignoring out-of-range config value"
        );
        default
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable config value");
            default
        }),
        None => default,
    }
}
