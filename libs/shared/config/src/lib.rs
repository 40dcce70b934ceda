use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_LOG_FILTER: &str = "info";

/// How `cancel_by_mobile` treats several bookings under one phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationPolicy {
    /// Remove every appointment whose mobile matches.
    #[default]
    AllMatches,
    /// Remove only the earliest-booked match.
    FirstMatch,
}

impl fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancellationPolicy::AllMatches => write!(f, "all_matches"),
            CancellationPolicy::FirstMatch => write!(f, "first_match"),
        }
    }
}

impl FromStr for CancellationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all_matches" | "all" => Ok(CancellationPolicy::AllMatches),
            "first_match" | "first" => Ok(CancellationPolicy::FirstMatch),
            other => Err(format!(
                "Invalid cancellation policy: '{}'. Must be one of: all_matches, first_match",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_filter: String,
    #[serde(default)]
    pub cancellation_policy: CancellationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            cancellation_policy: CancellationPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a closure over fixed values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let cancellation_policy = match lookup("CANCELLATION_POLICY") {
            Some(raw) => raw.parse::<CancellationPolicy>().unwrap_or_else(|e: String| {
                warn!("{}, using default", e);
                CancellationPolicy::default()
            }),
            None => CancellationPolicy::default(),
        };

        Self {
            log_filter,
            cancellation_policy,
        }
    }
}
