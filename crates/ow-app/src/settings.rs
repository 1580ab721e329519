//! Runtime settings derived from the [`AppConfig`] DTO.
//!
//! This is where defaults live: the DTO only records what the config file
//! said, including empty or invalid values.

use std::fmt;
use std::str::FromStr;

use crate::usecases::NormalizerSettings;
use ow_core::{ActionTable, AppConfig};

pub const DEFAULT_QUEUE_CAPACITY: usize = 32;

/// Log verbosity, lowest to highest threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Verbosity {
    /// Level name usable as a tracing filter directive.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Verbosity::Debug => "debug",
            Verbosity::Info => "info",
            Verbosity::Warn => "warn",
            Verbosity::Error => "error",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}

impl FromStr for Verbosity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Verbosity::Debug),
            "info" => Ok(Verbosity::Info),
            "warn" | "warning" => Ok(Verbosity::Warn),
            "error" => Ok(Verbosity::Error),
            other => Err(anyhow::anyhow!("unknown verbosity: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeSettings {
    pub verbosity: Verbosity,
    pub normalizer: NormalizerSettings,
    pub queue_capacity: usize,
    /// Config values that were replaced by their default. Reported by the
    /// caller once logging is up.
    pub config_issues: Vec<String>,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            normalizer: NormalizerSettings::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            config_issues: Vec::new(),
        }
    }
}

impl IntakeSettings {
    /// Apply defaults to the config DTO.
    ///
    /// - empty or unknown verbosity → `info`
    /// - unset `multi_item_payloads` → `true`
    /// - unset capacity → 32, capacity below one → 1
    ///
    /// Every replaced value is recorded in `config_issues`.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let mut config_issues = Vec::new();

        let verbosity = if config.verbosity.is_empty() {
            Verbosity::default()
        } else {
            config.verbosity.parse().unwrap_or_else(|err| {
                config_issues.push(format!("general.verbosity: {err}"));
                Verbosity::default()
            })
        };

        let queue_capacity = match config.queue_capacity {
            None => DEFAULT_QUEUE_CAPACITY,
            Some(capacity) if capacity < 1 => {
                config_issues.push(format!("queue.capacity: {capacity} is below 1"));
                1
            }
            Some(capacity) => usize::try_from(capacity).unwrap_or(usize::MAX),
        };

        Self {
            verbosity,
            normalizer: NormalizerSettings {
                multi_item_payloads: config.multi_item_payloads.unwrap_or(true),
                actions: ActionTable::with_extra(config.extra_actions.clone()),
            },
            queue_capacity,
            config_issues,
        }
    }
}
