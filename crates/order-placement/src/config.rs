//! Configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// A policy name that matches no variant.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown policy: {0:?}")]
pub struct UnknownPolicy(pub String);

/// What to do when a request names the same product more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateLinePolicy {
    /// Refuse the request before any lookup.
    #[default]
    Reject,
    /// Sum the quantities into a single line.
    Merge,
}

impl FromStr for DuplicateLinePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "merge" => Ok(Self::Merge),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// When stock is decremented relative to persisting the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockCommit {
    /// Decrement stock first. A refused decrement leaves no order behind.
    #[default]
    BeforePersist,
    /// Persist the order first. A failed decrement leaves a stored order whose
    /// stock was never taken.
    AfterPersist,
}

impl FromStr for StockCommit {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before-persist" => Ok(Self::BeforePersist),
            "after-persist" => Ok(Self::AfterPersist),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Policies applied by [`OrderPlacementWorkflow`](crate::workflow::OrderPlacementWorkflow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub duplicate_lines: DuplicateLinePolicy,
    pub stock_commit: StockCommit,
}

/// Configuration for the whole [`OrderSystem`](crate::lifecycle::OrderSystem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Request channel capacity of each store actor.
    pub channel_capacity: usize,
    pub placement: PlacementConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            placement: PlacementConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ORDER_CHANNEL_CAPACITY`: store channel capacity, positive (default: 32)
    /// - `ORDER_DUPLICATE_LINES`: `reject` or `merge` (default: reject)
    /// - `ORDER_STOCK_COMMIT`: `before-persist` or `after-persist` (default: before-persist)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_capacity = match parse_var::<usize>(&lookup, "ORDER_CHANNEL_CAPACITY", "a positive integer")? {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: "ORDER_CHANNEL_CAPACITY",
                    value: "0".to_string(),
                    expected: "a positive integer",
                })
            }
            Some(capacity) => capacity,
            None => defaults.channel_capacity,
        };

        Ok(Self {
            channel_capacity,
            placement: PlacementConfig {
                duplicate_lines: parse_var(&lookup, "ORDER_DUPLICATE_LINES", "reject | merge")?
                    .unwrap_or(defaults.placement.duplicate_lines),
                stock_commit: parse_var(
                    &lookup,
                    "ORDER_STOCK_COMMIT",
                    "before-persist | after-persist",
                )?
                .unwrap_or(defaults.placement.stock_commit),
            },
        })
    }
}

fn parse_var<V: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<V>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key,
                value,
                expected,
            }),
    }
}

impl Display for StockCommit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforePersist => f.write_str("before-persist"),
            Self::AfterPersist => f.write_str("after-persist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.placement.duplicate_lines, DuplicateLinePolicy::Reject);
        assert_eq!(config.placement.stock_commit, StockCommit::BeforePersist);
    }

    #[test]
    fn test_values_are_read() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("ORDER_CHANNEL_CAPACITY", "8"),
            ("ORDER_DUPLICATE_LINES", "Merge"),
            ("ORDER_STOCK_COMMIT", " after-persist "),
        ]))
        .unwrap();

        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.placement.duplicate_lines, DuplicateLinePolicy::Merge);
        assert_eq!(config.placement.stock_commit, StockCommit::AfterPersist);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = SystemConfig::from_lookup(lookup(&[("ORDER_STOCK_COMMIT", "later")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "ORDER_STOCK_COMMIT",
                value: "later".to_string(),
                expected: "before-persist | after-persist",
            }
        );

        assert!(SystemConfig::from_lookup(lookup(&[("ORDER_CHANNEL_CAPACITY", "0")])).is_err());
        assert!(SystemConfig::from_lookup(lookup(&[("ORDER_CHANNEL_CAPACITY", "-3")])).is_err());
    }

    #[test]
    fn test_policy_names_parse_case_insensitively() {
        assert_eq!(" MERGE ".parse(), Ok(DuplicateLinePolicy::Merge));
        assert_eq!("Before-Persist".parse(), Ok(StockCommit::BeforePersist));
        assert_eq!(
            "sideways".parse::<StockCommit>(),
            Err(UnknownPolicy("sideways".to_string()))
        );
        assert_eq!(
            "sum".parse::<DuplicateLinePolicy>(),
            Err(UnknownPolicy("sum".to_string()))
        );
    }

    #[test]
    fn test_policies_use_kebab_case_in_serde() {
        let json = serde_json::to_string(&PlacementConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"duplicate_lines":"reject","stock_commit":"before-persist"}"#
        );
    }
}
