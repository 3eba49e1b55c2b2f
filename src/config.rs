// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validator configuration
//!
//! Policies default to the strict behavior (fail on the first error, reject
//! unknown attributes) and can be relaxed through environment variables.

use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the [`ErrorPolicy`]
pub const ERROR_POLICY_ENV: &str = "NETWORK_CONFIG_ERROR_POLICY";

/// Environment variable selecting the [`UnknownAttributePolicy`]
pub const UNKNOWN_ATTRIBUTES_ENV: &str = "NETWORK_CONFIG_UNKNOWN_ATTRIBUTES";

/// Configuration error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key} (expected one of: {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// How many errors a validation run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing attribute
    #[default]
    FailFast,
    /// Check every attribute and report all failures
    CollectAll,
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Ok(Self::FailFast),
            "collect_all" | "collect-all" => Ok(Self::CollectAll),
            _ => Err(ConfigError::InvalidValue {
                key: ERROR_POLICY_ENV.to_string(),
                value: s.to_string(),
                expected: "fail_fast, collect_all",
            }),
        }
    }
}

/// Treatment of attributes the resource type does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownAttributePolicy {
    #[default]
    Reject,
    /// Drop the attribute and log a warning
    Ignore,
}

impl FromStr for UnknownAttributePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "ignore" => Ok(Self::Ignore),
            _ => Err(ConfigError::InvalidValue {
                key: UNKNOWN_ATTRIBUTES_ENV.to_string(),
                value: s.to_string(),
                expected: "reject, ignore",
            }),
        }
    }
}

/// Configuration for [`ConfigSchemaValidator`](crate::ConfigSchemaValidator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorConfig {
    pub error_policy: ErrorPolicy,
    pub unknown_attributes: UnknownAttributePolicy,
}

impl ValidatorConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let error_policy = lookup(ERROR_POLICY_ENV)
            .map(|v| v.parse::<ErrorPolicy>())
            .transpose()?
            .unwrap_or_default();

        let unknown_attributes = lookup(UNKNOWN_ATTRIBUTES_ENV)
            .map(|v| v.parse::<UnknownAttributePolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            error_policy,
            unknown_attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.error_policy, ErrorPolicy::FailFast);
        assert_eq!(config.unknown_attributes, UnknownAttributePolicy::Reject);
    }

    #[test]
    fn test_overrides() {
        let config = ValidatorConfig::from_lookup(lookup_from(&[
            (ERROR_POLICY_ENV, "collect_all"),
            (UNKNOWN_ATTRIBUTES_ENV, "Ignore"),
        ]))
        .unwrap();
        assert_eq!(config.error_policy, ErrorPolicy::CollectAll);
        assert_eq!(config.unknown_attributes, UnknownAttributePolicy::Ignore);
    }

    #[test]
    fn test_invalid_value() {
        let err = ValidatorConfig::from_lookup(lookup_from(&[(ERROR_POLICY_ENV, "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ERROR_POLICY_ENV));
    }
}
