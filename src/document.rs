// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attribute Documents
//!
//! A document is the JSON a caller hands the validator: either a single
//! attribute object or an array of them. Every entry in a document is one
//! resource, so names must be unique across the document.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::config::ErrorPolicy;
use crate::domain::NetworkConfigRecord;
use crate::errors::ValidationError;
use crate::validator::{ensure_unique_names, ConfigSchemaValidator, RawAttributes};

/// Errors reading or validating a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Input must be an attribute object or an array of them")]
    NotAnObject,

    #[error("Entry {index} is not an attribute object")]
    EntryNotObject { index: usize },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Collect-all policy: every failure, grouped by entry index
    #[error("{} of {total} entries failed validation", .failures.len())]
    Rejected {
        total: usize,
        failures: Vec<(usize, Vec<ValidationError>)>,
    },
}

/// Split a JSON document into attribute maps
pub fn parse_document(input: &str) -> Result<Vec<RawAttributes>, DocumentError> {
    match serde_json::from_str(input)? {
        Value::Object(map) => Ok(vec![map]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(DocumentError::EntryNotObject { index }),
            })
            .collect(),
        _ => Err(DocumentError::NotAnObject),
    }
}

/// Validate every entry of a document under the validator's error policy
///
/// Fail-fast stops at the first invalid entry or repeated name. Collect-all
/// validates every entry, logs each failure and reports them together; names
/// are only compared once every entry is valid.
pub fn validate_document(
    validator: &ConfigSchemaValidator,
    raws: &[RawAttributes],
) -> Result<Vec<NetworkConfigRecord>, DocumentError> {
    match validator.config().error_policy {
        ErrorPolicy::FailFast => Ok(validator.validate_batch(raws)?),
        ErrorPolicy::CollectAll => {
            let mut records = Vec::with_capacity(raws.len());
            let mut failures = Vec::new();

            for (index, raw) in raws.iter().enumerate() {
                match validator.validate_all(raw) {
                    Ok(record) => records.push(record),
                    Err(errors) => {
                        for err in &errors {
                            error!("Entry {}: {}", index, err);
                        }
                        failures.push((index, errors));
                    }
                }
            }

            if !failures.is_empty() {
                return Err(DocumentError::Rejected {
                    total: raws.len(),
                    failures,
                });
            }

            ensure_unique_names(&records)?;
            Ok(records)
        }
    }
}

/// Parse and validate a document in one step
pub fn validate_str(
    validator: &ConfigSchemaValidator,
    input: &str,
) -> Result<Vec<NetworkConfigRecord>, DocumentError> {
    let raws = parse_document(input)?;
    validate_document(validator, &raws)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;

    fn collect_all() -> ConfigSchemaValidator {
        ConfigSchemaValidator::new(ValidatorConfig {
            error_policy: ErrorPolicy::CollectAll,
            ..ValidatorConfig::default()
        })
    }

    #[test]
    fn test_single_object() {
        let raws = parse_document(r#"{"name": "eth0"}"#).unwrap();
        assert_eq!(raws.len(), 1);
        assert_eq!(raws[0]["name"], "eth0");
    }

    #[test]
    fn test_array_of_objects() {
        let raws = parse_document(r#"[{"name": "eth0"}, {"name": "eth1"}]"#).unwrap();
        assert_eq!(raws.len(), 2);
        assert!(parse_document("[]").unwrap().is_empty());
    }

    #[test]
    fn test_entry_not_object() {
        let err = parse_document(r#"[{"name": "eth0"}, "eth1"]"#).unwrap_err();
        assert!(matches!(err, DocumentError::EntryNotObject { index: 1 }));
    }

    #[test]
    fn test_scalar_document() {
        assert!(matches!(parse_document("42"), Err(DocumentError::NotAnObject)));
        assert!(matches!(parse_document("\"eth0\""), Err(DocumentError::NotAnObject)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_document("{name"), Err(DocumentError::InvalidJson(_))));
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let err = validate_str(
            &ConfigSchemaValidator::default(),
            r#"[{"name": "eth0", "method": "bootp"}, {"family": "ipx"}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Validation(ValidationError::InvalidEnumValue { ref attribute, .. })
                if attribute == "method"
        ));
    }

    #[test]
    fn test_fail_fast_duplicate_name() {
        let err = validate_str(
            &ConfigSchemaValidator::default(),
            r#"[{"name": "eth0"}, {"name": "eth0"}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Validation(ValidationError::DuplicateName { ref name }) if name == "eth0"
        ));
    }

    #[test]
    fn test_collect_all_reports_every_entry() {
        let err = validate_str(
            &collect_all(),
            r#"[
                {"name": "eth0", "method": "bootp", "onboot": "yes"},
                {"name": "eth1"},
                {"family": "ipx"}
            ]"#,
        )
        .unwrap_err();

        match err {
            DocumentError::Rejected { total, failures } => {
                assert_eq!(total, 3);
                let indexes: Vec<_> = failures.iter().map(|(index, _)| *index).collect();
                assert_eq!(indexes, vec![0, 2]);
                assert_eq!(failures[0].1.len(), 2);
                assert_eq!(failures[1].1.len(), 2);
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_all_rejected_message() {
        let err = validate_str(&collect_all(), r#"[{"name": "eth0"}, {"method": "dhcp"}]"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 entries failed validation");
    }

    #[test]
    fn test_collect_all_duplicate_name() {
        let err = validate_str(
            &collect_all(),
            r#"[{"name": "eth0"}, {"name": "eth1"}, {"name": "eth0", "method": "dhcp"}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Validation(ValidationError::DuplicateName { ref name }) if name == "eth0"
        ));
    }

    #[test]
    fn test_collect_all_keeps_defaults() {
        let records = validate_str(
            &collect_all(),
            r#"[{"name": "eth0", "method": "dhcp"}, {"name": "eth1", "family": "inet6"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name(), "eth1");
        assert!(records[0].options().is_empty());
    }
}
