// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for network configuration validation

use thiserror::Error;

use crate::domain::NetworkError;

/// Errors raised while validating a network configuration record
///
/// Every variant is a local, non-retryable failure that is surfaced to the
/// caller as-is. Invalid input is never coerced into a valid record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required attribute is absent or empty
    #[error("Missing required attribute: {attribute}")]
    MissingRequiredAttribute { attribute: String },

    /// Value is not a member of the attribute's enumeration
    #[error("Invalid value '{value}' for {attribute} (expected one of: {})", .allowed.join(", "))]
    InvalidEnumValue {
        attribute: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Address does not parse under the record's address family
    #[error("Invalid address for {attribute}: {reason}")]
    InvalidAddressFormat { attribute: String, reason: String },

    /// Netmask is not a valid CIDR-style mask
    #[error("Invalid netmask for {attribute}: {reason}")]
    InvalidMaskFormat { attribute: String, reason: String },

    /// Value has the wrong shape for the attribute
    #[error("Type mismatch for {attribute}: expected {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// Attribute is not declared by the resource type
    #[error("Unknown attribute: {attribute}")]
    UnknownAttribute { attribute: String },

    /// Two records in one batch share the same name
    #[error("Duplicate resource name: {name}")]
    DuplicateName { name: String },
}

impl ValidationError {
    /// Name of the attribute the error refers to
    pub fn attribute(&self) -> &str {
        match self {
            Self::MissingRequiredAttribute { attribute }
            | Self::InvalidEnumValue { attribute, .. }
            | Self::InvalidAddressFormat { attribute, .. }
            | Self::InvalidMaskFormat { attribute, .. }
            | Self::TypeMismatch { attribute, .. }
            | Self::UnknownAttribute { attribute } => attribute,
            Self::DuplicateName { .. } => "name",
        }
    }

    /// Map a value-object failure onto the address or mask kind
    pub(crate) fn from_network(attribute: &str, err: NetworkError) -> Self {
        match err {
            NetworkError::InvalidIpAddress(_) | NetworkError::FamilyMismatch { .. } => {
                Self::InvalidAddressFormat {
                    attribute: attribute.to_string(),
                    reason: err.to_string(),
                }
            }
            NetworkError::InvalidNetmask(_) | NetworkError::InvalidPrefixLength { .. } => {
                Self::InvalidMaskFormat {
                    attribute: attribute.to_string(),
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
