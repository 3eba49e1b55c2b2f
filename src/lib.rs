// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network interface configuration for the Composable Information Machine
//!
//! This crate provides the `network_config` resource type schema and a pure
//! validator that turns raw attribute maps into normalized
//! [`NetworkConfigRecord`]s.

pub mod config;
pub mod document;
pub mod domain;
pub mod errors;
pub mod validator;

// Re-export commonly used types
pub use config::{ErrorPolicy, UnknownAttributePolicy, ValidatorConfig};
pub use document::{parse_document, validate_document, DocumentError};
pub use domain::{AddressFamily, ConfigMethod, Ensure, NetworkConfigRecord, ResourceTypeSchema};
pub use errors::{ValidationError, ValidationResult};
pub use validator::{ConfigSchemaValidator, RawAttributes};
