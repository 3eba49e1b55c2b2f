// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Configuration Domain Models
//!
//! Value objects with validation invariants and the static attribute schema
//! for the `network_config` resource type.
//!
//! # Value Objects with Invariants
//!
//! - [`InterfaceAddress`] - IPv4/IPv6 address checked against an [`AddressFamily`]
//! - [`Netmask`] - CIDR prefix length, parsed from prefix or dotted-quad form
//!
//! # Schema
//!
//! - [`ResourceTypeSchema`] - attribute table with kinds, value types and defaults
//!
//! # Entities
//!
//! - [`NetworkConfigRecord`] - normalized interface configuration

pub mod network;
pub mod network_config;
pub mod schema;

pub use network::{AddressFamily, InterfaceAddress, Netmask, NetworkError};
pub use network_config::{ConfigMethod, Ensure, NetworkConfigRecord};
pub use schema::{
    AttributeKind, AttributeSchema, Capability, DefaultValue, RecordField, ResourceTypeSchema,
    ValueType,
};
