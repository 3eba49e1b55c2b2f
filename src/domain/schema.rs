// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Type Attribute Schema
//!
//! Static description of the attributes a resource type declares. The
//! validator walks this table instead of hard-coding per-attribute rules, so
//! the table is the single source of truth for attribute kind, value shape,
//! defaults and identity.
//!
//! # Attribute Kinds
//!
//! - **Parameter**: influences how a resource is managed (`name`, `reconfigure`)
//! - **Property**: desired managed state (`ipaddress`, `method`, ...)
//!
//! Ensurable resources carry an `ensure` property flagged with the
//! [`Capability::Ensurable`] capability.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::{AddressFamily, ConfigMethod, Ensure};

/// Whether an attribute is a parameter or a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Affects management, not part of managed state
    Parameter,
    /// Desired managed state
    Property,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter => write!(f, "param"),
            Self::Property => write!(f, "property"),
        }
    }
}

/// Shape a raw attribute value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueType {
    /// Non-empty identifier string
    Identifier,
    /// One of a fixed set of lowercase names
    Enum(&'static [&'static str]),
    /// IP address checked against the record's family
    IpAddress,
    /// CIDR-style netmask checked against the record's family
    Netmask,
    Boolean,
    /// Mapping of string keys to string values
    KeyValue,
}

impl ValueType {
    /// Human-readable description used in type mismatch errors
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Identifier => "non-empty string",
            Self::Enum(_) => "string",
            Self::IpAddress => "IP address string",
            Self::Netmask => "netmask string",
            Self::Boolean => "boolean",
            Self::KeyValue => "mapping of string to string",
        }
    }
}

/// Record field an attribute populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    Name,
    Ensure,
    IpAddress,
    Netmask,
    Method,
    Family,
    OnBoot,
    Reconfigure,
    Options,
}

/// Capabilities an attribute contributes to its resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Supports the present/absent lifecycle
    Ensurable,
}

/// Default applied when an attribute is not supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    EmptyMapping,
}

impl DefaultValue {
    /// Raw value equivalent to supplying the default explicitly
    pub fn to_value(&self) -> Value {
        match self {
            Self::Str(s) => Value::String((*s).to_string()),
            Self::EmptyMapping => Value::Object(Map::new()),
        }
    }
}

/// Declaration of a single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub field: RecordField,
    pub value_type: ValueType,
    /// Identity key of the resource
    pub namevar: bool,
    pub default: Option<DefaultValue>,
    pub capability: Option<Capability>,
}

impl AttributeSchema {
    const fn parameter(name: &'static str, field: RecordField, value_type: ValueType) -> Self {
        Self {
            name,
            kind: AttributeKind::Parameter,
            field,
            value_type,
            namevar: false,
            default: None,
            capability: None,
        }
    }

    const fn property(name: &'static str, field: RecordField, value_type: ValueType) -> Self {
        Self {
            name,
            kind: AttributeKind::Property,
            field,
            value_type,
            namevar: false,
            default: None,
            capability: None,
        }
    }

    const fn namevar(mut self) -> Self {
        self.namevar = true;
        self
    }

    const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    const fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Whether a missing value is an error
    pub fn is_required(&self) -> bool {
        self.namevar
    }

    /// Accepted names for enumerated attributes, empty otherwise
    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self.value_type {
            ValueType::Enum(names) => names,
            _ => &[],
        }
    }
}

/// Attribute table for the `network_config` resource type
///
/// `name` comes first and `family` second because address and netmask
/// checks depend on the resolved family.
pub const NETWORK_CONFIG_ATTRIBUTES: &[AttributeSchema] = &[
    AttributeSchema::parameter("name", RecordField::Name, ValueType::Identifier).namevar(),
    AttributeSchema::property("family", RecordField::Family, ValueType::Enum(AddressFamily::NAMES))
        .with_default(DefaultValue::Str("inet")),
    AttributeSchema::property("ensure", RecordField::Ensure, ValueType::Enum(Ensure::NAMES))
        .with_default(DefaultValue::Str("present"))
        .with_capability(Capability::Ensurable),
    AttributeSchema::property("ipaddress", RecordField::IpAddress, ValueType::IpAddress),
    AttributeSchema::property("netmask", RecordField::Netmask, ValueType::Netmask),
    AttributeSchema::property("method", RecordField::Method, ValueType::Enum(ConfigMethod::NAMES)),
    AttributeSchema::property("onboot", RecordField::OnBoot, ValueType::Boolean),
    AttributeSchema::parameter("reconfigure", RecordField::Reconfigure, ValueType::Boolean),
    AttributeSchema::property("options", RecordField::Options, ValueType::KeyValue)
        .with_default(DefaultValue::EmptyMapping),
];

/// Declarative schema of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTypeSchema {
    pub name: &'static str,
    pub attributes: &'static [AttributeSchema],
}

impl ResourceTypeSchema {
    /// Schema for network interface configuration
    pub const NETWORK_CONFIG: Self = Self {
        name: "network_config",
        attributes: NETWORK_CONFIG_ATTRIBUTES,
    };

    /// Look up an attribute declaration by name
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSchema> {
        let attributes: &'static [AttributeSchema] = self.attributes;
        attributes.iter().find(|attr| attr.name == name)
    }

    /// Kind of a declared attribute, `None` for unknown names
    pub fn attrtype(&self, name: &str) -> Option<AttributeKind> {
        self.attribute(name).map(|attr| attr.kind)
    }

    /// Attributes forming the identity key
    pub fn key_attributes(&self) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|attr| attr.namevar)
            .map(|attr| attr.name)
            .collect()
    }

    /// Whether any attribute grants the present/absent lifecycle
    pub fn is_ensurable(&self) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.capability == Some(Capability::Ensurable))
    }
}

impl fmt::Display for ResourceTypeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
