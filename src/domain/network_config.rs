// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Configuration Record
//!
//! The normalized, immutable result of validating a raw attribute map.
//! Defaults are already applied: `ensure` is present, `family` is inet and
//! `options` is an empty mapping unless supplied.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::{AddressFamily, InterfaceAddress, Netmask};
use crate::errors::ValidationError;
use crate::validator::{ConfigSchemaValidator, RawAttributes};

/// Lifecycle state shared by ensurable resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl Ensure {
    /// Accepted attribute values
    pub const NAMES: &'static [&'static str] = &["present", "absent"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "present" => Some(Self::Present),
            "absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an interface obtains its address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMethod {
    Static,
    Manual,
    Dhcp,
}

impl ConfigMethod {
    pub const NAMES: &'static [&'static str] = &["static", "manual", "dhcp"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Manual => "manual",
            Self::Dhcp => "dhcp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "static" => Some(Self::Static),
            "manual" => Some(Self::Manual),
            "dhcp" => Some(Self::Dhcp),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated network interface configuration
///
/// # Invariants
/// - `name` is non-empty and is the sole identity key
/// - `ipaddress` and `netmask`, when set, are valid for `family`
/// - `options` is never absent, only empty
///
/// Serializes as its attribute map. Deserializing runs the default
/// validator, so a record cannot be built from JSON that fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawAttributes", try_from = "RawAttributes")]
pub struct NetworkConfigRecord {
    name: String,
    ensure: Ensure,
    ipaddress: Option<InterfaceAddress>,
    netmask: Option<Netmask>,
    method: Option<ConfigMethod>,
    family: AddressFamily,
    onboot: Option<bool>,
    reconfigure: Option<bool>,
    options: BTreeMap<String, String>,
}

impl NetworkConfigRecord {
    /// Assemble a record from already-validated parts
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        ensure: Ensure,
        ipaddress: Option<InterfaceAddress>,
        netmask: Option<Netmask>,
        method: Option<ConfigMethod>,
        family: AddressFamily,
        onboot: Option<bool>,
        reconfigure: Option<bool>,
        options: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name,
            ensure,
            ipaddress,
            netmask,
            method,
            family,
            onboot,
            reconfigure,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ensure(&self) -> Ensure {
        self.ensure
    }

    pub fn ipaddress(&self) -> Option<InterfaceAddress> {
        self.ipaddress
    }

    pub fn netmask(&self) -> Option<Netmask> {
        self.netmask
    }

    pub fn method(&self) -> Option<ConfigMethod> {
        self.method
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn onboot(&self) -> Option<bool> {
        self.onboot
    }

    pub fn reconfigure(&self) -> Option<bool> {
        self.reconfigure
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Render back into a raw attribute map
    ///
    /// Validating the result yields a record equal to `self`.
    pub fn to_attributes(&self) -> Map<String, Value> {
        let mut attrs = Map::new();
        attrs.insert("name".into(), Value::String(self.name.clone()));
        attrs.insert("ensure".into(), Value::String(self.ensure.as_str().into()));
        attrs.insert("family".into(), Value::String(self.family.as_str().into()));

        if let Some(address) = self.ipaddress {
            attrs.insert("ipaddress".into(), Value::String(address.to_string()));
        }
        if let Some(netmask) = self.netmask {
            attrs.insert("netmask".into(), Value::String(netmask.to_string()));
        }
        if let Some(method) = self.method {
            attrs.insert("method".into(), Value::String(method.as_str().into()));
        }
        if let Some(onboot) = self.onboot {
            attrs.insert("onboot".into(), Value::Bool(onboot));
        }
        if let Some(reconfigure) = self.reconfigure {
            attrs.insert("reconfigure".into(), Value::Bool(reconfigure));
        }

        let options = self
            .options
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        attrs.insert("options".into(), Value::Object(options));

        attrs
    }
}

impl From<NetworkConfigRecord> for RawAttributes {
    fn from(record: NetworkConfigRecord) -> Self {
        record.to_attributes()
    }
}

impl TryFrom<RawAttributes> for NetworkConfigRecord {
    type Error = ValidationError;

    fn try_from(raw: RawAttributes) -> Result<Self, Self::Error> {
        ConfigSchemaValidator::default().validate(&raw)
    }
}

impl fmt::Display for NetworkConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "network_config[{}] ({}, {})", self.name, self.ensure, self.family)
    }
}
