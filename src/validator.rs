// Copyright (c) 2025 - Cowboy AI, Inc.
//! Config Schema Validator
//!
//! Pure validation of raw attribute maps against a [`ResourceTypeSchema`].
//! The validator walks the schema table in order, resolves each attribute
//! (supplied value or schema default), checks its shape and constraints, and
//! assembles a [`NetworkConfigRecord`].
//!
//! Validation holds no state between calls.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::config::{UnknownAttributePolicy, ValidatorConfig};
use crate::domain::{
    AddressFamily, AttributeSchema, ConfigMethod, Ensure, InterfaceAddress, Netmask,
    NetworkConfigRecord, RecordField, ResourceTypeSchema,
};
use crate::errors::{ValidationError, ValidationResult};

/// Raw attribute name to value mapping supplied by a caller
pub type RawAttributes = Map<String, Value>;

/// Validates raw attribute maps into [`NetworkConfigRecord`]s
#[derive(Debug, Clone, Copy)]
pub struct ConfigSchemaValidator {
    schema: ResourceTypeSchema,
    config: ValidatorConfig,
}

impl Default for ConfigSchemaValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl ConfigSchemaValidator {
    /// Create a validator for the `network_config` resource type
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            schema: ResourceTypeSchema::NETWORK_CONFIG,
            config,
        }
    }

    pub fn schema(&self) -> &ResourceTypeSchema {
        &self.schema
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a raw attribute map, stopping at the first failure
    ///
    /// Declared attributes are checked in schema order; unknown attributes
    /// are reported after every declared attribute has passed.
    pub fn validate(&self, raw: &RawAttributes) -> ValidationResult<NetworkConfigRecord> {
        let mut draft = Draft::default();

        for attr in self.schema.attributes {
            self.apply(attr, raw, &mut draft)?;
        }

        if let Some(err) = self.unknown_attributes(raw).into_iter().next() {
            return Err(err);
        }

        let record = draft.finish()?;
        debug!("Validated {}", record);
        Ok(record)
    }

    /// Validate a raw attribute map, reporting every failure
    ///
    /// Address and netmask checks are skipped when the family itself is
    /// invalid.
    pub fn validate_all(
        &self,
        raw: &RawAttributes,
    ) -> Result<NetworkConfigRecord, Vec<ValidationError>> {
        let mut draft = Draft::default();
        let mut errors = Vec::new();

        for attr in self.schema.attributes {
            if let Err(err) = self.apply(attr, raw, &mut draft) {
                errors.push(err);
            }
        }
        errors.extend(self.unknown_attributes(raw));

        if !errors.is_empty() {
            debug!("Rejected {} with {} error(s)", self.schema, errors.len());
            return Err(errors);
        }

        let record = draft.finish().map_err(|err| vec![err])?;
        debug!("Validated {}", record);
        Ok(record)
    }

    /// Validate several attribute maps as one set of resources
    ///
    /// Fails on the first invalid map, or on a name already used by an
    /// earlier map in the batch.
    pub fn validate_batch(
        &self,
        raws: &[RawAttributes],
    ) -> ValidationResult<Vec<NetworkConfigRecord>> {
        let records = raws
            .iter()
            .map(|raw| self.validate(raw))
            .collect::<ValidationResult<Vec<_>>>()?;

        ensure_unique_names(&records)?;
        Ok(records)
    }

    /// Resolve, check and record a single declared attribute
    fn apply(
        &self,
        attr: &AttributeSchema,
        raw: &RawAttributes,
        draft: &mut Draft,
    ) -> ValidationResult<()> {
        // Explicit null is treated as not supplied
        let value = match raw.get(attr.name).filter(|v| !v.is_null()) {
            Some(value) => value.clone(),
            None => match attr.default {
                Some(default) => default.to_value(),
                None if attr.is_required() => return Err(missing(attr.name)),
                None => return Ok(()),
            },
        };

        match attr.field {
            RecordField::Name => draft.name = Some(identifier(attr, &value)?),
            RecordField::Family => draft.family = Some(choice(attr, &value, AddressFamily::parse)?),
            RecordField::Ensure => draft.ensure = Some(choice(attr, &value, Ensure::parse)?),
            RecordField::Method => draft.method = Some(choice(attr, &value, ConfigMethod::parse)?),
            RecordField::IpAddress => {
                let address = expect_str(attr, &value)?;
                if let Some(family) = draft.family {
                    let address = InterfaceAddress::new(address, family)
                        .map_err(|err| ValidationError::from_network(attr.name, err))?;
                    draft.ipaddress = Some(address);
                }
            }
            RecordField::Netmask => {
                let mask = expect_str(attr, &value)?;
                if let Some(family) = draft.family {
                    let netmask = Netmask::new(mask, family)
                        .map_err(|err| ValidationError::from_network(attr.name, err))?;
                    draft.netmask = Some(netmask);
                }
            }
            RecordField::OnBoot => draft.onboot = Some(flag(attr, &value)?),
            RecordField::Reconfigure => draft.reconfigure = Some(flag(attr, &value)?),
            RecordField::Options => draft.options = key_values(attr, &value)?,
        }

        Ok(())
    }

    /// Errors for attributes the schema does not declare
    fn unknown_attributes(&self, raw: &RawAttributes) -> Vec<ValidationError> {
        let unknown = raw
            .keys()
            .filter(|key| self.schema.attribute(key).is_none());

        match self.config.unknown_attributes {
            UnknownAttributePolicy::Reject => unknown
                .map(|key| ValidationError::UnknownAttribute {
                    attribute: key.clone(),
                })
                .collect(),
            UnknownAttributePolicy::Ignore => {
                for key in unknown {
                    warn!("Ignoring unknown {} attribute: {}", self.schema, key);
                }
                Vec::new()
            }
        }
    }
}

/// Fails with `DuplicateName` on the first name used twice
pub(crate) fn ensure_unique_names(records: &[NetworkConfigRecord]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name()) {
            return Err(ValidationError::DuplicateName {
                name: record.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Partially validated record
#[derive(Debug, Default)]
struct Draft {
    name: Option<String>,
    ensure: Option<Ensure>,
    ipaddress: Option<InterfaceAddress>,
    netmask: Option<Netmask>,
    method: Option<ConfigMethod>,
    /// `None` until the family attribute has passed validation
    family: Option<AddressFamily>,
    onboot: Option<bool>,
    reconfigure: Option<bool>,
    options: BTreeMap<String, String>,
}

impl Draft {
    /// Assemble the record; `name`, `ensure` and `family` must have resolved
    fn finish(self) -> ValidationResult<NetworkConfigRecord> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let ensure = self.ensure.ok_or_else(|| missing("ensure"))?;
        let family = self.family.ok_or_else(|| missing("family"))?;

        Ok(NetworkConfigRecord::from_parts(
            name,
            ensure,
            self.ipaddress,
            self.netmask,
            self.method,
            family,
            self.onboot,
            self.reconfigure,
            self.options,
        ))
    }
}

fn missing(attribute: &str) -> ValidationError {
    ValidationError::MissingRequiredAttribute {
        attribute: attribute.to_string(),
    }
}

/// Non-blank identifier string
fn identifier(attr: &AttributeSchema, value: &Value) -> ValidationResult<String> {
    let name = expect_str(attr, value)?;
    if name.trim().is_empty() {
        return Err(missing(attr.name));
    }
    Ok(name.to_string())
}

/// One of the attribute's enumerated names, parsed into its domain type
fn choice<T>(
    attr: &AttributeSchema,
    value: &Value,
    parse: fn(&str) -> Option<T>,
) -> ValidationResult<T> {
    let name = expect_str(attr, value)?;
    parse(name).ok_or_else(|| ValidationError::InvalidEnumValue {
        attribute: attr.name.to_string(),
        value: name.to_string(),
        allowed: attr.allowed_values().iter().map(|s| s.to_string()).collect(),
    })
}

fn flag(attr: &AttributeSchema, value: &Value) -> ValidationResult<bool> {
    value.as_bool().ok_or_else(|| mismatch(attr, value))
}

/// String-to-string mapping; a non-string entry is reported as `<attr>.<key>`
fn key_values(attr: &AttributeSchema, value: &Value) -> ValidationResult<BTreeMap<String, String>> {
    let map = value.as_object().ok_or_else(|| mismatch(attr, value))?;
    map.iter()
        .map(|(key, entry)| {
            let entry = entry.as_str().ok_or_else(|| ValidationError::TypeMismatch {
                attribute: format!("{}.{}", attr.name, key),
                expected: "string".to_string(),
                actual: json_type(entry).to_string(),
            })?;
            Ok((key.clone(), entry.to_string()))
        })
        .collect()
}

fn expect_str<'a>(attr: &AttributeSchema, value: &'a Value) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| mismatch(attr, value))
}

fn mismatch(attr: &AttributeSchema, value: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        attribute: attr.name.to_string(),
        expected: attr.value_type.describe().to_string(),
        actual: json_type(value).to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
