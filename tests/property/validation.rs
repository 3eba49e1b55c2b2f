// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Config Schema Validator
//!
//! Verifies the address/family symmetry, netmask bounds and idempotence of
//! validation across generated inputs.

use cim_network_config::{ConfigSchemaValidator, RawAttributes, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::net::{Ipv4Addr, Ipv6Addr};

// ============================================================================
// Strategies
// ============================================================================

fn ipv4() -> impl Strategy<Value = String> {
    any::<u32>().prop_map(|bits| Ipv4Addr::from(bits).to_string())
}

fn ipv6() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|bits| Ipv6Addr::from(bits).to_string())
}

fn interface_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn method() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop_oneof![Just("static"), Just("manual"), Just("dhcp")])
}

fn options() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z_]{1,8}", "[a-z0-9]{0,8}", 0..4).prop_map(|map| {
        map.into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

/// Arbitrary valid attribute map
fn valid_attributes() -> impl Strategy<Value = RawAttributes> {
    (
        interface_name(),
        prop::bool::ANY,
        method(),
        prop::option::of(prop::bool::ANY),
        options(),
        any::<u32>(),
        any::<u128>(),
    )
        .prop_map(|(name, v6, method, onboot, options, bits4, bits6)| {
            let mut raw = Map::new();
            raw.insert("name".into(), json!(name));
            if v6 {
                raw.insert("family".into(), json!("inet6"));
                raw.insert("ipaddress".into(), json!(Ipv6Addr::from(bits6).to_string()));
                raw.insert("netmask".into(), json!((bits6 % 129).to_string()));
            } else {
                raw.insert("ipaddress".into(), json!(Ipv4Addr::from(bits4).to_string()));
                raw.insert("netmask".into(), json!((bits4 % 33).to_string()));
            }
            if let Some(method) = method {
                raw.insert("method".into(), json!(method));
            }
            if let Some(onboot) = onboot {
                raw.insert("onboot".into(), json!(onboot));
            }
            raw.insert("options".into(), Value::Object(options));
            raw
        })
}

fn with(pairs: Value) -> RawAttributes {
    match pairs {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: IPv4 addresses are valid for inet and invalid for inet6
    #[test]
    fn prop_ipv4_requires_inet(address in ipv4()) {
        let validator = ConfigSchemaValidator::default();

        let accepted = validator.validate(&with(json!({
            "name": "x", "family": "inet", "ipaddress": address
        })));
        prop_assert!(accepted.is_ok());

        let rejected = validator.validate(&with(json!({
            "name": "x", "family": "inet6", "ipaddress": address
        })));
        prop_assert!(
            matches!(rejected, Err(ValidationError::InvalidAddressFormat { .. })),
            "IPv4 address must not validate under inet6"
        );
    }

    /// Property: IPv6 addresses are valid for inet6 and invalid for inet
    #[test]
    fn prop_ipv6_requires_inet6(address in ipv6()) {
        let validator = ConfigSchemaValidator::default();

        let accepted = validator.validate(&with(json!({
            "name": "x", "family": "inet6", "ipaddress": address
        })));
        prop_assert!(accepted.is_ok());

        let rejected = validator.validate(&with(json!({
            "name": "x", "family": "inet", "ipaddress": address
        })));
        prop_assert!(
            matches!(rejected, Err(ValidationError::InvalidAddressFormat { .. })),
            "IPv6 address must not validate under inet"
        );
    }

    /// Property: Prefix lengths are bounded by the family
    #[test]
    fn prop_prefix_bounded_by_family(prefix in 0u32..256) {
        let validator = ConfigSchemaValidator::default();

        let v4 = validator.validate(&with(json!({
            "name": "x", "netmask": prefix.to_string()
        })));
        prop_assert_eq!(v4.is_ok(), prefix <= 32);

        let v6 = validator.validate(&with(json!({
            "name": "x", "family": "inet6", "netmask": prefix.to_string()
        })));
        prop_assert_eq!(v6.is_ok(), prefix <= 128);
    }

    /// Property: Any method outside the enumeration is rejected
    #[test]
    fn prop_unknown_method_rejected(method in "[a-z]{1,10}") {
        prop_assume!(!["static", "manual", "dhcp"].contains(&method.as_str()));

        let result = ConfigSchemaValidator::default().validate(&with(json!({
            "name": "x", "method": method
        })));
        prop_assert!(
            matches!(result, Err(ValidationError::InvalidEnumValue { .. })),
            "Unknown method must be rejected"
        );
    }

    /// Property: Validation is idempotent
    ///
    /// Re-validating the attributes of a validated record yields the same record.
    #[test]
    fn prop_validation_idempotent(raw in valid_attributes()) {
        let validator = ConfigSchemaValidator::default();

        let record = validator.validate(&raw);
        prop_assert!(record.is_ok(), "Generated attributes must be valid: {:?}", record);
        let record = record.unwrap();

        let again = validator.validate(&record.to_attributes());
        prop_assert_eq!(again, Ok(record));
    }

    /// Property: Fail-fast reports the first error collect-all finds
    #[test]
    fn prop_fail_fast_matches_first_collected(
        method in "[A-Z]{1,5}",
        onboot in "[a-z]{1,5}",
    ) {
        let raw = with(json!({"name": "x", "method": method, "onboot": onboot}));
        let validator = ConfigSchemaValidator::default();

        let first = validator.validate(&raw).unwrap_err();
        let all = validator.validate_all(&raw).unwrap_err();
        prop_assert_eq!(all.len(), 2);
        prop_assert_eq!(&all[0], &first);
    }
}
