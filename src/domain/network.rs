// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Value Objects with Validation Invariants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Network validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("Address {address} is not valid for the {family} family")]
    FamilyMismatch {
        address: String,
        family: AddressFamily,
    },

    #[error("Invalid netmask format: {0}")]
    InvalidNetmask(String),

    #[error("Invalid prefix length: {prefix} (must be 0-{} for {family})", .family.max_prefix())]
    InvalidPrefixLength { prefix: u32, family: AddressFamily },
}

/// Address family of an interface configuration
///
/// `inet` is IPv4, `inet6` is IPv6. Defaults to `inet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    #[default]
    Inet,
    Inet6,
}

impl AddressFamily {
    /// All accepted family names, in declaration order
    pub const NAMES: &'static [&'static str] = &["inet", "inet6"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inet => "inet",
            Self::Inet6 => "inet6",
        }
    }

    /// Parse an exact family name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inet" => Some(Self::Inet),
            "inet6" => Some(Self::Inet6),
            _ => None,
        }
    }

    /// Longest prefix length allowed for this family
    pub fn max_prefix(&self) -> u32 {
        match self {
            Self::Inet => 32,
            Self::Inet6 => 128,
        }
    }

    /// Check whether an address belongs to this family
    pub fn matches(&self, address: &IpAddr) -> bool {
        matches!(
            (self, address),
            (Self::Inet, IpAddr::V4(_)) | (Self::Inet6, IpAddr::V6(_))
        )
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interface address value object
///
/// An IPv4 or IPv6 address that has been checked against an address family.
/// Invariants:
/// - Valid IP address format
/// - Address version matches the family it was validated for
///
/// # Examples
///
/// ```rust
/// use cim_network_config::domain::{AddressFamily, InterfaceAddress};
///
/// let addr = InterfaceAddress::new("127.0.0.1", AddressFamily::Inet).unwrap();
/// assert_eq!(addr.to_string(), "127.0.0.1");
/// assert!(InterfaceAddress::new("::1", AddressFamily::Inet).is_err());
/// ```
///
/// Serializes as the address string. There is no `Deserialize`; build one
/// through [`InterfaceAddress::new`] so the family check always runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InterfaceAddress(IpAddr);

impl InterfaceAddress {
    /// Parse an address and check it against `family`
    ///
    /// # Invariants
    /// - Valid IP address format
    /// - IPv4 for `inet`, IPv6 for `inet6`
    pub fn new(address: impl AsRef<str>, family: AddressFamily) -> Result<Self, NetworkError> {
        let address = address.as_ref();
        let parsed: IpAddr = address
            .parse()
            .map_err(|_| NetworkError::InvalidIpAddress(address.to_string()))?;

        if !family.matches(&parsed) {
            return Err(NetworkError::FamilyMismatch {
                address: address.to_string(),
                family,
            });
        }

        Ok(Self(parsed))
    }

    /// Get the IP address
    pub fn address(&self) -> IpAddr {
        self.0
    }

    /// Family the address belongs to
    pub fn family(&self) -> AddressFamily {
        match self.0 {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(_) => AddressFamily::Inet6,
        }
    }
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CIDR netmask value object
///
/// Stored as a prefix length. Accepts a decimal prefix with an optional
/// leading slash (`24`, `/64`) or, for `inet`, a contiguous dotted-quad mask
/// (`255.255.255.0`).
/// Invariants:
/// - Prefix length 0-32 for `inet`, 0-128 for `inet6`
/// - Dotted masks have contiguous leading one bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Netmask(u8);

impl Netmask {
    /// Parse a netmask for the given family
    pub fn new(mask: impl AsRef<str>, family: AddressFamily) -> Result<Self, NetworkError> {
        let mask = mask.as_ref();
        let digits = mask.strip_prefix('/').unwrap_or(mask);

        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let prefix = digits
                .parse::<u32>()
                .map_err(|_| NetworkError::InvalidNetmask(mask.to_string()))?;
            return Self::from_prefix(prefix, family);
        }

        // Dotted-quad form only exists for IPv4
        if family == AddressFamily::Inet && !mask.starts_with('/') {
            if let Ok(dotted) = mask.parse::<Ipv4Addr>() {
                let bits = u32::from(dotted);
                if bits.leading_ones() + bits.trailing_zeros() == 32 {
                    return Self::from_prefix(bits.leading_ones(), family);
                }
            }
        }

        Err(NetworkError::InvalidNetmask(mask.to_string()))
    }

    /// Create from a prefix length
    pub fn from_prefix(prefix: u32, family: AddressFamily) -> Result<Self, NetworkError> {
        if prefix > family.max_prefix() {
            return Err(NetworkError::InvalidPrefixLength { prefix, family });
        }
        // max_prefix is at most 128
        Ok(Self(prefix as u8))
    }

    /// Get the prefix length
    pub fn prefix_length(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Netmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
