//! DNP3 link address types

use crate::error::{Dnp3Error, Dnp3Result};
use std::fmt;

/// Reserved DNP3 link addresses
pub mod reserved {
    /// Self-address, accepted by an outstation regardless of its own address
    pub const SELF_ADDRESS: u16 = 0xFFFC;

    /// Broadcast, application confirmation optional
    pub const BROADCAST_CONFIRM_OPTIONAL: u16 = 0xFFFD;

    /// Broadcast, application confirmation not requested
    pub const BROADCAST_NO_CONFIRM: u16 = 0xFFFE;

    /// Broadcast, application confirmation required
    pub const BROADCAST_CONFIRM_REQUIRED: u16 = 0xFFFF;
}

/// 16-bit DNP3 link address
///
/// Transmitted little-endian in the frame header. Conversions from wider
/// integers fail with [`Dnp3Error::AddressOutOfRange`] instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LinkAddress(u16);

impl LinkAddress {
    /// Create a link address
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Validate a wider integer as a link address
    ///
    /// `field` names the header field ("source", "destination") in the error.
    pub fn checked(field: &'static str, value: i64) -> Dnp3Result<Self> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| Dnp3Error::AddressOutOfRange { field, value })
    }

    /// Get the numeric address
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Encode address to its wire form
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Check if this is one of the three broadcast addresses
    pub fn is_broadcast(&self) -> bool {
        self.0 >= reserved::BROADCAST_CONFIRM_OPTIONAL
    }

    /// Check if this is the self-address
    pub fn is_self_address(&self) -> bool {
        self.0 == reserved::SELF_ADDRESS
    }
}

impl From<u16> for LinkAddress {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<LinkAddress> for u16 {
    fn from(address: LinkAddress) -> Self {
        address.0
    }
}

impl TryFrom<u32> for LinkAddress {
    type Error = Dnp3Error;

    fn try_from(value: u32) -> Dnp3Result<Self> {
        Self::checked("link", i64::from(value))
    }
}

impl TryFrom<i32> for LinkAddress {
    type Error = Dnp3Error;

    fn try_from(value: i32) -> Dnp3Result<Self> {
        Self::checked("link", i64::from(value))
    }
}

impl TryFrom<i64> for LinkAddress {
    type Error = Dnp3Error;

    fn try_from(value: i64) -> Dnp3Result<Self> {
        Self::checked("link", value)
    }
}

impl fmt::Display for LinkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
