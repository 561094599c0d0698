use core::fmt;

use crate::netif::DriverStatus;

/// Why [`easy_connect()`](crate::easy_connect) did not return a usable interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectError {
    /// The driver failed to bring the interface up.
    Connect(DriverStatus),
    /// The interface came up but has no IP address.
    NoIpAddress,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(status) => write!(f, "connection to network failed ({status})"),
            Self::NoIpAddress => f.write_str("no IP address"),
        }
    }
}

impl core::error::Error for ConnectError {}

/// The string does not name a known network bearer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownBearer;

impl fmt::Display for UnknownBearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown network bearer")
    }
}

impl core::error::Error for UnknownBearer {}
