//! The capabilities a network interface driver provides.

use core::{fmt, num::NonZeroI32};

/// A network interface driver.
///
/// Drivers for Ethernet controllers and cellular modems implement this trait; this crate only
/// selects one and drives it through [`easy_connect()`](crate::easy_connect).
pub trait NetworkInterface {
    /// Brings the interface up.
    ///
    /// May block for as long as the driver needs, this crate does not impose a timeout.
    fn connect(&mut self) -> Result<(), DriverStatus>;

    /// Returns the MAC address, if the driver can tell.
    fn mac_address(&self) -> Option<&str>;

    /// Returns the IP address, if one has been assigned.
    fn ip_address(&self) -> Option<&str>;

    /// Enables debug output with the given verbosity mask.
    ///
    /// Only cellular modem drivers have debug output, the default implementation does nothing.
    fn set_debug(&mut self, mask: u8) {
        let _ = mask;
    }
}

impl<T: NetworkInterface + ?Sized> NetworkInterface for &mut T {
    fn connect(&mut self) -> Result<(), DriverStatus> {
        (**self).connect()
    }

    fn mac_address(&self) -> Option<&str> {
        (**self).mac_address()
    }

    fn ip_address(&self) -> Option<&str> {
        (**self).ip_address()
    }

    fn set_debug(&mut self, mask: u8) {
        (**self).set_debug(mask)
    }
}

/// Non-success status code reported by a driver.
///
/// Zero means success in driver status codes, so it cannot be represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverStatus(NonZeroI32);

impl DriverStatus {
    /// Returns `None` for the success code `0`.
    pub const fn new(code: i32) -> Option<Self> {
        match NonZeroI32::new(code) {
            Some(code) => Some(Self(code)),
            None => None,
        }
    }

    /// Converts a C-style status code into a `Result`.
    pub const fn check(code: i32) -> Result<(), Self> {
        match Self::new(code) {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    /// Returns the raw status code, never `0`.
    pub const fn code(self) -> i32 {
        self.0.get()
    }
}

impl From<NonZeroI32> for DriverStatus {
    fn from(code: NonZeroI32) -> Self {
        Self(code)
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DriverStatus {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", self.code())
    }
}
