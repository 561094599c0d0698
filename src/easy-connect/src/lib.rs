//! Connects the network bearer selected at build time.
//!
//! Exactly one bearer (wired Ethernet or one of the supported cellular modems) is selected
//! through Cargo features, see [`Bearer::CONFIGURED`].
//! The driver for it is constructed by the application and handed to [`EasyConnect`], which
//! brings it up and reports the addressing it got.
//!
//! ```
//! use easy_connect::{DriverStatus, EasyConnect, NetworkInterface};
//!
//! struct Eth {
//!     up: bool,
//! }
//!
//! impl NetworkInterface for Eth {
//!     fn connect(&mut self) -> Result<(), DriverStatus> {
//!         self.up = true;
//!         Ok(())
//!     }
//!
//!     fn mac_address(&self) -> Option<&str> {
//!         Some("02:00:00:00:00:01")
//!     }
//!
//!     fn ip_address(&self) -> Option<&str> {
//!         self.up.then_some("10.0.0.2")
//!     }
//! }
//!
//! let mut bearer = EasyConnect::new(Eth { up: false });
//! let netif = bearer.connect(true).unwrap();
//! assert_eq!(netif.ip_address(), Some("10.0.0.2"));
//! ```
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![cfg_attr(not(test), no_std)]

mod bearer;
mod error;
mod netif;

pub use bearer::Bearer;
pub use error::{ConnectError, UnknownBearer};
pub use netif::{DriverStatus, NetworkInterface};

use easy_connect_debug::log::{error, info};

/// Address of the device management server.
pub const SERVER_ADDRESS: &str = "coap://api.connector.mbed.com:5684";

/// Owns the driver of the selected network bearer.
///
/// Both entry points take `&mut self`, so calls into the driver are never interleaved.
/// Place it in a `static_cell::StaticCell` when the interface has to live for the rest of the
/// program.
pub struct EasyConnect<D> {
    bearer: Bearer,
    netif: D,
}

impl<D: NetworkInterface> EasyConnect<D> {
    /// Wraps the driver for the bearer selected through Cargo features.
    pub const fn new(netif: D) -> Self {
        Self::with_bearer(Bearer::CONFIGURED, netif)
    }

    /// Wraps the driver for a bearer selected at runtime.
    pub const fn with_bearer(bearer: Bearer, netif: D) -> Self {
        Self { bearer, netif }
    }

    /// Returns the bearer this driver was selected for.
    pub fn bearer(&self) -> Bearer {
        self.bearer
    }

    /// Connects the interface, see [`easy_connect()`].
    pub fn connect(&mut self, log_messages: bool) -> Result<&mut D, ConnectError> {
        easy_connect(self.bearer, &mut self.netif, log_messages)
    }

    /// Returns the interface without connecting it, see [`easy_get_netif()`].
    pub fn netif(&mut self, log_messages: bool) -> &mut D {
        easy_get_netif(self.bearer, &mut self.netif, log_messages)
    }

    /// Gives back the driver.
    pub fn into_inner(self) -> D {
        self.netif
    }
}

/// Connects `netif` and checks that it got an IP address.
///
/// If `log_messages` is set, progress, the MAC address and the IP address are logged.
/// Cellular debug output is enabled before connecting if `bearer` carries a debug mask.
///
/// # Errors
///
/// - [`ConnectError::Connect`] if the driver fails to connect.
/// - [`ConnectError::NoIpAddress`] if it connected but has no IP address.
///
/// Callers that only care whether an interface is available can use [`Result::ok()`].
pub fn easy_connect<D: NetworkInterface + ?Sized>(
    bearer: Bearer,
    netif: &mut D,
    log_messages: bool,
) -> Result<&mut D, ConnectError> {
    if log_messages {
        info!("[EasyConnect] Using {}", bearer.name());
    }

    if let Some(mask) = bearer.debug_mask() {
        if log_messages {
            info!(
                "[EasyConnect] With {} debug output set to 0x{:02X}",
                bearer.name(),
                mask
            );
        }
        netif.set_debug(mask);
    }

    if let Err(status) = netif.connect() {
        if log_messages {
            print_mac(netif, log_messages);
            error!("[EasyConnect] Connection to Network Failed {}!", status);
        }
        return Err(ConnectError::Connect(status));
    }

    if log_messages {
        info!("[EasyConnect] Connected to Network successfully");
        print_mac(netif, log_messages);
    }

    let Some(ip_address) = netif.ip_address() else {
        if log_messages {
            error!("[EasyConnect] ERROR - No IP address");
        }
        return Err(ConnectError::NoIpAddress);
    };

    if log_messages {
        info!("[EasyConnect] IP address {}", ip_address);
    }

    Ok(netif)
}

/// Returns `netif` without connecting it.
///
/// Useful when interface-specific setup has to happen before connecting.
pub fn easy_get_netif<D: ?Sized>(bearer: Bearer, netif: &mut D, log_messages: bool) -> &mut D {
    if log_messages {
        info!("[EasyConnect] {}", bearer.name());
    }
    netif
}

/// Logs the MAC address of `netif`, or that it has none.
pub fn print_mac<D: NetworkInterface + ?Sized>(netif: &D, log_messages: bool) {
    let mac_address = netif.mac_address();
    if !log_messages {
        return;
    }
    match mac_address {
        Some(mac_address) => info!("[EasyConnect] MAC address {}", mac_address),
        None => error!("[EasyConnect] ERROR - No MAC address"),
    }
}
