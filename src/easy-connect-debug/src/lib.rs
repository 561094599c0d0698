//! Provides debug logging facilities.
//!
//! Log messages go to `defmt` when the `defmt` feature is enabled, to the [`log`](https://docs.rs/log)
//! facade when only the `log` feature is enabled, and nowhere otherwise.
#![cfg_attr(not(test), no_std)]

pub mod log {
    //! Logging macros.
    //!
    //! Format strings must stay within the subset understood by both `core::fmt` and `defmt`.

    #[cfg(feature = "defmt")]
    pub use ::defmt::{debug, error, info, trace, warn};

    #[cfg(all(feature = "log", not(feature = "defmt")))]
    pub use ::log::{debug, error, info, trace, warn};

    #[cfg(not(any(feature = "defmt", feature = "log")))]
    pub use crate::{
        __log_noop as debug, __log_noop as error, __log_noop as info, __log_noop as trace,
        __log_noop as warn,
    };
}

/// Swallows a log message while still type-checking its arguments.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_noop {
    ($($arg:tt)*) => {{
        let _ = || {
            let _ = ::core::format_args!($($arg)*);
        };
    }};
}
