//! Network bearer selection.

use core::{fmt, str::FromStr};

use crate::error::UnknownBearer;

/// The network transport an [`EasyConnect`](crate::EasyConnect) drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bearer {
    /// Wired Ethernet.
    Ethernet,
    /// WNC14A2A cellular modem.
    Wnc14a2a {
        /// Debug output verbosity mask, `None` if debug output is disabled.
        debug: Option<u8>,
    },
    /// Quectel BG96 cellular modem.
    Bg96 {
        /// Debug output verbosity mask, `None` if debug output is disabled.
        debug: Option<u8>,
    },
}

impl Bearer {
    /// Bearer selected through Cargo features.
    pub const CONFIGURED: Self = SELECTED;

    /// Numeric identifier of [`Bearer::Wnc14a2a`] in application configurations.
    pub const WNC14A2A_ID: u16 = 203;
    /// Numeric identifier of [`Bearer::Bg96`] in application configurations.
    pub const BG96_ID: u16 = 204;

    /// Returns the name used in log messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ethernet => "Ethernet",
            Self::Wnc14a2a { .. } => "WNC14A2A",
            Self::Bg96 { .. } => "BG96",
        }
    }

    /// Returns the name this bearer is selected by in application configurations.
    ///
    /// This is the string accepted by the [`FromStr`] implementation.
    pub const fn config_name(&self) -> &'static str {
        match self {
            Self::Ethernet => "ETHERNET",
            Self::Wnc14a2a { .. } => "CELLULAR_WNC14A2A",
            Self::Bg96 { .. } => "CELLULAR_BG96",
        }
    }

    /// Returns the numeric identifier, cellular bearers only.
    pub const fn id(&self) -> Option<u16> {
        match self {
            Self::Ethernet => None,
            Self::Wnc14a2a { .. } => Some(Self::WNC14A2A_ID),
            Self::Bg96 { .. } => Some(Self::BG96_ID),
        }
    }

    /// Returns `true` for the cellular modems.
    pub const fn is_cellular(&self) -> bool {
        !matches!(self, Self::Ethernet)
    }

    /// Returns the debug output verbosity mask, if debug output is enabled.
    pub const fn debug_mask(&self) -> Option<u8> {
        match self {
            Self::Ethernet => None,
            Self::Wnc14a2a { debug } | Self::Bg96 { debug } => *debug,
        }
    }

    /// Enables debug output with the given verbosity mask.
    ///
    /// Ethernet has no debug output, so it is returned unchanged.
    #[must_use]
    pub const fn with_debug(self, mask: u8) -> Self {
        match self {
            Self::Ethernet => Self::Ethernet,
            Self::Wnc14a2a { .. } => Self::Wnc14a2a { debug: Some(mask) },
            Self::Bg96 { .. } => Self::Bg96 { debug: Some(mask) },
        }
    }
}

impl fmt::Display for Bearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bearer {
    type Err = UnknownBearer;

    /// Parses a configuration name, see [`Bearer::config_name()`].
    ///
    /// Debug output is left disabled.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ETHERNET" => Ok(Self::Ethernet),
            "CELLULAR_WNC14A2A" => Ok(Self::Wnc14a2a { debug: None }),
            "CELLULAR_BG96" => Ok(Self::Bg96 { debug: None }),
            _ => Err(UnknownBearer),
        }
    }
}

impl TryFrom<u16> for Bearer {
    type Error = UnknownBearer;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        match id {
            Self::WNC14A2A_ID => Ok(Self::Wnc14a2a { debug: None }),
            Self::BG96_ID => Ok(Self::Bg96 { debug: None }),
            _ => Err(UnknownBearer),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(
        feature = "ethernet",
        not(any(feature = "cellular-wnc14a2a", feature = "cellular-bg96"))
    ))] {
        const SELECTED: Bearer = Bearer::Ethernet;
    } else if #[cfg(all(
        feature = "cellular-wnc14a2a",
        not(any(feature = "ethernet", feature = "cellular-bg96"))
    ))] {
        #[cfg(feature = "wnc14a2a-debug")]
        const DEBUG: Option<u8> = Some(easy_connect_utils::u8_from_env_or!(
            "CONFIG_WNC14A2A_DEBUG_SETTING",
            0xFF,
            "WNC14A2A debug output verbosity mask"
        ));
        #[cfg(not(feature = "wnc14a2a-debug"))]
        const DEBUG: Option<u8> = None;

        const SELECTED: Bearer = Bearer::Wnc14a2a { debug: DEBUG };
    } else if #[cfg(all(
        feature = "cellular-bg96",
        not(any(feature = "ethernet", feature = "cellular-wnc14a2a"))
    ))] {
        #[cfg(feature = "bg96-debug")]
        const DEBUG: Option<u8> = Some(easy_connect_utils::u8_from_env_or!(
            "CONFIG_BG96_DEBUG_SETTING",
            0xFF,
            "BG96 debug output verbosity mask"
        ));
        #[cfg(not(feature = "bg96-debug"))]
        const DEBUG: Option<u8> = None;

        const SELECTED: Bearer = Bearer::Bg96 { debug: DEBUG };
    } else if #[cfg(any(
        feature = "ethernet",
        feature = "cellular-wnc14a2a",
        feature = "cellular-bg96"
    ))] {
        compile_error!(
            "more than one network bearer selected, enable exactly one of the `ethernet`, \
             `cellular-wnc14a2a` and `cellular-bg96` features"
        );
    } else {
        compile_error!(
            "no network bearer selected, enable one of the `ethernet`, `cellular-wnc14a2a` \
             and `cellular-bg96` features"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_names_parse_back() {
        for bearer in [
            Bearer::Ethernet,
            Bearer::Wnc14a2a { debug: None },
            Bearer::Bg96 { debug: None },
        ] {
            assert_eq!(bearer.config_name().parse::<Bearer>(), Ok(bearer));
        }
        assert_eq!("WIFI_ESP8266".parse::<Bearer>(), Err(UnknownBearer));
        assert_eq!("ethernet".parse::<Bearer>(), Err(UnknownBearer));
    }

    #[test]
    fn test_ids() {
        assert_eq!(Bearer::try_from(203), Ok(Bearer::Wnc14a2a { debug: None }));
        assert_eq!(Bearer::try_from(204), Ok(Bearer::Bg96 { debug: None }));
        assert_eq!(Bearer::try_from(0), Err(UnknownBearer));
        assert_eq!(Bearer::Ethernet.id(), None);
        assert_eq!(Bearer::Bg96 { debug: Some(1) }.id(), Some(Bearer::BG96_ID));
    }

    #[test]
    fn test_debug_mask() {
        assert_eq!(Bearer::Ethernet.with_debug(0x0F), Bearer::Ethernet);
        assert_eq!(Bearer::Ethernet.debug_mask(), None);

        let wnc = Bearer::Wnc14a2a { debug: None };
        assert_eq!(wnc.debug_mask(), None);
        assert_eq!(wnc.with_debug(0x0F).debug_mask(), Some(0x0F));
        assert!(wnc.is_cellular());
        assert!(!Bearer::Ethernet.is_cellular());
    }

    #[test]
    fn test_names() {
        assert_eq!(Bearer::Ethernet.name(), "Ethernet");
        assert_eq!(Bearer::Wnc14a2a { debug: Some(3) }.name(), "WNC14A2A");
        assert_eq!(Bearer::Bg96 { debug: None }.to_string(), "BG96");
    }

    #[cfg(all(
        feature = "ethernet",
        not(any(feature = "cellular-wnc14a2a", feature = "cellular-bg96"))
    ))]
    #[test]
    fn test_configured_ethernet() {
        assert_eq!(Bearer::CONFIGURED, Bearer::Ethernet);
    }

    // The mask the build was configured with, `0xFF` unless the variable was set.
    #[allow(dead_code)]
    fn expected_mask(setting: Option<&str>) -> u8 {
        setting.map_or(0xFF, |value| easy_connect_utils::parse_u8(value).unwrap())
    }

    #[cfg(all(
        feature = "cellular-wnc14a2a",
        not(any(feature = "ethernet", feature = "cellular-bg96"))
    ))]
    #[test]
    fn test_configured_wnc14a2a() {
        #[cfg(feature = "wnc14a2a-debug")]
        let debug = Some(expected_mask(option_env!("CONFIG_WNC14A2A_DEBUG_SETTING")));
        #[cfg(not(feature = "wnc14a2a-debug"))]
        let debug = None;

        assert_eq!(Bearer::CONFIGURED, Bearer::Wnc14a2a { debug });
        if option_env!("CONFIG_WNC14A2A_DEBUG_SETTING").is_none() {
            assert!(matches!(debug, None | Some(0xFF)));
        }
    }

    #[cfg(all(
        feature = "cellular-bg96",
        not(any(feature = "ethernet", feature = "cellular-wnc14a2a"))
    ))]
    #[test]
    fn test_configured_bg96() {
        #[cfg(feature = "bg96-debug")]
        let debug = Some(expected_mask(option_env!("CONFIG_BG96_DEBUG_SETTING")));
        #[cfg(not(feature = "bg96-debug"))]
        let debug = None;

        assert_eq!(Bearer::CONFIGURED, Bearer::Bg96 { debug });
        if option_env!("CONFIG_BG96_DEBUG_SETTING").is_none() {
            assert!(matches!(debug, None | Some(0xFF)));
        }
    }
}
