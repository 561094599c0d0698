//! Build-time configuration helpers.
//!
//! The macros in this crate read `CONFIG_*` environment variables while the crate using them is
//! being compiled, and turn them into `const` values.
//! A variable that is set but cannot be parsed fails the build.
#![cfg_attr(not(test), no_std)]

#[doc(hidden)]
pub use const_panic;
#[doc(hidden)]
pub use konst;

/// Reads a `u8` at compile time from the given environment variable, or returns the default.
///
/// Accepts decimal (`255`) and `0x`-prefixed hexadecimal (`0xFF`) values.
///
/// # Panics
///
/// Panics at compile time if the variable is set but is not a valid `u8`.
#[macro_export]
macro_rules! u8_from_env_or {
    ($env_var:literal, $default:expr, $doc:literal $(,)?) => {
        const {
            match option_env!($env_var) {
                Some(value) => match $crate::parse_u8(value) {
                    Some(int_value) => int_value,
                    None => $crate::const_panic::concat_panic!(
                        "could not parse `",
                        $env_var,
                        "=",
                        value,
                        "` as u8 (",
                        $doc,
                        ")"
                    ),
                },
                None => $default,
            }
        }
    };
}

/// Parses a decimal or `0x`-prefixed hexadecimal `u8`.
#[doc(hidden)]
pub const fn parse_u8(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [b'0', b'x' | b'X', digits @ ..] => parse_hex_u8(digits),
        _ => match konst::primitive::parse_u8(value) {
            Ok(int_value) => Some(int_value),
            Err(_) => None,
        },
    }
}

const fn parse_hex_u8(mut digits: &[u8]) -> Option<u8> {
    if digits.is_empty() {
        return None;
    }

    let mut value: u8 = 0;
    while let [digit, rest @ ..] = digits {
        let nibble = match *digit {
            b'0'..=b'9' => *digit - b'0',
            b'a'..=b'f' => *digit - b'a' + 10,
            b'A'..=b'F' => *digit - b'A' + 10,
            _ => return None,
        };
        // the next shift would drop the high nibble
        if value > 0x0F {
            return None;
        }
        value = (value << 4) | nibble;
        digits = rest;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u8_decimal() {
        assert_eq!(parse_u8("0"), Some(0));
        assert_eq!(parse_u8("42"), Some(42));
        assert_eq!(parse_u8("255"), Some(255));
        assert_eq!(parse_u8("256"), None);
        assert_eq!(parse_u8("-1"), None);
        assert_eq!(parse_u8(""), None);
    }

    #[test]
    fn test_parse_u8_hex() {
        assert_eq!(parse_u8("0x0"), Some(0));
        assert_eq!(parse_u8("0xff"), Some(0xFF));
        assert_eq!(parse_u8("0XA5"), Some(0xA5));
        assert_eq!(parse_u8("0x00ff"), Some(0xFF));
        assert_eq!(parse_u8("0x100"), None);
        assert_eq!(parse_u8("0x"), None);
        assert_eq!(parse_u8("0xg1"), None);
    }

    #[test]
    fn test_macro_falls_back_to_default() {
        const MASK: u8 = u8_from_env_or!("CONFIG_EASY_CONNECT_UNSET_MASK", 0x3C, "test mask");
        assert_eq!(MASK, 0x3C);
    }
}
