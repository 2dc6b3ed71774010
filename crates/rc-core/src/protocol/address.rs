//! Bluetooth device address handling.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Length of a Bluetooth device address in bytes.
pub const DEVICE_ADDRESS_LEN: usize = 6;

/// Errors raised while building a [`DeviceAddress`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The address is not exactly six bytes / twelve hex digits.
    #[error("invalid device address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: &'static str },
}

/// A six-byte Bluetooth device address, stored in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceAddress([u8; DEVICE_ADDRESS_LEN]);

impl DeviceAddress {
    /// Wraps six bytes already known to be an address.
    pub const fn new(bytes: [u8; DEVICE_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds an address from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidAddress`] unless `bytes` is exactly six
    /// bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let array: [u8; DEVICE_ADDRESS_LEN] =
            bytes.try_into().map_err(|_| AddressError::InvalidAddress {
                input: format!("{bytes:02x?}"),
                reason: "expected exactly 6 bytes",
            })?;
        Ok(Self(array))
    }

    /// Parses twelve hex digits, optionally prefixed with `0x`.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidAddress`] for a wrong digit count or a
    /// non-hex character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rc_core::protocol::DeviceAddress;
    ///
    /// let addr = DeviceAddress::parse_hex("0xabbaface1234").unwrap();
    /// assert_eq!(addr.as_bytes(), &[0xAB, 0xBA, 0xFA, 0xCE, 0x12, 0x34]);
    /// ```
    pub fn parse_hex(input: &str) -> Result<Self, AddressError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if digits.len() != DEVICE_ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidAddress {
                input: input.to_string(),
                reason: "expected 12 hex digits",
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidAddress {
                input: input.to_string(),
                reason: "non-hex character",
            });
        }

        let mut bytes = [0u8; DEVICE_ADDRESS_LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }

    /// The address bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; DEVICE_ADDRESS_LEN] {
        &self.0
    }
}

/// Value of an ASCII hex digit; callers validate the input first.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

impl FromStr for DeviceAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_plain_digits() {
        let addr = DeviceAddress::parse_hex("abbaface1234").unwrap();
        assert_eq!(addr.as_bytes(), &[0xAB, 0xBA, 0xFA, 0xCE, 0x12, 0x34]);
    }

    #[test]
    fn test_parse_hex_accepts_0x_prefix_and_uppercase() {
        let addr = DeviceAddress::parse_hex("0XABBAFACE1234").unwrap();
        assert_eq!(addr.to_string(), "abbaface1234");
    }

    #[test]
    fn test_parse_hex_rejects_wrong_length() {
        for input in ["", "abba", "abbaface12345", "0xabbaface12"] {
            assert!(
                matches!(
                    DeviceAddress::parse_hex(input),
                    Err(AddressError::InvalidAddress { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_hex_rejects_non_hex_characters() {
        assert!(DeviceAddress::parse_hex("abbafacezz34").is_err());
        // Twelve bytes but not twelve characters.
        assert!(DeviceAddress::parse_hex("ääbaface12").is_err());
        assert!(DeviceAddress::parse_hex("+abbaface123").is_err());
    }

    #[test]
    fn test_from_bytes_requires_six_bytes() {
        assert!(DeviceAddress::from_bytes(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert!(DeviceAddress::from_bytes(&[1, 2, 3, 4, 5]).is_err());
        assert!(DeviceAddress::from_bytes(&[0; 7]).is_err());
    }

    #[test]
    fn test_from_str_matches_parse_hex() {
        let parsed: DeviceAddress = "001122334455".parse().unwrap();
        assert_eq!(parsed, DeviceAddress::parse_hex("001122334455").unwrap());
    }
}
