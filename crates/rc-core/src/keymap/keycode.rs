//! The 32-bit keycode carried from the key table to the HID device.
//!
//! # Layout
//!
//! ```text
//!  31            16 15             8 7              0
//! +----------------+----------------+----------------+
//! |  press marker  |  report bytes  |  byte count    |
//! +----------------+----------------+----------------+
//! ```
//!
//! - Bits 0–7 hold the number of payload bytes emitted on the wire.
//! - Bits 8 and up hold the payload itself, least significant byte first.
//! - Bits 16–31 are non-zero for a key-down ("press") code.  Clearing them
//!   yields the matching key-up ("release") code.
//!
//! The battery-status pseudo-key reuses bits 16–23 for the charge level, so a
//! battery report with a non-zero level looks like a press on the wire.  It
//! still never counts as a held key: see [`Keycode::is_held_key`].

use std::fmt;

/// Mask selecting the release half of a keycode.
const RELEASE_MASK: u32 = 0x0000_FFFF;

/// Release half shared by every battery-status report.
pub(crate) const BATTERY_REPORT: u32 = 0x0000_1302;

/// A remote-control keycode.
///
/// The value is opaque to everything except the key-event encoder; callers
/// only ever ask whether it is a press and what its release code is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keycode(u32);

impl Keycode {
    /// Wraps a raw 32-bit code.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// `true` when any of the upper 16 bits is set.
    pub const fn is_press(self) -> bool {
        self.0 & !RELEASE_MASK != 0
    }

    /// `true` for battery-status reports of any level.
    pub const fn is_battery_report(self) -> bool {
        (self.0 & RELEASE_MASK) == BATTERY_REPORT
    }

    /// `true` for a key-down that leaves a key held until its release is sent.
    ///
    /// Battery reports are status, not keys, so they are never held.
    pub const fn is_held_key(self) -> bool {
        self.is_press() && !self.is_battery_report()
    }

    /// The key-up code for this key.  Idempotent on release codes.
    pub const fn release(self) -> Self {
        Self(self.0 & RELEASE_MASK)
    }

    /// Number of payload bytes this code puts on the wire.
    pub const fn byte_count(self) -> usize {
        (self.0 & 0xFF) as usize
    }

    /// Packs a battery level into a battery-status base code.
    ///
    /// Levels above 100 are clamped to 100.
    pub const fn with_battery_level(self, level: u8) -> Self {
        let level = if level > 100 { 100 } else { level };
        Self(self.0 | ((level as u32) << 16))
    }
}

impl From<u32> for Keycode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::LowerHex for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
