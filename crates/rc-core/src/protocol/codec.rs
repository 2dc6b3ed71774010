//! Key-event framing.
//!
//! Wire format:
//! ```text
//! uhid:   [UHID_INPUT2:4][count:2][payload:count]
//! bthid:  [payload:count]
//! ```
//! `count` is the low byte of the keycode; the payload is the keycode shifted
//! right by 8, emitted least significant byte first.  The uhid header is
//! little-endian.

use crate::keymap::Keycode;

/// `UHID_INPUT2` event type.
pub const UHID_INPUT2: u32 = 12;

/// Size of the uhid input header (`type` + `size`).
pub const UHID_INPUT_HEADER_LEN: usize = 6;

/// Which kernel interface a key frame is destined for.
///
/// Chosen once when the device is opened; it only changes the framing, never
/// the meaning of a keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportVariant {
    /// `/dev/uhid`: frames carry a `UHID_INPUT2` header.
    VirtualHid,
    /// `/dev/bthid`: frames are the bare report bytes.
    Legacy,
}

impl TransportVariant {
    /// Device node name, used in log output.
    pub fn label(self) -> &'static str {
        match self {
            TransportVariant::VirtualHid => "uhid",
            TransportVariant::Legacy => "bthid",
        }
    }
}

/// Encodes one key event into the bytes written to the device.
///
/// Pure function of its inputs.
///
/// # Examples
///
/// ```rust
/// use rc_core::keymap::Keycode;
/// use rc_core::protocol::{encode_key_event, TransportVariant};
///
/// let ok = Keycode::new(0x0041_4003);
/// assert_eq!(encode_key_event(ok, TransportVariant::Legacy), vec![0x40, 0x41, 0x00]);
/// ```
pub fn encode_key_event(keycode: Keycode, variant: TransportVariant) -> Vec<u8> {
    let count = keycode.byte_count();
    let mut buf = Vec::with_capacity(UHID_INPUT_HEADER_LEN + count);

    if variant == TransportVariant::VirtualHid {
        buf.extend_from_slice(&UHID_INPUT2.to_le_bytes());
        buf.extend_from_slice(&(count as u16).to_le_bytes());
    }

    let raw = u64::from(keycode.raw());
    for i in 0..count {
        // Codes wider than the 32-bit value pad with zero bytes.
        let shift = 8 * (i + 1);
        let byte = if shift < 64 { (raw >> shift) & 0xFF } else { 0 };
        buf.push(byte as u8);
    }
    buf
}

// ── Tests ─────────────────────────────────────────────────────────────────────
