//! # rc-core
//!
//! Building blocks of the GFRM100 soft remote control:
//!
//! - **`keymap`** – the key name → [`Keycode`] table and keycode helpers
//!   (press/release split, byte count, battery level packing).
//! - **`protocol`** – the fixed-layout device registration records for
//!   `/dev/uhid` and `/dev/bthid`, and the key-event framing for both.
//! - **`domain`** – the token grammar of the command stream and the debug
//!   verbosity levels.
//!
//! This crate performs no I/O.  Opening devices, sleeping and reading input
//! live in the `soft-rc` crate.

pub mod domain;
pub mod keymap;
pub mod protocol;

pub use domain::{Command, DebugLevel, TokenError};
pub use keymap::{KeyTable, Keycode};
pub use protocol::{
    control_record, create_record, encode_key_event, AddressError, DeviceAddress,
    TransportVariant,
};
