//! soft-rc library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does soft-rc do?
//!
//! It pretends to be a GFRM100 Bluetooth remote.  The kernel is told about a
//! new HID device (through `/dev/uhid`, or the older `/dev/bthid` driver when
//! uhid is missing), and every key name typed on the terminal or read from a
//! script is turned into the HID report the real remote would send.
//!
//! 1. `main` parses the command line into a [`domain::RemoteConfig`].
//! 2. [`infrastructure::device::HidDevice::open`] registers the remote.
//! 3. [`application::run_session`] pulls lines from a
//!    [`application::LineSource`] and hands them to
//!    [`application::RemoteControl`], which writes keycodes and handles
//!    auto-release, `SLEEP`, `REL` and `END`.

/// Application layer: dispatcher and session loop.
pub mod application;

/// Domain layer: runtime configuration.
pub mod domain;

/// Infrastructure layer: devices, input sources, logging.
pub mod infrastructure;
