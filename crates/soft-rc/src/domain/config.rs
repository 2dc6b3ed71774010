//! Runtime configuration types.
//!
//! [`RemoteConfig`] is the single source of truth for every runtime setting.
//! The binary builds it from CLI arguments; tests build it from
//! [`RemoteConfig::default`] and override individual fields.  Nothing in the
//! library reads the environment or global state.

use std::path::PathBuf;
use std::time::Duration;

use rc_core::{DebugLevel, DeviceAddress};

/// Default Bluetooth device address (`abbaface1234`).
pub const DEFAULT_DEVICE_ADDRESS: DeviceAddress =
    DeviceAddress::new([0xAB, 0xBA, 0xFA, 0xCE, 0x12, 0x34]);

/// Delay between an automatic key-down and its key-up.
pub const DEFAULT_RELEASE_DELAY: Duration = Duration::from_millis(100);

/// Default uhid device node.
pub const DEFAULT_UHID_PATH: &str = "/dev/uhid";

/// Default bthid device node.
pub const DEFAULT_BTHID_PATH: &str = "/dev/bthid";

/// Device nodes tried when opening the transport, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePaths {
    pub uhid: PathBuf,
    pub bthid: PathBuf,
}

impl Default for DevicePaths {
    fn default() -> Self {
        Self {
            uhid: PathBuf::from(DEFAULT_UHID_PATH),
            bthid: PathBuf::from(DEFAULT_BTHID_PATH),
        }
    }
}

/// Behaviour switches for one remote-control session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Send the key-up automatically after every key-down.
    pub autorelease: bool,
    /// Log writes as simulated.
    pub simulate: bool,
    pub debug_level: DebugLevel,
    /// Pause before an automatic key-up, and the fallback for a bad `SLEEP`.
    pub release_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            autorelease: true,
            simulate: false,
            debug_level: DebugLevel::default(),
            release_delay: DEFAULT_RELEASE_DELAY,
        }
    }
}

/// All runtime configuration for the soft remote control.
///
/// # Example
///
/// ```rust
/// use soft_rc::domain::RemoteConfig;
///
/// let cfg = RemoteConfig::default();
/// assert!(cfg.autorelease);
/// assert_eq!(cfg.device_address.to_string(), "abbaface1234");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Address handed to bthid in the control record.
    pub device_address: DeviceAddress,
    /// `false` is raw mode: the caller sends `REL` explicitly.
    pub autorelease: bool,
    /// Never touch a device; only log what would be written.
    pub simulate: bool,
    pub debug_level: DebugLevel,
    /// Script file; `None` means interactive input from stdin.
    pub script: Option<PathBuf>,
    pub device_paths: DevicePaths,
    pub release_delay: Duration,
}

impl RemoteConfig {
    /// The subset of the configuration the dispatcher needs.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            autorelease: self.autorelease,
            simulate: self.simulate,
            debug_level: self.debug_level,
            release_delay: self.release_delay,
        }
    }
}

impl Default for RemoteConfig {
    /// | Field          | Default                     |
    /// |----------------|-----------------------------|
    /// | device_address | `abbaface1234`              |
    /// | autorelease    | `true`                      |
    /// | simulate       | `false`                     |
    /// | debug_level    | 2 (info)                    |
    /// | script         | none (interactive)          |
    /// | device_paths   | `/dev/uhid`, `/dev/bthid`   |
    /// | release_delay  | 100 ms                      |
    fn default() -> Self {
        Self {
            device_address: DEFAULT_DEVICE_ADDRESS,
            autorelease: true,
            simulate: false,
            debug_level: DebugLevel::Info,
            script: None,
            device_paths: DevicePaths::default(),
            release_delay: DEFAULT_RELEASE_DELAY,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
