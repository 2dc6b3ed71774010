//! Recording fakes for the device and pause seams.
//!
//! The real [`HidDevice`](super::HidDevice) needs `/dev/uhid` or `/dev/bthid`
//! and real pauses make tests slow.  These fakes record every call in a
//! `Mutex<Vec<...>>` so assertions can check exactly what was written and in
//! what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let device = Arc::new(RecordingDevice::new(TransportVariant::Legacy));
//! let pause = Arc::new(RecordingPause::new());
//! let mut rc = RemoteControl::new(options, device.clone(), pause.clone());
//!
//! rc.handle_token("GUIDE").unwrap();
//!
//! assert_eq!(device.frames.lock().unwrap().len(), 2);
//! ```
//!
//! Set `should_fail = true` to make every write return an I/O error.

use std::io;
use std::sync::Mutex;
use std::time::Duration;

use rc_core::TransportVariant;

use crate::application::{KeyDevice, Pause};

/// A device that records frames instead of writing them.
#[derive(Debug)]
pub struct RecordingDevice {
    /// Every frame passed to `write_frame`, in order.
    pub frames: Mutex<Vec<Vec<u8>>>,
    pub variant: TransportVariant,
    /// When `true`, `write_frame` fails with `BrokenPipe` and records nothing.
    pub should_fail: bool,
}

impl RecordingDevice {
    pub fn new(variant: TransportVariant) -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
            variant,
            should_fail: false,
        }
    }

    /// A device whose writes always fail.
    pub fn failing(variant: TransportVariant) -> Self {
        Self {
            should_fail: true,
            ..Self::new(variant)
        }
    }

    /// Snapshot of the recorded frames.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl KeyDevice for RecordingDevice {
    fn variant(&self) -> TransportVariant {
        self.variant
    }

    fn write_frame(&self, frame: &[u8]) -> io::Result<()> {
        if self.should_fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock write failure"));
        }
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame.to_vec());
        }
        Ok(())
    }
}

/// A pause that returns immediately and records the requested duration.
#[derive(Debug, Default)]
pub struct RecordingPause {
    pub pauses: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        if let Ok(mut pauses) = self.pauses.lock() {
            pauses.push(duration);
        }
    }
}
