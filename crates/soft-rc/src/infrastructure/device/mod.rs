//! Kernel HID transports.
//!
//! [`HidDevice::open`] tries `/dev/uhid` first and falls back to the legacy
//! `/dev/bthid` driver.  Whichever succeeds fixes the frame layout for the rest
//! of the session (see [`TransportVariant`]).
//!
//! [`SimulatedDevice`] stands in for both when running with `--simumode`.

pub mod mock;

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rc_core::protocol::{control_record_for, create_record};
use rc_core::{DeviceAddress, TransportVariant};
use tracing::{debug, info, trace};

use crate::application::{DeviceError, KeyDevice};
use crate::domain::DevicePaths;

/// bthid ioctl request that registers the remote from a control record.
#[cfg(unix)]
const BTHID_REGISTER: libc::c_ulong = 1;

/// An open, registered HID device node.
#[derive(Debug)]
pub struct HidDevice {
    file: File,
    variant: TransportVariant,
    path: PathBuf,
}

impl HidDevice {
    /// Opens and registers the remote on the first transport that works.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::Unavailable`] with both causes when neither
    /// node can be opened and registered.
    pub fn open(paths: &DevicePaths, address: &DeviceAddress) -> Result<Self, DeviceError> {
        Self::open_with(paths, address, register_bthid)
    }

    /// Like [`open`](Self::open), with `register` handed the open bthid node
    /// and its control record in place of the registration ioctl.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn open_with<F>(
        paths: &DevicePaths,
        address: &DeviceAddress,
        register: F,
    ) -> Result<Self, DeviceError>
    where
        F: FnOnce(&File, &mut [u8]) -> io::Result<()>,
    {
        let uhid_err = match Self::open_uhid(&paths.uhid) {
            Ok(device) => return Ok(device),
            Err(e) => e,
        };
        debug!("{} unavailable ({uhid_err}), trying {}", paths.uhid.display(), paths.bthid.display());

        let bthid_err = match Self::open_bthid(&paths.bthid, address, register) {
            Ok(device) => return Ok(device),
            Err(e) => e,
        };

        Err(DeviceError::Unavailable {
            uhid_path: paths.uhid.display().to_string(),
            uhid: uhid_err,
            bthid_path: paths.bthid.display().to_string(),
            bthid: bthid_err,
        })
    }

    fn open_uhid(path: &Path) -> io::Result<Self> {
        let mut file = open_rw(path)?;
        file.write_all(&create_record())?;
        info!("registered with {} (uhid)", path.display());
        Ok(Self {
            file,
            variant: TransportVariant::VirtualHid,
            path: path.to_path_buf(),
        })
    }

    fn open_bthid<F>(path: &Path, address: &DeviceAddress, register: F) -> io::Result<Self>
    where
        F: FnOnce(&File, &mut [u8]) -> io::Result<()>,
    {
        let file = open_rw(path)?;
        let mut record = control_record_for(address);
        register(&file, &mut record)?;
        info!("registered {address} with {} (bthid)", path.display());
        Ok(Self {
            file,
            variant: TransportVariant::Legacy,
            path: path.to_path_buf(),
        })
    }

    /// The device node in use.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyDevice for HidDevice {
    fn variant(&self) -> TransportVariant {
        self.variant
    }

    fn write_frame(&self, frame: &[u8]) -> io::Result<()> {
        trace!("write {} bytes to {}", frame.len(), self.path.display());
        (&self.file).write_all(frame)
    }
}

fn open_rw(path: &Path) -> io::Result<File> {
    OpenOptions::new().read(true).write(true).open(path)
}

#[cfg(unix)]
fn register_bthid(file: &File, record: &mut [u8]) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    // SAFETY: `record` is exclusively borrowed for the whole call, and the
    // driver may read or write it only within its length.
    let ret = unsafe { libc::ioctl(fd, BTHID_REGISTER as _, record.as_mut_ptr()) };
    if ret < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn register_bthid(_file: &File, _record: &mut [u8]) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "bthid registration needs ioctl",
    ))
}

/// Device used with `--simumode`: nothing is opened, frames are only logged.
#[derive(Debug, Default)]
pub struct SimulatedDevice;

impl KeyDevice for SimulatedDevice {
    fn variant(&self) -> TransportVariant {
        TransportVariant::VirtualHid
    }

    fn write_frame(&self, frame: &[u8]) -> io::Result<()> {
        trace!("simulated frame {frame:02x?}");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
