//! soft-rc entry point.
//!
//! ```text
//! main()
//!  └─ Cli::parse() / into_config()   -- options -> RemoteConfig
//!  └─ logging::init()                -- tracing with reloadable level
//!  └─ input source                   -- script file, or stdin + Ctrl-C flag
//!  └─ HidDevice::open()              -- uhid, falling back to bthid
//!  └─ run_session()                  -- until END, EOF or Ctrl-C
//! ```

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use rc_core::domain::help_text;
use rc_core::{DebugLevel, DeviceAddress};
use tracing::info;

use soft_rc::application::{run_session, KeyDevice, LineSource, RemoteControl, SessionEnd};
use soft_rc::domain::{
    DevicePaths, RemoteConfig, DEFAULT_BTHID_PATH, DEFAULT_RELEASE_DELAY, DEFAULT_UHID_PATH,
};
use soft_rc::infrastructure::{
    device::{HidDevice, SimulatedDevice},
    input::{InteractiveSource, ScriptSource},
    logging,
    pause::ThreadPause,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Software remote control for the GFRM100.
///
/// Reads key names from a script or the terminal and injects them as HID
/// reports through /dev/uhid or /dev/bthid.
#[derive(Debug, Parser)]
#[command(
    name = "soft-rc",
    about = "Emulates a GFRM100 Bluetooth remote through uhid or bthid",
    version
)]
struct Cli {
    /// Bluetooth device address, 12 hex digits with optional 0x prefix.
    ///
    /// Only used by the legacy bthid transport.
    #[arg(short = 'b', long, default_value = "abbaface1234", env = "SOFTRC_BDADDR")]
    bdaddr: String,

    /// Read commands from this script instead of the terminal.
    ///
    /// End of file sends END.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Raw mode: no automatic key release, send REL yourself.
    #[arg(short = 'r', long)]
    raw: bool,

    /// Simulation mode: log keycodes without opening a device.
    #[arg(short = 's', long)]
    simumode: bool,

    /// Print the supported key names and exit.
    #[arg(short = 'k', long)]
    keys: bool,

    /// Log level (0:ERR, 1:WARN, 2:INFO, 3:VERB).
    #[arg(short = 'd', long, default_value = "2", allow_hyphen_values = true)]
    dlevel: String,

    /// uhid device node.
    #[arg(long, default_value = DEFAULT_UHID_PATH)]
    uhid_path: PathBuf,

    /// Legacy bthid device node.
    #[arg(long, default_value = DEFAULT_BTHID_PATH)]
    bthid_path: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`RemoteConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bdaddr` is not 12 hex digits.
    fn into_config(self) -> anyhow::Result<RemoteConfig> {
        let device_address: DeviceAddress = self
            .bdaddr
            .parse()
            .context("--bdaddr needs to be a 12-digit hex number")?;

        Ok(RemoteConfig {
            device_address,
            autorelease: !self.raw,
            simulate: self.simumode,
            debug_level: parse_dlevel(&self.dlevel),
            script: self.input,
            device_paths: DevicePaths {
                uhid: self.uhid_path,
                bthid: self.bthid_path,
            },
            release_delay: DEFAULT_RELEASE_DELAY,
        })
    }
}

/// Lenient `--dlevel` parsing: non-numbers mean warn, out-of-range values
/// saturate.
fn parse_dlevel(raw: &str) -> DebugLevel {
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => DebugLevel::Error,
        Ok(n) => DebugLevel::from_u8(n.min(i64::from(DebugLevel::MAX)) as u8)
            .unwrap_or(DebugLevel::Verbose),
        Err(_) => DebugLevel::Warn,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.keys {
        print!("{}", help_text());
        return Ok(());
    }

    let config = cli.into_config()?;
    let level_handle = logging::init(config.debug_level);

    info!("soft-rc version {}", env!("CARGO_PKG_VERSION"));
    info!(
        "autorelease={}, debug_level={}, simu_mode={}",
        config.autorelease, config.debug_level, config.simulate
    );

    // ── Input source ──────────────────────────────────────────────────────────
    let mut source: Box<dyn LineSource> = match &config.script {
        Some(path) => Box::new(
            ScriptSource::open(path)
                .with_context(|| format!("cannot open script {}", path.display()))?,
        ),
        None => {
            let running = Arc::new(AtomicBool::new(true));
            let running_clone = Arc::clone(&running);
            ctrlc::set_handler(move || {
                info!("received Ctrl-C");
                running_clone.store(false, Ordering::Relaxed);
            })
            .context("cannot install Ctrl-C handler")?;
            Box::new(InteractiveSource::stdin(running).context("cannot read stdin")?)
        }
    };

    // ── Device ────────────────────────────────────────────────────────────────
    let device: Arc<dyn KeyDevice> = if config.simulate {
        Arc::new(SimulatedDevice)
    } else {
        Arc::new(HidDevice::open(&config.device_paths, &config.device_address)?)
    };

    let mut rc = RemoteControl::new(config.session_options(), device, Arc::new(ThreadPause))
        .with_level_hook(Box::new(move |level| level_handle.set(level)));

    match run_session(&mut rc, source.as_mut())? {
        SessionEnd::Ended => info!("done"),
        SessionEnd::Interrupted => info!("interrupted"),
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        // Arrange
        let cli = Cli::parse_from(["soft-rc"]);

        // Act
        let cfg = cli.into_config().unwrap();

        // Assert
        assert_eq!(cfg, RemoteConfig::default());
    }

    #[test]
    fn test_cli_raw_disables_autorelease() {
        let cfg = Cli::parse_from(["soft-rc", "-r"]).into_config().unwrap();
        assert!(!cfg.autorelease);
    }

    #[test]
    fn test_cli_simumode() {
        let cfg = Cli::parse_from(["soft-rc", "--simumode"]).into_config().unwrap();
        assert!(cfg.simulate);
    }

    #[test]
    fn test_cli_input_selects_script() {
        let cfg = Cli::parse_from(["soft-rc", "-i", "keys.txt"]).into_config().unwrap();
        assert_eq!(cfg.script, Some(PathBuf::from("keys.txt")));
    }

    #[test]
    fn test_cli_bdaddr_with_prefix() {
        let cfg = Cli::parse_from(["soft-rc", "-b", "0x001122334455"])
            .into_config()
            .unwrap();
        assert_eq!(cfg.device_address.as_bytes(), &[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn test_cli_invalid_bdaddr_is_error() {
        let result = Cli::parse_from(["soft-rc", "--bdaddr", "xyz"]).into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_device_path_overrides() {
        let cfg = Cli::parse_from([
            "soft-rc",
            "--uhid-path",
            "/tmp/uhid",
            "--bthid-path",
            "/tmp/bthid",
        ])
        .into_config()
        .unwrap();

        assert_eq!(cfg.device_paths.uhid, PathBuf::from("/tmp/uhid"));
        assert_eq!(cfg.device_paths.bthid, PathBuf::from("/tmp/bthid"));
    }

    #[test]
    fn test_cli_keys_flag() {
        let cli = Cli::parse_from(["soft-rc", "-k"]);
        assert!(cli.keys);
    }

    #[test]
    fn test_dlevel_in_range() {
        let cfg = Cli::parse_from(["soft-rc", "-d", "3"]).into_config().unwrap();
        assert_eq!(cfg.debug_level, DebugLevel::Verbose);
    }

    #[test]
    fn test_dlevel_lenient_parsing() {
        assert_eq!(parse_dlevel("0"), DebugLevel::Error);
        assert_eq!(parse_dlevel("verbose"), DebugLevel::Warn);
        assert_eq!(parse_dlevel("9"), DebugLevel::Verbose);
        assert_eq!(parse_dlevel("-1"), DebugLevel::Error);
    }

    #[test]
    fn test_dlevel_negative_value_parses() {
        let cli = Cli::parse_from(["soft-rc", "--dlevel", "-1"]);
        assert_eq!(parse_dlevel(&cli.dlevel), DebugLevel::Error);
    }
}
