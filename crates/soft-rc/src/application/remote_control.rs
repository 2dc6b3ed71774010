//! RemoteControl: the command dispatcher and key state machine.
//!
//! Takes command tokens one at a time, applies the token grammar from
//! [`rc_core::domain::command`], and writes keycodes to a [`KeyDevice`].
//!
//! # Key state
//!
//! The dispatcher remembers the last keycode it wrote.  `REL` and `END` use it
//! to find the key-up to send; with auto-release on, every key-down is followed
//! by its key-up after [`SessionOptions::release_delay`], so the remembered
//! code is then always a key-up.  Only one held key is tracked: a new press
//! simply replaces the previous one.
//!
//! # Blocking
//!
//! `SLEEP` and the auto-release delay block the caller through the [`Pause`]
//! seam.  No other token is processed while a pause is in progress.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use rc_core::domain::command::{Marker, BATT_LEVEL, REL};
use rc_core::domain::help_text;
use rc_core::{
    encode_key_event, Command, DebugLevel, KeyTable, Keycode, TokenError, TransportVariant,
};
use thiserror::Error;
use tracing::{error, info, trace, warn};

use crate::domain::SessionOptions;

/// Fatal device failures.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Neither uhid nor bthid could be opened and registered.
    #[error("cannot open uhid device {uhid_path} ({uhid}) or bthid device {bthid_path} ({bthid})")]
    Unavailable {
        uhid_path: String,
        uhid: io::Error,
        bthid_path: String,
        bthid: io::Error,
    },

    /// A key frame could not be written.
    #[error("cannot write keycode {keycode} to {device} device: {source}")]
    WriteFailed {
        keycode: Keycode,
        device: &'static str,
        #[source]
        source: io::Error,
    },
}

/// A device that accepts framed key events.
///
/// Implemented by the real uhid/bthid handle, the simulation sink and test
/// fakes.
#[cfg_attr(test, mockall::automock)]
pub trait KeyDevice: Send + Sync {
    /// The framing this device expects.
    fn variant(&self) -> TransportVariant;

    /// Writes one complete frame.
    fn write_frame(&self, frame: &[u8]) -> io::Result<()>;
}

/// Blocking wait used for `SLEEP` and the auto-release delay.
pub trait Pause: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Callback invoked when `DEBUG<n>` changes the verbosity.
pub type LevelHook = Box<dyn FnMut(DebugLevel) + Send>;

/// The remote-control dispatcher.
pub struct RemoteControl {
    device: Arc<dyn KeyDevice>,
    pause: Arc<dyn Pause>,
    console: Box<dyn Write + Send>,
    level_hook: Option<LevelHook>,
    autorelease: bool,
    simulate: bool,
    debug_level: DebugLevel,
    release_delay: Duration,
    previous: Option<Keycode>,
    state: SessionState,
}

impl RemoteControl {
    /// Creates a running session writing to `device`.
    ///
    /// `HELP` output goes to stdout until [`with_console`](Self::with_console)
    /// replaces it.
    pub fn new(options: SessionOptions, device: Arc<dyn KeyDevice>, pause: Arc<dyn Pause>) -> Self {
        Self {
            device,
            pause,
            console: Box::new(io::stdout()),
            level_hook: None,
            autorelease: options.autorelease,
            simulate: options.simulate,
            debug_level: options.debug_level,
            release_delay: options.release_delay,
            previous: None,
            state: SessionState::Running,
        }
    }

    /// Redirects `HELP` output.
    pub fn with_console(mut self, console: Box<dyn Write + Send>) -> Self {
        self.console = console;
        self
    }

    /// Registers the callback that applies `DEBUG<n>` to the logger.
    pub fn with_level_hook(mut self, hook: LevelHook) -> Self {
        self.level_hook = Some(hook);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The last keycode written, if any.
    pub fn previous_keycode(&self) -> Option<Keycode> {
        self.previous
    }

    pub fn autorelease(&self) -> bool {
        self.autorelease
    }

    pub fn debug_level(&self) -> DebugLevel {
        self.debug_level
    }

    /// Processes every whitespace-separated token of `line`.
    ///
    /// Stops at `END`; tokens after it are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if a write fails.  The session is terminated
    /// in that case.
    pub fn handle_line(&mut self, line: &str) -> Result<SessionState, DeviceError> {
        for token in line.split_whitespace() {
            if self.handle_token(token)? == SessionState::Terminated {
                break;
            }
        }
        Ok(self.state)
    }

    /// Processes a single token.
    ///
    /// Token errors are logged and skipped; only device failures are returned.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if a write fails.
    pub fn handle_token(&mut self, token: &str) -> Result<SessionState, DeviceError> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }
        trace!("token {token:?}");

        match Command::parse(token) {
            Ok(Command::Help) => self.print_help(),

            Ok(Command::End) => {
                if let Some(pressed) = self.pending_press() {
                    self.send(REL, pressed.release())?;
                }
                self.state = SessionState::Terminated;
            }

            Ok(Command::Sleep(duration)) => {
                info!("sleeping {:.3} secs", duration.as_secs_f64());
                self.pause.pause(duration);
            }
            Err(TokenError::MalformedToken {
                marker: Marker::Sleep,
                suffix,
            }) => {
                warn!(
                    "SLEEP: {suffix:?} is not a float, use default {:.1} secs instead",
                    self.release_delay.as_secs_f64()
                );
                self.pause.pause(self.release_delay);
            }

            Ok(Command::Release) => match self.pending_press() {
                Some(pressed) => self.send(REL, pressed.release())?,
                None => warn!("{REL:?} not valid, no previous key-down exists"),
            },

            Ok(Command::BatteryLevel(level)) => {
                info!("send battery-level = {level}");
                self.send(BATT_LEVEL, KeyTable::battery_base().with_battery_level(level))?;
            }

            Ok(Command::RawMode(raw)) => {
                self.autorelease = !raw;
                if raw {
                    info!("enable raw-mode (autorelease = off)");
                } else {
                    info!("disable raw-mode (autorelease = on)");
                }
            }

            Ok(Command::Debug(level)) => {
                self.debug_level = level;
                if let Some(hook) = self.level_hook.as_mut() {
                    hook(level);
                }
                info!("changed debug level to {level}");
            }
            Err(
                err @ TokenError::MalformedToken {
                    marker: Marker::Debug,
                    ..
                },
            ) => error!("{err}, must be [0..{}]", DebugLevel::MAX),

            Ok(Command::Dial(codes)) => {
                for code in codes {
                    self.send(token, code)?;
                }
            }

            Ok(Command::Key { name, code }) => self.send(&name, code)?,

            Err(err @ TokenError::MalformedToken { .. }) => warn!("{err}"),
            Err(err @ TokenError::UnknownKey(_)) => warn!("{err}, ignore"),
        }
        Ok(self.state)
    }

    /// The remembered keycode when it is still a held key-down.
    fn pending_press(&self) -> Option<Keycode> {
        self.previous.filter(|code| code.is_held_key())
    }

    /// Writes `code`, then its key-up when auto-release applies.
    fn send(&mut self, label: &str, code: Keycode) -> Result<(), DeviceError> {
        trace!("enter: {label:?} -> {code}");
        self.write_keycode(code)?;

        let mut last = code;
        if self.autorelease && code.is_press() {
            self.pause.pause(self.release_delay);
            last = code.release();
            trace!("enter: {REL:?} -> {last}");
            self.write_keycode(last)?;
        }
        self.previous = Some(last);
        Ok(())
    }

    fn write_keycode(&mut self, code: Keycode) -> Result<(), DeviceError> {
        if self.simulate {
            info!("send (simulated) keycode = {code:x}");
        } else {
            info!("send keycode = {code:x}");
        }

        let variant = self.device.variant();
        let frame = encode_key_event(code, variant);
        match self.device.write_frame(&frame) {
            Ok(()) => Ok(()),
            Err(source) => {
                error!("cannot write keycode {code:x} to {} device", variant.label());
                self.state = SessionState::Terminated;
                Err(DeviceError::WriteFailed {
                    keycode: code,
                    device: variant.label(),
                    source,
                })
            }
        }
    }

    fn print_help(&mut self) {
        let result = self
            .console
            .write_all(help_text().as_bytes())
            .and_then(|()| self.console.flush());
        if let Err(e) = result {
            warn!("cannot print help: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
