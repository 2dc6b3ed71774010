//! Session loop: pulls lines from an input source into the dispatcher.

use std::io;

use thiserror::Error;
use tracing::{debug, info};

use super::remote_control::{DeviceError, RemoteControl, SessionState};

/// One event from an input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// A line of command tokens.
    Line(String),
    /// The user aborted (Ctrl-C or end of interactive input).
    Interrupted,
}

/// Where command lines come from: a script file or the terminal.
pub trait LineSource {
    /// Blocks until the next event.
    ///
    /// Script sources never report [`SourceEvent::Interrupted`]; they turn
    /// end of file into an `END` line instead.
    fn next_event(&mut self) -> io::Result<SourceEvent>;
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `END` was processed; any pending press was released.
    Ended,
    /// Aborted by the user; a pending press is left held.
    Interrupted,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("cannot read input: {0}")]
    Input(#[from] io::Error),
}

/// Feeds every line from `source` to `rc` until the session ends.
///
/// # Errors
///
/// Returns [`SessionError::Device`] on a failed write and
/// [`SessionError::Input`] when the source cannot be read.
pub fn run_session(
    rc: &mut RemoteControl,
    source: &mut dyn LineSource,
) -> Result<SessionEnd, SessionError> {
    loop {
        match source.next_event()? {
            SourceEvent::Line(line) => {
                if rc.handle_line(&line)? == SessionState::Terminated {
                    debug!("session terminated by END");
                    return Ok(SessionEnd::Ended);
                }
            }
            SourceEvent::Interrupted => {
                info!("interrupted, leaving without release");
                return Ok(SessionEnd::Interrupted);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
