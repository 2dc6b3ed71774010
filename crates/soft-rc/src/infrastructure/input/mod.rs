//! Line sources feeding the session loop.
//!
//! - [`ScriptSource`] reads a command script; end of file becomes `END`, so a
//!   script always finishes with the pending key released.
//! - [`InteractiveSource`] reads the terminal on a helper thread and watches a
//!   shared `running` flag, so a Ctrl-C leaves the loop without releasing.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, RecvTimeoutError},
    Arc,
};
use std::thread;
use std::time::Duration;

use rc_core::domain::command::END;
use tracing::{debug, info, warn};

use crate::application::{LineSource, SourceEvent};

/// How often the interactive source re-checks the `running` flag.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Command lines read from a script.
pub struct ScriptSource<R> {
    reader: R,
    done: bool,
}

impl ScriptSource<BufReader<File>> {
    /// Opens a script file.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from opening `path`.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, done: false }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn next_event(&mut self) -> io::Result<SourceEvent> {
        loop {
            if self.done {
                return Ok(SourceEvent::Line(END.to_string()));
            }
            match read_trimmed_line(&mut self.reader)? {
                None => {
                    info!("EOF -> send {END:?}");
                    self.done = true;
                }
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => {
                    info!("{line}");
                    return Ok(SourceEvent::Line(line));
                }
            }
        }
    }
}

/// Command lines typed on the terminal.
pub struct InteractiveSource {
    lines: Receiver<io::Result<String>>,
    running: Arc<AtomicBool>,
}

impl InteractiveSource {
    /// Reads from stdin.
    ///
    /// # Errors
    ///
    /// Fails only if the reader thread cannot be spawned.
    pub fn stdin(running: Arc<AtomicBool>) -> io::Result<Self> {
        Self::from_reader(BufReader::new(io::stdin()), running)
    }

    /// Reads from any line-oriented reader on a helper thread.
    ///
    /// The thread hands over one line at a time and never reads further
    /// ahead than the line it is waiting to deliver.
    ///
    /// # Errors
    ///
    /// Fails only if the reader thread cannot be spawned.
    pub fn from_reader<R>(mut reader: R, running: Arc<AtomicBool>) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        // Rendezvous channel: at most one line is read ahead while the engine
        // is still writing or sleeping.
        let (tx, rx) = mpsc::sync_channel(0);
        thread::Builder::new()
            .name("soft-rc-stdin".to_string())
            .spawn(move || loop {
                let item = match read_trimmed_line(&mut reader) {
                    Ok(Some(line)) => Ok(line),
                    Ok(None) => break,
                    Err(e) => Err(e),
                };
                let failed = item.is_err();
                if tx.send(item).is_err() || failed {
                    break;
                }
            })?;

        Ok(Self { lines: rx, running })
    }
}

impl LineSource for InteractiveSource {
    fn next_event(&mut self) -> io::Result<SourceEvent> {
        loop {
            if !self.running.load(Ordering::Relaxed) {
                return Ok(SourceEvent::Interrupted);
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => return line.map(SourceEvent::Line),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("end of interactive input");
                    return Ok(SourceEvent::Interrupted);
                }
            }
        }
    }
}

/// Reads one line without its `\r\n`; `None` at end of input.
///
/// Invalid UTF-8 is replaced rather than failing the read, so one garbled
/// line costs only its own tokens.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    while matches!(raw.last(), Some(b'\n' | b'\r')) {
        raw.pop();
    }
    let line = match String::from_utf8_lossy(&raw) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            warn!("input line is not valid UTF-8: {line:?}");
            line
        }
    };
    Ok(Some(line))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
