//! Verbosity levels selectable with `--dlevel` and the `DEBUG<n>` token.

use std::fmt;

/// Log verbosity, from quietest to noisiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DebugLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Verbose = 3,
}

impl DebugLevel {
    /// Highest accepted numeric level.
    pub const MAX: u8 = DebugLevel::Verbose as u8;

    /// The `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            DebugLevel::Error => "error",
            DebugLevel::Warn => "warn",
            DebugLevel::Info => "info",
            DebugLevel::Verbose => "trace",
        }
    }

    /// Converts a numeric level; `None` outside `0..=3`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(DebugLevel::Error),
            1 => Some(DebugLevel::Warn),
            2 => Some(DebugLevel::Info),
            3 => Some(DebugLevel::Verbose),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Default for DebugLevel {
    fn default() -> Self {
        DebugLevel::Info
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
