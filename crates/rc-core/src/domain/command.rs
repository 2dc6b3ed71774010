//! Token grammar of the remote-control command stream.
//!
//! A command line is split on whitespace; each token is upper-cased and
//! matched against the rules below, first match wins:
//!
//! | Token            | Meaning                                         |
//! |------------------|-------------------------------------------------|
//! | `HELP`           | print supported key names                       |
//! | `END`            | release the pending key (if any) and stop       |
//! | `SLEEP<x.y>`     | block for `x.y` seconds                         |
//! | `REL`            | release the previously pressed key              |
//! | `BATT_LEVEL<n>`  | report battery level `n` % (clamped to 100)     |
//! | `RAWMODE<d>`     | `0` turns auto-release on, anything else off    |
//! | `DEBUG<n>`       | set verbosity, `n` in `0..=3`                   |
//! | `<digits>`       | dial: one `DIGIT_x` per digit, then `OK`        |
//! | anything else    | key name from the [`KeyTable`]                  |

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use super::debug_level::DebugLevel;
use crate::keymap::{KeyTable, Keycode};

pub const HELP: &str = "HELP";
pub const END: &str = "END";
pub const REL: &str = "REL";
pub const SLEEP: &str = "SLEEP";
pub const BATT_LEVEL: &str = "BATT_LEVEL";
pub const RAWMODE: &str = "RAWMODE";
pub const DEBUG: &str = "DEBUG";

/// Token prefixes that take a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Sleep,
    BatteryLevel,
    Debug,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Marker::Sleep => SLEEP,
            Marker::BatteryLevel => BATT_LEVEL,
            Marker::Debug => DEBUG,
        };
        f.write_str(s)
    }
}

/// A token that could not be turned into a [`Command`].
///
/// Both kinds are recoverable: the caller logs them and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A numeric suffix could not be parsed or is out of range.
    #[error("{marker}: {suffix:?} is not a valid argument")]
    MalformedToken { marker: Marker, suffix: String },

    /// The token names no known key.
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// One parsed token.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    End,
    Sleep(Duration),
    Release,
    /// Battery level in percent, already clamped to `0..=100`.
    BatteryLevel(u8),
    /// `true` enables raw mode (auto-release off).
    RawMode(bool),
    Debug(DebugLevel),
    /// Digit presses followed by `OK`.
    Dial(Vec<Keycode>),
    Key { name: String, code: Keycode },
}

impl Command {
    /// Parses a single whitespace-free token.  Case is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MalformedToken`] for a bad numeric suffix on
    /// `SLEEP`, `BATT_LEVEL` or `DEBUG`, and [`TokenError::UnknownKey`] when
    /// nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rc_core::domain::Command;
    ///
    /// assert_eq!(Command::parse("batt_level150").unwrap(), Command::BatteryLevel(100));
    /// assert!(Command::parse("teleport").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Command, TokenError> {
        let token = token.to_ascii_uppercase();

        if token == HELP {
            return Ok(Command::Help);
        }
        if token == END {
            return Ok(Command::End);
        }
        if let Some(suffix) = token.strip_prefix(SLEEP) {
            return parse_sleep(suffix).map(Command::Sleep);
        }
        if token == REL {
            return Ok(Command::Release);
        }
        if let Some(suffix) = token.strip_prefix(BATT_LEVEL) {
            return parse_battery_level(suffix).map(Command::BatteryLevel);
        }
        if let Some(suffix) = token.strip_prefix(RAWMODE) {
            // Only the first character counts.
            return Ok(Command::RawMode(!suffix.starts_with('0')));
        }
        if let Some(suffix) = token.strip_prefix(DEBUG) {
            return parse_debug_level(suffix).map(Command::Debug);
        }
        if is_decimal(&token) {
            return dial(&token)
                .map(Command::Dial)
                .ok_or(TokenError::UnknownKey(token));
        }

        match KeyTable::lookup(&token) {
            Some(code) => Ok(Command::Key { name: token, code }),
            None => Err(TokenError::UnknownKey(token)),
        }
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn malformed(marker: Marker, suffix: &str) -> TokenError {
    TokenError::MalformedToken {
        marker,
        suffix: suffix.to_string(),
    }
}

fn parse_sleep(suffix: &str) -> Result<Duration, TokenError> {
    suffix
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| malformed(Marker::Sleep, suffix))
}

fn parse_battery_level(suffix: &str) -> Result<u8, TokenError> {
    if !is_decimal(suffix) {
        return Err(malformed(Marker::BatteryLevel, suffix));
    }
    // Every all-digit suffix is valid; anything too big for u32 is over 100 anyway.
    let level = suffix.parse::<u32>().unwrap_or(u32::MAX).min(100);
    Ok(level as u8)
}

fn parse_debug_level(suffix: &str) -> Result<DebugLevel, TokenError> {
    if !is_decimal(suffix) {
        return Err(malformed(Marker::Debug, suffix));
    }
    suffix
        .parse::<u8>()
        .ok()
        .and_then(DebugLevel::from_u8)
        .ok_or_else(|| malformed(Marker::Debug, suffix))
}

fn dial(digits: &str) -> Option<Vec<Keycode>> {
    let mut codes = digits
        .chars()
        .map(KeyTable::digit)
        .collect::<Option<Vec<_>>>()?;
    codes.push(KeyTable::lookup("OK")?);
    Some(codes)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
