//! Domain layer: the token grammar and verbosity levels.
//!
//! Pure logic with no I/O, so every rule can be unit-tested directly.

pub mod command;
pub mod debug_level;
pub mod help;

pub use command::{Command, Marker, TokenError};
pub use debug_level::DebugLevel;
pub use help::help_text;
