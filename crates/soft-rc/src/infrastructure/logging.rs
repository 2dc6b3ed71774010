//! tracing subscriber setup with a runtime-adjustable level.
//!
//! `--dlevel` picks the initial filter unless `RUST_LOG` is set.  The
//! returned [`LevelHandle`] swaps the filter when a `DEBUG<n>` token arrives.

use rc_core::DebugLevel;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Handle for changing the active log level after [`init`].
#[derive(Clone)]
pub struct LevelHandle(reload::Handle<EnvFilter, Registry>);

impl LevelHandle {
    /// Replaces the active filter with the one for `level`.
    pub fn set(&self, level: DebugLevel) {
        if let Err(e) = self.0.reload(filter_for(level)) {
            warn!("cannot change log level: {e}");
        }
    }
}

/// Filter for a debug level.
pub fn filter_for(level: DebugLevel) -> EnvFilter {
    EnvFilter::new(level.filter_directive())
}

/// Installs the global subscriber.  Call once, from `main`.
pub fn init(level: DebugLevel) -> LevelHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(level));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    LevelHandle(handle)
}
