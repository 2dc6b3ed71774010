//! Application layer: the dispatcher and the session loop that drives it.
//!
//! Both depend only on the [`KeyDevice`], [`Pause`] and [`LineSource`] traits,
//! so the real devices, sleeping and stdin are swapped for fakes in tests.

pub mod remote_control;
pub mod run_session;

pub use remote_control::{DeviceError, KeyDevice, LevelHook, Pause, RemoteControl, SessionState};
pub use run_session::{run_session, LineSource, SessionEnd, SessionError, SourceEvent};
