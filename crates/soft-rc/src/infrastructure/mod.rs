//! Infrastructure layer: OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and `rc_core`,
//! but MUST NOT be imported by the `application` or `domain` layers.
//!
//! # Sub-modules
//!
//! - **`device`** – `/dev/uhid` and `/dev/bthid` transports implementing
//!   `KeyDevice`, the simulation sink, and recording fakes for tests.
//! - **`input`** – script and terminal line sources implementing `LineSource`.
//! - **`logging`** – tracing subscriber with a reloadable level filter.
//! - **`pause`** – the `Pause` implementation backed by `thread::sleep`.

pub mod device;
pub mod input;
pub mod logging;
pub mod pause;
