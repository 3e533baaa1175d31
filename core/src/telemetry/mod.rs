//! telemetry/mod.rs
//! Stage timers, the immutable run snapshot and the size report.
//!
//! Notes:
//! - Timers accumulate per stage; the snapshot freezes them at run end.
//! - The size report is informational only and never fails a run.

pub mod timers;
pub mod snapshot;

pub use timers::*;
pub use snapshot::*;
