//! telemetry/mod.rs
//! Process-wide counters for context lifecycle and service traffic.
//!
//! Notes:
//! - Counters are plain relaxed atomics; they observe, never synchronize.
//! - `snapshot()` freezes them into an immutable, serializable value.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
