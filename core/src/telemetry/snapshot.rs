//! telemetry/snapshot.rs
//! Immutable view over the process-wide counters.
use std::sync::atomic::Ordering;

use serde::Serialize;

use crate::telemetry::counters::{counters, ContextKind};

/// Counters for one side of the codec at the moment of the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindSnapshot {
    pub contexts_created: u64,
    pub contexts_released: u64,
    pub calls: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl KindSnapshot {
    fn capture(kind: ContextKind) -> Self {
        let c = counters(kind);
        Self {
            contexts_created: c.contexts_created.load(Ordering::Relaxed),
            contexts_released: c.contexts_released.load(Ordering::Relaxed),
            calls: c.calls.load(Ordering::Relaxed),
            bytes_in: c.bytes_in.load(Ordering::Relaxed),
            bytes_out: c.bytes_out.load(Ordering::Relaxed),
        }
    }

    /// Contexts currently alive, i.e. threads holding one.
    pub fn contexts_live(&self) -> u64 {
        self.contexts_created.saturating_sub(self.contexts_released)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    pub compression: KindSnapshot,
    pub decompression: KindSnapshot,
}

impl ContextSnapshot {
    /// Compressed bytes over plaintext bytes seen by the compression side.
    /// 0.0 when nothing has been compressed.
    pub fn compression_ratio(&self) -> f64 {
        if self.compression.bytes_in == 0 {
            return 0.0;
        }
        self.compression.bytes_out as f64 / self.compression.bytes_in as f64
    }
}

pub fn snapshot() -> ContextSnapshot {
    ContextSnapshot {
        compression: KindSnapshot::capture(ContextKind::Compression),
        decompression: KindSnapshot::capture(ContextKind::Decompression),
    }
}
