//! telemetry/counters.rs
//! Atomic counters updated by the context slots and the services.
use std::sync::atomic::{AtomicU64, Ordering};

/// Which side of the codec a counter belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextKind {
    Compression,
    Decompression,
}

pub(crate) struct KindCounters {
    pub(crate) contexts_created: AtomicU64,
    pub(crate) contexts_released: AtomicU64,
    pub(crate) calls: AtomicU64,
    pub(crate) bytes_in: AtomicU64,
    pub(crate) bytes_out: AtomicU64,
}

impl KindCounters {
    const fn new() -> Self {
        Self {
            contexts_created: AtomicU64::new(0),
            contexts_released: AtomicU64::new(0),
            calls: AtomicU64::new(0),
            bytes_in: AtomicU64::new(0),
            bytes_out: AtomicU64::new(0),
        }
    }
}

static COMPRESSION: KindCounters = KindCounters::new();
static DECOMPRESSION: KindCounters = KindCounters::new();

pub(crate) fn counters(kind: ContextKind) -> &'static KindCounters {
    match kind {
        ContextKind::Compression   => &COMPRESSION,
        ContextKind::Decompression => &DECOMPRESSION,
    }
}

pub(crate) fn record_context_created(kind: ContextKind) {
    counters(kind).contexts_created.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_context_released(kind: ContextKind) {
    counters(kind).contexts_released.fetch_add(1, Ordering::Relaxed);
}

/// Record one successful call: `bytes_in` consumed, `bytes_out` produced.
pub(crate) fn record_call(kind: ContextKind, bytes_in: usize, bytes_out: usize) {
    let c = counters(kind);
    c.calls.fetch_add(1, Ordering::Relaxed);
    c.bytes_in.fetch_add(bytes_in as u64, Ordering::Relaxed);
    c.bytes_out.fetch_add(bytes_out as u64, Ordering::Relaxed);
}
