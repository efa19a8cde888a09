//! compression/context.rs
//! Thread-local codec contexts.
//!
//! Each thread lazily creates at most one compression and one decompression
//! context on first use. The slot owns the context and frees it when the
//! thread exits. Contexts never leave their thread, so no locking is needed.
use std::cell::RefCell;

use tracing::debug;
use zstd_safe::{CCtx, DCtx};

use crate::compression::types::{CompressionError, Result};
use crate::telemetry::{record_context_created, record_context_released, ContextKind};

struct CompressionContext {
    cctx: CCtx<'static>,
}

impl CompressionContext {
    fn create() -> Result<Self> {
        let cctx = CCtx::try_create()
            .ok_or(CompressionError::Allocation { resource: "compression context" })?;
        record_context_created(ContextKind::Compression);
        debug!(thread = ?std::thread::current().id(), "compression context created");
        Ok(Self { cctx })
    }
}

impl Drop for CompressionContext {
    fn drop(&mut self) {
        record_context_released(ContextKind::Compression);
        debug!("compression context released");
    }
}

struct DecompressionContext {
    dctx: DCtx<'static>,
}

impl DecompressionContext {
    fn create() -> Result<Self> {
        let dctx = DCtx::try_create()
            .ok_or(CompressionError::Allocation { resource: "decompression context" })?;
        record_context_created(ContextKind::Decompression);
        debug!(thread = ?std::thread::current().id(), "decompression context created");
        Ok(Self { dctx })
    }
}

impl Drop for DecompressionContext {
    fn drop(&mut self) {
        record_context_released(ContextKind::Decompression);
        debug!("decompression context released");
    }
}

thread_local! {
    static COMPRESSION_CONTEXT: RefCell<Option<CompressionContext>> = const { RefCell::new(None) };
    static DECOMPRESSION_CONTEXT: RefCell<Option<DecompressionContext>> = const { RefCell::new(None) };
}

fn get_or_try_insert<T>(slot: &mut Option<T>, create: impl FnOnce() -> Result<T>) -> Result<&mut T> {
    match slot {
        Some(value) => Ok(value),
        None => Ok(slot.insert(create()?)),
    }
}

/// Run `f` with this thread's compression context, creating it on first use.
pub(crate) fn with_compression_context<R>(
    f: impl FnOnce(&mut CCtx<'static>) -> Result<R>,
) -> Result<R> {
    COMPRESSION_CONTEXT
        .try_with(|slot| -> Result<R> {
            let mut slot = slot.borrow_mut();
            let ctx = get_or_try_insert(&mut *slot, CompressionContext::create)?;
            f(&mut ctx.cctx)
        })
        .map_err(|_| CompressionError::Allocation { resource: "compression context (thread exiting)" })?
}

/// Run `f` with this thread's decompression context, creating it on first use.
pub(crate) fn with_decompression_context<R>(
    f: impl FnOnce(&mut DCtx<'static>) -> Result<R>,
) -> Result<R> {
    DECOMPRESSION_CONTEXT
        .try_with(|slot| -> Result<R> {
            let mut slot = slot.borrow_mut();
            let ctx = get_or_try_insert(&mut *slot, DecompressionContext::create)?;
            f(&mut ctx.dctx)
        })
        .map_err(|_| CompressionError::Allocation { resource: "decompression context (thread exiting)" })?
}
