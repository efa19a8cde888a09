//! compression/compress.rs
//! One-shot compression over the calling thread's context.
use tracing::trace;

use crate::compression::context::with_compression_context;
use crate::compression::dictionary::CompressionDictionary;
use crate::compression::types::{check_level, CodecOp, CompressionError, Result};
use crate::telemetry::{record_call, ContextKind};

/// Stateless compression entry points. Never instantiated; every call
/// dispatches to a context owned by the calling thread.
pub enum CompressionService {}

impl CompressionService {
    /// Worst-case compressed size for `source_size` input bytes.
    #[inline]
    pub fn compress_bound(source_size: usize) -> usize {
        zstd_safe::compress_bound(source_size)
    }

    /// Compress `source` at `level` into a freshly allocated buffer trimmed
    /// to the written length.
    ///
    /// # Errors
    /// - `CompressionError::InvalidLevel` for levels outside the engine range.
    /// - `CompressionError::Allocation` if this thread's context cannot be created.
    /// - `CompressionError::Codec` if the engine fails.
    pub fn compress(source: &[u8], level: i32) -> Result<Vec<u8>> {
        check_level(level)?;
        let mut dest = Vec::with_capacity(Self::compress_bound(source.len()));
        Self::run(source.len(), |cctx| {
            cctx.compress(&mut dest, source, level)
                .map_err(|code| CompressionError::codec(CodecOp::Compress, code))
        })?;
        Ok(dest)
    }

    /// Compress into a caller-supplied buffer; returns the written length.
    /// Fails with `Codec` when `dest` is too small.
    pub fn compress_into(dest: &mut [u8], source: &[u8], level: i32) -> Result<usize> {
        check_level(level)?;
        Self::run(source.len(), |cctx| {
            cctx.compress(dest, source, level)
                .map_err(|code| CompressionError::codec(CodecOp::Compress, code))
        })
    }

    /// Compress with a prepared dictionary; the level is the dictionary's.
    pub fn compress_with_dict(dict: &CompressionDictionary, source: &[u8]) -> Result<Vec<u8>> {
        let mut dest = Vec::with_capacity(Self::compress_bound(source.len()));
        Self::run(source.len(), |cctx| {
            cctx.compress_using_cdict(&mut dest, source, dict.handle())
                .map_err(|code| CompressionError::codec(CodecOp::Compress, code))
        })?;
        Ok(dest)
    }

    /// Dictionary variant of `compress_into`; fails with `Codec` when `dest`
    /// is too small.
    pub fn compress_with_dict_into(
        dict: &CompressionDictionary,
        dest: &mut [u8],
        source: &[u8],
    ) -> Result<usize> {
        Self::run(source.len(), |cctx| {
            cctx.compress_using_cdict(dest, source, dict.handle())
                .map_err(|code| CompressionError::codec(CodecOp::Compress, code))
        })
    }

    fn run(
        source_len: usize,
        op: impl FnOnce(&mut zstd_safe::CCtx<'static>) -> Result<usize>,
    ) -> Result<usize> {
        let written = with_compression_context(op)?;
        record_call(ContextKind::Compression, source_len, written);
        trace!(source_len, written, "compressed");
        Ok(written)
    }
}
