//! compression/decompress.rs
//! One-shot decompression and frame size discovery.
use tracing::trace;

use crate::compression::context::with_decompression_context;
use crate::compression::dictionary::DecompressionDictionary;
use crate::compression::types::{CodecOp, CompressionError, Result};
use crate::telemetry::{record_call, ContextKind};

/// Stateless decompression entry points, mirror of `CompressionService`.
pub enum DecompressionService {}

impl DecompressionService {
    /// Decompressed size recorded in the frame header.
    ///
    /// # Errors
    /// - `CompressionError::UnknownSize` if the frame does not record its size.
    ///   Callers may fall back to incremental decoding.
    /// - `CompressionError::Codec` if the header is malformed.
    pub fn frame_content_size(source: &[u8]) -> Result<u64> {
        match zstd_safe::get_frame_content_size(source) {
            Ok(Some(size)) => Ok(size),
            Ok(None) => Err(CompressionError::UnknownSize),
            Err(_) => Err(CompressionError::Codec {
                op: CodecOp::FrameSize,
                msg: "cannot determine size".into(),
            }),
        }
    }

    /// Decompress into `dest`; returns the written length. Never writes past
    /// `dest.len()`.
    ///
    /// # Errors
    /// - `CompressionError::Codec` if `dest` is too small or the frame is
    ///   corrupt or truncated.
    pub fn decompress_into(dest: &mut [u8], source: &[u8]) -> Result<usize> {
        Self::run(source.len(), |dctx| {
            dctx.decompress(dest, source)
                .map_err(|code| CompressionError::codec(CodecOp::Decompress, code))
        })
    }

    /// Same as `decompress_into`, using a prepared dictionary.
    pub fn decompress_with_dict_into(
        dict: &DecompressionDictionary,
        dest: &mut [u8],
        source: &[u8],
    ) -> Result<usize> {
        Self::run(source.len(), |dctx| {
            dctx.decompress_using_ddict(dest, source, dict.handle())
                .map_err(|code| CompressionError::codec(CodecOp::Decompress, code))
        })
    }

    /// Decompress into a buffer sized from the headers of every frame in
    /// `source`; concatenated frames decode into one buffer.
    ///
    /// # Errors
    /// - `CompressionError::UnknownSize` if any frame omits its size.
    /// - `CompressionError::Codec` if a frame is malformed or truncated.
    pub fn decompress(source: &[u8]) -> Result<Vec<u8>> {
        let mut dest = Self::sized_buffer(source)?;
        Self::run(source.len(), |dctx| {
            dctx.decompress(&mut dest, source)
                .map_err(|code| CompressionError::codec(CodecOp::Decompress, code))
        })?;
        Ok(dest)
    }

    /// Same as `decompress`, using a prepared dictionary.
    pub fn decompress_with_dict(dict: &DecompressionDictionary, source: &[u8]) -> Result<Vec<u8>> {
        let mut dest = Self::sized_buffer(source)?;
        Self::run(source.len(), |dctx| {
            dctx.decompress_using_ddict(&mut dest, source, dict.handle())
                .map_err(|code| CompressionError::codec(CodecOp::Decompress, code))
        })?;
        Ok(dest)
    }

    // Headers are untrusted input; a huge claimed size must fail, not abort.
    fn sized_buffer(source: &[u8]) -> Result<Vec<u8>> {
        let size = match zstd_safe::find_decompressed_size(source) {
            Ok(Some(size)) => size,
            Ok(None) => return Err(CompressionError::UnknownSize),
            Err(_) => {
                return Err(CompressionError::Codec {
                    op: CodecOp::FrameSize,
                    msg: "cannot determine size".into(),
                })
            }
        };
        let size = usize::try_from(size)
            .map_err(|_| CompressionError::Allocation { resource: "decompression buffer" })?;
        let mut dest = Vec::new();
        dest.try_reserve_exact(size)
            .map_err(|_| CompressionError::Allocation { resource: "decompression buffer" })?;
        Ok(dest)
    }

    fn run(
        source_len: usize,
        op: impl FnOnce(&mut zstd_safe::DCtx<'static>) -> Result<usize>,
    ) -> Result<usize> {
        let written = with_decompression_context(op)?;
        record_call(ContextKind::Decompression, source_len, written);
        trace!(source_len, written, "decompressed");
        Ok(written)
    }
}
