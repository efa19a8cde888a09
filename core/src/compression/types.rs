//! compression/types.rs
//! Error taxonomy and small shared helpers.
//!
//! Every failure reported by the zstd engine is mapped into a closed set of
//! variants. The engine's diagnostic name is preserved as payload so callers
//! never see raw integer codes.
use std::fmt;

use thiserror::Error;

use crate::compression::constants::MIN_COMPRESSION_LEVEL;

/// Which engine entry point produced a codec failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecOp {
    Compress,
    Decompress,
    FrameSize,
}

impl fmt::Display for CodecOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodecOp::Compress   => "compress",
            CodecOp::Decompress => "decompress",
            CodecOp::FrameSize  => "frame size",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    /// Native handle, context or buffer could not be allocated. Fatal.
    #[error("allocation failed: {resource}")]
    Allocation { resource: &'static str },

    /// The dictionary trainer rejected the input.
    #[error("train error: {msg}")]
    Training { msg: String },

    /// Compression or decompression failed inside the engine.
    #[error("{op} error: {msg}")]
    Codec { op: CodecOp, msg: String },

    /// The frame header does not carry the decompressed size.
    #[error("unknown size")]
    UnknownSize,

    #[error("compression level {level} out of range {min}..={max}")]
    InvalidLevel { level: i32, min: i32, max: i32 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CompressionError {
    /// Map a zstd error code into a codec failure carrying the engine's name for it.
    pub(crate) fn codec(op: CodecOp, code: zstd_safe::ErrorCode) -> Self {
        CompressionError::Codec { op, msg: zstd_safe::get_error_name(code).to_string() }
    }

    pub(crate) fn training(code: zstd_safe::ErrorCode) -> Self {
        CompressionError::Training { msg: zstd_safe::get_error_name(code).to_string() }
    }

    /// Resource exhaustion; nothing sensible can be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CompressionError::Allocation { .. })
    }

    /// Caller can change its input (samples, level, config) or fall back to
    /// another decoding strategy.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CompressionError::UnknownSize
                | CompressionError::Training { .. }
                | CompressionError::InvalidLevel { .. }
                | CompressionError::Config(_)
        )
    }

    /// `UnknownSize` is a specialization of the codec family.
    pub fn is_codec_failure(&self) -> bool {
        matches!(self, CompressionError::Codec { .. } | CompressionError::UnknownSize)
    }
}

impl From<serde_json::Error> for CompressionError {
    fn from(e: serde_json::Error) -> Self {
        CompressionError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;

/// Upper bound for levels, as reported by the engine.
#[inline]
pub fn max_compression_level() -> i32 {
    zstd_safe::max_c_level()
}

/// Reject levels outside `MIN_COMPRESSION_LEVEL..=max_compression_level()`.
/// zstd would clamp them silently.
pub fn check_level(level: i32) -> Result<()> {
    let max = max_compression_level();
    if (MIN_COMPRESSION_LEVEL..=max).contains(&level) {
        Ok(())
    } else {
        Err(CompressionError::InvalidLevel { level, min: MIN_COMPRESSION_LEVEL, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bounds_are_inclusive() {
        assert!(check_level(MIN_COMPRESSION_LEVEL).is_ok());
        assert!(check_level(max_compression_level()).is_ok());
        assert!(matches!(check_level(0), Err(CompressionError::InvalidLevel { level: 0, .. })));
        assert!(check_level(max_compression_level() + 1).is_err());
    }

    #[test]
    fn classification() {
        let alloc = CompressionError::Allocation { resource: "cctx" };
        assert!(alloc.is_fatal());
        assert!(!alloc.is_recoverable());

        assert!(CompressionError::UnknownSize.is_recoverable());
        assert!(CompressionError::UnknownSize.is_codec_failure());

        let codec = CompressionError::Codec { op: CodecOp::Decompress, msg: "x".into() };
        assert!(codec.is_codec_failure());
        assert!(!codec.is_recoverable());
        assert_eq!(codec.to_string(), "decompress error: x");
    }
}
