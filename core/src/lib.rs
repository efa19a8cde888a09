//! zdict-core
//!
//! Dictionary-trained zstd compression over in-memory buffers.
//! Native handles are owned by safe wrappers; no unsafe code here.

#![forbid(unsafe_code)]

pub mod config;
pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        CompressionDictionary, CompressionError, CompressionService, DecompressionDictionary,
        DecompressionService, TrainData,
    };
    pub use crate::config::CodecConfig;
}
