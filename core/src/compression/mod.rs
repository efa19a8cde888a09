//! compression/mod.rs
//! Dictionary training plus one-shot zstd compression and decompression.
//!
//! Notes:
//! - `TrainData` owns trained dictionary bytes; the two dictionary types
//!   digest them once for their side of the codec.
//! - `CompressionService` / `DecompressionService` are pure dispatch over a
//!   context owned by the calling thread.

pub mod constants;
pub mod types;
pub mod train;
pub mod dictionary;
pub mod compress;
pub mod decompress;

mod context;

pub use constants::*;
pub use types::*;
pub use train::*;
pub use dictionary::*;
pub use compress::*;
pub use decompress::*;
