//! compression/dictionary.rs
//! Digested dictionaries bound to one side of the codec.
//!
//! Both types own exactly one native handle. They are move-only (no `Clone`)
//! and release the handle on drop. Once built they are immutable and can be
//! shared between threads.
use std::fmt;

use tracing::debug;
use zstd_safe::{CDict, DDict};

use crate::compression::train::TrainData;
use crate::compression::types::{check_level, max_compression_level, CompressionError, Result};
use crate::config::CodecConfig;

fn trained_content(train_data: &TrainData) -> Result<&[u8]> {
    if !train_data.is_trained() {
        return Err(CompressionError::Training { msg: "dictionary has not been trained".into() });
    }
    Ok(train_data.data())
}

/// Compression-side dictionary, digested at a fixed level.
pub struct CompressionDictionary {
    handle: CDict<'static>,
    level: i32,
    dict_id: Option<u32>,
}

impl CompressionDictionary {
    /// # Errors
    /// - `CompressionError::InvalidLevel` if `level` is outside `1..=max_compression_level()`.
    /// - `CompressionError::Training` if `train_data` holds no content.
    /// - `CompressionError::Allocation` if the engine cannot build the dictionary.
    pub fn new(train_data: &TrainData, level: i32) -> Result<Self> {
        check_level(level)?;
        let content = trained_content(train_data)?;

        let handle = CDict::try_create(content, level)
            .ok_or(CompressionError::Allocation { resource: "compression dictionary" })?;

        debug!(level, bytes = content.len(), "compression dictionary built");
        Ok(Self { handle, level, dict_id: train_data.dict_id() })
    }

    pub fn from_config(train_data: &TrainData, config: &CodecConfig) -> Result<Self> {
        Self::new(train_data, config.level)
    }

    pub fn max_compression_level() -> i32 {
        max_compression_level()
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn dict_id(&self) -> Option<u32> {
        self.dict_id
    }

    pub(crate) fn handle(&self) -> &CDict<'static> {
        &self.handle
    }
}

impl fmt::Debug for CompressionDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionDictionary")
            .field("level", &self.level)
            .field("dict_id", &self.dict_id)
            .finish_non_exhaustive()
    }
}

/// Decompression-side dictionary.
pub struct DecompressionDictionary {
    handle: DDict<'static>,
    dict_id: Option<u32>,
}

impl DecompressionDictionary {
    /// # Errors
    /// - `CompressionError::Training` if `train_data` holds no content.
    /// - `CompressionError::Allocation` if the engine cannot build the dictionary.
    pub fn new(train_data: &TrainData) -> Result<Self> {
        let content = trained_content(train_data)?;

        let handle = DDict::try_create(content)
            .ok_or(CompressionError::Allocation { resource: "decompression dictionary" })?;

        debug!(bytes = content.len(), "decompression dictionary built");
        Ok(Self { handle, dict_id: train_data.dict_id() })
    }

    pub fn dict_id(&self) -> Option<u32> {
        self.dict_id
    }

    pub(crate) fn handle(&self) -> &DDict<'static> {
        &self.handle
    }
}

impl fmt::Debug for DecompressionDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecompressionDictionary")
            .field("dict_id", &self.dict_id)
            .finish_non_exhaustive()
    }
}
