//! compression/train.rs
//! Dictionary training into a fixed-capacity buffer.
//!
//! Design notes:
//! - The buffer is reserved once; the trainer writes into its spare capacity
//!   and `size()` reports the trained length, `capacity()` the reservation.
//! - A failed `train` leaves the instance empty (`size() == 0`) but droppable.
use std::num::NonZeroU32;

use bytemuck::Pod;
use tracing::debug;

use crate::compression::constants::DEFAULT_DICT_CAPACITY;
use crate::compression::types::{CompressionError, Result};
use crate::config::CodecConfig;

/// Trained dictionary content plus the buffer it was trained into.
#[derive(Debug)]
pub struct TrainData {
    buffer: Vec<u8>,
    capacity: usize,
}

impl TrainData {
    /// Reserve the default 100 MiB buffer.
    pub fn new() -> Result<Self> {
        Self::with_capacity(DEFAULT_DICT_CAPACITY)
    }

    /// Reserve exactly `capacity` bytes for the trainer's output.
    ///
    /// # Errors
    /// - `CompressionError::Allocation` if the reservation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| CompressionError::Allocation { resource: "dictionary buffer" })?;
        Ok(Self { buffer, capacity })
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        Self::with_capacity(config.dict_capacity)
    }

    /// Wrap dictionary bytes produced by an earlier training run.
    pub fn from_dictionary(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(CompressionError::Training { msg: "dictionary bytes are empty".into() });
        }
        let capacity = bytes.len();
        Ok(Self { buffer: bytes, capacity })
    }

    /// Train from homogeneous fixed-size samples; every sample contributes
    /// `size_of::<T>()` bytes to the size table.
    ///
    /// Returns the trained dictionary length.
    ///
    /// # Errors
    /// - `CompressionError::Training` on empty input or when the trainer
    ///   reports an error (capacity too small, degenerate samples).
    pub fn train<T: Pod>(&mut self, samples: &[T]) -> Result<usize> {
        let sample_size = std::mem::size_of::<T>();
        if sample_size == 0 {
            return Err(CompressionError::Training { msg: "samples are empty".into() });
        }
        let sizes = vec![sample_size; samples.len()];
        self.train_continuous(bytemuck::cast_slice(samples), &sizes)
    }

    /// Train from samples of differing lengths.
    pub fn train_from_slices<S: AsRef<[u8]>>(&mut self, samples: &[S]) -> Result<usize> {
        let sizes: Vec<usize> = samples.iter().map(|s| s.as_ref().len()).collect();
        let mut concatenated = Vec::with_capacity(sizes.iter().sum());
        for sample in samples {
            concatenated.extend_from_slice(sample.as_ref());
        }
        self.train_continuous(&concatenated, &sizes)
    }

    fn train_continuous(&mut self, content: &[u8], sizes: &[usize]) -> Result<usize> {
        if sizes.is_empty() {
            return Err(CompressionError::Training { msg: "no samples".into() });
        }
        if content.is_empty() {
            return Err(CompressionError::Training { msg: "samples are empty".into() });
        }

        // Failure must not leave stale content behind.
        self.buffer.clear();

        debug!(
            samples = sizes.len(),
            bytes = content.len(),
            capacity = self.capacity,
            "training dictionary"
        );

        let written = zstd_safe::train_from_buffer(&mut self.buffer, content, sizes)
            .map_err(CompressionError::training)?;

        debug!(trained = written, "dictionary trained");
        Ok(written)
    }

    /// Valid dictionary content (empty before a successful `train`).
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of valid trained bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Capacity reserved at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_trained(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Dictionary id embedded by the trainer; `None` for raw content.
    pub fn dict_id(&self) -> Option<u32> {
        zstd_safe::get_dict_id_from_dict(&self.buffer).map(NonZeroU32::get)
    }
}
