//! config.rs
//! Serde-backed defaults for dictionary capacity and compression level.
use serde::{Deserialize, Serialize};

use crate::compression::constants::{DEFAULT_COMPRESSION_LEVEL, DEFAULT_DICT_CAPACITY, MIN_DICT_CAPACITY};
use crate::compression::types::{check_level, CompressionError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Bytes reserved for the trained dictionary.
    pub dict_capacity: usize,
    /// Level used for plain compression and for digesting dictionaries.
    pub level: i32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            dict_capacity: DEFAULT_DICT_CAPACITY,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl CodecConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: CodecConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dict_capacity < MIN_DICT_CAPACITY {
            return Err(CompressionError::Config(format!(
                "dict_capacity {} below minimum {}",
                self.dict_capacity, MIN_DICT_CAPACITY
            )));
        }
        check_level(self.level)
    }
}
