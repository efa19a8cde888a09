//! compression/constants.rs
//! Defaults and bounds shared by training, dictionaries and config.

/// Default dictionary buffer capacity (100 MiB).
pub const DEFAULT_DICT_CAPACITY: usize = 100 * 1024 * 1024;

/// Smallest dictionary buffer the zstd trainer will accept.
pub const MIN_DICT_CAPACITY: usize = 256;

/// Balanced default level.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 3;

/// Lowest level accepted by this layer. zstd treats 0 as "default" and
/// negative values as fast modes; neither is exposed here.
pub const MIN_COMPRESSION_LEVEL: i32 = 1;
