//! Common types shared across the geogrid conversion crates.
//!
//! - [`TileConfig`]: immutable description of how a raw tile is encoded
//! - [`Field`]: the decoded `[z][y][x]` sample buffer
//! - [`LevelStats`] and [`aggregate_levels`]: per-level summary statistics
//! - [`ConfigError`] / [`DecodeError`]: the configuration and decode error taxonomy

pub mod config;
pub mod error;
pub mod field;
pub mod stats;

pub use config::{Endianness, TileConfig};
pub use error::{ConfigError, DecodeError, DecodeResult};
pub use field::Field;
pub use stats::{aggregate_levels, LevelStats};
