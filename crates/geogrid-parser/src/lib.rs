//! Decoder for WRF geogrid binary tiles.
//!
//! A geogrid tile is an ENVI-style flat file: `nx * ny * nz` fixed-width
//! integers in `[z][y][x]` order (x fastest), each `word_size` bytes wide,
//! optionally two's-complement signed, stored as `value * scale` rounded to
//! an integer. Decoding reverses that into `f32` samples.
//!
//! The tile header normally lives in a separate `index` file; it is not
//! read here and all layout parameters come from [`TileConfig`].
//!
//! # Example
//!
//! ```ignore
//! use geogrid_common::{Endianness, TileConfig};
//! use geogrid_parser::TileReader;
//!
//! let config = TileConfig::new("00001-00600.00001-00600", 600, 600, 1)
//!     .with_word_size(2)
//!     .with_endianness(Endianness::Big);
//!
//! let field = TileReader::open(config.path())?.decode(&config)?;
//! ```

mod reader;
pub mod words;

pub use geogrid_common::{DecodeError, DecodeResult, Endianness, Field, TileConfig};
pub use reader::{decode, TileReader};
pub use words::{reassemble_word, sign_extend, word_value, MAX_EXACT_WORD_SIZE};
