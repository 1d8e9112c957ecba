//! Known-good tiles with their expected decode results.

/// 2x2 single-level tile of 2-byte unsigned big-endian words.
pub mod small_tile {
    pub const NX: usize = 2;
    pub const NY: usize = 2;
    pub const NZ: usize = 1;
    pub const WORD_SIZE: usize = 2;

    /// Encodes 10, 20, 30, 40.
    pub const BYTES: [u8; 8] = [0x00, 0x0A, 0x00, 0x14, 0x00, 0x1E, 0x00, 0x28];

    pub const VALUES: [f32; 4] = [10.0, 20.0, 30.0, 40.0];

    /// Statistics line for the only level.
    pub const STATS_LINE: &str = "1 25.000000 0.000000 40.000000";
}

/// Byte `0xFF` read as a single 1-byte word.
pub mod all_ones_byte {
    pub const BYTES: [u8; 1] = [0xFF];
    pub const UNSIGNED: f32 = 255.0;
    pub const SIGNED: f32 = -1.0;
}
