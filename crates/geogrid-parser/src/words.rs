//! Width-parametric word reassembly.
//!
//! Words are rebuilt byte by byte so any width decodes the same way; there
//! are no dedicated 16/32-bit paths.

use geogrid_common::Endianness;

/// Widest word decoded exactly through the `u128` accumulator.
pub const MAX_EXACT_WORD_SIZE: usize = 16;

/// Reassemble up to 16 bytes into an unsigned integer.
///
/// With [`Endianness::Big`] the first byte is the most significant, with
/// [`Endianness::Little`] it is the least significant.
pub fn reassemble_word(word: &[u8], endianness: Endianness) -> u128 {
    debug_assert!(word.len() <= MAX_EXACT_WORD_SIZE);

    let accumulate = |acc: u128, byte: &u8| (acc << 8) | u128::from(*byte);
    match endianness {
        Endianness::Big => word.iter().fold(0, accumulate),
        Endianness::Little => word.iter().rev().fold(0, accumulate),
    }
}

/// Interpret the low `bits` bits of `raw` as a two's-complement integer.
///
/// When bit `bits - 1` is set the result is `raw - 2^bits`.
pub fn sign_extend(raw: u128, bits: u32) -> i128 {
    debug_assert!((1..=128).contains(&bits));

    let shift = 128 - bits;
    ((raw << shift) as i128) >> shift
}

/// Integer value of one word, as `f64`.
///
/// Words of up to [`MAX_EXACT_WORD_SIZE`] bytes are exact before the final
/// conversion. Wider words are accumulated in `f64` directly.
pub fn word_value(word: &[u8], endianness: Endianness, signed: bool) -> f64 {
    if word.len() <= MAX_EXACT_WORD_SIZE {
        let raw = reassemble_word(word, endianness);
        if signed {
            sign_extend(raw, (word.len() * 8) as u32) as f64
        } else {
            raw as f64
        }
    } else {
        wide_word_value(word, endianness, signed)
    }
}

fn wide_word_value(word: &[u8], endianness: Endianness, signed: bool) -> f64 {
    // Most significant byte first
    let bytes: Vec<u8> = match endianness {
        Endianness::Big => word.to_vec(),
        Endianness::Little => word.iter().rev().copied().collect(),
    };

    let negative = signed && bytes.first().is_some_and(|&b| b & 0x80 != 0);
    if negative {
        // -(~raw + 1) avoids subtracting 2^bits, which overflows long before raw does
        let inverted = bytes
            .iter()
            .fold(0.0_f64, |acc, &b| acc * 256.0 + f64::from(!b));
        -(inverted + 1.0)
    } else {
        bytes
            .iter()
            .fold(0.0_f64, |acc, &b| acc * 256.0 + f64::from(b))
    }
}
