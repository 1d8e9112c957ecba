//! Test data generators for building synthetic geogrid tiles.
//!
//! The encoders here are the inverse of the tile decoder: they turn integer
//! samples into fixed-width words so tests can round-trip known values.

use geogrid_common::Endianness;

/// Encodes one integer as a `word_size`-byte word.
///
/// Negative values are written in two's complement. Words wider than 16
/// bytes are sign-extended.
///
/// # Example
///
/// ```
/// use geogrid_common::Endianness;
/// use test_utils::encode_word;
///
/// assert_eq!(encode_word(10, 2, Endianness::Big), vec![0x00, 0x0A]);
/// assert_eq!(encode_word(10, 2, Endianness::Little), vec![0x0A, 0x00]);
/// assert_eq!(encode_word(-1, 1, Endianness::Big), vec![0xFF]);
/// ```
pub fn encode_word(value: i128, word_size: usize, endianness: Endianness) -> Vec<u8> {
    let le = value.to_le_bytes();
    let fill = if value < 0 { 0xFF } else { 0x00 };

    let mut word: Vec<u8> = (0..word_size)
        .map(|i| le.get(i).copied().unwrap_or(fill))
        .collect();

    if endianness == Endianness::Big {
        word.reverse();
    }
    word
}

/// Encodes a whole tile, samples in storage order (`x` fastest).
pub fn encode_tile(values: &[i128], word_size: usize, endianness: Endianness) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * word_size);
    for &value in values {
        bytes.extend(encode_word(value, word_size, endianness));
    }
    bytes
}

/// Reverses the bytes of every `word_size`-byte word in `bytes`.
///
/// A trailing partial word is left untouched.
pub fn reverse_words(bytes: &[u8], word_size: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    for word in out.chunks_exact_mut(word_size) {
        word.reverse();
    }
    out
}

/// Creates predictable integer samples for an `nx * ny * nz` grid.
///
/// Each value is `z * 10000 + y * 100 + x`, which makes it easy to verify
/// that a sample landed at `[z][y][x]`.
///
/// # Example
///
/// ```
/// use test_utils::create_index_samples;
///
/// let samples = create_index_samples(3, 2, 2);
/// assert_eq!(samples.len(), 12);
/// assert_eq!(samples[1], 1);      // x=1
/// assert_eq!(samples[3], 100);    // y=1
/// assert_eq!(samples[6], 10000);  // z=1
/// ```
pub fn create_index_samples(nx: usize, ny: usize, nz: usize) -> Vec<i128> {
    let mut samples = Vec::with_capacity(nx * ny * nz);
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                samples.push((z * 10_000 + y * 100 + x) as i128);
            }
        }
    }
    samples
}

/// Inclusive range of integers representable by a word.
///
/// Only meaningful for words of up to 8 bytes.
pub fn word_range(word_size: usize, signed: bool) -> (i128, i128) {
    let bits = (word_size * 8) as u32;
    if signed {
        let half = 1i128 << (bits - 1);
        (-half, half - 1)
    } else {
        (0, (1i128 << bits) - 1)
    }
}

/// Creates `count` samples spread over the full range of a word type.
///
/// The first samples are always the extremes and zero, so sign handling and
/// the top bit get exercised even for small tiles.
pub fn create_range_samples(count: usize, word_size: usize, signed: bool) -> Vec<i128> {
    let (min, max) = word_range(word_size, signed);
    let span = max - min + 1;
    // Odd stride so consecutive samples differ in their low byte too
    let stride = (span / 7) | 1;

    let mut samples = vec![min, max, 0];
    let mut i = 0i128;
    while samples.len() < count {
        samples.push(min + (i * stride) % span);
        i += 1;
    }
    samples.truncate(count);
    samples
}
