//! Integer <-> bit-sequence conversion, least significant bit first.

/// Expands `value` into `width` bits, LSB first.
///
/// The caller guarantees `value < 2^width`; higher bits are silently
/// dropped.
pub fn to_bits(value: usize, width: usize) -> Vec<bool> {
    (0..width).map(|j| (value >> j) & 1 == 1).collect()
}

/// Folds an LSB-first bit slice back into an integer.
///
/// Inverse of [`to_bits`]: `from_bits(&to_bits(v, w)) == v` for every
/// `v < 2^w`.
pub fn from_bits(bits: &[bool]) -> usize {
    bits.iter()
        .enumerate()
        .fold(0, |acc, (j, &bit)| acc | (usize::from(bit) << j))
}
