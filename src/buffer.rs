//! Working buffer for the in-place correction rewrite.

use std::ops::Index;

/// Growable bit buffer with index-based editing.
///
/// Each transform direction owns exactly one of these per call. During
/// encoding its length is pinned at `n + 1`: every range removal is
/// paired with a tail append of the same total width. Corrections only
/// ever touch positions at or after their own window offset, which is
/// what lets a scan keep walking forward after rewriting the buffer
/// under itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Creates an empty buffer with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of bits currently held.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the buffer holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends a single bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Removes and returns the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Overwrites the bit at `index`.
    pub fn set(&mut self, index: usize, bit: bool) {
        self.bits[index] = bit;
    }

    /// Appends all bits of `bits`.
    pub fn extend_from_slice(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// The window of `len` bits starting at `offset`.
    pub fn window(&self, offset: usize, len: usize) -> &[bool] {
        &self.bits[offset..offset + len]
    }

    /// Removes `bits[start..end]`, shifting the tail left.
    pub fn remove_range(&mut self, start: usize, end: usize) {
        self.bits.drain(start..end);
    }

    /// Inserts `count` zero bits at `at`, shifting the tail right.
    pub fn insert_zeros(&mut self, at: usize, count: usize) {
        self.bits.splice(at..at, std::iter::repeat(false).take(count));
    }

    /// Removes and returns the last `count` bits, in stream order.
    ///
    /// The caller guarantees `count <= len()`.
    pub fn split_off_tail(&mut self, count: usize) -> Vec<bool> {
        self.bits.split_off(self.bits.len() - count)
    }

    /// All bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Consumes the buffer, returning the underlying bit vector.
    pub fn into_vec(self) -> Vec<bool> {
        self.bits
    }
}

impl Index<usize> for BitBuffer {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}
