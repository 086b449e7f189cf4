//! Code parameters and their validity relation.

use crate::error::{Error, Result};

/// Validated parameter set for the period-constrained code.
///
/// A payload length `n`, window length `l`, and period bound `p` only
/// work together when `l = p + ceil(log2(n)) + 1`: each correction then
/// removes exactly as many bits (`l - p`) as the escape record it
/// appends (index field plus continuation bit), which is what keeps the
/// stream pinned at `n + 1` bits throughout encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParams {
    n: usize,
    l: usize,
    p: usize,
    index_bits: usize,
}

impl CodeParams {
    /// Validates and builds a parameter set.
    ///
    /// Fails with [`Error::InvalidParameters`] unless `1 <= p <= l <= n`
    /// and `l = p + ceil(log2(n)) + 1`.
    pub fn new(n: usize, l: usize, p: usize) -> Result<Self> {
        let index_bits = ceil_log2(n);
        let valid = p >= 1 && p <= l && l <= n && l == p + index_bits + 1;
        if !valid {
            return Err(Error::InvalidParameters { n, l, p });
        }
        Ok(Self { n, l, p, index_bits })
    }

    /// Builds the smallest valid window for the given payload length
    /// and period bound.
    pub fn with_min_window(n: usize, p: usize) -> Result<Self> {
        Self::new(n, p + ceil_log2(n) + 1, p)
    }

    /// Payload length in bits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Window length scanned for period violations.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Period bound: every `l`-window of the encoded stream has minimal
    /// period at least this.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Width of an escape record's index field, `ceil(log2(n))`.
    pub fn index_bits(&self) -> usize {
        self.index_bits
    }

    /// Bound on corrections applied (encode) or records undone (decode)
    /// before the transform is treated as diverged.
    pub(crate) fn correction_limit(&self) -> usize {
        self.n * self.n
    }
}

/// `ceil(log2(n))` for `n >= 1`; 0 for `n <= 1`.
pub(crate) fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (n - 1).ilog2() as usize + 1
    }
}
