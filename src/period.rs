//! Minimal-period detection via the Z-function.
//!
//! A sequence `s` of length `m` has period `q` when `s[i] == s[i + q]`
//! for all `0 <= i < m - q`. The Z-function certifies periods directly:
//! `i` is a period exactly when the suffix starting at `i` matches the
//! prefix for the whole remaining length, i.e. `z[i] == m - i`.

use crate::error::{Error, Result};

/// Computes the Z-array of `s` in amortized O(len) time.
///
/// `z[0]` is `s.len()` by convention; for `i >= 1`, `z[i]` is the
/// length of the longest common prefix of `s` and `s[i..]`.
pub fn z_array<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;

    // [l, r) is the rightmost segment already known to match a prefix;
    // positions inside it reuse earlier z values instead of re-comparing.
    let (mut l, mut r) = (0, 0);
    for i in 1..n {
        let mut k = if i < r { (r - i).min(z[i - l]) } else { 0 };
        while i + k < n && s[k] == s[i + k] {
            k += 1;
        }
        z[i] = k;
        if i + k > r {
            l = i;
            r = i + k;
        }
    }
    z
}

/// Returns every period of `s` in increasing order.
///
/// Non-empty input always yields at least the trivial period `s.len()`.
/// Empty input has no periods.
pub fn periods<T: Eq>(s: &[T]) -> Vec<usize> {
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }
    let z = z_array(s);
    let mut out: Vec<usize> = (1..n).filter(|&i| i + z[i] == n).collect();
    out.push(n);
    out
}

/// Returns the minimal period of `s`.
///
/// Fails with [`Error::EmptyInput`] on an empty sequence, whose minimal
/// period is undefined.
pub fn min_period<T: Eq>(s: &[T]) -> Result<usize> {
    periods(s).first().copied().ok_or(Error::EmptyInput)
}
