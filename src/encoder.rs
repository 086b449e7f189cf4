//! Encoder: rewrites period violations into tail-appended escape records.
//!
//! The working buffer starts as `payload + [1]` and keeps length `n + 1`
//! for the whole run. Full left-to-right scans repeat until one finds no
//! window with minimal period below `p`. Each violating window loses its
//! reconstructible periodic tail, gains a single-set-bit marker encoding
//! the period inside the surviving prefix, and appends an
//! `(index, continuation)` record at the stream end. Records therefore
//! form a stack: the last one appended is the first the decoder undoes.

use crate::bits::to_bits;
use crate::buffer::BitBuffer;
use crate::error::{Error, Result};
use crate::params::CodeParams;
use crate::period::min_period;

/// A single rewrite applied during encoding.
///
/// Conceptually one entry of the escape-record stack, even though on the
/// wire the record is interleaved with payload bits in the flat stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Window offset the rewrite was applied at.
    pub offset: usize,
    /// Minimal period that made the window violate the bound.
    pub period: usize,
}

/// Summary of the work done by [`encode_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeStats {
    /// Corrections in application (stack push) order.
    pub corrections: Vec<Correction>,
    /// Full scans over the buffer, including the final clean one.
    pub passes: usize,
}

/// Encodes `payload` into an `n + 1`-bit stream in which every window
/// of length `l` has minimal period at least `p`.
pub fn encode(payload: &[bool], params: &CodeParams) -> Result<Vec<bool>> {
    encode_with_stats(payload, params).map(|(bits, _)| bits)
}

/// Like [`encode`], but also reports the correction stack and pass count.
pub fn encode_with_stats(
    payload: &[bool],
    params: &CodeParams,
) -> Result<(Vec<bool>, EncodeStats)> {
    let (n, l, p) = (params.n(), params.l(), params.p());
    if payload.len() != n {
        return Err(Error::PayloadLength {
            expected: n,
            actual: payload.len(),
        });
    }

    let mut buf = BitBuffer::with_capacity(n + 1);
    buf.extend_from_slice(payload);
    buf.push(true); // terminator: marks the payload boundary for decode

    let limit = params.correction_limit();
    let mut corrections = Vec::new();
    let mut passes = 0;

    loop {
        passes += 1;
        let mut clean = true;

        // Window offsets are fixed by n and l, not by buffer mutations:
        // the buffer length is invariant, and a correction at offset i
        // never touches positions before i.
        for i in 0..=(n + 1 - l) {
            let period = min_period(buf.window(i, l))?;
            if period >= p {
                continue;
            }

            // Drop the redundant tail of the repeat; one full prefix of
            // length p stays behind.
            buf.remove_range(i + p, i + l);

            // Encode the period as the position of the last set bit in
            // the slot range [i + period, i + p - 1].
            buf.set(i + period, true);
            for j in i + period + 1..i + p {
                buf.set(j, false);
            }

            // Escape record: window offset, then a continuation bit
            // telling the decoder another record precedes the terminator.
            buf.extend_from_slice(&to_bits(i, params.index_bits()));
            buf.push(false);

            debug_assert_eq!(buf.len(), n + 1);

            corrections.push(Correction { offset: i, period });
            if corrections.len() > limit {
                return Err(Error::EncodingDiverged {
                    corrections: corrections.len(),
                });
            }
            clean = false;
        }

        if clean {
            break;
        }
    }

    Ok((buf.into_vec(), EncodeStats { corrections, passes }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> CodeParams {
        CodeParams::with_min_window(20, 14).unwrap()
    }

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_clean_payload_passes_through() {
        // 0^19 1 is aperiodic, and so is every window once the
        // terminator is appended: no correction fires.
        let params = reference_params();
        let mut payload = vec![false; 19];
        payload.push(true);

        let (encoded, stats) = encode_with_stats(&payload, &params).unwrap();

        let mut expected = payload.clone();
        expected.push(true);
        assert_eq!(encoded, expected);
        assert!(stats.corrections.is_empty());
        assert_eq!(stats.passes, 1);
    }

    #[test]
    fn test_all_zero_payload() {
        // Hand-derived: the first pass collapses the all-zero window at
        // offset 0 (period 1), which exposes a period-13 window at
        // offset 1; the second pass is clean.
        let params = reference_params();
        let payload = vec![false; 20];

        let (encoded, stats) = encode_with_stats(&payload, &params).unwrap();

        assert_eq!(encoded, bits("010000000000001100000"));
        assert_eq!(
            stats.corrections,
            vec![
                Correction { offset: 0, period: 1 },
                Correction { offset: 1, period: 13 },
            ]
        );
        assert_eq!(stats.passes, 2);
    }

    #[test]
    fn test_output_length_is_always_n_plus_one() {
        let params = reference_params();
        for seed in [0usize, 1, 0xfffff, 0x55555, 0xaaaaa, 0x12345] {
            let payload: Vec<bool> = (0..20).map(|j| (seed >> j) & 1 == 1).collect();
            let encoded = encode(&payload, &params).unwrap();
            assert_eq!(encoded.len(), 21);
        }
    }

    #[test]
    fn test_every_window_satisfies_bound() {
        let params = reference_params();
        let payload = vec![true; 20];
        let encoded = encode(&payload, &params).unwrap();

        for i in 0..=(params.n() + 1 - params.l()) {
            let window = &encoded[i..i + params.l()];
            assert!(min_period(window).unwrap() >= params.p());
        }
    }

    #[test]
    fn test_wrong_payload_length() {
        let params = reference_params();
        assert_eq!(
            encode(&[true; 7], &params),
            Err(Error::PayloadLength { expected: 20, actual: 7 })
        );
    }
}
