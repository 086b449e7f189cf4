//! Decoder: undoes escape records from the stream tail.
//!
//! Records are undone most-recent-first. Each one was appended after,
//! and its index refers to buffer state beneath, every earlier record,
//! so the stream tail behaves as the top of the correction stack. The
//! decoder never re-runs period search: the marker bit inside the
//! surviving prefix names the period directly, and periodic replay
//! reconstructs the collapsed tail.

use crate::bits::from_bits;
use crate::buffer::BitBuffer;
use crate::error::{Result, StreamError};
use crate::params::CodeParams;

/// Recovers the original `n`-bit payload from a stream produced by
/// [`encode`](crate::encode) with the same parameters.
///
/// The format carries no checksum; streams that were not produced by
/// the encoder decode to garbage or fail with
/// [`MalformedStream`](crate::Error::MalformedStream), but never panic
/// or read out of bounds.
pub fn decode(encoded: &[bool], params: &CodeParams) -> Result<Vec<bool>> {
    let (n, l, p) = (params.n(), params.l(), params.p());
    if encoded.len() != n + 1 {
        return Err(StreamError::LengthMismatch {
            expected: n + 1,
            actual: encoded.len(),
        }
        .into());
    }

    let mut buf = BitBuffer::from_bits(encoded.to_vec());
    let limit = params.correction_limit();
    let mut undone = 0usize;

    // Buffer length is n + 1 at every loop head, so bit n is the last
    // bit: 0 means one more record, 1 is the original terminator.
    while !buf[n] {
        undone += 1;
        if undone > limit {
            return Err(StreamError::TooManyRecords { limit }.into());
        }

        buf.pop(); // continuation bit
        let index = from_bits(&buf.split_off_tail(params.index_bits()));
        if index > n + 1 - l {
            return Err(StreamError::IndexOutOfRange {
                index,
                max: n + 1 - l,
            }
            .into());
        }

        // The marker is the last set bit in the prefix slot range
        // [index, index + p - 1]. A marker at the window start would
        // mean period 0, which no window has.
        let mut j = index + p - 1;
        while !buf[j] {
            if j == index {
                return Err(StreamError::MissingMarker { index }.into());
            }
            j -= 1;
        }
        let period = j - index;
        if period == 0 {
            return Err(StreamError::MissingMarker { index }.into());
        }

        // Restore the window to full length, then replay the periodic
        // repetition; this also overwrites the marker bits with real
        // content.
        buf.insert_zeros(index + p, l - p);
        for i in index + period..index + l {
            let bit = buf[i - period];
            buf.set(i, bit);
        }

        debug_assert_eq!(buf.len(), n + 1);
    }

    buf.pop(); // terminator
    Ok(buf.into_vec())
}
