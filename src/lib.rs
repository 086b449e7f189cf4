//! # Aperiodic - Period-Constrained Bit Encoding
//!
//! A length-preserving transform that turns an `n`-bit payload into an
//! `(n + 1)`-bit stream in which every contiguous window of length `l`
//! has minimal period at least `p`. Streams with this property cannot
//! contain short repeating runs anywhere, which matters where such runs
//! could be mistaken for synchronization markers or resonate in a
//! physical channel.
//!
//! The transform works by appending a terminator bit and then repeatedly
//! rewriting violating windows: the redundant periodic tail of a window
//! is removed, the period is marked as a single set bit inside the
//! surviving prefix, and a compact `(index, continuation)` escape record
//! of exactly the removed width is appended at the stream end. Records
//! form a stack, so decoding undoes them back to front.
//!
//! ## Example
//!
//! ```
//! use aperiodic_rs::{decode, encode, CodeParams};
//!
//! # fn main() -> Result<(), aperiodic_rs::Error> {
//! let params = CodeParams::with_min_window(20, 14)?;
//! let payload = vec![false; 20];
//!
//! let encoded = encode(&payload, &params)?;
//! assert_eq!(encoded.len(), 21);
//!
//! let decoded = decode(&encoded, &params)?;
//! assert_eq!(decoded, payload);
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance
//!
//! - Minimal-period detection is amortized O(window) per query via the
//!   Z-function.
//! - One encode pass scans `n + 2 - l` windows; passes repeat until a
//!   clean one, with a quadratic guard against divergence on malformed
//!   parameter spaces.
//! - Decoding is linear in the number of records plus the final payload.

mod bits;
mod buffer;
mod decoder;
mod encoder;
mod error;
mod params;
mod period;


pub use bits::{from_bits, to_bits};
pub use buffer::BitBuffer;
pub use decoder::decode;
pub use encoder::{encode, encode_with_stats, Correction, EncodeStats};
pub use error::{Error, Result, StreamError};
pub use params::CodeParams;
pub use period::{min_period, periods, z_array};
