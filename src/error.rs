//! Error types for the period-constrained transform.
//!
//! All failures are contract violations local to a single call: none are
//! retried internally and there is no partial-success mode.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A period was requested for an empty sequence.
    #[error("cannot compute the period of an empty sequence")]
    EmptyInput,

    /// Parameters do not satisfy the length-preserving relation.
    #[error(
        "invalid parameters n={n}, l={l}, p={p}: \
         requires 1 <= p <= l <= n and l = p + ceil(log2(n)) + 1"
    )]
    InvalidParameters { n: usize, l: usize, p: usize },

    /// Payload length differs from the configured `n`.
    #[error("payload length {actual} does not match configured n = {expected}")]
    PayloadLength { expected: usize, actual: usize },

    /// The correction loop exceeded its bound without converging.
    #[error("encoding did not converge within {corrections} corrections")]
    EncodingDiverged { corrections: usize },

    /// The encoded stream violated a decode invariant.
    #[error("malformed stream: {0}")]
    MalformedStream(#[from] StreamError),
}

/// Decode-side invariant violations.
///
/// The wire format carries no checksum, so these only catch structural
/// impossibilities; arbitrary corrupted input may still decode to
/// garbage without error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// Stream length does not match the configured `n + 1`.
    #[error("stream length {actual} does not match expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An escape record names a window offset past the last valid one.
    #[error("escape record index {index} exceeds maximum window offset {max}")]
    IndexOutOfRange { index: usize, max: usize },

    /// The backward marker scan exhausted the window prefix without
    /// finding a usable set bit.
    #[error("no period marker found in the record window at index {index}")]
    MissingMarker { index: usize },

    /// More trailing records than any well-formed stream can carry.
    #[error("stream claims more than {limit} escape records")]
    TooManyRecords { limit: usize },
}

/// A specialized Result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;
