//! Error type shared by every operation of the crate.
//!
//! The variants mirror the failure classes of password hashing: a request
//! that can never produce a valid digest, a random source that could not
//! deliver, a primitive that rejected its inputs, and an encoded digest
//! that could not be read back.

use std::fmt;

/// Cost input checked by the parameter validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// Requested output length, in bytes.
    HashLength,
    /// Memory cost, in KiB.
    MemoryCost,
    /// Number of passes over memory.
    TimeCost,
    /// Number of lanes.
    Parallelism,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::HashLength => "hash length",
            Parameter::MemoryCost => "memory cost",
            Parameter::TimeCost => "time cost",
            Parameter::Parallelism => "parallelism",
        };
        f.write_str(name)
    }
}

/// Reasons the Argon2 computation itself refuses to run.
///
/// These are the algorithm's own minimums, checked after the upper bounds
/// enforced by the parameter validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// Lane count outside `1..=2^24 - 1`.
    #[error("lane count out of range")]
    LanesOutOfRange,

    /// Zero passes over memory.
    #[error("time cost too small")]
    TooFewPasses,

    /// Fewer than `8 × p` KiB of memory.
    #[error("memory cost too small")]
    MemoryTooSmall,

    /// Output shorter than 4 bytes.
    #[error("hash length too short")]
    HashTooShort,

    /// Salt shorter than 8 bytes.
    #[error("salt too short")]
    SaltTooShort,

    /// An input is longer than 2^32 - 1 bytes.
    #[error("{0} too long")]
    InputTooLong(&'static str),

    /// BLAKE2b was asked for an output length outside `1..=64`.
    #[error("invalid blake2b output length {0}")]
    DigestLength(usize),

    /// Working memory of the given size, in bytes, could not be allocated.
    #[error("cannot allocate {0} bytes")]
    OutOfMemory(u64),
}

/// Errors returned by hashing, verification and digest parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A cost input exceeds the bit width reserved for it by Argon2.
    ///
    /// Raised before any randomness is drawn or memory is allocated.
    #[error("{0} too large")]
    ParameterOutOfRange(Parameter),

    /// The random source failed to produce a salt.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[source] rand_core::Error),

    /// The Argon2 primitive rejected its inputs or could not run.
    #[error("argon2 failure: {0}")]
    PrimitiveFailure(#[from] PrimitiveError),

    /// An encoded digest could not be parsed or lacks a required field.
    #[error("malformed digest: {0}")]
    MalformedDigest(String),

    /// The blocking worker running the primitive panicked or was cancelled.
    #[error("hashing worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
