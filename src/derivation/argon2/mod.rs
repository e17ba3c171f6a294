//! Argon2 password hashing (RFC 9106) with PHC-encoded digests.
//!
//! Argon2 is a memory-hard password hashing function designed to resist
//! both GPU-based brute-force attacks and side-channel attacks. This module
//! implements all three variants at version 0x13 and wraps them with the
//! contract needed to use them for stored credentials.
//!
//! # Structure
//!
//! - `block`: 1024-byte blocks and the compression function G
//! - `memory`: lane/slice layout, reference selection and the fill loop
//! - `primitive`: H0, the variable-length hash H', and finalization
//!
//! # Operations
//!
//! - [`hash`]: validate parameters, salt, run the primitive, and return
//!   either the raw output or a PHC string.
//! - [`verify`]: recompute a PHC digest from a candidate password and
//!   compare in constant time. Foreign or corrupted digests do not match,
//!   they never error.
//! - [`needs_rehash`]: compare a digest's cost parameters against a target,
//!   so callers can upgrade stored hashes on the next successful login.
//!
//! [`hash_async`] and [`verify_async`] run the same operations on tokio's
//! blocking pool.
//!
//! # Parameters
//!
//! | option         | default  | upper bound |
//! |----------------|----------|-------------|
//! | `hash_length`  | 32       | 2³² − 1     |
//! | `time_cost`    | 3        | 2³² − 1     |
//! | `memory_cost`  | 65536    | 2³² − 1     |
//! | `parallelism`  | 4        | 2²⁴ − 1     |
//! | `algorithm`    | argon2id |             |
//!
//! Upper bounds are checked before anything else. Lower bounds are left to
//! the primitive, which also reports working memory it cannot allocate.
//!
//! # Secrets and associated data
//!
//! Associated data of any length is stored in the digest (`data=`
//! parameter) because it is required to verify. The secret key is never stored and must be passed
//! again to [`verify`].

pub(crate) mod block;
pub mod core;
pub(crate) mod memory;
pub mod options;
pub mod params;
pub(crate) mod primitive;
pub mod task;
pub mod variant;

pub use self::core::{HashOutput, hash, hash_with_entropy, needs_rehash, verify};
pub use options::HashOptions;
pub use params::HashParameters;
pub use task::{hash_async, verify_async};
pub use variant::Algorithm;
