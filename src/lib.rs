//! Argon2 password hashing with PHC-encoded digests
//!
//! This crate pairs an Argon2 implementation with a complete
//! password storage contract: parameter validation, salting, a portable
//! text encoding of the result, constant-time verification, and a policy
//! for detecting digests produced with outdated parameters.
//!
//! The focus is on **predictability and safe defaults** rather than on
//! exposing every knob of the underlying algorithm.
//!
//! # Module overview
//!
//! - `derivation`
//!   The public operations: `hash`, `verify` and `needs_rehash`, their
//!   async counterparts, the options they accept and the parameter
//!   validator run before any expensive work.
//!
//! - `encoding`
//!   The PHC string format. A PHC string embeds the algorithm id, cost
//!   parameters, associated data, salt and hash, so a stored digest can be
//!   verified later without keeping anything else around:
//!
//!   ```text
//!   $argon2id$m=65536,t=3,p=4$c2FsdHNhbHRzYWx0c2FsdA$<hash>
//!   ```
//!
//! - `rng`
//!   The source of salt randomness. Defaults to the operating system; any
//!   cryptographically secure source can be plugged in.
//!
//! - `error`
//!   The error taxonomy shared by every operation.
//!
//! # Error policy
//!
//! - `hash` reports every failure: out-of-range parameters, unavailable
//!   entropy, and primitive rejections.
//! - `verify` never fails on a digest it cannot read. Unparseable, foreign
//!   or incomplete digests simply do not match, so digests of unknown
//!   provenance can be checked safely during scheme migrations.
//! - `needs_rehash` expects a digest produced by this crate and reports
//!   a malformed one as an error.
//!
//! # Design goals
//!
//! - Validation before computation
//! - No shared mutable state: every operation can run concurrently
//! - Secrets never persisted, never logged
//! - Exact round-tripping of every byte through the text encoding

mod utils;

pub mod derivation;
pub mod encoding;
pub mod error;
pub mod rng;

pub use derivation::argon2::{
    Algorithm, HashOptions, HashOutput, HashParameters, hash, hash_async, hash_with_entropy,
    needs_rehash, verify, verify_async,
};
pub use encoding::PhcString;
pub use error::{Error, Parameter, PrimitiveError, Result};
