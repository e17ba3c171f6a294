//! Random number generation module
//!
//! This module provides the randomness used to salt password hashes.
//!
//! Salt generation is the only place the crate consumes entropy. It happens
//! after parameter validation and only when the caller did not pin a salt,
//! so a rejected request never touches the random source.

mod entropy;

/// Random byte source abstraction and its operating-system implementation.
pub use entropy::{EntropySource, OsEntropy};
