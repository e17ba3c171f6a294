//! Async entry points.
//!
//! Argon2 is deliberately slow and memory hungry, so running it on an async
//! executor thread would stall every other task scheduled there. These
//! wrappers move the whole operation (salt generation included) onto
//! tokio's blocking pool and await the result. The pool size is whatever
//! the embedding runtime was configured with.
//!
//! There is no cancellation: dropping the returned future abandons the
//! result but the worker still runs to completion.

use tokio::task;

use super::core::{HashOutput, hash, verify};
use super::options::HashOptions;
use crate::error::Result;

/// Async version of [`hash`].
///
/// Must be called from within a tokio runtime.
pub async fn hash_async(password: Vec<u8>, options: HashOptions) -> Result<HashOutput> {
    task::spawn_blocking(move || hash(&password, &options)).await?
}

/// Async version of [`verify`].
///
/// Must be called from within a tokio runtime.
pub async fn verify_async(
    encoded: String,
    password: Vec<u8>,
    options: HashOptions,
) -> Result<bool> {
    task::spawn_blocking(move || verify(&encoded, &password, &options)).await?
}
