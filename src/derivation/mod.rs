//! Password-based derivation functions.
//!
//! Currently includes the Argon2 family (Argon2i, Argon2d, Argon2id).

pub mod argon2;

/// Re-exports of the Argon2 operations.
pub use self::argon2::{
    Algorithm, HashOptions, HashOutput, HashParameters, hash, hash_async, hash_with_entropy,
    needs_rehash, verify, verify_async,
};
