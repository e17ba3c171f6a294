//! Caller-facing options and their defaults.
//!
//! Every field of [`HashOptions`] is optional. [`HashOptions::resolve`] is
//! the single place where defaults are applied, so `hash`, `verify` and
//! `needs_rehash` always agree on what an omitted field means.
//!
//! Cost fields are `u64` on purpose: a request such as `time_cost = 2^32`
//! must be representable so the validator can reject it with a useful
//! error instead of it being silently truncated.

use core::fmt;

use serde::Deserialize;

use super::variant::Algorithm;

/// Output length, in bytes.
pub const DEFAULT_HASH_LENGTH: u64 = 32;
/// Passes over memory.
pub const DEFAULT_TIME_COST: u64 = 3;
/// Memory size, in KiB (64 MiB).
pub const DEFAULT_MEMORY_COST: u64 = 1 << 16;
/// Number of lanes.
pub const DEFAULT_PARALLELISM: u64 = 4;
/// Length of generated salts, in bytes.
pub const SALT_LENGTH: usize = 16;

/// Overrides for hashing, verification and rehash checks.
///
/// Cost fields and the algorithm can be loaded from configuration (TOML,
/// JSON...). Byte inputs are runtime-only and never deserialized.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashOptions {
    /// Output length in bytes. Defaults to 32.
    pub hash_length: Option<u64>,
    /// Passes over memory. Defaults to 3.
    pub time_cost: Option<u64>,
    /// Memory in KiB. Defaults to 65536.
    pub memory_cost: Option<u64>,
    /// Number of lanes. Defaults to 4.
    pub parallelism: Option<u64>,
    /// Argon2 variant. Defaults to Argon2id.
    pub algorithm: Option<Algorithm>,
    /// Pinned salt. A fresh random salt is drawn when absent.
    #[serde(skip)]
    pub salt: Option<Vec<u8>>,
    /// Associated data, persisted in the digest.
    #[serde(skip)]
    pub associated_data: Option<Vec<u8>>,
    /// Secret key, never persisted. Must be supplied again to verify.
    #[serde(skip)]
    pub secret: Option<Vec<u8>>,
    /// Return the bare hash bytes instead of a PHC string.
    pub raw: bool,
}

/// Options with every default applied.
#[derive(Clone, Copy)]
pub(crate) struct Resolved<'a> {
    pub algorithm: Algorithm,
    pub hash_length: u64,
    pub time_cost: u64,
    pub memory_cost: u64,
    pub parallelism: u64,
    pub salt: Option<&'a [u8]>,
    pub associated_data: &'a [u8],
    pub secret: &'a [u8],
    pub raw: bool,
}

impl HashOptions {
    /// Merges the overrides with the documented defaults.
    pub(crate) fn resolve(&self) -> Resolved<'_> {
        Resolved {
            algorithm: self.algorithm.unwrap_or_default(),
            hash_length: self.hash_length.unwrap_or(DEFAULT_HASH_LENGTH),
            time_cost: self.time_cost.unwrap_or(DEFAULT_TIME_COST),
            memory_cost: self.memory_cost.unwrap_or(DEFAULT_MEMORY_COST),
            parallelism: self.parallelism.unwrap_or(DEFAULT_PARALLELISM),
            salt: self.salt.as_deref(),
            associated_data: self.associated_data.as_deref().unwrap_or_default(),
            secret: self.secret.as_deref().unwrap_or_default(),
            raw: self.raw,
        }
    }
}

// Hand-written so secrets and salts never end up in logs.
impl fmt::Debug for HashOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashOptions")
            .field("hash_length", &self.hash_length)
            .field("time_cost", &self.time_cost)
            .field("memory_cost", &self.memory_cost)
            .field("parallelism", &self.parallelism)
            .field("algorithm", &self.algorithm)
            .field("salt", &self.salt.as_ref().map(|_| "<redacted>"))
            .field(
                "associated_data",
                &self.associated_data.as_ref().map(Vec::len),
            )
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("raw", &self.raw)
            .finish()
    }
}
