use tracing::{debug, trace};

use super::options::{HashOptions, SALT_LENGTH};
use super::params::{self, HashParameters};
use super::primitive;
use crate::encoding::PhcString;
use crate::error::Result;
use crate::rng::{EntropySource, OsEntropy};
use crate::utils::ConstantTimeEq;

/// Result of [`hash`]: bare bytes or a self-describing PHC string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashOutput {
    /// The hash bytes only. Algorithm, salt and parameters must be stored
    /// separately to verify later.
    Raw(Vec<u8>),
    /// A PHC string carrying everything needed to verify later.
    Encoded(String),
}

impl HashOutput {
    /// Returns the PHC string, if this is an encoded output.
    pub fn into_encoded(self) -> Option<String> {
        match self {
            HashOutput::Encoded(s) => Some(s),
            HashOutput::Raw(_) => None,
        }
    }

    /// Returns the bare hash bytes, if this is a raw output.
    pub fn into_raw(self) -> Option<Vec<u8>> {
        match self {
            HashOutput::Raw(bytes) => Some(bytes),
            HashOutput::Encoded(_) => None,
        }
    }
}

/// Hashes a password with a salt drawn from the operating system.
///
/// The password is treated as raw bytes and may contain zero bytes.
///
/// # Example
///
/// ```rust, ignore
/// use argon2_phc::derivation::argon2::{hash, HashOptions};
///
/// let digest = hash(b"hunter2", &HashOptions::default())?
///     .into_encoded()
///     .unwrap();
/// assert!(digest.starts_with("$argon2id$m=65536,t=3,p=4$"));
/// ```
pub fn hash(password: &[u8], options: &HashOptions) -> Result<HashOutput> {
    hash_with_entropy(password, options, OsEntropy)
}

/// Hashes a password, drawing the salt (if needed) from `entropy`.
///
/// Parameters are validated before anything else happens: a rejected
/// request neither consumes entropy nor runs the primitive. Entropy is only
/// consumed when `options.salt` is `None`.
pub fn hash_with_entropy<E: EntropySource>(
    password: &[u8],
    options: &HashOptions,
    mut entropy: E,
) -> Result<HashOutput> {
    let resolved = options.resolve();

    let bounded = params::validate(
        resolved.hash_length,
        resolved.memory_cost,
        resolved.time_cost,
        resolved.parallelism,
    )?;

    let salt = match resolved.salt {
        Some(salt) => salt.to_vec(),
        None => {
            let mut salt = vec![0u8; SALT_LENGTH];
            entropy.try_fill(&mut salt)?;
            trace!(len = SALT_LENGTH, "generated salt");
            salt
        }
    };

    let params = bounded.with_associated_data(resolved.associated_data.to_vec());

    let hash = primitive::compute(
        resolved.algorithm,
        password,
        &salt,
        resolved.secret,
        &params,
        bounded.hash_length,
    )?;

    if resolved.raw {
        return Ok(HashOutput::Raw(hash));
    }

    Ok(HashOutput::Encoded(
        PhcString::new(resolved.algorithm, params, salt, hash).encode(),
    ))
}

/// Checks a password against a PHC digest.
///
/// Digests that cannot be parsed, name an algorithm other than the three
/// Argon2 variants, or lack a salt or hash yield `Ok(false)`: a foreign or
/// corrupted digest simply does not match. Only a failure of the primitive
/// itself is reported as an error.
///
/// Only `options.secret` is read. If the digest was produced with a secret,
/// omitting it here makes verification fail.
pub fn verify(encoded: &str, password: &[u8], options: &HashOptions) -> Result<bool> {
    let digest = match PhcString::decode(encoded) {
        Ok(digest) => digest,
        Err(e) => {
            debug!(error = %e, "digest does not parse, treating as mismatch");
            return Ok(false);
        }
    };

    let Some(algorithm) = digest.algorithm() else {
        debug!(id = %digest.id, "not an argon2 digest, treating as mismatch");
        return Ok(false);
    };

    let (Some(salt), Some(expected)) = (&digest.salt, &digest.hash) else {
        debug!("digest lacks salt or hash, treating as mismatch");
        return Ok(false);
    };

    if salt.is_empty() || expected.is_empty() {
        debug!("digest has an empty salt or hash, treating as mismatch");
        return Ok(false);
    }

    let Ok(hash_length) = u32::try_from(expected.len()) else {
        return Ok(false);
    };

    let secret = options.resolve().secret;
    let mut actual = primitive::compute(
        algorithm,
        password,
        salt,
        secret,
        &digest.params,
        hash_length,
    )?;

    let matches = actual.as_slice().ct_eq(expected.as_slice());
    actual.fill(0);

    Ok(matches)
}

/// Tells whether a digest was produced with parameters other than the
/// target ones in `options`.
///
/// A digest carrying a version marker always needs a rehash: this crate
/// cannot produce versioned digests, so the comparison would be meaningless.
/// Otherwise `m`, `t` and `p` are compared against the target (defaults as
/// for [`hash`]). The password is never needed and the primitive never runs.
///
/// Fails with [`Error::MalformedDigest`](crate::error::Error::MalformedDigest)
/// if the digest cannot be parsed.
pub fn needs_rehash(encoded: &str, options: &HashOptions) -> Result<bool> {
    let digest = PhcString::decode(encoded)?;

    if let Some(version) = digest.version {
        debug!(version, "versioned digest needs rehash");
        return Ok(true);
    }

    let target = options.resolve();
    let HashParameters {
        memory_cost,
        time_cost,
        parallelism,
        ..
    } = digest.params;

    let stale = u64::from(memory_cost) != target.memory_cost
        || u64::from(time_cost) != target.time_cost
        || u64::from(parallelism) != target.parallelism;

    debug!(stale, memory_cost, time_cost, parallelism, "checked digest parameters");

    Ok(stale)
}
