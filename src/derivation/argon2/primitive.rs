//! Initialization, finalization and entry point of the Argon2 computation.
//!
//! The engine always runs version 0x13 of the algorithm, which is why
//! digests produced by this crate carry no version marker. Secret and
//! associated data may have any length up to 2³² − 1 bytes; they only feed
//! the initial hash H0.

use blake2::Blake2b512;
use blake2::Blake2bVar;
use blake2::digest::{FixedOutput, Update, VariableOutput};
use tracing::trace;

use super::block::Block;
use super::memory::MemoryLayout;
use super::params::{HashParameters, MAX_PARALLELISM};
use super::variant::Algorithm;
use crate::error::PrimitiveError;

/// Argon2 version 1.3.
const ARGON2_VERSION: u32 = 0x13;

/// Shortest salt the algorithm accepts.
const MIN_SALT_LENGTH: usize = 8;

/// Shortest tag the algorithm accepts.
const MIN_HASH_LENGTH: u32 = 4;

/// Computes `hash_length` bytes of Argon2 output.
///
/// `secret` and `params.associated_data` may be empty, which is equivalent
/// to not supplying them. Inputs below the algorithm's minimums (one pass,
/// one lane, `8 × p` KiB, 4 output bytes, 8 salt bytes) and working memory
/// that cannot be allocated are reported as [`PrimitiveError`].
pub(crate) fn compute(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    secret: &[u8],
    params: &HashParameters,
    hash_length: u32,
) -> Result<Vec<u8>, PrimitiveError> {
    check_inputs(password, salt, secret, params, hash_length)?;

    let lanes = params.parallelism;
    let layout = MemoryLayout::new(params.memory_cost, lanes);

    trace!(
        %algorithm,
        m = params.memory_cost,
        t = params.time_cost,
        p = lanes,
        blocks = layout.total_blocks,
        hash_length,
        "invoking argon2"
    );

    let mut memory = layout.allocate()?;

    let h0 = init(algorithm, password, salt, secret, params, hash_length);

    // B[i][j] = H'^(1024)(H0 || LE32(j) || LE32(i)) for the first two columns
    for lane in 0..lanes {
        for column in 0..2u32 {
            let mut seed = [0u8; 72];
            seed[..64].copy_from_slice(&h0);
            seed[64..68].copy_from_slice(&column.to_le_bytes());
            seed[68..].copy_from_slice(&lane.to_le_bytes());

            let mut bytes = [0u8; Block::SIZE];
            blake2b_long(&mut bytes, &[&seed])?;
            memory[layout.index(lane, column)] = Block::from_bytes(&bytes);
            bytes.fill(0);
        }
    }

    layout.fill(&mut memory, params.time_cost, algorithm);

    finalize(&memory, &layout, hash_length)
}

fn check_inputs(
    password: &[u8],
    salt: &[u8],
    secret: &[u8],
    params: &HashParameters,
    hash_length: u32,
) -> Result<(), PrimitiveError> {
    let lanes = params.parallelism;

    if lanes < 1 || u64::from(lanes) > MAX_PARALLELISM {
        return Err(PrimitiveError::LanesOutOfRange);
    }

    if params.time_cost < 1 {
        return Err(PrimitiveError::TooFewPasses);
    }

    if u64::from(params.memory_cost) < 8 * u64::from(lanes) {
        return Err(PrimitiveError::MemoryTooSmall);
    }

    if hash_length < MIN_HASH_LENGTH {
        return Err(PrimitiveError::HashTooShort);
    }

    if salt.len() < MIN_SALT_LENGTH {
        return Err(PrimitiveError::SaltTooShort);
    }

    let inputs = [
        ("password", password.len()),
        ("salt", salt.len()),
        ("secret", secret.len()),
        ("associated data", params.associated_data.len()),
    ];

    for (name, len) in inputs {
        if u32::try_from(len).is_err() {
            return Err(PrimitiveError::InputTooLong(name));
        }
    }

    Ok(())
}

/// Computes the initial hash H0 from all Argon2 inputs (RFC 9106 §3.2).
///
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// `m` is the requested memory cost, before rounding to whole slices.
fn init(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    secret: &[u8],
    params: &HashParameters,
    hash_length: u32,
) -> [u8; 64] {
    let mut hasher = Blake2b512::default();

    for word in [
        params.parallelism,
        hash_length,
        params.memory_cost,
        params.time_cost,
        ARGON2_VERSION,
        algorithm.type_code(),
    ] {
        hasher.update(&word.to_le_bytes());
    }

    // Lengths were checked to fit in 32 bits.
    for input in [password, salt, secret, params.associated_data.as_slice()] {
        hasher.update(&(input.len() as u32).to_le_bytes());
        hasher.update(input);
    }

    digest64(hasher)
}

/// XORs the last block of every lane and stretches the result to the tag.
fn finalize(
    memory: &[Block],
    layout: &MemoryLayout,
    hash_length: u32,
) -> Result<Vec<u8>, PrimitiveError> {
    let mut final_block = Block::ZERO;

    for lane in 0..layout.lanes {
        final_block.in_place_xor(&memory[layout.index(lane, layout.lane_len - 1)]);
    }

    let mut tag = Vec::new();
    tag.try_reserve_exact(hash_length as usize)
        .map_err(|_| PrimitiveError::OutOfMemory(u64::from(hash_length)))?;
    tag.resize(hash_length as usize, 0);

    let mut bytes = final_block.to_bytes();
    let result = blake2b_long(&mut tag, &[&bytes]);
    bytes.fill(0);
    result?;

    Ok(tag)
}

/// Variable-length hash H' (RFC 9106 §3.3).
///
/// Up to 64 bytes this is BLAKE2b with the output length prefixed. Longer
/// outputs chain 64-byte BLAKE2b digests and keep the first half of each.
fn blake2b_long(out: &mut [u8], inputs: &[&[u8]]) -> Result<(), PrimitiveError> {
    let len = out.len() as u32;

    if out.len() <= 64 {
        let mut hasher = blake2b_var(out.len())?;
        hasher.update(&len.to_le_bytes());
        inputs.iter().for_each(|input| hasher.update(input));
        return finish_var(hasher, out);
    }

    let mut hasher = Blake2b512::default();
    hasher.update(&len.to_le_bytes());
    inputs.iter().for_each(|input| hasher.update(input));
    let mut v = digest64(hasher);

    let mut written = 0;
    while out.len() - written > 64 {
        out[written..written + 32].copy_from_slice(&v[..32]);
        written += 32;

        let mut hasher = Blake2b512::default();
        hasher.update(&v);
        v = digest64(hasher);
    }

    // Remaining length is within 33..=64.
    let rest = &mut out[written..];
    let mut hasher = blake2b_var(rest.len())?;
    hasher.update(&v);
    v.fill(0);
    finish_var(hasher, rest)
}

fn digest64(hasher: Blake2b512) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize_fixed());
    out
}

fn blake2b_var(len: usize) -> Result<Blake2bVar, PrimitiveError> {
    Blake2bVar::new(len).map_err(|_| PrimitiveError::DigestLength(len))
}

fn finish_var(hasher: Blake2bVar, out: &mut [u8]) -> Result<(), PrimitiveError> {
    let len = out.len();
    hasher
        .finalize_variable(out)
        .map_err(|_| PrimitiveError::DigestLength(len))
}
