//! Parameter definitions and validation for Argon2.
//!
//! This module defines the cost parameters stored alongside every digest
//! and the upper-bound checks run before the primitive is invoked.

use tracing::debug;

use crate::error::{Error, Parameter, Result};

/// Largest accepted output length, in bytes (32-bit field).
pub const MAX_HASH_LENGTH: u64 = u32::MAX as u64;
/// Largest accepted memory cost, in KiB (32-bit field).
pub const MAX_MEMORY_COST: u64 = u32::MAX as u64;
/// Largest accepted number of passes (32-bit field).
pub const MAX_TIME_COST: u64 = u32::MAX as u64;
/// Largest accepted number of lanes (24-bit field).
pub const MAX_PARALLELISM: u64 = (1 << 24) - 1;

/// Cost parameters of an Argon2 digest.
///
/// These are exactly the values persisted in the parameter block of a PHC
/// string, so they are everything (besides salt and secret) needed to
/// recompute a hash later.
///
/// # Recommended Values
///
/// For password hashing, OWASP recommends:
/// - `memory_cost`: 19456 (19 MiB) minimum, 47104 (46 MiB) for higher security
/// - `time_cost`: 2 passes minimum
/// - `parallelism`: 1 or the number of available cores
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashParameters {
    /// Memory size in KiB (`m`).
    pub memory_cost: u32,
    /// Number of passes over memory (`t`).
    pub time_cost: u32,
    /// Degree of parallelism (`p`).
    pub parallelism: u32,
    /// Associated data (`data`). Empty when absent.
    pub associated_data: Vec<u8>,
}

/// Cost inputs that passed the bound checks, narrowed to their field widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounded {
    /// Output length in bytes, at most 2³² − 1.
    pub hash_length: u32,
    /// Memory cost in KiB, at most 2³² − 1.
    pub memory_cost: u32,
    /// Number of passes, at most 2³² − 1.
    pub time_cost: u32,
    /// Number of lanes, at most 2²⁴ − 1.
    pub parallelism: u32,
}

impl Bounded {
    /// Attaches associated data, producing the persisted parameter set.
    pub fn with_associated_data(self, associated_data: Vec<u8>) -> HashParameters {
        HashParameters {
            memory_cost: self.memory_cost,
            time_cost: self.time_cost,
            parallelism: self.parallelism,
            associated_data,
        }
    }
}

/// Checks the cost inputs against the widths Argon2 reserves for them.
///
/// Only upper bounds are checked here. Minimums (at least one pass, at
/// least `8 × p` KiB, at least 4 output bytes...) are enforced by the
/// primitive itself.
pub fn validate(
    hash_length: u64,
    memory_cost: u64,
    time_cost: u64,
    parallelism: u64,
) -> Result<Bounded> {
    let checks = [
        (Parameter::HashLength, hash_length, MAX_HASH_LENGTH),
        (Parameter::MemoryCost, memory_cost, MAX_MEMORY_COST),
        (Parameter::TimeCost, time_cost, MAX_TIME_COST),
        (Parameter::Parallelism, parallelism, MAX_PARALLELISM),
    ];

    for (parameter, value, max) in checks {
        if value > max {
            debug!(%parameter, value, max, "rejecting argon2 parameters");
            return Err(Error::ParameterOutOfRange(parameter));
        }
    }

    // The checks above guarantee every value fits in 32 bits.
    Ok(Bounded {
        hash_length: hash_length as u32,
        memory_cost: memory_cost as u32,
        time_cost: time_cost as u32,
        parallelism: parallelism as u32,
    })
}
