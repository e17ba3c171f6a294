//! Argon2 variants and their PHC identifiers.

use core::fmt;
use core::str::FromStr;

use serde::Deserialize;

/// The three members of the Argon2 family.
///
/// - `Argon2d` uses data-dependent addressing: fastest and most resistant
///   to GPU cracking, but exposed to side channels.
/// - `Argon2i` uses data-independent addressing only.
/// - `Argon2id` runs the first half of the first pass like Argon2i and the
///   rest like Argon2d. This is the recommended default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Argon2d,
    Argon2i,
    #[default]
    Argon2id,
}

impl Algorithm {
    /// Identifier used in the first field of a PHC string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Argon2d => "argon2d",
            Algorithm::Argon2i => "argon2i",
            Algorithm::Argon2id => "argon2id",
        }
    }

    /// Type code `y` fed into H0 and the address blocks.
    pub(crate) const fn type_code(self) -> u32 {
        match self {
            Algorithm::Argon2d => 0,
            Algorithm::Argon2i => 1,
            Algorithm::Argon2id => 2,
        }
    }

    /// Whether the given segment derives reference indices from address
    /// blocks rather than from memory contents.
    pub(crate) const fn data_independent(self, pass: u32, slice: u32) -> bool {
        match self {
            Algorithm::Argon2d => false,
            Algorithm::Argon2i => true,
            Algorithm::Argon2id => pass == 0 && slice < 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a text id is not one of the three Argon2 variants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown argon2 variant `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argon2d" => Ok(Algorithm::Argon2d),
            "argon2i" => Ok(Algorithm::Argon2i),
            "argon2id" => Ok(Algorithm::Argon2id),
            other => Err(UnknownAlgorithm(other.to_owned())),
        }
    }
}
