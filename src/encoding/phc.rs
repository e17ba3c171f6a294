//! PHC string format for Argon2 digests.
//!
//! A PHC string carries everything needed to verify a password later, apart
//! from the password and the optional secret key:
//!
//! ```text
//! $<id>[$v=<version>]$m=<m>,t=<t>,p=<p>[,data=<b64>]$<b64 salt>$<b64 hash>
//! ```
//!
//! Binary fields use the standard base64 alphabet without padding, so salts
//! and hashes round-trip exactly whatever bytes they contain. Padded input
//! is accepted when decoding.
//!
//! Decoding is deliberately tolerant about the algorithm id: any non-empty
//! id is kept verbatim and it is up to the caller to decide whether it is
//! one it can verify. Parameters other than `m`, `t`, `p` and `data` are
//! ignored.

use core::fmt;
use core::str::FromStr;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::derivation::argon2::{Algorithm, HashParameters};
use crate::error::{Error, Result};

/// Base64 engine used for every binary field of a PHC string.
const B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A parsed (or to-be-encoded) PHC digest.
///
/// `salt` and `hash` are optional because a digest may legitimately stop
/// after the parameter block. A hash is only ever emitted after a salt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhcString {
    /// Algorithm identifier, e.g. `argon2id`.
    ///
    /// Kept as text so digests produced by other schemes survive parsing.
    pub id: String,

    /// Version marker (`v=`), if the digest carries one.
    ///
    /// Digests produced by this crate never do.
    pub version: Option<u32>,

    /// Cost parameters and associated data.
    pub params: HashParameters,

    /// Salt bytes.
    pub salt: Option<Vec<u8>>,

    /// Raw hash output.
    ///
    /// Only encoded when `salt` is also present: a digest with a hash but
    /// no salt encodes as if it had neither, and decodes back that way.
    pub hash: Option<Vec<u8>>,
}

impl PhcString {
    /// Builds the digest of a freshly computed hash.
    pub fn new(algorithm: Algorithm, params: HashParameters, salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self {
            id: algorithm.as_str().to_owned(),
            version: None,
            params,
            salt: Some(salt),
            hash: Some(hash),
        }
    }

    /// Returns the Argon2 variant named by `id`, if it is one.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.id.parse().ok()
    }

    /// Serializes the digest into its PHC string.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parses a PHC string.
    ///
    /// Returns [`Error::MalformedDigest`] when the input does not split into
    /// an id and a parameter block, when `m`, `t` or `p` is missing or not a
    /// decimal `u32`, or when a binary field is not valid base64.
    pub fn decode(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix('$')
            .ok_or_else(|| malformed("missing leading '$'"))?;

        let mut fields = rest.split('$');

        let id = fields
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| malformed("missing algorithm id"))?;

        let mut field = fields
            .next()
            .ok_or_else(|| malformed("missing parameter block"))?;

        let version = match field.strip_prefix("v=") {
            Some(v) => {
                let version = parse_decimal("v", v)?;
                field = fields
                    .next()
                    .ok_or_else(|| malformed("missing parameter block"))?;
                Some(version)
            }
            None => None,
        };

        let params = parse_params(field)?;
        let salt = fields.next().map(|s| decode_b64("salt", s)).transpose()?;
        let hash = fields.next().map(|h| decode_b64("hash", h)).transpose()?;

        if fields.next().is_some() {
            return Err(malformed("unexpected trailing field"));
        }

        Ok(Self {
            id: id.to_owned(),
            version,
            params,
            salt,
            hash,
        })
    }
}

impl fmt::Display for PhcString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.id)?;

        if let Some(version) = self.version {
            write!(f, "$v={version}")?;
        }

        write!(
            f,
            "$m={},t={},p={}",
            self.params.memory_cost, self.params.time_cost, self.params.parallelism
        )?;

        if !self.params.associated_data.is_empty() {
            write!(f, ",data={}", B64.encode(&self.params.associated_data))?;
        }

        if let Some(salt) = &self.salt {
            write!(f, "${}", B64.encode(salt))?;

            if let Some(hash) = &self.hash {
                write!(f, "${}", B64.encode(hash))?;
            }
        }

        Ok(())
    }
}

impl FromStr for PhcString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

fn parse_params(block: &str) -> Result<HashParameters> {
    let mut memory_cost = None;
    let mut time_cost = None;
    let mut parallelism = None;
    let mut associated_data = Vec::new();

    for pair in block.split(',') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| malformed(format!("parameter `{pair}` has no value")))?;

        match key {
            "m" => memory_cost = Some(parse_decimal(key, value)?),
            "t" => time_cost = Some(parse_decimal(key, value)?),
            "p" => parallelism = Some(parse_decimal(key, value)?),
            "data" => associated_data = decode_b64(key, value)?,
            _ => {}
        }
    }

    Ok(HashParameters {
        memory_cost: memory_cost.ok_or_else(|| malformed("missing parameter `m`"))?,
        time_cost: time_cost.ok_or_else(|| malformed("missing parameter `t`"))?,
        parallelism: parallelism.ok_or_else(|| malformed("missing parameter `p`"))?,
        associated_data,
    })
}

/// Parses an unsigned decimal without sign or surrounding whitespace.
fn parse_decimal(key: &str, value: &str) -> Result<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!("`{key}` is not a decimal integer")));
    }

    value
        .parse()
        .map_err(|_| malformed(format!("`{key}` does not fit in 32 bits")))
}

fn decode_b64(field: &str, value: &str) -> Result<Vec<u8>> {
    B64.decode(value)
        .map_err(|e| malformed(format!("`{field}` is not valid base64: {e}")))
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedDigest(reason.into())
}
