use crate::error::SechashError;

use digest::Digest;
use std::fmt;
use std::str::FromStr;

/// The digest function applied on every stretching round.
///
/// Identifiers are the lowercase names used in hash strings (`md5`, `sha1`, `sha224`,
/// `sha256`, `sha384`, `sha512`). Matching is exact so that a parsed hash string renders back
/// to the same text.
///
/// MD5 and SHA-1 are kept for compatibility with existing hash strings. Prefer one of the
/// SHA-2 functions for new hashes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "use-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// MD5, 128-bit digest
    Md5,

    /// SHA-1, 160-bit digest
    Sha1,

    /// SHA-224, 224-bit digest
    Sha224,

    /// SHA-256, 256-bit digest
    Sha256,

    /// SHA-384, 384-bit digest
    Sha384,

    /// SHA-512, 512-bit digest
    Sha512,
}

impl Algorithm {
    /// Hashes `input` and returns the digest as lowercase hex.
    pub fn hex_digest(&self, input: &[u8]) -> String {
        match self {
            Algorithm::Md5 => hex_digest::<md5::Md5>(input),
            Algorithm::Sha1 => hex_digest::<sha1::Sha1>(input),
            Algorithm::Sha224 => hex_digest::<sha2::Sha224>(input),
            Algorithm::Sha256 => hex_digest::<sha2::Sha256>(input),
            Algorithm::Sha384 => hex_digest::<sha2::Sha384>(input),
            Algorithm::Sha512 => hex_digest::<sha2::Sha512>(input),
        }
    }

    /// Length of a hex digest produced by this algorithm, in characters.
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha224 => 56,
            Algorithm::Sha256 => 64,
            Algorithm::Sha384 => 96,
            Algorithm::Sha512 => 128,
        }
    }

    /// The identifier written into hash strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }
}

#[inline]
fn hex_digest<D: Digest>(input: &[u8]) -> String {
    hex::encode(D::digest(input))
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SechashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha224" => Ok(Algorithm::Sha224),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(SechashError::UnsupportedAlgorithm(String::from(s))),
        }
    }
}
