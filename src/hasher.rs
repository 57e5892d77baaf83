use crate::algorithm::Algorithm;
use crate::config::{Defaults, DEFAULTS};
use crate::error::SechashError;
use crate::lexer::{TokenizedHash, SEPARATOR};
use crate::stretch::{stretch_blocking, stretch_yielding};

use rand::{rngs::OsRng, Fill};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// A builder for a hash. Every parameter starts from a [`Defaults`] value and can be
/// overridden with the builder methods before calling [`hash()`](Hasher::hash) or
/// [`hash_async()`](Hasher::hash_async).
#[derive(Clone, Copy, Debug)]
pub struct Hasher<'a> {
    alg: Algorithm,
    custom_salt: Option<&'a str>,
    salt_generator: Option<fn() -> String>,
    salt_len: usize,
    iterations: u32,
    include_meta: bool,
    interval_length: NonZeroU32,
}

impl Default for Hasher<'_> {
    /// Create a new `Hasher` from [`DEFAULTS`].
    ///
    /// The defaults are as follows:
    ///
    /// * Algorithm: SHA-1
    /// * Iterations: 2000
    /// * Include metadata: yes
    /// * Interval length: 500 rounds
    /// * Salt: 6 hex characters of a digest of 16 random bytes
    fn default() -> Self {
        Self::with_defaults(DEFAULTS)
    }
}

impl From<Defaults> for Hasher<'_> {
    fn from(defaults: Defaults) -> Self {
        Self::with_defaults(defaults)
    }
}

impl<'a> Hasher<'a> {
    /// Create a new `Hasher` from [`DEFAULTS`].
    ///
    /// The defaults are as follows:
    ///
    /// * Algorithm: SHA-1
    /// * Iterations: 2000
    /// * Include metadata: yes
    /// * Interval length: 500 rounds
    /// * Salt: 6 hex characters of a digest of 16 random bytes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `Hasher` starting from application-provided defaults.
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            alg: defaults.algorithm,
            custom_salt: None,
            salt_generator: None,
            salt_len: defaults.salt_length,
            iterations: defaults.iterations,
            include_meta: defaults.include_meta,
            interval_length: defaults.interval_length,
        }
    }

    /// Specifies the digest function applied on every round.
    pub fn algorithm(mut self, alg: Algorithm) -> Self {
        self.alg = alg;
        self
    }

    /// The number of times the digest is repeated in order to slow down the hashing and
    /// thwart those pesky hackers.
    ///
    /// Zero is accepted and performs no rounds at all: the digest portion of the resulting
    /// hash is the input itself.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// When left unspecified, a salt is generated from the operating system's random number
    /// generator. Only use this function if you are trying to generate a hash
    /// deterministically with a known salt and a randomly generated salt will not suffice.
    ///
    /// The salt is written verbatim into the hash string, so it must not contain `':'` when
    /// metadata is included.
    pub fn custom_salt(mut self, salt: &'a str) -> Self {
        self.custom_salt = Some(salt);
        self
    }

    /// Generates the salt by calling `generator` once per hash. A salt set with
    /// [`custom_salt()`](Hasher::custom_salt) takes precedence.
    pub fn salt_with(mut self, generator: fn() -> String) -> Self {
        self.salt_generator = Some(generator);
        self
    }

    /// The length of a randomly generated salt, in hex characters. Generated salts are
    /// truncated digests, so lengths beyond the digest length of the algorithm have no
    /// effect.
    ///
    /// Ignored when a custom salt or salt generator is used.
    pub fn salt_length(mut self, salt_len: usize) -> Self {
        self.salt_len = salt_len;
        self
    }

    /// Whether the hash string carries the salt, algorithm and iteration count in front of the
    /// digest (`salt:algorithm:iterations:digest`).
    ///
    /// Without metadata the hash string is the bare digest, and verification needs the same
    /// salt, algorithm and iteration count to be supplied again through a `Hasher` with
    /// `include_meta(false)`.
    pub fn include_meta(mut self, include_meta: bool) -> Self {
        self.include_meta = include_meta;
        self
    }

    /// The number of rounds [`hash_async()`](Hasher::hash_async) runs before yielding back
    /// to the async runtime.
    pub fn interval_length(mut self, interval_length: NonZeroU32) -> Self {
        self.interval_length = interval_length;
        self
    }

    /// Resolves the parameters for a single hashing run.
    ///
    /// If `existing` is a hash string and metadata is included, its salt, algorithm and
    /// iteration count replace the ones configured on this `Hasher`, which is how a hash is
    /// reproduced for verification. If metadata is not included, `existing` is taken to be a
    /// bare digest and the salt must come from [`custom_salt()`](Hasher::custom_salt) or
    /// [`salt_with()`](Hasher::salt_with).
    pub fn resolve(&self, existing: Option<&str>) -> Result<HashOptions, SechashError> {
        let tokenized = match existing {
            Some(hash) if self.include_meta => Some(TokenizedHash::from_str(hash)?),
            Some(hash) => {
                // A stretched digest is hex; only a zero-round "digest" can carry ':'
                if self.iterations != 0 && hash.contains(SEPARATOR) {
                    return Err(SechashError::MalformedHash(
                        "A bare digest cannot contain ':'",
                    ));
                }

                if self.custom_salt.is_none() && self.salt_generator.is_none() {
                    return Err(SechashError::InvalidParameter(
                        "Verifying a bare digest requires a custom salt or salt generator",
                    ));
                }

                None
            }
            None => None,
        };

        let from_existing = tokenized.is_some();

        let options = match tokenized {
            Some(t) => HashOptions {
                alg: t.alg,
                iterations: t.iterations,
                salt: t.salt,
                include_meta: true,
                interval_length: self.interval_length,
            },
            None => HashOptions {
                alg: self.alg,
                iterations: self.iterations,
                salt: self.make_salt()?,
                include_meta: self.include_meta,
                interval_length: self.interval_length,
            },
        };

        if options.include_meta && options.salt.contains(SEPARATOR) {
            return Err(SechashError::InvalidParameter(
                "Salt cannot contain ':' when metadata is included",
            ));
        }

        tracing::debug!(
            algorithm = %options.alg,
            iterations = options.iterations,
            include_meta = options.include_meta,
            from_existing,
            "resolved hashing options"
        );

        Ok(options)
    }

    fn make_salt(&self) -> Result<String, SechashError> {
        if let Some(s) = self.custom_salt {
            return Ok(String::from(s));
        }

        if let Some(generator) = self.salt_generator {
            return Ok(generator());
        }

        let mut seed = [0u8; 16];
        seed[..].try_fill(&mut OsRng)?;

        let mut salt = self.alg.hex_digest(&seed);
        salt.truncate(self.salt_len);

        Ok(salt)
    }

    /// Consumes the `Hasher` and returns a hash.
    ///
    /// This runs every round on the calling thread. Inside an async runtime, prefer
    /// [`hash_async()`](Hasher::hash_async), which yields between bursts of rounds.
    pub fn hash<P>(self, input: &P) -> Result<Hash, SechashError>
    where
        P: AsRef<str> + ?Sized,
    {
        let options = self.resolve(None)?;
        let digest = stretch_blocking(input.as_ref(), &options);

        Ok(Hash::new(options, digest))
    }

    /// Consumes the `Hasher` and returns a hash, yielding to the async runtime after every
    /// [`interval_length`](Hasher::interval_length) rounds so that large iteration counts do
    /// not starve other tasks. The result is identical to [`hash()`](Hasher::hash).
    pub async fn hash_async<P>(self, input: &P) -> Result<Hash, SechashError>
    where
        P: AsRef<str> + ?Sized,
    {
        let options = self.resolve(None)?;
        let digest = stretch_yielding(input.as_ref(), &options).await;

        Ok(Hash::new(options, digest))
    }
}

/// The parameters of a single hashing run, after defaults, builder overrides and any
/// existing hash string have been applied. Immutable once resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashOptions {
    alg: Algorithm,
    iterations: u32,
    salt: String,
    include_meta: bool,
    interval_length: NonZeroU32,
}

impl HashOptions {
    /// Digest function applied on every round
    pub fn algorithm(&self) -> Algorithm {
        self.alg
    }

    /// Number of rounds
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Salt mixed into every round
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Whether hash strings carry the metadata prefix
    pub fn includes_meta(&self) -> bool {
        self.include_meta
    }

    /// Rounds per burst on the async path
    pub fn interval_length(&self) -> NonZeroU32 {
        self.interval_length
    }

    /// Returns `salt:algorithm:iterations:`, or an empty string when metadata is not
    /// included.
    pub fn meta_prefix(&self) -> String {
        if self.include_meta {
            format!(
                "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}",
                self.salt, self.alg, self.iterations
            )
        } else {
            String::new()
        }
    }

    /// Joins the metadata prefix and `digest` into a hash string.
    pub fn encode(&self, digest: &str) -> String {
        let mut encoded = self.meta_prefix();
        encoded.push_str(digest);
        encoded
    }
}

/// A container for a stretched digest, the salt, and the parameters used for hashing
#[derive(Clone, Debug)]
pub struct Hash {
    alg: Algorithm,
    iterations: u32,
    salt: String,
    include_meta: bool,
    digest: String,
}

impl fmt::Display for Hash {
    /// Writes the hash string. Aside from the digest, the hash string includes the salt and
    /// parameters used to generate it, making it easy to store in a database or a cache.
    ///
    /// A hash string looks something like this:
    ///
    /// _some salt string:sha1:2000:1086dd3be2f8a1329c8c5dbc9d5dd6a17bfc3a11_
    ///
    /// If the hash was generated with `include_meta(false)`, only the digest is written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.include_meta {
            write!(
                f,
                "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
                self.salt, self.alg, self.iterations, self.digest
            )
        } else {
            f.write_str(&self.digest)
        }
    }
}

impl FromStr for Hash {
    type Err = SechashError;

    /// Deserializes a `salt:algorithm:iterations:digest` hash string into parts that can be
    /// used for verification.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokenized_hash = TokenizedHash::from_str(s)?;

        Ok(Self {
            alg: tokenized_hash.alg,
            iterations: tokenized_hash.iterations,
            salt: tokenized_hash.salt,
            include_meta: true,
            digest: tokenized_hash.digest,
        })
    }
}

impl Hash {
    fn new(options: HashOptions, digest: String) -> Self {
        Self {
            alg: options.alg,
            iterations: options.iterations,
            salt: options.salt,
            include_meta: options.include_meta,
            digest,
        }
    }

    /// Creates a `Hash` from a digest and the parameters that produced it. Use this when the
    /// parameters are stored separately from a bare digest.
    pub fn from_parts(digest: &str, salt: &str, alg: Algorithm, iterations: u32) -> Self {
        Self {
            alg,
            iterations,
            salt: String::from(salt),
            include_meta: true,
            digest: String::from(digest),
        }
    }

    /// Returns the hex digest, without any metadata.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Returns the salt used to generate the hash.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Returns the digest function used to generate the hash.
    pub fn algorithm(&self) -> Algorithm {
        self.alg
    }

    /// Returns the number of rounds used to generate the hash.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns whether the hash string carries the metadata prefix.
    pub fn includes_meta(&self) -> bool {
        self.include_meta
    }

    /// Checks if the hash matches the provided input.
    ///
    /// Because verification requires re-running every round, this is as expensive as
    /// hashing.
    pub fn verify<P>(&self, input: &P) -> bool
    where
        P: AsRef<str> + ?Sized,
    {
        let options = self.options(DEFAULTS.interval_length);
        let digest = stretch_blocking(input.as_ref(), &options);

        self.matches(&digest)
    }

    /// Checks if the hash matches the provided input, yielding to the async runtime between
    /// bursts of [`DEFAULTS`]`.interval_length` rounds.
    pub async fn verify_async<P>(&self, input: &P) -> bool
    where
        P: AsRef<str> + ?Sized,
    {
        self.verify_async_with(input, DEFAULTS.interval_length).await
    }

    /// Checks if the hash matches the provided input, yielding to the async runtime after
    /// every `interval_length` rounds.
    pub async fn verify_async_with<P>(&self, input: &P, interval_length: NonZeroU32) -> bool
    where
        P: AsRef<str> + ?Sized,
    {
        let options = self.options(interval_length);
        let digest = stretch_yielding(input.as_ref(), &options).await;

        self.matches(&digest)
    }

    fn options(&self, interval_length: NonZeroU32) -> HashOptions {
        HashOptions {
            alg: self.alg,
            iterations: self.iterations,
            salt: self.salt.clone(),
            include_meta: self.include_meta,
            interval_length,
        }
    }

    fn matches(&self, digest: &str) -> bool {
        let matches = constant_time_eq(&self.digest, digest);
        tracing::debug!(algorithm = %self.alg, matches, "verified hash");
        matches
    }
}

/// Compares two strings without exiting early on the first differing byte.
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
