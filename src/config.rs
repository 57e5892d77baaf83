use crate::algorithm::Algorithm;

use std::num::NonZeroU32;

const DEFAULT_INTERVAL_LENGTH: NonZeroU32 = match NonZeroU32::new(500) {
    Some(n) => n,
    None => unreachable!(),
};

/// The defaults used by [`Hasher::default()`](crate::Hasher).
pub const DEFAULTS: Defaults = Defaults {
    algorithm: Algorithm::Sha1,
    iterations: 2000,
    include_meta: true,
    interval_length: DEFAULT_INTERVAL_LENGTH,
    salt_length: 6,
};

/// Default values a [`Hasher`](crate::Hasher) starts from before any builder method is
/// applied.
///
/// `Defaults` is a plain value. Applications that want different defaults construct their own
/// (or, with the `use-serde` feature, deserialize one from their configuration) and pass it to
/// [`Hasher::with_defaults()`](crate::Hasher::with_defaults). Nothing in the crate holds
/// mutable default state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "use-serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Defaults {
    /// Digest function used for every round
    pub algorithm: Algorithm,

    /// Number of stretching rounds
    pub iterations: u32,

    /// Whether hash strings carry the `salt:algorithm:iterations:` prefix
    pub include_meta: bool,

    /// Number of rounds run between yields on the async path
    pub interval_length: NonZeroU32,

    /// Length of a generated salt, in hex characters. Generated salts are truncated digests,
    /// so this is capped at the digest length of the algorithm.
    pub salt_length: usize,
}

impl Default for Defaults {
    /// The defaults are as follows:
    ///
    /// * Algorithm: SHA-1
    /// * Iterations: 2000
    /// * Include metadata: yes
    /// * Interval length: 500 rounds
    /// * Salt length: 6 hex characters
    fn default() -> Self {
        DEFAULTS
    }
}
