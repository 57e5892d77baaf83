//! String-in, string-out entry points. These wrap [`Hasher`] and [`Algorithm`] for callers
//! that store hash strings and algorithm names as plain text.

use crate::algorithm::Algorithm;
use crate::error::SechashError;
use crate::hasher::{constant_time_eq, Hasher};
use crate::stretch::{stretch_blocking, stretch_yielding};

use std::str::FromStr;

/// Digests `input` once with the named algorithm and returns lowercase hex.
///
/// ```rust
/// assert_eq!(
///     sechash::basic_hash("md5", "foo").unwrap(),
///     "acbd18db4cc2f85cedef654fccc4a4d8",
/// );
/// ```
pub fn basic_hash(algorithm: &str, input: &str) -> Result<String, SechashError> {
    let alg = Algorithm::from_str(algorithm)?;
    Ok(alg.hex_digest(input.as_bytes()))
}

/// Checks `expected` against a single digest of `input`.
pub fn test_basic_hash(algorithm: &str, input: &str, expected: &str) -> Result<bool, SechashError> {
    let digest = basic_hash(algorithm, input)?;
    Ok(constant_time_eq(&digest, expected))
}

/// Stretches `input` on the calling thread and returns the hash string.
///
/// `None` uses [`Hasher::default()`].
pub fn strong_hash_sync(input: &str, options: Option<&Hasher<'_>>) -> Result<String, SechashError> {
    let hasher = options.copied().unwrap_or_default();
    Ok(hasher.hash(input)?.to_string())
}

/// Stretches `input`, yielding to the async runtime between bursts, and returns the hash
/// string. Produces the same string as [`strong_hash_sync()`] for the same input and
/// options.
pub async fn strong_hash(
    input: &str,
    options: Option<&Hasher<'_>>,
) -> Result<String, SechashError> {
    let hasher = options.copied().unwrap_or_default();
    Ok(hasher.hash_async(input).await?.to_string())
}

/// Checks `input` against a hash string produced by [`strong_hash_sync()`] or
/// [`strong_hash()`].
///
/// The salt, algorithm and iteration count embedded in `encoded` are used. To verify a
/// bare digest (one produced with `include_meta(false)`), pass a `Hasher` with
/// `include_meta(false)` and the original salt, algorithm and iteration count.
///
/// Returns `Ok(false)` on a mismatch and an error only when `encoded` or `options` cannot be
/// used at all.
pub fn test_hash_sync(
    input: &str,
    encoded: &str,
    options: Option<&Hasher<'_>>,
) -> Result<bool, SechashError> {
    let hasher = options.copied().unwrap_or_default();
    let resolved = hasher.resolve(Some(encoded))?;

    let computed = resolved.encode(&stretch_blocking(input, &resolved));
    let matches = constant_time_eq(&computed, encoded);

    tracing::debug!(algorithm = %resolved.algorithm(), matches, "verified hash string");

    Ok(matches)
}

/// Async counterpart to [`test_hash_sync()`].
pub async fn test_hash(
    input: &str,
    encoded: &str,
    options: Option<&Hasher<'_>>,
) -> Result<bool, SechashError> {
    let hasher = options.copied().unwrap_or_default();
    let resolved = hasher.resolve(Some(encoded))?;

    let computed = resolved.encode(&stretch_yielding(input, &resolved).await);
    let matches = constant_time_eq(&computed, encoded);

    tracing::debug!(algorithm = %resolved.algorithm(), matches, "verified hash string");

    Ok(matches)
}
