#![deny(missing_docs)]

//! A library for salted, key-stretched string hashing. A string is combined with a salt and
//! run through a digest function (MD5, SHA-1 or SHA-2) over and over, so that every guess
//! costs an attacker thousands of digest computations instead of one.
//!
//! The resulting hash string is self-describing. It carries the salt, algorithm and
//! iteration count alongside the digest, in the form `salt:algorithm:iterations:digest`, so
//! a hash can be verified later without any other configuration.
//!
//! This is a plain iterated-hash construction, not a memory-hard
//! [key derivation function](https://en.wikipedia.org/wiki/Key_derivation_function). It is
//! exactly as strong as the chosen digest function and iteration count. For new systems
//! that need resistance to GPU or ASIC cracking, use Argon2, scrypt or bcrypt.
//!
//! Hashing can block the calling thread ([`Hasher::hash`]) or run as a future
//! ([`Hasher::hash_async`]) that yields to the async runtime after every burst of rounds, so
//! that a large iteration count does not starve a single-threaded runtime. Both produce the
//! same hash string.
//!
//! # Examples
//!
//! Hash a string, then verify the hash:
//!
//! ```rust
//! use sechash::Hasher;
//!
//! let hash = Hasher::default().hash("password").unwrap();
//! assert!(hash.verify("password"));
//! ```
//!
//! Change the parameters used for hashing:
//!
//! ```rust
//! use sechash::{Algorithm, Hasher};
//!
//! let hash = Hasher::new()
//!         .algorithm(Algorithm::Sha256)
//!         .iterations(5000)
//!         .salt_length(12)
//!         .hash("password")
//!         .unwrap();
//!
//! assert!(hash.verify("password"));
//! assert_eq!(hash.salt().len(), 12);
//! assert_eq!(hash.digest().len(), 64);
//! ```
//!
//! Verify a hash from a hash string:
//!
//! ```rust
//! use sechash::Hash;
//! use std::str::FromStr;
//!
//! let hash_string = "salt:sha1:1:c88e9c67041a74e0357befdff93f87dde0904214";
//!
//! let hash = Hash::from_str(hash_string).unwrap();
//! assert!(hash.verify("password"));
//! assert_eq!(hash.to_string(), hash_string);
//! ```
//!
//! Work with plain strings:
//!
//! ```rust
//! let hash = sechash::strong_hash_sync("password", None).unwrap();
//!
//! assert!(sechash::test_hash_sync("password", &hash, None).unwrap());
//! assert!(!sechash::test_hash_sync("Password", &hash, None).unwrap());
//! ```
//!
//! Hash inside an async runtime:
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use sechash::Hasher;
//!
//! let hash = Hasher::default().hash_async("password").await.unwrap();
//! assert!(hash.verify_async("password").await);
//! # }
//! ```
//!
//! Use your own salt (by default, the hasher will use a random salt):
//!
//! ```rust
//! use sechash::Hasher;
//!
//! let hash = Hasher::default()
//!         .custom_salt("some salt string")
//!         .hash("Your String")
//!         .unwrap();
//!
//! assert!(hash.to_string().starts_with("some salt string:sha1:2000:"));
//! ```
//!
//! Store only the digest and supply the parameters again when verifying:
//!
//! ```rust
//! use sechash::Hasher;
//!
//! let hasher = Hasher::default()
//!         .include_meta(false)
//!         .custom_salt("stored elsewhere");
//!
//! let digest = sechash::strong_hash_sync("password", Some(&hasher)).unwrap();
//! assert!(!digest.contains(':'));
//! assert!(sechash::test_hash_sync("password", &digest, Some(&hasher)).unwrap());
//! ```

mod algorithm;
mod config;
mod error;
mod functions;
mod hasher;
mod lexer;
mod stretch;

pub use algorithm::Algorithm;
pub use config::{Defaults, DEFAULTS};
pub use error::SechashError;
pub use functions::{
    basic_hash, strong_hash, strong_hash_sync, test_basic_hash, test_hash, test_hash_sync,
};
pub use hasher::{Hash, HashOptions, Hasher};
