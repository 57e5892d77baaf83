use thiserror::Error;

/// Errors that may occur when using this crate
#[derive(Debug, Error)]
pub enum SechashError {
    /// The requested digest identifier does not name a supported hash function
    #[error("SechashError: Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Indicates that a provided hash string was expected to be valid, but is invalid. This
    /// normally occurs when a hash string does not have the `salt:algorithm:iterations:digest`
    /// shape.
    #[error("SechashError: Malformed hash: {0}")]
    MalformedHash(&'static str),

    /// Indicates that the user of a type or function has specified an invalid parameter or
    /// set of parameters
    #[error("SechashError: Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The operating system's random number generator could not produce a salt
    #[error("SechashError: Failed to generate salt: {0}")]
    SaltGeneration(#[from] rand::Error),
}
