use crate::algorithm::Algorithm;
use crate::error::SechashError;

use std::ops::Range;
use std::str::FromStr;

pub const SEPARATOR: char = ':';

/// The four fields of a `salt:algorithm:iterations:digest` hash string
#[derive(Debug)]
pub struct TokenizedHash {
    pub salt: String,
    pub alg: Algorithm,
    pub iterations: u32,
    pub digest: String,
}

impl FromStr for TokenizedHash {
    type Err = SechashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum HashStates {
            Salt,
            Algorithm,
            Iterations,
            Digest,
        }

        let mut state = HashStates::Salt;

        let mut salt = 0..0;
        let mut alg = 0..0;
        let mut iterations = 0..0;

        for (i, c) in s.char_indices() {
            if c != SEPARATOR {
                continue;
            }

            state = match state {
                HashStates::Salt => {
                    salt = 0..i;
                    alg = (i + 1)..(i + 1);
                    HashStates::Algorithm
                }

                HashStates::Algorithm => {
                    alg.end = i;
                    iterations = (i + 1)..(i + 1);
                    HashStates::Iterations
                }

                HashStates::Iterations => {
                    iterations.end = i;
                    HashStates::Digest
                }

                // With zero rounds the digest is the input itself, which may contain ':'
                HashStates::Digest if &s[iterations.clone()] == "0" => HashStates::Digest,

                HashStates::Digest => {
                    return Err(SechashError::MalformedHash(
                        "Expected 4 ':'-separated fields, found more",
                    ))
                }
            };
        }

        if !matches!(state, HashStates::Digest) {
            return Err(SechashError::MalformedHash(
                "Expected 4 ':'-separated fields, found fewer",
            ));
        }

        let digest = &s[(iterations.end + 1)..];

        if s[alg.clone()].is_empty() {
            return Err(SechashError::MalformedHash("Missing algorithm"));
        }

        Ok(Self {
            salt: String::from(&s[salt]),
            alg: Algorithm::from_str(&s[alg])?,
            iterations: parse_iterations(s, iterations)?,
            digest: String::from(digest),
        })
    }
}

// Only the canonical decimal form is accepted so that a parsed hash renders back to the
// exact same string.
fn parse_iterations(s: &str, range: Range<usize>) -> Result<u32, SechashError> {
    let text = &s[range];

    if text.is_empty() {
        return Err(SechashError::MalformedHash("Missing iteration count"));
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) || (text.len() > 1 && text.starts_with('0')) {
        return Err(SechashError::MalformedHash("Invalid iteration count"));
    }

    text.parse::<u32>()
        .map_err(|_| SechashError::MalformedHash("Iteration count is too big"))
}
