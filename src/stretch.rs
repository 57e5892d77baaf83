use crate::algorithm::Algorithm;
use crate::hasher::HashOptions;

/// A resumable stretching loop. Each round replaces the current value with
/// `digest(current + salt)`; rounds always run in order, so the result is the same however
/// the loop is split into bursts.
pub(crate) struct Stretch<'a> {
    alg: Algorithm,
    salt: &'a str,
    current: String,
    buffer: String,
    remaining: u32,
}

impl<'a> Stretch<'a> {
    pub fn new(input: &str, options: &'a HashOptions) -> Self {
        Self {
            alg: options.algorithm(),
            salt: options.salt(),
            current: String::from(input),
            buffer: String::with_capacity(options.algorithm().hex_len() + options.salt().len()),
            remaining: options.iterations(),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Runs at most `burst` rounds. Returns `true` once no rounds remain.
    pub fn run(&mut self, burst: u32) -> bool {
        let rounds = burst.min(self.remaining);

        for _ in 0..rounds {
            self.buffer.clear();
            self.buffer.push_str(&self.current);
            self.buffer.push_str(self.salt);

            self.current = self.alg.hex_digest(self.buffer.as_bytes());
        }

        self.remaining -= rounds;
        self.remaining == 0
    }

    pub fn into_digest(self) -> String {
        self.current
    }
}

/// Runs every round on the calling thread.
pub(crate) fn stretch_blocking(input: &str, options: &HashOptions) -> String {
    let mut stretch = Stretch::new(input, options);
    stretch.run(u32::MAX);
    stretch.into_digest()
}

/// Runs the rounds in bursts of `options.interval_length()`, yielding to the runtime
/// between bursts. No yield happens after the final burst.
pub(crate) async fn stretch_yielding(input: &str, options: &HashOptions) -> String {
    let mut stretch = Stretch::new(input, options);
    let burst = options.interval_length().get();

    while !stretch.run(burst) {
        tracing::trace!(remaining = stretch.remaining(), "yielding between stretching bursts");
        tokio::task::yield_now().await;
    }

    stretch.into_digest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hasher;

    use std::num::NonZeroU32;

    fn options(iterations: u32, interval: u32) -> HashOptions {
        Hasher::new()
            .algorithm(Algorithm::Sha1)
            .iterations(iterations)
            .interval_length(NonZeroU32::new(interval).unwrap())
            .custom_salt("some salt string")
            .resolve(None)
            .unwrap()
    }

    #[test]
    fn test_rounds_match_manual_loop() {
        let options = options(3, 500);

        let mut expected = String::from("Your String");
        for _ in 0..3 {
            expected = Algorithm::Sha1.hex_digest(format!("{expected}some salt string").as_bytes());
        }

        assert_eq!(stretch_blocking("Your String", &options), expected);
    }

    #[test]
    fn test_bursts_count_down() {
        let options = options(1200, 500);
        let mut stretch = Stretch::new("Your String", &options);

        assert!(!stretch.run(500));
        assert_eq!(stretch.remaining(), 700);
        assert!(!stretch.run(500));
        assert_eq!(stretch.remaining(), 200);
        assert!(stretch.run(500));
        assert_eq!(stretch.remaining(), 0);
        assert!(stretch.run(500));

        assert_eq!(stretch.into_digest(), stretch_blocking("Your String", &options));
    }

    #[test]
    fn test_zero_iterations_returns_input() {
        let options = options(0, 500);
        let mut stretch = Stretch::new("Your String", &options);

        assert!(stretch.run(500));
        assert_eq!(stretch.into_digest(), "Your String");
    }

    #[tokio::test]
    async fn test_yielding_matches_blocking() {
        for (iterations, interval) in [(0, 1), (1, 1), (7, 3), (500, 500), (1001, 500), (64, 1)] {
            let options = options(iterations, interval);

            assert_eq!(
                stretch_yielding("Your String", &options).await,
                stretch_blocking("Your String", &options),
            );
        }
    }
}
