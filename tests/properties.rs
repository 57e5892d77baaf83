use proptest::prelude::*;
use sechash::{strong_hash, strong_hash_sync, test_hash_sync, Algorithm, Hash, Hasher};

use std::num::NonZeroU32;
use std::str::FromStr;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Md5),
        Just(Algorithm::Sha1),
        Just(Algorithm::Sha224),
        Just(Algorithm::Sha256),
        Just(Algorithm::Sha384),
        Just(Algorithm::Sha512),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip(
        input in ".*",
        salt in "[^:]{0,16}",
        alg in algorithm(),
        iterations in 0u32..64,
    ) {
        let hasher = Hasher::default()
            .algorithm(alg)
            .iterations(iterations)
            .custom_salt(&salt);

        let encoded = strong_hash_sync(&input, Some(&hasher)).unwrap();

        if iterations > 0 {
            prop_assert_eq!(encoded.matches(':').count(), 3);
        }
        prop_assert!(test_hash_sync(&input, &encoded, None).unwrap());

        let parsed = Hash::from_str(&encoded).unwrap();
        prop_assert_eq!(parsed.salt(), salt.as_str());
        prop_assert_eq!(parsed.algorithm(), alg);
        prop_assert_eq!(parsed.iterations(), iterations);
        prop_assert_eq!(parsed.to_string(), encoded);
    }

    #[test]
    fn prop_other_input_rejected(
        input in "[a-zA-Z0-9 ]{1,24}",
        other in "[a-zA-Z0-9 ]{1,24}",
        alg in algorithm(),
    ) {
        prop_assume!(input != other);

        let hasher = Hasher::default().algorithm(alg).iterations(16);
        let encoded = strong_hash_sync(&input, Some(&hasher)).unwrap();

        prop_assert!(!test_hash_sync(&other, &encoded, None).unwrap());
    }

    #[test]
    fn prop_sync_and_async_agree(
        input in ".{0,32}",
        alg in algorithm(),
        iterations in 0u32..200,
        interval in 1u32..64,
    ) {
        let hasher = Hasher::default()
            .algorithm(alg)
            .iterations(iterations)
            .interval_length(NonZeroU32::new(interval).unwrap())
            .custom_salt("some salt string");

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

        let sync_hash = strong_hash_sync(&input, Some(&hasher)).unwrap();
        let async_hash = runtime.block_on(strong_hash(&input, Some(&hasher))).unwrap();

        prop_assert_eq!(sync_hash, async_hash);
    }
}
