use crate::Hash256;
use rand::RngCore;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub use rand_xorshift::XorShiftRng as TestRng;

pub fn test_random_instance<T: TestRandom>() -> T {
    let mut rng = XorShiftRng::from_seed([0x42; 16]);
    T::random_for_test(&mut rng)
}

pub trait TestRandom {
    fn random_for_test(rng: &mut impl RngCore) -> Self;
}

impl TestRandom for u64 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u64()
    }
}

impl TestRandom for [u8; 4] {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        rng.next_u32().to_le_bytes()
    }
}

impl TestRandom for Hash256 {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        let mut key_bytes = [0; 32];
        rng.fill_bytes(&mut key_bytes);
        Hash256::from_slice(&key_bytes[..])
    }
}

/// Parse a 32-byte hex string (without `0x` prefix) into a `Hash256`.
#[cfg(test)]
pub fn hash256_from_hex(s: &str) -> Hash256 {
    Hash256::from_slice(&hex::decode(s).expect("valid hex"))
}

#[cfg(test)]
#[macro_export]
macro_rules! ssz_and_tree_hash_tests {
    ($type: ty) => {
        #[test]
        pub fn test_ssz_round_trip() {
            use rand::SeedableRng;
            use ssz::{Decode, Encode};
            use $crate::test_utils::{TestRandom, TestRng};

            let mut rng = TestRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);

            let bytes = original.as_ssz_bytes();
            let decoded = <$type>::from_ssz_bytes(&bytes).unwrap();

            assert_eq!(original, decoded);
        }

        #[test]
        pub fn test_tree_hash_root() {
            use rand::SeedableRng;
            use tree_hash::TreeHash;
            use $crate::test_utils::{TestRandom, TestRng};

            let mut rng = TestRng::from_seed([42; 16]);
            let original = <$type>::random_for_test(&mut rng);
            let modified = <$type>::random_for_test(&mut rng);

            assert_eq!(original.tree_hash_root(), original.clone().tree_hash_root());
            assert_ne!(original.tree_hash_root(), modified.tree_hash_root());
        }
    };
}
