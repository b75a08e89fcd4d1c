use crate::test_utils::TestRandom;
use crate::{Error, Hash256};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tracing::debug;
use tree_hash::{TreeHash, BYTES_PER_CHUNK};
use tree_hash_derive::TreeHash;

/// The object which is actually signed: an object's root mixed with a signature domain.
///
/// Spec v1.4.0
#[derive(
    Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct SigningData {
    pub object_root: Hash256,
    pub domain: Hash256,
}

impl TestRandom for SigningData {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Self {
            object_root: Hash256::random_for_test(rng),
            domain: Hash256::random_for_test(rng),
        }
    }
}

/// A value which can be merkleized into a single root, possibly failing.
///
/// Every `TreeHash` type gets this for free. Types without a canonical tree hash representation
/// can implement it directly and report an `Error::ComputationError`.
pub trait HashTreeRoot {
    fn hash_tree_root(&self) -> Result<Hash256, Error>;
}

impl<T: TreeHash> HashTreeRoot for T {
    fn hash_tree_root(&self) -> Result<Hash256, Error> {
        Ok(self.tree_hash_root())
    }
}

pub trait SignedRoot: TreeHash {
    fn signing_root(&self, domain: Hash256) -> Hash256 {
        SigningData {
            object_root: self.tree_hash_root(),
            domain,
        }
        .tree_hash_root()
    }
}

/// Return the signing root of `object` by calculating the root of the object-domain tree.
///
/// `domain` is usually the output of `compute_domain`, but any domain-like byte string that fits
/// in a single chunk is accepted and zero-padded to 32 bytes, as the hashing engine would for a
/// short byte vector. Longer values cannot be merkleized into the `domain` field.
///
/// Spec v1.4.0
pub fn compute_signing_root<T: HashTreeRoot + ?Sized>(
    object: &T,
    domain: &[u8],
) -> Result<Hash256, Error> {
    let object_root = object.hash_tree_root().map_err(|e| {
        debug!(error = %e, "Unable to compute object root for signing");
        e
    })?;

    if domain.len() > BYTES_PER_CHUNK {
        return Err(Error::ComputationError(format!(
            "domain of {} bytes exceeds {} byte chunk",
            domain.len(),
            BYTES_PER_CHUNK
        )));
    }

    SigningData {
        object_root,
        domain: tree_hash::merkle_root(domain, 1),
    }
    .hash_tree_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{hash256_from_hex, TestRng};
    use crate::{compute_domain, ChainSpec, Epoch, Fork, ForkData};
    use ethereum_hashing::hash32_concat;
    use rand::SeedableRng;

    ssz_and_tree_hash_tests!(SigningData);

    /// An object which the hashing engine refuses to merkleize.
    struct Unrepresentable;

    impl HashTreeRoot for Unrepresentable {
        fn hash_tree_root(&self) -> Result<Hash256, Error> {
            Err(Error::ComputationError("no SSZ schema".to_string()))
        }
    }

    fn attester_domain() -> Hash256 {
        compute_domain([1, 0, 0, 0], None, None, &ChainSpec::mainnet()).unwrap()
    }

    #[test]
    fn signing_root_of_default_fork_data() {
        let root = compute_signing_root(&ForkData::default(), attester_domain().as_bytes());

        assert_eq!(
            root,
            Ok(hash256_from_hex(
                "6ceb6b8c944eddf31c9d4e7eb2f4c9cd404ff1b4465210c46c6ce850f28e1c5a"
            ))
        );
    }

    #[test]
    fn signing_root_of_fork() {
        let fork = Fork {
            previous_version: [0; 4],
            current_version: [1, 0, 0, 0],
            epoch: Epoch::new(3),
        };

        assert_eq!(
            compute_signing_root(&fork, attester_domain().as_bytes()).unwrap(),
            hash256_from_hex("ebcac7e1652d4e2024456bebe944ff26fd18309961a78aed9b1e961c5f95fae4")
        );
    }

    #[test]
    fn signing_root_is_hash_of_object_root_and_domain() {
        let object = ForkData {
            current_version: [4, 3, 2, 1],
            genesis_validators_root: Hash256::repeat_byte(9),
        };
        let domain = Hash256::repeat_byte(0x33);

        let expected = hash32_concat(object.tree_hash_root().as_bytes(), domain.as_bytes());

        assert_eq!(
            compute_signing_root(&object, domain.as_bytes()),
            Ok(Hash256::from(expected))
        );
    }

    #[test]
    fn matches_signed_root_trait() {
        let mut rng = TestRng::from_seed([42; 16]);

        for _ in 0..4 {
            let object = ForkData::random_for_test(&mut rng);
            let domain = Hash256::random_for_test(&mut rng);

            assert_eq!(
                compute_signing_root(&object, domain.as_bytes()),
                Ok(object.signing_root(domain))
            );
        }
    }

    #[test]
    fn short_domain_is_zero_padded() {
        let object = ForkData::default();
        let short = [1, 0, 0, 0];
        let mut padded = [0; 32];
        padded[..4].copy_from_slice(&short);

        let root = compute_signing_root(&object, &short).unwrap();

        assert_eq!(root, compute_signing_root(&object, &padded).unwrap());
        assert_eq!(
            root,
            hash256_from_hex("e832d263aaa8f9417d9f45a702834f6961ee7b15ad4d3d27f2b0f4fe79d33031")
        );
    }

    #[test]
    fn oversized_domain_is_rejected() {
        let result = compute_signing_root(&ForkData::default(), &[0; 33]);

        assert!(matches!(result, Err(Error::ComputationError(_))));
    }

    #[test]
    fn object_error_is_propagated() {
        assert_eq!(
            compute_signing_root(&Unrepresentable, attester_domain().as_bytes()),
            Err(Error::ComputationError("no SSZ schema".to_string()))
        );
        // Fails identically on every attempt.
        assert_eq!(
            compute_signing_root(&Unrepresentable, attester_domain().as_bytes()),
            compute_signing_root(&Unrepresentable, &[])
        );
    }

    #[test]
    fn object_root_independent_of_domain() {
        let object = ForkData {
            current_version: [0, 0, 0, 1],
            genesis_validators_root: Hash256::repeat_byte(0xfe),
        };
        let object_root = object.tree_hash_root();

        for domain in [Hash256::zero(), attester_domain(), Hash256::repeat_byte(1)] {
            let expected = SigningData {
                object_root,
                domain,
            }
            .tree_hash_root();

            assert_eq!(
                compute_signing_root(&object, domain.as_bytes()),
                Ok(expected)
            );
        }
    }

    #[test]
    fn single_bit_changes_alter_signing_root() {
        let mut rng = TestRng::from_seed([42; 16]);

        for _ in 0..8 {
            let object = ForkData::random_for_test(&mut rng);
            let domain = Hash256::random_for_test(&mut rng);
            let bit = (u64::random_for_test(&mut rng) % 256) as usize;
            let base = compute_signing_root(&object, domain.as_bytes()).unwrap();

            let mut flipped_domain = domain;
            flipped_domain.as_bytes_mut()[bit / 8] ^= 1 << (bit % 8);
            assert_ne!(
                base,
                compute_signing_root(&object, flipped_domain.as_bytes()).unwrap()
            );

            let mut flipped_root = object.clone();
            flipped_root.genesis_validators_root.as_bytes_mut()[bit / 8] ^= 1 << (bit % 8);
            assert_ne!(
                base,
                compute_signing_root(&flipped_root, domain.as_bytes()).unwrap()
            );

            let mut flipped_version = object.clone();
            flipped_version.current_version[(bit % 32) / 8] ^= 1 << (bit % 8);
            assert_ne!(
                base,
                compute_signing_root(&flipped_version, domain.as_bytes()).unwrap()
            );
        }
    }
}
