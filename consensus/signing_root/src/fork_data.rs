use crate::test_utils::TestRandom;
use crate::{Error, Hash256, HashTreeRoot, SignedRoot};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The fork version and chain identity whose root is mixed into every signature domain.
///
/// Spec v1.4.0
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct ForkData {
    #[serde(with = "serde_utils::bytes_4_hex")]
    pub current_version: [u8; 4],
    pub genesis_validators_root: Hash256,
}

impl SignedRoot for ForkData {}

impl TestRandom for ForkData {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Self {
            current_version: <[u8; 4]>::random_for_test(rng),
            genesis_validators_root: Hash256::random_for_test(rng),
        }
    }
}

/// Return the 32-byte fork data root for the `current_version` and `genesis_validators_root`.
///
/// This is used primarily in signature domains to avoid collisions across forks/chains.
///
/// Spec v1.4.0
pub fn compute_fork_data_root(
    current_version: [u8; 4],
    genesis_validators_root: Hash256,
) -> Result<Hash256, Error> {
    ForkData {
        current_version,
        genesis_validators_root,
    }
    .hash_tree_root()
}
