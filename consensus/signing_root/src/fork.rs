use crate::test_utils::TestRandom;
use crate::Hash256;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::{PackedEncoding, TreeHash, TreeHashType};
use tree_hash_derive::TreeHash;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[serde(transparent)]
#[ssz(struct_behaviour = "transparent")]
pub struct Epoch(#[serde(with = "serde_utils::quoted_u64")] u64);

impl Epoch {
    pub const fn new(epoch: u64) -> Self {
        Epoch(epoch)
    }
}

impl TreeHash for Epoch {
    fn tree_hash_type() -> TreeHashType {
        u64::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        self.0.tree_hash_packed_encoding()
    }

    fn tree_hash_packing_factor() -> usize {
        u64::tree_hash_packing_factor()
    }

    fn tree_hash_root(&self) -> Hash256 {
        self.0.tree_hash_root()
    }
}

impl TestRandom for Epoch {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Epoch(u64::random_for_test(rng))
    }
}

/// Specifies a fork of the `BeaconChain`, to prevent replay attacks.
///
/// Spec v1.4.0
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct Fork {
    #[serde(with = "serde_utils::bytes_4_hex")]
    pub previous_version: [u8; 4],
    #[serde(with = "serde_utils::bytes_4_hex")]
    pub current_version: [u8; 4],
    pub epoch: Epoch,
}

impl Fork {
    /// Return the fork version of the given `epoch`.
    ///
    /// Spec v1.4.0
    pub fn get_fork_version(&self, epoch: Epoch) -> [u8; 4] {
        if epoch < self.epoch {
            return self.previous_version;
        }
        self.current_version
    }
}

impl TestRandom for Fork {
    fn random_for_test(rng: &mut impl RngCore) -> Self {
        Self {
            previous_version: <[u8; 4]>::random_for_test(rng),
            current_version: <[u8; 4]>::random_for_test(rng),
            epoch: Epoch::random_for_test(rng),
        }
    }
}
