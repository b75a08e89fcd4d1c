//! Signature domains and signing roots for the beacon chain.
//!
//! A signature is never made over an object directly. Instead the object's tree hash root is
//! mixed with a 32-byte `domain`, which commits to the purpose of the signature, the fork it was
//! made on and the chain it belongs to. This prevents a signature from one context being replayed
//! in another.

#[macro_use]
pub mod test_utils;

pub mod chain_spec;
pub mod domain;
pub mod error;
pub mod fork;
pub mod fork_data;
pub mod signing_data;

use ethereum_types::H256;

pub use crate::chain_spec::{ApplicationDomain, ChainSpec, Config, Domain};
pub use crate::domain::compute_domain;
pub use crate::error::Error;
pub use crate::fork::{Epoch, Fork};
pub use crate::fork_data::{compute_fork_data_root, ForkData};
pub use crate::signing_data::{compute_signing_root, HashTreeRoot, SignedRoot, SigningData};

pub type Hash256 = H256;
