use crate::{compute_fork_data_root, ChainSpec, Error, Hash256};
use tracing::trace;

/// Number of fork data root bytes retained in a domain, following the 4-byte domain type.
pub const FORK_DATA_ROOT_DOMAIN_BYTES: usize = 28;

/// Return the domain for the `domain_type` and `fork_version`.
///
/// A missing `fork_version` is replaced with `spec.genesis_fork_version` and a missing
/// `genesis_validators_root` with `spec.zero_hash`, before anything is hashed.
///
/// Spec v1.4.0
pub fn compute_domain(
    domain_type: [u8; 4],
    fork_version: Option<[u8; 4]>,
    genesis_validators_root: Option<Hash256>,
    spec: &ChainSpec,
) -> Result<Hash256, Error> {
    let fork_version = fork_version.unwrap_or_else(|| {
        trace!("Using genesis fork version for domain");
        spec.genesis_fork_version
    });
    let genesis_validators_root = genesis_validators_root.unwrap_or_else(|| {
        trace!("Using zero genesis validators root for domain");
        spec.zero_hash
    });

    let fork_data_root = compute_fork_data_root(fork_version, genesis_validators_root)?;

    Ok(domain(domain_type, fork_data_root))
}

/// `domain_type ++ fork_data_root[..28]`. The final 4 bytes of the root are discarded.
fn domain(domain_type: [u8; 4], fork_data_root: Hash256) -> Hash256 {
    let mut domain = [0; 32];
    domain[0..4].copy_from_slice(&domain_type);
    domain[4..].copy_from_slice(&fork_data_root.as_bytes()[..FORK_DATA_ROOT_DOMAIN_BYTES]);
    Hash256::from(domain)
}
