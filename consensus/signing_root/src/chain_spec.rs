use crate::{compute_domain, Epoch, Error, Fork, Hash256};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// This value is an application index of 0 with the bitmask applied (so it's equivalent to the bit mask).
/// Little endian hex: 0x00000001, Binary: 1000000000000000000000000
pub const APPLICATION_DOMAIN_BUILDER: u32 = 16777216;

/// Domains used by applications built on top of the beacon chain, e.g. the builder API.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ApplicationDomain {
    Builder,
}

impl ApplicationDomain {
    pub fn get_domain_constant(&self) -> u32 {
        match self {
            ApplicationDomain::Builder => APPLICATION_DOMAIN_BUILDER,
        }
    }
}

/// Each of the BLS signature domains.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Domain {
    BeaconProposer,
    BeaconAttester,
    Randao,
    Deposit,
    VoluntaryExit,
    SelectionProof,
    AggregateAndProof,
    SyncCommittee,
    SyncCommitteeSelectionProof,
    ContributionAndProof,
    BlsToExecutionChange,
    ApplicationMask(ApplicationDomain),
}

/// Holds the constants needed to derive signature domains.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ChainSpec {
    pub config_name: Option<String>,
    pub preset_base: String,

    /*
     * Initial values
     */
    pub genesis_fork_version: [u8; 4],
    pub zero_hash: Hash256,

    /*
     * Signature domains
     */
    pub(crate) domain_beacon_proposer: u32,
    pub(crate) domain_beacon_attester: u32,
    pub(crate) domain_randao: u32,
    pub(crate) domain_deposit: u32,
    pub(crate) domain_voluntary_exit: u32,
    pub(crate) domain_selection_proof: u32,
    pub(crate) domain_aggregate_and_proof: u32,
    pub(crate) domain_sync_committee: u32,
    pub(crate) domain_sync_committee_selection_proof: u32,
    pub(crate) domain_contribution_and_proof: u32,
    pub(crate) domain_bls_to_execution_change: u32,
    pub(crate) domain_application_mask: u32,
}

impl ChainSpec {
    /// Get the domain number, unmodified by the fork.
    ///
    /// Spec v1.4.0
    pub fn get_domain_constant(&self, domain: Domain) -> u32 {
        match domain {
            Domain::BeaconProposer => self.domain_beacon_proposer,
            Domain::BeaconAttester => self.domain_beacon_attester,
            Domain::Randao => self.domain_randao,
            Domain::Deposit => self.domain_deposit,
            Domain::VoluntaryExit => self.domain_voluntary_exit,
            Domain::SelectionProof => self.domain_selection_proof,
            Domain::AggregateAndProof => self.domain_aggregate_and_proof,
            Domain::SyncCommittee => self.domain_sync_committee,
            Domain::SyncCommitteeSelectionProof => self.domain_sync_committee_selection_proof,
            Domain::ContributionAndProof => self.domain_contribution_and_proof,
            Domain::BlsToExecutionChange => self.domain_bls_to_execution_change,
            Domain::ApplicationMask(application_domain) => {
                self.domain_application_mask & application_domain.get_domain_constant()
            }
        }
    }

    /// Returns the 4-byte `DomainType` for `domain`, i.e. the little-endian bytes of its constant.
    pub fn get_domain_type(&self, domain: Domain) -> [u8; 4] {
        self.get_domain_constant(domain).to_le_bytes()
    }

    /// Get the domain that represents the fork meta and signature domain.
    ///
    /// Spec v1.4.0
    pub fn get_domain(
        &self,
        epoch: Epoch,
        domain: Domain,
        fork: &Fork,
        genesis_validators_root: Hash256,
    ) -> Result<Hash256, Error> {
        let fork_version = fork.get_fork_version(epoch);
        self.compute_domain(domain, fork_version, genesis_validators_root)
    }

    /// Get the domain for a deposit signature.
    ///
    /// Deposits are valid across forks, thus the deposit domain is computed
    /// with the genesis fork version and a zeroed genesis validators root.
    ///
    /// Spec v1.4.0
    pub fn get_deposit_domain(&self) -> Result<Hash256, Error> {
        compute_domain(self.get_domain_type(Domain::Deposit), None, None, self)
    }

    /// Get the domain for signing builder registrations and bids.
    ///
    /// Like the deposit domain it is fork agnostic.
    pub fn get_builder_domain(&self) -> Result<Hash256, Error> {
        compute_domain(
            self.get_domain_type(Domain::ApplicationMask(ApplicationDomain::Builder)),
            None,
            None,
            self,
        )
    }

    /// Return the 32-byte domain for `domain` on the given fork and chain.
    ///
    /// Spec v1.4.0
    pub fn compute_domain(
        &self,
        domain: Domain,
        fork_version: [u8; 4],
        genesis_validators_root: Hash256,
    ) -> Result<Hash256, Error> {
        compute_domain(
            self.get_domain_type(domain),
            Some(fork_version),
            Some(genesis_validators_root),
            self,
        )
    }

    /// Returns a `ChainSpec` compatible with the Ethereum Foundation specification.
    pub fn mainnet() -> Self {
        Self {
            config_name: Some("mainnet".to_string()),
            preset_base: "mainnet".to_string(),
            genesis_fork_version: [0; 4],
            zero_hash: Hash256::zero(),
            domain_beacon_proposer: 0,
            domain_beacon_attester: 1,
            domain_randao: 2,
            domain_deposit: 3,
            domain_voluntary_exit: 4,
            domain_selection_proof: 5,
            domain_aggregate_and_proof: 6,
            domain_sync_committee: 7,
            domain_sync_committee_selection_proof: 8,
            domain_contribution_and_proof: 9,
            domain_bls_to_execution_change: 10,
            domain_application_mask: APPLICATION_DOMAIN_BUILDER,
        }
    }

    /// Ethereum Foundation minimal spec, as defined in the consensus-specs repo.
    pub fn minimal() -> Self {
        Self {
            config_name: Some("minimal".to_string()),
            preset_base: "minimal".to_string(),
            genesis_fork_version: [0x00, 0x00, 0x00, 0x01],
            ..ChainSpec::mainnet()
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Runtime configuration which can be loaded from a network's `config.yaml`.
///
/// Only the values used for domain computation are read, every other key in the file is ignored.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "UPPERCASE")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,

    #[serde(default = "default_preset_base")]
    pub preset_base: String,

    #[serde(with = "serde_utils::bytes_4_hex")]
    pub genesis_fork_version: [u8; 4],
}

fn default_preset_base() -> String {
    "mainnet".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::from_chain_spec(&ChainSpec::mainnet())
    }
}

impl Config {
    pub fn from_chain_spec(spec: &ChainSpec) -> Self {
        Self {
            config_name: spec.config_name.clone(),
            preset_base: spec.preset_base.clone(),
            genesis_fork_version: spec.genesis_fork_version,
        }
    }

    pub fn from_file(filename: &Path) -> Result<Self, String> {
        let f = File::open(filename)
            .map_err(|e| format!("Error opening spec at {}: {:?}", filename.display(), e))?;
        let config: Config = serde_yaml::from_reader(f)
            .map_err(|e| format!("Error parsing spec at {}: {:?}", filename.display(), e))?;

        debug!(
            path = %filename.display(),
            config_name = ?config.config_name,
            genesis_fork_version = ?config.genesis_fork_version,
            "Loaded chain config"
        );

        Ok(config)
    }

    /// Returns the base spec for this config's preset.
    pub fn base_spec(&self) -> Option<ChainSpec> {
        match self.preset_base.as_str() {
            "mainnet" => Some(ChainSpec::mainnet()),
            "minimal" => Some(ChainSpec::minimal()),
            _ => None,
        }
    }

    /// Overwrite the values in `chain_spec` which are set by this config.
    ///
    /// The preset is a property of the base spec and is left untouched.
    pub fn apply_to_chain_spec(&self, chain_spec: &ChainSpec) -> ChainSpec {
        ChainSpec {
            config_name: self.config_name.clone(),
            genesis_fork_version: self.genesis_fork_version,
            ..chain_spec.clone()
        }
    }
}
