use crate::checkpoint_data::{MAINNET_CHECKPOINTS, REGTEST_CHECKPOINTS, TESTNET_CHECKPOINTS};
use crate::consensus::{CliOverrides, ConfigError, ConsensusParams};
use crate::premine_data::{MAINNET_PREMINE_PUBKEYS, REGTEST_PREMINE_PUBKEYS, TESTNET_PREMINE_PUBKEYS};
use crate::{Magic, Network};

/// `base58Prefixes[PUBKEY_ADDRESS/SCRIPT_ADDRESS/SECRET_KEY]` equivalents,
/// plus the 4-byte extended key version bytes.
#[derive(Debug, Clone, Copy)]
pub struct Base58Prefixes {
	pub pubkey_address: u8,
	pub script_address: u8,
	pub secret_key: u8,
	pub ext_public_key: [u8; 4],
	pub ext_secret_key: [u8; 4],
}

/// Everything that distinguishes one network's chain from another: its
/// consensus rules, wire magic, address encoding, seed nodes and the
/// checkpoint/premine tables used to validate history without full
/// revalidation.
#[derive(Debug, Clone)]
pub struct ChainParams {
	pub network: Network,
	pub consensus: ConsensusParams,

	pub magic: Magic,
	pub default_port: u32,
	pub prune_after_height: u32,

	pub dns_seeds: &'static [&'static str],
	pub base58_prefixes: Base58Prefixes,
	pub bech32_hrp: &'static str,

	pub default_consistency_checks: bool,
	pub require_standard: bool,
	pub mine_blocks_on_demand: bool,

	pub checkpoints: &'static [(u32, &'static str)],
	pub premine_pubkeys: &'static [&'static str],
}

impl ChainParams {
	pub fn mainnet() -> Self {
		ChainParams {
			network: Network::Mainnet,
			consensus: ConsensusParams::new(Network::Mainnet),
			magic: Network::Mainnet.magic(),
			default_port: 8222,
			prune_after_height: 100_000,
			dns_seeds: &["seed.bitcoin-global.dev", "dnsseed.bitcoin-global.io", "dnsseed.bitcoin-global.co"],
			base58_prefixes: Base58Prefixes {
				pubkey_address: 38,
				script_address: 23,
				secret_key: 128,
				ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
				ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
			},
			bech32_hrp: "glob",
			default_consistency_checks: false,
			require_standard: true,
			mine_blocks_on_demand: false,
			checkpoints: MAINNET_CHECKPOINTS,
			premine_pubkeys: &MAINNET_PREMINE_PUBKEYS,
		}
	}

	pub fn testnet() -> Self {
		ChainParams {
			network: Network::Testnet,
			consensus: ConsensusParams::new(Network::Testnet),
			magic: Network::Testnet.magic(),
			default_port: 18222,
			prune_after_height: 1_000,
			dns_seeds: &[
				"test-dnsseed.bitcoin-global.io",
				"test-dnsseed.bitcoin-global.co",
				"globt-dnsseed.bitcoin-global.co",
			],
			base58_prefixes: Base58Prefixes {
				pubkey_address: 111,
				script_address: 196,
				secret_key: 239,
				ext_public_key: [0x04, 0x35, 0x87, 0xCF],
				ext_secret_key: [0x04, 0x35, 0x83, 0x94],
			},
			bech32_hrp: "globt",
			default_consistency_checks: false,
			require_standard: false,
			mine_blocks_on_demand: false,
			checkpoints: TESTNET_CHECKPOINTS,
			premine_pubkeys: &TESTNET_PREMINE_PUBKEYS,
		}
	}

	/// Builds regtest params, applying CLI overrides. Panics on malformed
	/// overrides; use `try_regtest` to handle that case instead.
	pub fn regtest(overrides: &CliOverrides) -> Self {
		Self::try_regtest(overrides).expect("invalid regtest CLI overrides")
	}

	pub fn try_regtest(overrides: &CliOverrides) -> Result<Self, ConfigError> {
		Ok(ChainParams {
			network: Network::Regtest,
			consensus: ConsensusParams::regtest(overrides)?,
			magic: Network::Regtest.magic(),
			default_port: 68222,
			prune_after_height: 1_000,
			dns_seeds: &[],
			base58_prefixes: Base58Prefixes {
				pubkey_address: 111,
				script_address: 196,
				secret_key: 239,
				ext_public_key: [0x04, 0x35, 0x87, 0xCF],
				ext_secret_key: [0x04, 0x35, 0x83, 0x94],
			},
			bech32_hrp: "globr",
			default_consistency_checks: true,
			require_standard: true,
			mine_blocks_on_demand: true,
			checkpoints: REGTEST_CHECKPOINTS,
			premine_pubkeys: &REGTEST_PREMINE_PUBKEYS,
		})
	}

	/// The checkpoint hash at `height`, if one is pinned for this network.
	pub fn checkpoint_at(&self, height: u32) -> Option<&'static str> {
		self.checkpoints.iter().find(|(h, _)| *h == height).map(|(_, hash)| *hash)
	}
}
