use crate::deployments::{Deployment, NO_TIMEOUT};
use crate::Network;
use bitcrypto::{FromStr, SHA256D};
use primitives::compact::Compact;
use primitives::U256;
use std::collections::BTreeMap;

/// One failure out of `update_activation_parameters_from_args`: the only
/// mutation site allowed on a `ConsensusParams` under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	UnknownDeployment(String),
	MalformedVbParams(String),
	SegwitHeightOutOfRange(i64),
}

impl std::fmt::Display for ConfigError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			ConfigError::UnknownDeployment(name) => write!(f, "unknown deployment: {}", name),
			ConfigError::MalformedVbParams(arg) => write!(f, "-vbparams must be deployment:start:timeout, got '{}'", arg),
			ConfigError::SegwitHeightOutOfRange(h) => write!(f, "segwit height out of range: {}", h),
		}
	}
}

impl std::error::Error for ConfigError {}

/// Regtest-only CLI overrides accepted by `ConsensusParams::regtest`.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub segwit_height: Option<i64>,
	pub vbparams: Vec<String>,
}

/// Parameters that influence chain consensus: fork activation heights,
/// proof-of-work limits and retargeting constants, version-bits deployments,
/// and the hard-fork premine policy.
#[derive(Debug, Clone)]
pub struct ConsensusParams {
	pub network: Network,

	pub subsidy_halving_interval: u32,
	pub bip16_exception: SHA256D,
	pub bip34_hash: SHA256D,
	pub bip34_height: u32,
	pub bip65_height: u32,
	pub bip66_height: u32,
	pub csv_height: u32,
	pub segwit_height: i64,
	pub min_bip9_warning_height: u32,

	pub pow_limit: U256,
	pub pow_target_timespan: i64,
	pub pow_target_spacing: i64,
	pub allow_min_difficulty_blocks: bool,
	pub no_retargeting: bool,

	pub rule_change_activation_threshold: u32,
	pub miner_confirmation_window: u32,
	pub deployments: BTreeMap<&'static str, Deployment>,

	pub btg_height: u32,
	pub btg_premine_window: u32,
	pub btg_premine_enforce_whitelist: bool,
	pub btg_premine_reward: u64,

	pub minimum_chain_work: U256,
	pub default_assume_valid: SHA256D,

	pub lwma_averaging_window: u32,
	pub lwma_adjusted_weight: u64,
	pub lwma_min_denominator: u32,
	pub lwma_solvetime_limitation: bool,
}

fn hash(s: &str) -> SHA256D {
	SHA256D::from_str(s).expect("literal consensus hash constant must parse")
}

fn pow_limit(s: &str) -> U256 {
	assert_eq!(s.len(), 64, "literal pow limit constant must be 64 hex chars");
	let mut bytes = [0u8; 32];
	for (i, byte) in bytes.iter_mut().enumerate() {
		*byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).expect("literal pow limit constant must be hex");
	}
	U256::from_big_endian(&bytes)
}

impl ConsensusParams {
	pub fn new(network: Network) -> Self {
		match network {
			Network::Mainnet => Self::mainnet(),
			Network::Testnet => Self::testnet(),
			Network::Regtest => Self::regtest(&CliOverrides::default()).expect("default regtest overrides never fail"),
		}
	}

	fn base_deployments() -> BTreeMap<&'static str, Deployment> {
		let mut deployments = BTreeMap::new();
		deployments.insert(
			"testdummy",
			Deployment {
				name: "testdummy",
				bit: 28,
				start_time: 1_199_145_601,
				timeout: 1_230_767_999,
			},
		);
		deployments
	}

	fn mainnet() -> Self {
		let deployments = Self::base_deployments();

		ConsensusParams {
			network: Network::Mainnet,
			subsidy_halving_interval: 210_000,
			bip16_exception: hash("00000000000002dc756eebf4f49723ed8d30cc28a5f108eb94b1ba88ac4f9c22"),
			bip34_hash: hash("000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8"),
			bip34_height: 227_931,
			bip65_height: 388_381,
			bip66_height: 363_725,
			csv_height: 419_328,
			segwit_height: 481_824,
			min_bip9_warning_height: 483_840,
			pow_limit: pow_limit("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
			pow_target_timespan: 14 * 24 * 60 * 60,
			pow_target_spacing: 10 * 60,
			allow_min_difficulty_blocks: false,
			no_retargeting: false,
			rule_change_activation_threshold: 1916,
			miner_confirmation_window: 2016,
			deployments,
			btg_height: 638_592,
			btg_premine_window: 100,
			btg_premine_enforce_whitelist: true,
			btg_premine_reward: 1_000,
			minimum_chain_work: pow_limit("00000000000000000000000000000000000000000e1ab5ec9348e9f4b8eb8154"),
			default_assume_valid: hash("0000000000000000000f2adce67e49b0b6bdeb9de8b7c3d7e93b21e7fc1e819d"),
			lwma_averaging_window: 45,
			lwma_adjusted_weight: 13_772,
			lwma_min_denominator: 10_000,
			lwma_solvetime_limitation: true,
		}
	}

	fn testnet() -> Self {
		let deployments = Self::base_deployments();

		ConsensusParams {
			network: Network::Testnet,
			subsidy_halving_interval: 210_000,
			bip16_exception: hash("00000000dd30457c001f4095d208cc1296b0eed002427aa599874af7a432b105"),
			bip34_hash: hash("0000000023b3a96d3484e5abb3755c413e7d41500f8e2a5c3f0dd01299cd8ef8"),
			bip34_height: 21_111,
			bip65_height: 581_885,
			bip66_height: 330_776,
			csv_height: 770_112,
			segwit_height: 834_624,
			min_bip9_warning_height: 836_640,
			pow_limit: pow_limit("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
			pow_target_timespan: 14 * 24 * 60 * 60,
			pow_target_spacing: 10 * 60,
			allow_min_difficulty_blocks: true,
			no_retargeting: false,
			rule_change_activation_threshold: 1512,
			miner_confirmation_window: 2016,
			deployments,
			btg_height: 1_780_318,
			btg_premine_window: 50,
			btg_premine_enforce_whitelist: false,
			btg_premine_reward: 1_000,
			minimum_chain_work: pow_limit("0000000000000000000000000000000000000000000001495c1d5a01e2af8a23"),
			default_assume_valid: hash("000000000000056c49030c174179b52a928c870e6e8a822c75973b7970cfbd01"),
			lwma_averaging_window: 45,
			lwma_adjusted_weight: 13_772,
			lwma_min_denominator: 10_000,
			lwma_solvetime_limitation: true,
		}
	}

	/// Builds the regtest `ConsensusParams`, applying `-segwitheight` and
	/// `-vbparams` overrides before returning — the only point at which a
	/// `ConsensusParams` is mutated after its fields are first populated.
	pub fn regtest(overrides: &CliOverrides) -> Result<Self, ConfigError> {
		let mut deployments = Self::base_deployments();
		deployments.insert(
			"testdummy",
			Deployment {
				name: "testdummy",
				bit: 28,
				start_time: 0,
				timeout: NO_TIMEOUT,
			},
		);

		let mut params = ConsensusParams {
			network: Network::Regtest,
			subsidy_halving_interval: 150,
			bip16_exception: SHA256D::default(),
			bip34_hash: SHA256D::default(),
			bip34_height: 500,
			bip65_height: 1_351,
			bip66_height: 1_251,
			csv_height: 432,
			segwit_height: 0,
			min_bip9_warning_height: 0,
			pow_limit: pow_limit("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
			pow_target_timespan: 14 * 24 * 60 * 60,
			pow_target_spacing: 10 * 60,
			allow_min_difficulty_blocks: true,
			no_retargeting: true,
			rule_change_activation_threshold: 108,
			miner_confirmation_window: 144,
			deployments,
			btg_height: 3_000,
			btg_premine_window: 50,
			btg_premine_enforce_whitelist: true,
			btg_premine_reward: 100,
			minimum_chain_work: U256::zero(),
			default_assume_valid: SHA256D::default(),
			lwma_averaging_window: 45,
			lwma_adjusted_weight: 13_772,
			lwma_min_denominator: 10_000,
			lwma_solvetime_limitation: true,
		};

		params.update_activation_parameters_from_args(overrides)?;
		Ok(params)
	}

	/// Applies regtest-only overrides. Fails closed: any malformed argument
	/// aborts before any field is changed.
	fn update_activation_parameters_from_args(&mut self, overrides: &CliOverrides) -> Result<(), ConfigError> {
		if let Some(height) = overrides.segwit_height {
			if height < -1 || height >= i64::from(i32::max_value()) {
				return Err(ConfigError::SegwitHeightOutOfRange(height));
			}
			self.segwit_height = if height == -1 { i64::from(i32::max_value()) } else { height };
		}

		for arg in &overrides.vbparams {
			let parts: Vec<&str> = arg.split(':').collect();
			if parts.len() != 3 {
				return Err(ConfigError::MalformedVbParams(arg.clone()));
			}
			let (name, start, timeout) = (parts[0], parts[1], parts[2]);
			let start_time: i64 = start.parse().map_err(|_| ConfigError::MalformedVbParams(arg.clone()))?;
			let timeout: i64 = timeout.parse().map_err(|_| ConfigError::MalformedVbParams(arg.clone()))?;

			let deployment = self.deployments.get_mut(name).ok_or_else(|| ConfigError::UnknownDeployment(name.to_string()))?;
			deployment.start_time = start_time;
			deployment.timeout = timeout;
		}

		Ok(())
	}

	/// Difficulty adjustment interval in blocks: `pow_target_timespan / pow_target_spacing`.
	pub fn difficulty_adjustment_interval(&self) -> i64 {
		self.pow_target_timespan / self.pow_target_spacing
	}

	pub fn pow_limit_compact(&self) -> Compact {
		self.pow_limit.into()
	}

	pub fn is_bip30_exception(&self, block_hash: &SHA256D, height: u32) -> bool {
		(height == 91_842 && block_hash == &hash("00000000000a4d0a398161ffc163c503763b1f4360639393e0e4c8e300e0caec"))
			|| (height == 91_880 && block_hash == &hash("00000000000743f190a18c5577a3c2d2a1f610ae9601ac046a38084ccb7cd721"))
	}
}

#[cfg(test)]
mod tests {
	use super::{CliOverrides, ConfigError, ConsensusParams};
	use crate::Network;

	#[test]
	fn hard_fork_fields_match_per_network() {
		let main = ConsensusParams::new(Network::Mainnet);
		assert_eq!(main.btg_height, 638_592);
		assert_eq!(main.btg_premine_window, 100);
		assert!(main.btg_premine_enforce_whitelist);
		assert_eq!(main.btg_premine_reward, 1_000);

		let test = ConsensusParams::new(Network::Testnet);
		assert_eq!(test.btg_height, 1_780_318);
		assert_eq!(test.btg_premine_window, 50);
		assert!(!test.btg_premine_enforce_whitelist);

		let regtest = ConsensusParams::new(Network::Regtest);
		assert_eq!(regtest.btg_height, 3_000);
		assert_eq!(regtest.btg_premine_reward, 100);
	}

	#[test]
	fn difficulty_adjustment_interval_is_2016_on_mainnet() {
		assert_eq!(ConsensusParams::new(Network::Mainnet).difficulty_adjustment_interval(), 2016);
	}

	#[test]
	fn segwit_height_override_disable_sentinel() {
		let overrides = CliOverrides {
			segwit_height: Some(-1),
			vbparams: vec![],
		};
		let params = ConsensusParams::regtest(&overrides).unwrap();
		assert_eq!(params.segwit_height, i64::from(i32::max_value()));
	}

	#[test]
	fn segwit_height_override_out_of_range_is_fatal() {
		let overrides = CliOverrides {
			segwit_height: Some(-2),
			vbparams: vec![],
		};
		assert_eq!(
			ConsensusParams::regtest(&overrides).unwrap_err(),
			ConfigError::SegwitHeightOutOfRange(-2)
		);
	}

	#[test]
	fn vbparams_updates_named_deployment() {
		let overrides = CliOverrides {
			segwit_height: None,
			vbparams: vec!["testdummy:1:2".to_string()],
		};
		let params = ConsensusParams::regtest(&overrides).unwrap();
		let testdummy = &params.deployments["testdummy"];
		assert_eq!(testdummy.start_time, 1);
		assert_eq!(testdummy.timeout, 2);
	}

	#[test]
	fn vbparams_rejects_unknown_deployment() {
		let overrides = CliOverrides {
			segwit_height: None,
			vbparams: vec!["notreal:1:2".to_string()],
		};
		assert!(matches!(ConsensusParams::regtest(&overrides), Err(ConfigError::UnknownDeployment(_))));
	}

	#[test]
	fn vbparams_rejects_malformed_argument() {
		let overrides = CliOverrides {
			segwit_height: None,
			vbparams: vec!["testdummy:1".to_string()],
		};
		assert!(matches!(ConsensusParams::regtest(&overrides), Err(ConfigError::MalformedVbParams(_))));
	}
}
