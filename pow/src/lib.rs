//! Retargeting and proof-of-work validation for the consensus fork modeled
//! by the `network` crate: classical Bitcoin retargeting before the fork,
//! a fixed minimum-difficulty window through the premine period, and LWMA
//! retargeting after.

extern crate bitcrypto;
extern crate network;
extern crate primitives;

mod chain_tip;
mod engine;
mod error;

pub use chain_tip::ChainTip;
pub use engine::{check_proof_of_work, next_required_bits};
pub use error::Error;

#[cfg(test)]
mod tests {
	use super::{check_proof_of_work, next_required_bits, ChainTip};
	use bitcrypto::SHA256D;
	use network::{ConsensusParams, Network};
	use primitives::compact::Compact;
	use primitives::U256;

	#[derive(Clone)]
	struct TestTip {
		height: u32,
		time: i64,
		bits: Compact,
		history: std::rc::Rc<Vec<(i64, Compact)>>,
	}

	impl ChainTip for TestTip {
		fn height(&self) -> u32 {
			self.height
		}
		fn time(&self) -> i64 {
			self.time
		}
		fn bits(&self) -> Compact {
			self.bits
		}
		fn ancestor(&self, height: u32) -> Option<Self> {
			self.history.get(height as usize).map(|(time, bits)| TestTip {
				height,
				time: *time,
				bits: *bits,
				history: self.history.clone(),
			})
		}
	}

	fn constant_spacing_chain(params: &ConsensusParams, blocks: u32) -> TestTip {
		let mut history = Vec::new();
		for height in 0..blocks {
			history.push((i64::from(height) * params.pow_target_spacing, params.pow_limit_compact()));
		}
		let history = std::rc::Rc::new(history);
		let (time, bits) = history[(blocks - 1) as usize];
		TestTip {
			height: blocks - 1,
			time,
			bits,
			history,
		}
	}

	#[test]
	fn regular_spacing_keeps_difficulty_unchanged_within_interval() {
		let params = ConsensusParams::new(Network::Mainnet);
		let tip = constant_spacing_chain(&params, 100);
		let next_time = tip.time() + params.pow_target_spacing;
		let bits = next_required_bits(&tip, next_time, &params);
		assert_eq!(bits, tip.bits());
	}

	#[test]
	fn testnet_min_difficulty_rule_triggers_after_quiet_period() {
		let params = ConsensusParams::new(Network::Testnet);
		let tip = constant_spacing_chain(&params, 100);
		let next_time = tip.time() + params.pow_target_spacing * 3;
		let bits = next_required_bits(&tip, next_time, &params);
		assert_eq!(bits, params.pow_limit_compact());
	}

	#[test]
	fn check_proof_of_work_accepts_hash_below_target() {
		let params = ConsensusParams::new(Network::Regtest);
		let hash = SHA256D::default();
		assert!(check_proof_of_work(&hash, params.pow_limit_compact(), &params).is_ok());
	}

	#[test]
	fn check_proof_of_work_rejects_hash_above_target() {
		use bitcrypto::FromStr;

		let params = ConsensusParams::new(Network::Regtest);
		let max_hash = SHA256D::from_str(&"ff".repeat(32)).unwrap();
		let tight_bits = Compact::from(U256::from(1u64));
		assert!(check_proof_of_work(&max_hash, tight_bits, &params).is_err());
	}

	#[test]
	fn check_proof_of_work_rejects_target_above_limit() {
		let params = ConsensusParams::new(Network::Mainnet);
		let above_limit = Compact::from(params.pow_limit * 2);
		assert!(check_proof_of_work(&SHA256D::default(), above_limit, &params).is_err());
	}
}
