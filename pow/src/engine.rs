use crate::chain_tip::ChainTip;
use crate::error::Error;
use bitcrypto::SHA256D;
use network::ConsensusParams;
use primitives::compact::Compact;
use primitives::U256;

/// Computes the `nBits` target the next block after `tip` must meet.
///
/// Dispatches on height relative to the hard fork: classical Bitcoin
/// retargeting below `btg_height`, a fixed minimum-difficulty target through
/// the premine window right after the fork, and LWMA retargeting from then
/// on.
pub fn next_required_bits<T: ChainTip>(tip: &T, new_block_time: i64, params: &ConsensusParams) -> Compact {
	let height = tip.height() + 1;
	let post_fork = height >= params.btg_height;

	if !post_fork {
		bitcoin_next_required_bits(tip, new_block_time, params)
	} else if height < params.btg_height + params.btg_premine_window {
		params.pow_limit_compact()
	} else {
		lwma_next_required_bits(tip, new_block_time, params)
	}
}

fn bitcoin_next_required_bits<T: ChainTip>(tip: &T, new_block_time: i64, params: &ConsensusParams) -> Compact {
	let pow_limit_compact = params.pow_limit_compact();
	let interval = params.difficulty_adjustment_interval();

	if (i64::from(tip.height()) + 1) % interval != 0 {
		if params.allow_min_difficulty_blocks {
			if new_block_time > tip.time() + params.pow_target_spacing * 2 {
				return pow_limit_compact;
			}
			return last_non_min_difficulty_bits(tip, interval, pow_limit_compact);
		}
		return tip.bits();
	}

	let height_first = i64::from(tip.height()) - (interval - 1);
	assert!(height_first >= 0, "retarget interval reaches before genesis");
	let first = tip
		.ancestor(height_first as u32)
		.expect("retarget interval ancestor must exist at a retarget boundary");

	bitcoin_calculate_next_required_bits(tip, first.time(), params)
}

/// Walks back through blocks mined at the floor difficulty until it finds
/// either a real retarget or a normal-difficulty block, mirroring testnet's
/// "allow minimum difficulty after a quiet period" carve-out.
fn last_non_min_difficulty_bits<T: ChainTip>(tip: &T, interval: i64, pow_limit_compact: Compact) -> Compact {
	let mut height = tip.height();
	let mut bits = tip.bits();

	loop {
		if height == 0 || height % (interval as u32) == 0 || bits != pow_limit_compact {
			return bits;
		}
		match tip.ancestor(height - 1) {
			Some(prev) => {
				height = prev.height();
				bits = prev.bits();
			}
			None => return bits,
		}
	}
}

fn bitcoin_calculate_next_required_bits<T: ChainTip>(tip: &T, first_block_time: i64, params: &ConsensusParams) -> Compact {
	if params.no_retargeting {
		return tip.bits();
	}

	let mut actual_timespan = tip.time() - first_block_time;
	let min_timespan = params.pow_target_timespan / 4;
	let max_timespan = params.pow_target_timespan * 4;
	if actual_timespan < min_timespan {
		actual_timespan = min_timespan;
	}
	if actual_timespan > max_timespan {
		actual_timespan = max_timespan;
	}

	let (target, _, _) = tip.bits().to_u256();
	let mut new_target = target * U256::from(actual_timespan as u64) / U256::from(params.pow_target_timespan as u64);
	if new_target > params.pow_limit {
		new_target = params.pow_limit;
	}

	Compact::from(new_target)
}

fn lwma_next_required_bits<T: ChainTip>(tip: &T, new_block_time: i64, params: &ConsensusParams) -> Compact {
	if params.allow_min_difficulty_blocks && new_block_time > tip.time() + params.pow_target_spacing * 2 {
		return params.pow_limit_compact();
	}
	lwma_calculate_next_required_bits(tip, params)
}

/// Linearly Weighted Moving Average retarget: recent blocks' solvetimes are
/// weighted more heavily than older ones, so difficulty reacts faster to
/// hashrate swings than the classical 2016-block window allows.
///
/// Preserves a quirk of the reference algorithm on purpose: an individual
/// block's solvetime can be negative (timestamps aren't strictly
/// increasing), and only the *total* weighted sum is floored — never
/// clamped block-by-block. Changing that would be a consensus fork, not a
/// bug fix.
fn lwma_calculate_next_required_bits<T: ChainTip>(tip: &T, params: &ConsensusParams) -> Compact {
	if params.no_retargeting {
		return tip.bits();
	}

	let height = i64::from(tip.height()) + 1;
	let target_spacing = params.pow_target_spacing;
	let n = i64::from(params.lwma_averaging_window);
	let k = params.lwma_adjusted_weight as i64;
	let dnorm = i64::from(params.lwma_min_denominator);
	let limit_solvetime = params.lwma_solvetime_limitation;
	assert!(height > n, "LWMA retarget requires height past its averaging window");

	let mut sum_target = U256::zero();
	let mut weighted_solvetime_sum: i64 = 0;
	let mut j = 0i64;

	for i in (height - n)..height {
		let block = tip.ancestor(i as u32).expect("LWMA window ancestor must exist");
		let block_prev = tip.ancestor((i - 1) as u32).expect("LWMA window ancestor must exist");
		let mut solvetime = block.time() - block_prev.time();
		if limit_solvetime && solvetime > 6 * target_spacing {
			solvetime = 6 * target_spacing;
		}

		j += 1;
		weighted_solvetime_sum += solvetime * j;

		let (target, _, _) = block.bits().to_u256();
		sum_target += target / U256::from((k * n * n) as u64);
	}

	let min_weighted_solvetime = n * k / dnorm;
	if weighted_solvetime_sum < min_weighted_solvetime {
		weighted_solvetime_sum = min_weighted_solvetime;
	}

	let mut next_target = sum_target * U256::from(weighted_solvetime_sum as u64);
	if next_target > params.pow_limit {
		next_target = params.pow_limit;
	}

	Compact::from(next_target)
}

/// Validates that `hash` satisfies the proof-of-work target encoded by
/// `bits`, rejecting malformed targets (negative, overflowing, zero, or
/// above the network's limit) the way the reference client does.
pub fn check_proof_of_work(hash: &SHA256D, bits: Compact, params: &ConsensusParams) -> Result<(), Error> {
	let (target, negative, overflow) = bits.to_u256();

	if negative {
		return Err(Error::NegativeTarget);
	}
	if overflow {
		return Err(Error::TargetOverflow);
	}
	if target.is_zero() {
		return Err(Error::ZeroTarget);
	}
	if target > params.pow_limit {
		return Err(Error::AboveLimit);
	}

	let hash_as_int = U256::from_little_endian(&**hash);
	if hash_as_int > target {
		return Err(Error::HashAboveTarget);
	}

	Ok(())
}
