use crate::chain_params::ChainParams;
use primitives::bytes::Bytes;

/// Checks whether `script_pubkey` is the expected premine payout script for
/// `height`.
///
/// Panics if `height` is outside `[btg_height, btg_height + btg_premine_window)`:
/// callers must only invoke this for blocks inside the premine window, which
/// they already know from `height` relative to `params.btg_height`.
pub fn is_premine_payout_script(script_pubkey: &[u8], height: u32, params: &ChainParams) -> bool {
	let window_start = params.consensus.btg_height;
	let window_end = window_start + params.consensus.btg_premine_window;
	assert!(
		height >= window_start && height < window_end,
		"is_premine_payout_script called outside the premine window: height={}, window=[{}, {})",
		height,
		window_start,
		window_end
	);

	let index = ((height - window_start) as usize) % params.premine_pubkeys.len();
	let pubkey_bytes: Vec<u8> = hex::FromHex::from_hex(params.premine_pubkeys[index]).expect("premine pubkey table entries are valid hex");
	let pubkey = keys::Public::from_slice(&pubkey_bytes).expect("premine pubkey table entries are valid secp256k1 points");
	let expected: Bytes = script::build_p2pk(&pubkey);

	script_pubkey == &*expected
}

#[cfg(test)]
mod tests {
	use super::is_premine_payout_script;
	use crate::chain_params::ChainParams;

	#[test]
	fn matches_first_round_robin_pubkey_at_fork_height() {
		let params = ChainParams::regtest(&Default::default());
		let pubkey: Vec<u8> = hex::FromHex::from_hex(params.premine_pubkeys[0]).unwrap();
		let script = script::build_p2pk(&pubkey);
		assert!(is_premine_payout_script(&script, params.consensus.btg_height, &params));
	}

	#[test]
	fn rejects_unrelated_script() {
		let params = ChainParams::regtest(&Default::default());
		assert!(!is_premine_payout_script(&[0x6a], params.consensus.btg_height, &params));
	}

	#[test]
	#[should_panic]
	fn panics_outside_premine_window() {
		let params = ChainParams::regtest(&Default::default());
		let window_end = params.consensus.btg_height + params.consensus.btg_premine_window;
		is_premine_payout_script(&[], window_end, &params);
	}
}
