use crate::Network;
use chain::{Block, BlockHeader, Transaction, TransactionInput, TransactionOutput};
use primitives::bytes::Bytes;
use primitives::compact::Compact;

const GENESIS_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";
const GENESIS_TIMESTAMP: &str = "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks";
const COIN: u64 = 100_000_000;

struct GenesisSpec {
	time: u32,
	nonce: u32,
	bits: u32,
	version: u32,
	reward: u64,
}

fn spec_for(network: Network) -> GenesisSpec {
	match network {
		Network::Mainnet => GenesisSpec {
			time: 1_231_006_505,
			nonce: 2_083_236_893,
			bits: 0x1d00_ffff,
			version: 1,
			reward: 50 * COIN,
		},
		Network::Testnet => GenesisSpec {
			time: 1_296_688_602,
			nonce: 414_098_458,
			bits: 0x1d00_ffff,
			version: 1,
			reward: 50 * COIN,
		},
		Network::Regtest => GenesisSpec {
			time: 1_296_688_602,
			nonce: 2,
			bits: 0x207f_ffff,
			version: 1,
			reward: 50 * COIN,
		},
	}
}

/// Builds the coinbase scriptSig the way `CreateGenesisBlock` does: a push of
/// the historical `486604799` constant, a push of the extranonce `4`, and a
/// push of the ASCII timestamp message.
fn genesis_coinbase_script_sig() -> Bytes {
	script::Builder::new()
		.push_num(486_604_799)
		.push_num(4)
		.push_bytes(GENESIS_TIMESTAMP.as_bytes())
		.into_script()
}

/// Builds the deterministic genesis block for `network`. The coinbase pays a
/// fixed, well-known pay-to-pubkey output; it is unspendable by construction
/// (the genesis coinbase is excluded from the UTXO set).
pub fn genesis_block(network: Network) -> Block {
	let spec = spec_for(network);
	let pubkey_bytes: Vec<u8> = hex::FromHex::from_hex(GENESIS_PUBKEY).expect("literal genesis pubkey must be valid hex");
	let pubkey = keys::Public::from_slice(&pubkey_bytes).expect("literal genesis pubkey must be a valid secp256k1 point");

	let coinbase = Transaction {
		version: 1,
		inputs: vec![TransactionInput::coinbase(genesis_coinbase_script_sig())],
		outputs: vec![TransactionOutput {
			value: spec.reward,
			script_pubkey: script::build_p2pk(&pubkey),
		}],
		lock_time: 0,
	};

	let merkle_root_hash = coinbase.hash();

	Block::new(
		BlockHeader {
			version: spec.version,
			previous_header_hash: Default::default(),
			merkle_root_hash,
			time: spec.time,
			bits: Compact::new(spec.bits),
			nonce: spec.nonce,
		},
		vec![coinbase],
	)
}

#[cfg(test)]
mod tests {
	use super::genesis_block;
	use crate::Network;

	#[test]
	fn mainnet_genesis_hash_matches_reference() {
		let block = genesis_block(Network::Mainnet);
		assert_eq!(
			format!("{:?}", block.hash()),
			"000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
		);
		assert_eq!(
			format!("{:?}", block.merkle_root()),
			"4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
		);
	}

	#[test]
	fn testnet_genesis_hash_matches_reference() {
		let block = genesis_block(Network::Testnet);
		assert_eq!(
			format!("{:?}", block.hash()),
			"000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943"
		);
	}

	#[test]
	fn regtest_genesis_hash_matches_reference() {
		let block = genesis_block(Network::Regtest);
		assert_eq!(
			format!("{:?}", block.hash()),
			"0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206"
		);
	}
}
