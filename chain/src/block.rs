use crate::block_header::{block_header_hash, BlockHeader};
use crate::merkle_root::merkle_root;
use crate::transaction::Transaction;
use bitcrypto::SHA256D;
use ser::{Deserializable, Serializable};

#[derive(PartialEq, Clone, Debug, Serializable, Deserializable)]
pub struct Block {
	pub block_header: BlockHeader,
	pub transactions: Vec<Transaction>,
}

impl Block {
	pub fn new(block_header: BlockHeader, transactions: Vec<Transaction>) -> Self {
		Block {
			block_header,
			transactions,
		}
	}

	pub fn hash(&self) -> SHA256D {
		block_header_hash(&self.block_header)
	}

	pub fn merkle_root(&self) -> SHA256D {
		merkle_root(&self.transactions.iter().map(Transaction::hash).collect::<Vec<_>>())
	}
}

#[cfg(test)]
mod tests {
	use super::Block;
	use crate::block_header::BlockHeader;
	use crate::transaction::{Transaction, TransactionInput, TransactionOutput};
	use primitives::bytes::Bytes;
	use primitives::compact::Compact;

	#[test]
	fn single_transaction_block_merkle_root_is_its_hash() {
		let tx = Transaction {
			version: 1,
			inputs: vec![TransactionInput::coinbase(Bytes::from(vec![0x01]))],
			outputs: vec![TransactionOutput {
				value: 0,
				script_pubkey: Bytes::new(),
			}],
			lock_time: 0,
		};
		let block = Block::new(
			BlockHeader {
				version: 1,
				previous_header_hash: Default::default(),
				merkle_root_hash: tx.hash(),
				time: 0,
				bits: Compact::new(0x1d00_ffff),
				nonce: 0,
			},
			vec![tx.clone()],
		);

		assert_eq!(block.merkle_root(), tx.hash());
	}
}
