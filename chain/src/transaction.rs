use bitcrypto::{dhash256, SHA256D};
use primitives::bytes::Bytes;
use ser::{serialize, Deserializable, Serializable};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Default, Serializable, Deserializable)]
pub struct OutPoint {
	pub hash: SHA256D,
	pub index: u32,
}

#[derive(PartialEq, Clone, Serializable, Deserializable)]
pub struct TransactionInput {
	pub previous_output: OutPoint,
	pub script_sig: Bytes,
	pub sequence: u32,
}

impl TransactionInput {
	/// Builds the lone input of a coinbase transaction: a null previous
	/// output and an arbitrary `script_sig` (height/extranonce/message).
	pub fn coinbase(script_sig: Bytes) -> Self {
		TransactionInput {
			previous_output: OutPoint::default(),
			script_sig,
			sequence: crate::constants::SEQUENCE_FINAL,
		}
	}

	pub fn is_final(&self) -> bool {
		self.sequence == crate::constants::SEQUENCE_FINAL
	}
}

impl fmt::Debug for TransactionInput {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("TransactionInput")
			.field("previous_output", &self.previous_output)
			.field("script_sig", &self.script_sig)
			.field("sequence", &self.sequence)
			.finish()
	}
}

#[derive(Debug, PartialEq, Clone, Serializable, Deserializable)]
pub struct TransactionOutput {
	pub value: u64,
	pub script_pubkey: Bytes,
}

#[derive(PartialEq, Clone, Serializable, Deserializable)]
pub struct Transaction {
	pub version: i32,
	pub inputs: Vec<TransactionInput>,
	pub outputs: Vec<TransactionOutput>,
	pub lock_time: u32,
}

impl fmt::Debug for Transaction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Transaction")
			.field("version", &self.version)
			.field("inputs", &self.inputs)
			.field("outputs", &self.outputs)
			.field("lock_time", &self.lock_time)
			.finish()
	}
}

impl Transaction {
	pub fn hash(&self) -> SHA256D {
		dhash256(&serialize(self))
	}

	pub fn is_coinbase(&self) -> bool {
		self.inputs.len() == 1 && self.inputs[0].previous_output == OutPoint::default()
	}
}

#[cfg(test)]
mod tests {
	use super::{OutPoint, Transaction, TransactionInput, TransactionOutput};
	use primitives::bytes::Bytes;

	#[test]
	fn coinbase_transaction_is_recognized() {
		let tx = Transaction {
			version: 1,
			inputs: vec![TransactionInput::coinbase(Bytes::from(vec![0x04]))],
			outputs: vec![TransactionOutput {
				value: 50_0000_0000,
				script_pubkey: Bytes::new(),
			}],
			lock_time: 0,
		};
		assert!(tx.is_coinbase());
	}

	#[test]
	fn non_coinbase_has_real_previous_output() {
		let tx = Transaction {
			version: 1,
			inputs: vec![TransactionInput {
				previous_output: OutPoint {
					hash: Default::default(),
					index: 1,
				},
				script_sig: Bytes::new(),
				sequence: 0xffff_ffff,
			}],
			outputs: vec![],
			lock_time: 0,
		};
		assert!(!tx.is_coinbase());
	}
}
