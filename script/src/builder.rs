use crate::num::serialize_num;
use crate::opcode::Opcode;
use primitives::bytes::Bytes;

/// Incrementally assembles a script by appending opcodes and length-prefixed
/// data pushes, mirroring `CScript`'s `<<` operator chain.
#[derive(Default)]
pub struct Builder {
	data: Vec<u8>,
}

impl Builder {
	pub fn new() -> Self {
		Builder { data: Vec::new() }
	}

	pub fn push_opcode(mut self, opcode: Opcode) -> Self {
		self.data.push(opcode.into());
		self
	}

	/// Pushes a signed integer the way `CScript() << n` does: small values
	/// use the dedicated `OP_1`..`OP_16`/`OP_1NEGATE`/`OP_0` opcodes, anything
	/// else is pushed as a minimally-encoded `CScriptNum`.
	pub fn push_num(self, n: i64) -> Self {
		match n {
			0 => self.push_opcode(Opcode::OP_0),
			-1 => self.push_opcode(Opcode::OP_1NEGATE),
			1..=16 => {
				let opcode = Opcode::OP_1 as u8 + (n as u8 - 1);
				self.push_raw_opcode(opcode)
			}
			_ => self.push_bytes(&serialize_num(n)),
		}
	}

	fn push_raw_opcode(mut self, opcode: u8) -> Self {
		self.data.push(opcode);
		self
	}

	/// Pushes arbitrary data, choosing the minimal-length push opcode the
	/// way Bitcoin's script serializer does.
	pub fn push_bytes(mut self, bytes: &[u8]) -> Self {
		let len = bytes.len();
		if len < Opcode::OP_PUSHDATA1 as usize {
			self.data.push(len as u8);
		} else if len <= 0xff {
			self.data.push(Opcode::OP_PUSHDATA1.into());
			self.data.push(len as u8);
		} else if len <= 0xffff {
			self.data.push(Opcode::OP_PUSHDATA2.into());
			self.data.extend_from_slice(&(len as u16).to_le_bytes());
		} else {
			self.data.push(Opcode::OP_PUSHDATA4.into());
			self.data.extend_from_slice(&(len as u32).to_le_bytes());
		}
		self.data.extend_from_slice(bytes);
		self
	}

	pub fn into_script(self) -> Bytes {
		self.data.into()
	}
}

/// Builds a pay-to-pubkey (`<pubkey> OP_CHECKSIG`) output script.
pub fn build_p2pk(pubkey: &[u8]) -> Bytes {
	Builder::new().push_bytes(pubkey).push_opcode(Opcode::OP_CHECKSIG).into_script()
}

#[cfg(test)]
mod tests {
	use super::{build_p2pk, Builder};
	use crate::opcode::Opcode;

	#[test]
	fn small_push_uses_length_byte() {
		let script = Builder::new().push_bytes(&[1, 2, 3]).into_script();
		assert_eq!(&*script, &[3u8, 1, 2, 3]);
	}

	#[test]
	fn push_num_uses_op_1_for_one() {
		let script = Builder::new().push_num(1).into_script();
		assert_eq!(&*script, &[Opcode::OP_1 as u8]);
	}

	#[test]
	fn push_num_encodes_genesis_timestamp_opcode() {
		let script = Builder::new().push_num(486_604_799).into_script();
		assert_eq!(&*script, &[4u8, 0xff, 0xff, 0x00, 0x1d]);
	}

	#[test]
	fn p2pk_appends_checksig() {
		let pubkey = [0x02u8; 33];
		let script = build_p2pk(&pubkey);
		assert_eq!(script.len(), 1 + 33 + 1);
		assert_eq!(script[script.len() - 1], Opcode::OP_CHECKSIG as u8);
	}
}
