use bitcrypto::{dhash256, SHA256D};
use primitives::compact::Compact;
use ser::serialize;
use std::fmt;

#[derive(PartialEq, Clone, Serializable, Deserializable)]
pub struct BlockHeader {
	pub version: u32,
	pub previous_header_hash: SHA256D,
	pub merkle_root_hash: SHA256D,
	pub time: u32,
	pub bits: Compact,
	pub nonce: u32,
}

impl fmt::Debug for BlockHeader {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("BlockHeader")
			.field("version", &self.version)
			.field("previous_header_hash", &self.previous_header_hash)
			.field("merkle_root_hash", &self.merkle_root_hash)
			.field("time", &self.time)
			.field("bits", &self.bits)
			.field("nonce", &self.nonce)
			.finish()
	}
}

/// Double-SHA256 of the serialized header, little-endian byte order as
/// carried on the wire (the same hash miners target).
pub fn block_header_hash(header: &BlockHeader) -> SHA256D {
	dhash256(&serialize(header))
}

#[cfg(test)]
mod tests {
	use super::{block_header_hash, BlockHeader};
	use primitives::compact::Compact;
	use ser::{deserialize, serialize};

	fn sample_header() -> BlockHeader {
		BlockHeader {
			version: 1,
			previous_header_hash: Default::default(),
			merkle_root_hash: Default::default(),
			time: 1_231_006_505,
			bits: Compact::new(0x1d00_ffff),
			nonce: 2_083_236_893,
		}
	}

	#[test]
	fn header_round_trips_through_serialization() {
		let header = sample_header();
		let bytes = serialize(&header);
		assert_eq!(bytes.len(), 80);
		let decoded: BlockHeader = deserialize(&*bytes).unwrap();
		assert!(decoded == header);
	}

	#[test]
	fn header_hash_is_deterministic() {
		let header = sample_header();
		assert_eq!(block_header_hash(&header), block_header_hash(&header));
	}
}
