use crate::{Deserializable, Error, Reader, Serializable, Stream};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

/// Bitcoin's variable-length integer ("varint"): 1, 3, 5 or 9 bytes
/// depending on magnitude.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CompactInteger(u64);

impl From<u64> for CompactInteger {
	fn from(u: u64) -> Self {
		CompactInteger(u)
	}
}

impl From<u32> for CompactInteger {
	fn from(u: u32) -> Self {
		CompactInteger(u as u64)
	}
}

impl From<usize> for CompactInteger {
	fn from(u: usize) -> Self {
		CompactInteger(u as u64)
	}
}

impl From<CompactInteger> for u64 {
	fn from(i: CompactInteger) -> Self {
		i.0
	}
}

impl From<CompactInteger> for usize {
	fn from(i: CompactInteger) -> Self {
		i.0 as usize
	}
}

impl From<CompactInteger> for u32 {
	fn from(i: CompactInteger) -> Self {
		i.0 as u32
	}
}

impl Serializable for CompactInteger {
	fn serialize(&self, stream: &mut Stream) {
		match self.0 {
			0..=0xfc => {
				stream.append_slice(&[self.0 as u8]);
			}
			0xfd..=0xffff => {
				stream.append_slice(&[0xfd]);
				let _ = stream.write_u16::<LittleEndian>(self.0 as u16);
			}
			0x1_0000..=0xffff_ffff => {
				stream.append_slice(&[0xfe]);
				let _ = stream.write_u32::<LittleEndian>(self.0 as u32);
			}
			_ => {
				stream.append_slice(&[0xff]);
				let _ = stream.write_u64::<LittleEndian>(self.0);
			}
		}
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		match self.0 {
			0..=0xfc => 1,
			0xfd..=0xffff => 3,
			0x1_0000..=0xffff_ffff => 5,
			_ => 9,
		}
	}
}

impl Deserializable for CompactInteger {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
	where
		T: io::Read,
	{
		let tag = reader.read_u8()?;
		match tag {
			0xff => {
				let value = reader.read_u64::<LittleEndian>()?;
				Ok(CompactInteger::from(value))
			}
			0xfe => {
				let value = reader.read_u32::<LittleEndian>()?;
				Ok(CompactInteger::from(value))
			}
			0xfd => {
				let value = reader.read_u16::<LittleEndian>()?;
				Ok(CompactInteger::from(value as u32))
			}
			_ => Ok(CompactInteger::from(tag as u32)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::CompactInteger;
	use crate::{deserialize, serialize};

	#[test]
	fn test_compact_integer_serialize() {
		assert_eq!(serialize(&CompactInteger::from(0u32)), vec![0u8].into());
		assert_eq!(serialize(&CompactInteger::from(0xfcu32)), vec![0xfcu8].into());
		assert_eq!(serialize(&CompactInteger::from(0xfdu32)), vec![0xfdu8, 0xfd, 0].into());
		assert_eq!(serialize(&CompactInteger::from(0xffffu32)), vec![0xfdu8, 0xff, 0xff].into());
		assert_eq!(serialize(&CompactInteger::from(0x10000u32)), vec![0xfeu8, 0, 0, 1, 0].into());
		assert_eq!(
			serialize(&CompactInteger::from(0xffffffffu32)),
			vec![0xfeu8, 0xff, 0xff, 0xff, 0xff].into()
		);
		assert_eq!(
			serialize(&CompactInteger::from(0x100000000u64)),
			vec![0xffu8, 0, 0, 0, 0, 1, 0, 0, 0].into()
		);
	}

	#[test]
	fn test_compact_integer_deserialize() {
		assert_eq!(0u32, deserialize::<_, CompactInteger>(&[0u8] as &[u8]).unwrap().into());
		assert_eq!(0xfcu32, deserialize::<_, CompactInteger>(&[0xfcu8] as &[u8]).unwrap().into());
		assert_eq!(
			0xfdu32,
			deserialize::<_, CompactInteger>(&[0xfdu8, 0xfd, 0] as &[u8]).unwrap().into()
		);
		assert_eq!(
			0xffffu32,
			deserialize::<_, CompactInteger>(&[0xfdu8, 0xff, 0xff] as &[u8]).unwrap().into()
		);
		assert_eq!(
			0x10000u32,
			deserialize::<_, CompactInteger>(&[0xfeu8, 0, 0, 1, 0] as &[u8]).unwrap().into()
		);
	}
}
