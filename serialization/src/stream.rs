use crate::compact_integer::CompactInteger;
use primitives::bytes::Bytes;
use std::io;

pub fn serialize<T>(t: &T) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append(t);
	stream.out()
}

pub fn serialize_list<T>(t: &[T]) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append_list(t);
	stream.out()
}

pub fn serialized_list_size<T>(t: &[T]) -> usize
where
	T: Serializable,
{
	CompactInteger::from(t.len()).serialized_size() + t.iter().map(Serializable::serialized_size).sum::<usize>()
}

pub trait Serializable {
	/// Serialize the struct and appends it to the end of stream.
	fn serialize(&self, stream: &mut Stream);

	/// Hint about a size of serialized struct.
	fn serialized_size(&self) -> usize
	where
		Self: Sized,
	{
		0
	}
}

/// Bitcoin structures writer.
#[derive(Default)]
pub struct Stream {
	buffer: Vec<u8>,
}

impl io::Write for Stream {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.buffer.flush()
	}
}

impl Stream {
	/// Serializes given value and appends it to the end of stream.
	pub fn append<T>(&mut self, t: &T) -> &mut Self
	where
		T: Serializable,
	{
		t.serialize(self);
		self
	}

	/// Appends a vector of serializable structs, prefixed with its compact-encoded length.
	pub fn append_list<T>(&mut self, t: &[T]) -> &mut Self
	where
		T: Serializable,
	{
		self.append(&CompactInteger::from(t.len()));
		for i in t {
			self.append(i);
		}
		self
	}

	/// Appends raw bytes to the end of the stream without any length prefix.
	pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	/// Consumes the stream, returning the finished buffer.
	pub fn out(self) -> Bytes {
		self.buffer.into()
	}
}

#[cfg(test)]
mod tests {
	use super::{Serializable, Stream};

	#[test]
	fn test_append_list() {
		let mut stream = Stream::default();
		stream.append_list(&[1u8, 2, 3]);
		assert_eq!(stream.out(), vec![3u8, 1, 2, 3].into());
	}

	#[test]
	fn serialized_size_matches_encoded_len() {
		let value = 0x0102_0304u32;
		assert_eq!(value.serialized_size(), 4);
	}
}
