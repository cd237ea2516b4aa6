mod compact_integer;
mod impls;
mod reader;
mod serialize_array_wrapper_macro;
mod stream;

pub use primitives::{bytes, compact};

pub use self::compact_integer::CompactInteger;
pub use self::reader::{deserialize, deserialize_iterator, Deserializable, Error, ReadIterator, Reader};
pub use self::stream::{serialize, serialize_list, serialized_list_size, Serializable, Stream};
