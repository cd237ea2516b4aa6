extern crate heapsize;
extern crate primitives;
extern crate rayon;
extern crate rustc_hex as hex;
extern crate serialization as ser;
#[macro_use]
extern crate serialization_derive;

pub mod constants;

mod block;
mod block_header;
mod indexed_header;
mod merkle_root;
mod read_and_hash;
mod transaction;

pub use primitives::{bytes, compact, hash, U256};

pub use block::Block;
pub use block_header::{block_header_hash, BlockHeader};
pub use merkle_root::{merkle_node_hash, merkle_root};
pub use transaction::{OutPoint, Transaction, TransactionInput, TransactionOutput};

pub use indexed_header::IndexedBlockHeader;
pub use read_and_hash::{HashedData, ReadAndHash};
