//! Push-only script construction: just enough of Bitcoin's script language
//! to build genesis coinbase scripts and pay-to-pubkey outputs. Not a
//! script interpreter.

mod builder;
mod num;
mod opcode;

pub use builder::{build_p2pk, Builder};
pub use opcode::Opcode;
