//! secp256k1 public key parsing used to validate premine payout scripts.

extern crate rustc_hex as hex;
extern crate secp256k1;

mod hash;
mod public;

use std::fmt;

pub use public::Public;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
	InvalidPublic,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::InvalidPublic => write!(f, "invalid public key"),
		}
	}
}

impl std::error::Error for Error {}
