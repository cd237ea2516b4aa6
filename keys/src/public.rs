use crate::hash::{H264, H520};
use crate::Error;
use hex::ToHex;
use std::{fmt, ops};

/// A secp256k1 public key, in either its compressed (33-byte) or
/// uncompressed (65-byte) serialization.
pub enum Public {
	Normal(H520),
	Compressed(H264),
}

impl Public {
	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		match data.len() {
			33 => {
				let mut public = H264::default();
				public.copy_from_slice(data);
				let parsed = Public::Compressed(public);
				parsed.validate()?;
				Ok(parsed)
			}
			65 => {
				let mut public = H520::default();
				public.copy_from_slice(data);
				let parsed = Public::Normal(public);
				parsed.validate()?;
				Ok(parsed)
			}
			_ => Err(Error::InvalidPublic),
		}
	}

	/// Confirms the bytes parse as a valid secp256k1 curve point, rejecting
	/// malformed prefixes a naive length check would let through.
	pub fn validate(&self) -> Result<(), Error> {
		secp256k1::PublicKey::from_slice(self).map(|_| ()).map_err(|_| Error::InvalidPublic)
	}

	pub fn is_compressed(&self) -> bool {
		matches!(self, Public::Compressed(_))
	}
}

impl ops::Deref for Public {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		match *self {
			Public::Normal(ref hash) => &**hash,
			Public::Compressed(ref hash) => &**hash,
		}
	}
}

impl PartialEq for Public {
	fn eq(&self, other: &Self) -> bool {
		let s_slice: &[u8] = self;
		let o_slice: &[u8] = other;
		s_slice == o_slice
	}
}

impl fmt::Debug for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Public::Normal(ref hash) => write!(f, "normal: {}", hash.to_hex::<String>()),
			Public::Compressed(ref hash) => write!(f, "compressed: {}", hash.to_hex::<String>()),
		}
	}
}

impl fmt::Display for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.to_hex::<String>().fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::Public;
	use hex::FromHex;

	#[test]
	fn rejects_wrong_length() {
		let short = [0u8; 20];
		assert!(Public::from_slice(&short).is_err());
	}

	#[test]
	fn compressed_key_parses() {
		let bytes: Vec<u8> = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".from_hex().unwrap();
		let public = Public::from_slice(&bytes).unwrap();
		assert!(public.is_compressed());
	}

	#[test]
	fn rejects_malformed_curve_point() {
		let mut bytes: Vec<u8> = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798".from_hex().unwrap();
		bytes[0] = 0x05;
		assert!(Public::from_slice(&bytes).is_err());
	}
}
