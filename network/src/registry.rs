use crate::chain_params::ChainParams;
use crate::consensus::CliOverrides;
use crate::Network;
use std::str::FromStr;
use std::sync::Mutex;

lazy_static! {
	static ref SELECTED: Mutex<Option<ChainParams>> = Mutex::new(None);
}

/// Process-wide holder of the active network's `ChainParams`. Selected once,
/// early in process startup, and read everywhere else — mirrors the
/// `SECP256K1` global in the keys crate, but mutable exactly once.
pub struct ParamsRegistry;

impl ParamsRegistry {
	/// Selects the network by its CLI id ("main"/"test"/"regtest"). Fails if
	/// `name` is unknown.
	pub fn select(name: &str, overrides: &CliOverrides) -> Result<(), String> {
		let network = Network::from_str(name)?;
		let params = match network {
			Network::Mainnet => ChainParams::mainnet(),
			Network::Testnet => ChainParams::testnet(),
			Network::Regtest => ChainParams::try_regtest(overrides).map_err(|e| e.to_string())?,
		};
		*SELECTED.lock().expect("registry mutex poisoned") = Some(params);
		Ok(())
	}

	/// Returns the active `ChainParams`. Panics if `select` was never called
	/// — this is a programming error, not a runtime condition to recover from.
	pub fn with<R>(f: impl FnOnce(&ChainParams) -> R) -> R {
		let guard = SELECTED.lock().expect("registry mutex poisoned");
		let params = guard.as_ref().expect("ParamsRegistry::select was never called");
		f(params)
	}
}

#[cfg(test)]
mod tests {
	use super::ParamsRegistry;
	use crate::consensus::CliOverrides;

	#[test]
	fn select_unknown_network_fails() {
		assert!(ParamsRegistry::select("nope", &CliOverrides::default()).is_err());
	}

	#[test]
	fn select_then_read_round_trips() {
		ParamsRegistry::select("regtest", &CliOverrides::default()).unwrap();
		ParamsRegistry::with(|params| {
			assert_eq!(params.default_port, 68222);
		});
	}
}
