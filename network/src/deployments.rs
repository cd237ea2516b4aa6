/// Sentinel `timeout` value meaning the deployment never times out.
pub const NO_TIMEOUT: i64 = i64::max_value();

/// A single BIP9 version-bits deployment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
	pub name: &'static str,
	pub bit: u8,
	pub start_time: i64,
	pub timeout: i64,
}

impl Deployment {
	/// Whether this deployment has a real timeout rather than the `NO_TIMEOUT`
	/// sentinel (regtest's `testdummy` deployment, for instance, never times out).
	pub fn has_timeout(&self) -> bool {
		self.timeout != NO_TIMEOUT
	}
}

#[cfg(test)]
mod tests {
	use super::{Deployment, NO_TIMEOUT};

	#[test]
	fn no_timeout_sentinel_reports_no_timeout() {
		let deployment = Deployment {
			name: "testdummy",
			bit: 28,
			start_time: 0,
			timeout: NO_TIMEOUT,
		};
		assert!(!deployment.has_timeout());
	}

	#[test]
	fn real_timeout_reports_has_timeout() {
		let deployment = Deployment {
			name: "testdummy",
			bit: 28,
			start_time: 1_199_145_601,
			timeout: 1_230_767_999,
		};
		assert!(deployment.has_timeout());
	}
}
