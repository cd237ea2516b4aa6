#[macro_use]
extern crate lazy_static;

extern crate bitcrypto;
extern crate chain;
extern crate keys;
extern crate primitives;
extern crate rustc_hex as hex;
extern crate script;

mod chain_params;
mod checkpoint_data;
mod consensus;
mod deployments;
mod genesis;
mod network;
mod premine;
mod premine_data;
mod registry;

pub use primitives::{compact, hash, U256};

pub use chain_params::ChainParams;
pub use consensus::{CliOverrides, ConfigError, ConsensusParams};
pub use deployments::Deployment;
pub use genesis::genesis_block;
pub use network::{Magic, Network};
pub use premine::is_premine_payout_script;
pub use registry::ParamsRegistry;
