//! Prints the active network's consensus parameters: fork activation
//! heights, the genesis block, and (on regtest) the effect of version-bits
//! and segwit-height overrides.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, Arg};
use network::{CliOverrides, Network};
use std::str::FromStr;

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("{}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<(), String> {
	let matches = App::new("bitcoin-rs")
		.version(crate_version!())
		.about("Consensus parameters and proof-of-work difficulty core")
		.arg(Arg::with_name("testnet").long("testnet").help("Use the test network"))
		.arg(Arg::with_name("regtest").long("regtest").help("Use the regression test network"))
		.arg(
			Arg::with_name("segwitheight")
				.long("segwitheight")
				.takes_value(true)
				.help("Regtest only: overrides the segwit activation height (-1 disables segwit)"),
		)
		.arg(
			Arg::with_name("vbparams")
				.long("vbparams")
				.takes_value(true)
				.multiple(true)
				.number_of_values(1)
				.help("Regtest only: deployment:start_time:timeout, may be repeated"),
		)
		.get_matches();

	let network_id = if matches.is_present("regtest") {
		"regtest"
	} else if matches.is_present("testnet") {
		"test"
	} else {
		"main"
	};

	let mut overrides = CliOverrides::default();
	if let Some(height) = matches.value_of("segwitheight") {
		overrides.segwit_height = Some(i64::from_str(height).map_err(|e| format!("invalid -segwitheight: {}", e))?);
	}
	if let Some(values) = matches.values_of("vbparams") {
		overrides.vbparams = values.map(str::to_string).collect();
	}

	if network_id != "regtest" && (matches.is_present("segwitheight") || matches.is_present("vbparams")) {
		return Err("-segwitheight and -vbparams only apply to -regtest".to_string());
	}

	let network = Network::from_str(network_id)?;
	info!("selected network: {}", network);

	network::ParamsRegistry::select(network_id, &overrides)?;
	network::ParamsRegistry::with(print_params);

	Ok(())
}

fn print_params(params: &network::ChainParams) {
	println!("network:              {}", params.network);
	println!("default port:         {}", params.default_port);
	println!("bech32 hrp:           {}", params.bech32_hrp);
	println!("bip34 height:         {}", params.consensus.bip34_height);
	println!("bip65 height:         {}", params.consensus.bip65_height);
	println!("bip66 height:         {}", params.consensus.bip66_height);
	println!("csv height:           {}", params.consensus.csv_height);
	println!("segwit height:        {}", params.consensus.segwit_height);
	println!("hard fork height:     {}", params.consensus.btg_height);
	println!("premine window:       {}", params.consensus.btg_premine_window);
	println!("premine pubkeys:      {}", params.premine_pubkeys.len());
	if let Some(testdummy) = params.consensus.deployments.get("testdummy") {
		println!(
			"testdummy deployment: bit {}, start {}, {}",
			testdummy.bit,
			testdummy.start_time,
			if testdummy.has_timeout() { "times out" } else { "no timeout" }
		);
	}

	let genesis = network::genesis_block(params.network);
	println!("genesis hash:         {:?}", genesis.hash());
	println!("genesis merkle root:  {:?}", genesis.merkle_root());

	match pow::check_proof_of_work(&genesis.hash(), genesis.block_header.bits, &params.consensus) {
		Ok(()) => println!("genesis proof of work: valid"),
		Err(err) => println!("genesis proof of work: invalid ({})", err),
	}
}
