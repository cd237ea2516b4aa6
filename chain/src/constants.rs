/// Number of satoshis in one coin.
pub const COIN: u64 = 100_000_000;

/// Block height at which the subsidy halving schedule started counting for
/// the networks modeled here (mirrors `nSubsidyHalvingInterval`).
pub const SUBSIDY_HALVING_INTERVAL: u32 = 210_000;

/// Sequence number that marks a transaction input as final (no relative
/// locktime / RBF signaling).
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;
