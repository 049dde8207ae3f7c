pub mod merkle;
#[cfg(not(target_os = "solana"))]
pub mod proofs;
pub mod time;
pub mod units;
pub mod vesting;
