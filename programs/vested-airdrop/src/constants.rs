//! Program-wide constants.
//!
//! Vesting: 31% unlocked at TGE, 69% released linearly over three months.

/// Seconds per day (UTC).
pub const ONE_DAY: i64 = 60 * 60 * 24;

pub const THIRTY_DAYS: i64 = ONE_DAY * 30;

pub const SIXTY_DAYS: i64 = ONE_DAY * 60;

pub const NINETY_DAYS: i64 = ONE_DAY * 90;

/// Length of the linear vesting window, measured from the TGE.
pub const VESTING_DURATION: i64 = NINETY_DAYS;

/// Length of one reporting sub-period inside the vesting window.
pub const VESTING_PERIOD: i64 = THIRTY_DAYS;

/// Number of sub-periods in the vesting window.
pub const VESTING_PERIODS: u8 = 3;

/// Share of an allocation unlocked at the vesting start.
pub const TGE_UNLOCK_PERCENT: u64 = 31;

/// Share of an allocation released linearly over `VESTING_DURATION`.
pub const LINEAR_VESTING_PERCENT: u64 = 69;

pub const PERCENT_DENOMINATOR: u64 = 100;

/// Decimals of the "ether" display unit.
pub const ETHER_DECIMALS: u8 = 18;

/// Smallest units per whole ether (10^18).
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

pub const AIRDROP_SEED: &[u8] = b"airdrop";
pub const VAULT_SEED: &[u8] = b"vault";
pub const CLAIM_SEED: &[u8] = b"claim";
