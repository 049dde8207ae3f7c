//! Release schedule: `TGE_UNLOCK_PERCENT` at start, the rest linear over
//! `VESTING_DURATION`. Rounding dust is released at the end.

use crate::constants::{
    LINEAR_VESTING_PERCENT, PERCENT_DENOMINATOR, TGE_UNLOCK_PERCENT, VESTING_DURATION,
};
use crate::error::AirdropError;
use crate::utils::time;

pub fn tge_amount(total: u64) -> Result<u64, AirdropError> {
    percent_of(total, TGE_UNLOCK_PERCENT)
}

pub fn linear_amount(total: u64) -> Result<u64, AirdropError> {
    percent_of(total, LINEAR_VESTING_PERCENT)
}

/// Amount of `total` unlocked at `now_ts` for a schedule starting at `start_ts`.
pub fn vested_amount(total: u64, now_ts: i64, start_ts: i64) -> Result<u64, AirdropError> {
    let elapsed = time::elapsed_since_start(now_ts, start_ts)?;
    if time::is_after_vesting_end(now_ts, start_ts)? {
        return Ok(total);
    }

    let linear = (linear_amount(total)? as u128)
        .checked_mul(elapsed as u128)
        .ok_or(AirdropError::MathOverflow)?
        / VESTING_DURATION as u128;
    let vested = (tge_amount(total)? as u128)
        .checked_add(linear)
        .ok_or(AirdropError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| AirdropError::MathOverflow)
}

/// Vested minus already claimed. Zero before the start.
pub fn claimable_amount(
    total: u64,
    claimed: u64,
    now_ts: i64,
    start_ts: i64,
) -> Result<u64, AirdropError> {
    if now_ts < start_ts {
        return Ok(0);
    }
    let vested = vested_amount(total, now_ts, start_ts)?;
    Ok(vested.saturating_sub(claimed))
}

fn percent_of(total: u64, percent: u64) -> Result<u64, AirdropError> {
    let v = (total as u128)
        .checked_mul(percent as u128)
        .ok_or(AirdropError::MathOverflow)?
        / PERCENT_DENOMINATOR as u128;
    u64::try_from(v).map_err(|_| AirdropError::MathOverflow)
}
