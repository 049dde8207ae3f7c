//! Vesting clock utilities over fixed-length periods (no calendar months).
//! - elapsed = now - start, rejected before start
//! - periods_between = completed 30-day periods, capped at VESTING_PERIODS
//! - vesting end = start + NINETY_DAYS (inclusive)

use crate::constants::{VESTING_DURATION, VESTING_PERIOD, VESTING_PERIODS};
use crate::error::AirdropError;

/// Seconds since the vesting start.
pub fn elapsed_since_start(now_ts: i64, start_ts: i64) -> Result<i64, AirdropError> {
    if now_ts < start_ts {
        return Err(AirdropError::ClaimingNotAvailable);
    }
    now_ts
        .checked_sub(start_ts)
        .ok_or(AirdropError::MathOverflow)
}

/// Number of completed vesting periods, inclusive at boundaries.
/// 0 at the TGE, `VESTING_PERIODS` at or after the vesting end.
pub fn period_index(now_ts: i64, start_ts: i64) -> Result<u8, AirdropError> {
    let elapsed = elapsed_since_start(now_ts, start_ts)?;
    let completed = elapsed / VESTING_PERIOD;
    Ok(completed.min(VESTING_PERIODS as i64) as u8)
}

/// True if now is at or after the vesting end (start + 90 days).
pub fn is_after_vesting_end(now_ts: i64, start_ts: i64) -> Result<bool, AirdropError> {
    if now_ts < start_ts {
        return Ok(false);
    }
    let end = vesting_end(start_ts)?;
    Ok(now_ts >= end)
}

pub fn vesting_end(start_ts: i64) -> Result<i64, AirdropError> {
    start_ts
        .checked_add(VESTING_DURATION)
        .ok_or(AirdropError::MathOverflow)
}
