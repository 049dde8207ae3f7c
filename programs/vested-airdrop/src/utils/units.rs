//! Conversions between display units and integer base units.

use crate::constants::WEI_PER_ETHER;

/// Whole ether to wei. `None` on overflow.
pub fn to_wei_ether(amount: u128) -> Option<u128> {
    amount.checked_mul(WEI_PER_ETHER)
}

/// Wei to whole ether, rounding down.
pub fn from_wei_ether(wei: u128) -> u128 {
    wei / WEI_PER_ETHER
}

/// Whole tokens to base units for a mint with `decimals` decimals.
pub fn to_base_units(amount: u64, decimals: u8) -> Option<u64> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| amount.checked_mul(scale))
}

/// Base units to whole tokens, rounding down. Saturates to 0 when the scale
/// does not fit in a u64.
pub fn from_base_units(raw: u64, decimals: u8) -> u64 {
    match 10u64.checked_pow(decimals as u32) {
        Some(scale) => raw / scale,
        None => 0,
    }
}
