use anchor_lang::prelude::*;

use crate::constants::{AIRDROP_SEED, CLAIM_SEED};
use crate::state::{AirdropState, ClaimStatus};
use crate::utils::vesting;

/// Read-only quote. Does not check the proof: `amount` is taken as given.
pub fn claimable_amount(
    ctx: Context<ClaimableAmount>,
    claimant: Pubkey,
    amount: u64,
) -> Result<u64> {
    let st = &ctx.accounts.airdrop;
    let now = Clock::get()?.unix_timestamp;

    let info = ctx.accounts.claim_status.to_account_info();
    let claimed = if info.data_is_empty() {
        0
    } else {
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );
        ClaimStatus::claimed_in(&info.try_borrow_data()?, &claimant)?
    };

    let claimable = st.claimable(amount, claimed, now)?;
    let vested = if now < st.vesting_start_time {
        0
    } else {
        vesting::vested_amount(amount, now, st.vesting_start_time)?
    };

    emit!(ClaimableQuote {
        claimant,
        vested_amount: vested,
        claimed_amount: claimed,
        claimable,
    });

    Ok(claimable)
}

#[derive(Accounts)]
#[instruction(claimant: Pubkey)]
pub struct ClaimableAmount<'info> {
    #[account(seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,

    /// CHECK: claim PDA of `claimant`, pinned by seeds. Empty until the
    /// first claim, otherwise decoded as `ClaimStatus` in-handler.
    #[account(
        seeds = [CLAIM_SEED, airdrop.key().as_ref(), claimant.as_ref()],
        bump
    )]
    pub claim_status: UncheckedAccount<'info>,
}

#[event]
pub struct ClaimableQuote {
    pub claimant: Pubkey,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
