use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AIRDROP_SEED, VAULT_SEED};
use crate::error::AirdropError;
use crate::state::AirdropState;

pub fn initialize_airdrop(
    ctx: Context<InitializeAirdrop>,
    merkle_root: [u8; 32],
    vesting_start_time: Option<i64>,
) -> Result<()> {
    // Default: TGE at deployment, claims open immediately.
    let start = match vesting_start_time {
        Some(ts) => ts,
        None => Clock::get()?.unix_timestamp,
    };
    require!(start > 0, AirdropError::InvalidTimestamp);

    let st = &mut ctx.accounts.airdrop;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.merkle_root = merkle_root;
    st.vesting_start_time = start;
    st.total_claimed = 0;
    st.bump = ctx.bumps.airdrop;
    st.vault_bump = ctx.bumps.vault;

    msg!("Airdrop initialized for mint {}, TGE at {}", st.mint, start);

    emit!(AirdropInitialized {
        owner: st.owner,
        mint: st.mint,
        vault: st.vault,
        merkle_root,
        vesting_start_time: start,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeAirdrop<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + AirdropState::SIZE,
        seeds = [AIRDROP_SEED, mint.key().as_ref()],
        bump
    )]
    pub airdrop: Account<'info, AirdropState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = airdrop,
        seeds = [VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct AirdropInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub merkle_root: [u8; 32],
    pub vesting_start_time: i64,
}
