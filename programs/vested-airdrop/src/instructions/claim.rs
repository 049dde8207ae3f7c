use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{AIRDROP_SEED, CLAIM_SEED, VAULT_SEED};
use crate::error::AirdropError;
use crate::state::{AirdropState, ClaimStatus};
use crate::utils::time;

pub fn claim(
    ctx: Context<Claim>,
    claimant: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let airdrop_ai = ctx.accounts.airdrop.to_account_info();
    let airdrop_key = ctx.accounts.airdrop.key();
    let claim_status_bump = ctx.bumps.claim_status;

    require_keys_eq!(
        ctx.accounts.claimant_token_account.mint,
        ctx.accounts.airdrop.mint,
        AirdropError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.claimant_token_account.owner,
        claimant,
        AirdropError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let status = &mut ctx.accounts.claim_status;
    if status.is_fresh() {
        status.bind(airdrop_key, claimant, claim_status_bump);
    }

    let st = &mut ctx.accounts.airdrop;
    let claimable = st.process_claim(status, claimant, amount, &proof, now)?;

    require!(
        ctx.accounts.vault.amount >= claimable,
        AirdropError::InsufficientVaultBalance
    );

    // CPI transfer from vault to claimant, signed by the airdrop PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[AIRDROP_SEED, st.mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: airdrop_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    let period = time::period_index(now, st.vesting_start_time)?;
    msg!("Claimed {} for {} in period {}", claimable, claimant, period);

    emit!(TokensClaimed {
        claimant,
        period_index: period,
        amount: claimable,
        allocation: amount,
        claimed_total: status.claimed,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(claimant: Pubkey)]
pub struct Claim<'info> {
    #[account(mut, seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ClaimStatus::SIZE,
        seeds = [CLAIM_SEED, airdrop.key().as_ref(), claimant.as_ref()],
        bump
    )]
    pub claim_status: Box<Account<'info, ClaimStatus>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, airdrop.key().as_ref()],
        bump = airdrop.vault_bump,
        constraint = vault.mint == airdrop.mint @ AirdropError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub claimant: Pubkey,
    pub period_index: u8,
    pub amount: u64,
    pub allocation: u64,
    pub claimed_total: u64,
}
