use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{AIRDROP_SEED, VAULT_SEED};
use crate::error::AirdropError;
use crate::state::AirdropState;
use crate::utils::units;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, AirdropError::InvalidAmount);

    let st = &ctx.accounts.airdrop;
    require_keys_eq!(ctx.accounts.mint.key(), st.mint, AirdropError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        st.mint,
        AirdropError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        AirdropError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    msg!(
        "Deposited {} tokens, vault holds {}",
        units::from_base_units(amount, ctx.accounts.mint.decimals),
        units::from_base_units(ctx.accounts.vault.amount, ctx.accounts.mint.decimals)
    );

    emit!(TokensDeposited {
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, airdrop.key().as_ref()],
        bump = airdrop.vault_bump,
        constraint = vault.mint == airdrop.mint @ AirdropError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
