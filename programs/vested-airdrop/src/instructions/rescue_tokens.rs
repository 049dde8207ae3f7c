use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::AIRDROP_SEED;
use crate::error::AirdropError;
use crate::state::AirdropState;

/// Moves any SPL token held by an airdrop-owned account (the vault included)
/// to an owner token account.
pub fn rescue_tokens(ctx: Context<RescueTokens>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.airdrop;
    st.check_rescue(&ctx.accounts.owner.key(), amount)?;

    require_keys_eq!(
        ctx.accounts.source.owner,
        st.key(),
        AirdropError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.destination.mint,
        ctx.accounts.source.mint,
        AirdropError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.destination.owner,
        ctx.accounts.owner.key(),
        AirdropError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.source.amount >= amount,
        AirdropError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[AIRDROP_SEED, st.mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.airdrop.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensRescued {
        owner: st.owner,
        mint: ctx.accounts.source.mint,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RescueTokens<'info> {
    #[account(seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,

    #[account(mut)]
    pub source: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensRescued {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}
