use anchor_lang::prelude::*;

use crate::constants::AIRDROP_SEED;
use crate::state::AirdropState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let airdrop_key = ctx.accounts.airdrop.key();
    let st = &mut ctx.accounts.airdrop;
    let previous_owner =
        st.transfer_ownership(&ctx.accounts.owner.key(), new_owner, &airdrop_key)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
