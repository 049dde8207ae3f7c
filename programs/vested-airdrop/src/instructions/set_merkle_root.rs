use anchor_lang::prelude::*;

use crate::constants::AIRDROP_SEED;
use crate::state::AirdropState;

pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let st = &mut ctx.accounts.airdrop;
    let old_root = st.set_merkle_root(&ctx.accounts.owner.key(), merkle_root)?;

    emit!(MerkleRootSet {
        owner: st.owner,
        old_root,
        new_root: merkle_root,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    #[account(mut, seeds = [AIRDROP_SEED, airdrop.mint.as_ref()], bump = airdrop.bump)]
    pub airdrop: Account<'info, AirdropState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct MerkleRootSet {
    pub owner: Pubkey,
    pub old_root: [u8; 32],
    pub new_root: [u8; 32],
}
