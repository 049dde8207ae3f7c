use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

use instructions::*;

declare_id!("4BRiMg7oggKPyEGjaQeGiQeg4E6w715aFNBD5LvjkkLX");

#[program]
pub mod vested_airdrop {
    use super::*;

    pub fn initialize_airdrop(
        ctx: Context<InitializeAirdrop>,
        merkle_root: [u8; 32],
        vesting_start_time: Option<i64>,
    ) -> Result<()> {
        instructions::initialize_airdrop::initialize_airdrop(ctx, merkle_root, vesting_start_time)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, merkle_root: [u8; 32]) -> Result<()> {
        instructions::set_merkle_root::set_merkle_root(ctx, merkle_root)
    }

    pub fn claim(
        ctx: Context<Claim>,
        claimant: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::claim::claim(ctx, claimant, amount, proof)
    }

    pub fn claimable_amount(
        ctx: Context<ClaimableAmount>,
        claimant: Pubkey,
        amount: u64,
    ) -> Result<u64> {
        instructions::claimable_amount::claimable_amount(ctx, claimant, amount)
    }

    pub fn rescue_tokens(ctx: Context<RescueTokens>, amount: u64) -> Result<()> {
        instructions::rescue_tokens::rescue_tokens(ctx, amount)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }
}
