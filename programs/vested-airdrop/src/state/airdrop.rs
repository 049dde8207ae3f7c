use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::state::ClaimStatus;
use crate::utils::{merkle, vesting};

/// Airdrop configuration PDA, one per mint.
#[account]
#[derive(Debug, Default)]
pub struct AirdropState {
    /// Authority for root rotation, rescues and ownership transfer.
    pub owner: Pubkey,
    /// Token mint being distributed.
    pub mint: Pubkey,
    /// Token account holding undistributed tokens (PDA authority = this account).
    pub vault: Pubkey,
    /// Root of the (claimant, amount) allocation tree.
    pub merkle_root: [u8; 32],
    /// TGE timestamp (Unix seconds). Claims open at this time.
    pub vesting_start_time: i64,
    /// Sum of all claimed amounts.
    pub total_claimed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl AirdropState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        32 + // merkle_root
        8 +  // vesting_start_time
        8 +  // total_claimed
        1 +  // bump
        1;   // vault_bump

    pub fn only_owner(&self, caller: &Pubkey) -> std::result::Result<(), AirdropError> {
        if *caller != self.owner {
            return Err(AirdropError::OnlyOwner);
        }
        Ok(())
    }

    /// Replaces the root and returns the previous one.
    pub fn set_merkle_root(
        &mut self,
        caller: &Pubkey,
        merkle_root: [u8; 32],
    ) -> std::result::Result<[u8; 32], AirdropError> {
        self.only_owner(caller)?;
        let old_root = self.merkle_root;
        self.merkle_root = merkle_root;
        Ok(old_root)
    }

    pub fn check_rescue(&self, caller: &Pubkey, amount: u64) -> std::result::Result<(), AirdropError> {
        self.only_owner(caller)?;
        if amount == 0 {
            return Err(AirdropError::InvalidAmount);
        }
        Ok(())
    }

    /// Hands ownership to `new_owner` and returns the previous owner.
    /// `airdrop_key` is the address of this account: a PDA cannot sign, so
    /// ownership handed to it would be lost.
    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
        airdrop_key: &Pubkey,
    ) -> std::result::Result<Pubkey, AirdropError> {
        self.only_owner(caller)?;
        if new_owner == Pubkey::default() || new_owner == self.owner || new_owner == *airdrop_key {
            return Err(AirdropError::InvalidPubkey);
        }
        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(previous_owner)
    }

    /// Amount `claimed_so_far` short of what `allocation` has vested at `now_ts`.
    /// Stateless with respect to claims: callers pass the claimed total.
    pub fn claimable(
        &self,
        allocation: u64,
        claimed_so_far: u64,
        now_ts: i64,
    ) -> std::result::Result<u64, AirdropError> {
        vesting::claimable_amount(allocation, claimed_so_far, now_ts, self.vesting_start_time)
    }

    /// Applies a claim to `status` and returns the amount to transfer.
    /// The caller moves the tokens; nothing here touches balances.
    pub fn process_claim(
        &mut self,
        status: &mut ClaimStatus,
        claimant: Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        now_ts: i64,
    ) -> std::result::Result<u64, AirdropError> {
        if now_ts < self.vesting_start_time {
            return Err(AirdropError::ClaimingNotAvailable);
        }
        if status.claimant != claimant {
            return Err(AirdropError::ClaimantMismatch);
        }
        let leaf = merkle::leaf_hash(&claimant, amount);
        if !merkle::verify(proof, &self.merkle_root, leaf) {
            return Err(AirdropError::InvalidProof);
        }

        let claimable = self.claimable(amount, status.claimed, now_ts)?;
        if claimable == 0 {
            return Err(AirdropError::NothingToClaim);
        }

        status.claimed = status
            .claimed
            .checked_add(claimable)
            .ok_or(AirdropError::MathOverflow)?;
        status.allocation = amount;
        status.last_claim_ts = now_ts;
        self.total_claimed = self
            .total_claimed
            .checked_add(claimable)
            .ok_or(AirdropError::MathOverflow)?;

        Ok(claimable)
    }
}
