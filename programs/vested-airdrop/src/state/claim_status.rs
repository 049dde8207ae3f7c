use anchor_lang::prelude::*;

use crate::error::AirdropError;

/// Per-claimant receipt PDA. Keeps the cumulative claimed amount so that
/// rotating the merkle root never re-opens already released tokens.
#[account]
#[derive(Debug, Default)]
pub struct ClaimStatus {
    pub airdrop: Pubkey,
    pub claimant: Pubkey,
    /// Allocation proven on the latest claim.
    pub allocation: u64,
    pub claimed: u64,
    pub last_claim_ts: i64,
    pub bump: u8,
}

impl ClaimStatus {
    pub const SIZE: usize =
        32 + // airdrop
        32 + // claimant
        8 +  // allocation
        8 +  // claimed
        8 +  // last_claim_ts
        1;   // bump

    /// True until the first claim binds the account to a claimant.
    pub fn is_fresh(&self) -> bool {
        self.claimant == Pubkey::default()
    }

    pub fn bind(&mut self, airdrop: Pubkey, claimant: Pubkey, bump: u8) {
        self.airdrop = airdrop;
        self.claimant = claimant;
        self.bump = bump;
    }

    pub fn claimed_by(&self, claimant: &Pubkey) -> std::result::Result<u64, AirdropError> {
        if self.claimant != *claimant {
            return Err(AirdropError::ClaimantMismatch);
        }
        Ok(self.claimed)
    }

    /// Claimed total stored in a claim PDA's raw data. An account that was
    /// never created has no data and counts as nothing claimed.
    pub fn claimed_in(data: &[u8], claimant: &Pubkey) -> Result<u64> {
        if data.is_empty() {
            return Ok(0);
        }
        let status = ClaimStatus::try_deserialize(&mut &data[..])?;
        Ok(status.claimed_by(claimant)?)
    }
}
